use linref::{Coordinate, LineString};

/// Installs a fmt subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

#[allow(clippy::unwrap_used)]
pub fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::from_coords(coords.iter().copied()).unwrap()
}

pub fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}
