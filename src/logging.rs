use env_logger::Target;

/// Logs go to stderr so stdout only carries the movie listing.
pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder
        .target(Target::Stderr)
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("imdb_top_rated"), log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
