use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "IMMUNOSOME_LOG";

/// Installs the global subscriber. Logs go to stderr; stdout carries JSON.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
