use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod library;
mod prefs;
mod runtime;
mod theme;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never fight the terminal UI on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ORPHEUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    runtime::run()
}
