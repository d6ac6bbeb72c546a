use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays clean for rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = linkmap::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
