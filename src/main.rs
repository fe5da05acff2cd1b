use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    setup_logging();

    let args: Vec<String> = std::env::args().collect();
    let result = match std::env::current_dir() {
        Ok(base_dir) => {
            let mut stdout = std::io::stdout();
            let mut stderr = std::io::stderr();
            minutes_data::run::run(args, &base_dir, &mut stdout, &mut stderr).await
        }
        Err(err) => Err(anyhow::Error::new(err).context("Failed to get current directory")),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries nothing but the data module.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
