use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = sast_prune::cli::Args::parse();
    let config = args.into_config(|var| std::env::var(var).ok());

    match sast_prune::run(&config) {
        Ok(_) => Ok(()),
        // A missing root means there is nothing to scan, not a failed step.
        Err(e) if e.is_configuration() => {
            error!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stdout)
        .init();
}
