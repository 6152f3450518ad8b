use phonebook::config::{Config, Launch, USAGE};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Launch::Run(config)) => config,
        Ok(Launch::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = phonebook::cli::run(&config) {
        error!(error = %e, "command loop stopped");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
