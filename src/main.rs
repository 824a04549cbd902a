use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ulaw2wav::{convert_file, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();
    match convert_file(&config) {
        Ok(_) => info!("{} created successfully", config.output_path.display()),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
