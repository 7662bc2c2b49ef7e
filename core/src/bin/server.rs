//! emotion-server binary - serves the emotion detection HTTP API.
//!
//! Configuration comes from `EMOTION_*` environment variables; logging is
//! controlled through `RUST_LOG` (e.g. `RUST_LOG=info`).

use emotion::config::ServerConfig;
use emotion::server;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
