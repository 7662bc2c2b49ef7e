use crate::classify::client::EmotionClient;
use crate::config::ClientConfig;
use crate::format;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "emotion")]
#[command(author, version, about = "Detect the dominant emotion in a piece of text", long_about = None)]
pub struct Cli {
    /// Text to analyze
    pub text: String,

    /// Override the classification endpoint URL (env: EMOTION_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the model selector (env: EMOTION_MODEL_ID)
    #[arg(long)]
    pub model_id: Option<String>,

    /// Request timeout in seconds (env: EMOTION_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the raw classification result as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Client configuration: environment first, flags on top.
    fn client_config(&self) -> Result<ClientConfig, String> {
        let mut config = ClientConfig::from_env().map_err(|e| e.to_string())?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model_id) = &self.model_id {
            config.model_id = model_id.clone();
        }
        if let Some(secs) = self.timeout {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

/// Run the CLI: classify the text once and print the result.
pub async fn run(cli: Cli) -> Result<(), String> {
    let config = cli.client_config()?;
    let client = EmotionClient::new(config).map_err(|e| e.to_string())?;
    let result = client.detect(&cli.text).await;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    match format::render(&result) {
        Ok(summary) => {
            println!("{summary}");
            Ok(())
        }
        Err(err) => Err(err.user_message().to_owned()),
    }
}
