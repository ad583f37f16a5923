use anyhow::Result;
use clap::Parser;
use mediascribe::app::App;
use mediascribe::models::Config;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mediascribe")]
#[command(about = "Upload a media file to Gemini and print its description")]
struct CliArgs {
    /// Path of the file to upload.
    #[arg(value_name = "FILE", default_value = "sample_data/gemini_logo.png")]
    file: PathBuf,

    /// Display name stored alongside the uploaded file.
    #[arg(value_name = "NAME", default_value = "Gemini logo")]
    display_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediascribe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mediascribe");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match App::new(config).await {
        Ok(app) => match app.run(&args.file, &args.display_name).await {
            Ok(_) => {
                info!("Description completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Description failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_default_args_point_at_sample_image() {
        let args = CliArgs::parse_from(["mediascribe"]);
        assert_eq!(args.file.to_string_lossy(), "sample_data/gemini_logo.png");
        assert_eq!(args.display_name, "Gemini logo");
    }

    #[test]
    fn test_explicit_args_override_defaults() {
        let args = CliArgs::parse_from(["mediascribe", "notes/voice_memo.mp3", "Voice memo"]);
        assert_eq!(args.file.to_string_lossy(), "notes/voice_memo.mp3");
        assert_eq!(args.display_name, "Voice memo");
    }
}
