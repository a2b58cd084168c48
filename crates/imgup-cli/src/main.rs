//! imgup CLI — upload an image to an imgbb-compatible host.
//!
//! Set IMGBB_API_KEY (or API_KEY). IMGBB_API_URL overrides the endpoint.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use imgup_cli::notify::TracingNotifier;
use imgup_cli::picker::FilePicker;
use imgup_cli::{format_size_kb, init_tracing};
use imgup_client::ImgbbClient;
use imgup_core::{Config, PickOutcome, UploadFlowController};

#[derive(Parser)]
#[command(name = "imgup", about = "Image upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and print the hosted result
    Upload {
        /// Path to the image; prompts on stdin when omitted
        file: Option<std::path::PathBuf>,
        /// Optional image name
        #[arg(long)]
        name: Option<String>,
        /// Optional expiration in seconds (forwarded as entered)
        #[arg(long)]
        expiration: Option<String>,
        /// Fetch the hosted image after upload to confirm availability
        #[arg(long)]
        fetch: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = Config::from_env()
        .context("Failed to load configuration. Set IMGBB_API_KEY or API_KEY")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            name,
            expiration,
            fetch,
        } => {
            let client = ImgbbClient::from_config(&config)?;
            let mut flow = UploadFlowController::new(
                FilePicker::new(file),
                client.clone(),
                TracingNotifier,
                config.api_key.clone(),
            );

            if let PickOutcome::Cancelled = flow.pick_asset().await? {
                eprintln!("Cancelled.");
                return Ok(());
            }
            if let Some(name) = name {
                flow.set_name(name);
            }
            if let Some(expiration) = expiration {
                flow.set_expiration(expiration);
            }

            let uploaded = flow.upload_asset().await?;
            print_json(&uploaded)?;
            eprintln!("Image Name: {}", uploaded.title);
            eprintln!("Size: {}", format_size_kb(uploaded.size_bytes));

            if fetch {
                flow.display_load_started();
                let result = client.fetch_hosted(&uploaded.url).await;
                flow.display_load_finished();
                let bytes = result.context("Hosted image is not reachable")?;
                eprintln!("Fetched {} hosted bytes from {}", bytes.len(), uploaded.url);
            }
        }
    }

    Ok(())
}
