//! Converter CLI
//!
//! Command-line interface for the Currency Converter API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_client::ConverterClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Converter API
    #[arg(
        long,
        env = "CONVERTER_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount into every currency the provider supports
    Convert {
        /// Amount of money to convert
        #[arg(long)]
        amount: f64,
        /// Base currency code (e.g. PLN)
        #[arg(long)]
        currency: String,
        /// Rate provider (fixerio, local); the server default is used when omitted
        #[arg(long)]
        provider: Option<String>,
        /// Print the XML document instead of JSON
        #[arg(long)]
        xml: bool,
    },
    /// List registered rate providers
    Providers,
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Providers => {
            let providers = client.providers().await?;
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }

        Commands::Convert {
            amount,
            currency,
            provider,
            xml,
        } => {
            if xml {
                let document = client
                    .convert_xml(amount, &currency, provider.as_deref())
                    .await?;
                println!("{}", document);
            } else {
                let response = client
                    .convert(amount, &currency, provider.as_deref())
                    .await?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}
