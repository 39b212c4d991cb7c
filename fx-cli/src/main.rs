//! FX CLI
//!
//! Command-line front end for the FX conversion service. With a subcommand
//! it performs a one-shot operation; without one it drops into the
//! interactive prompt/menu loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use fx_backends::BankOfCanadaProvider;
use fx_backends::bank_of_canada::VALET_BASE_URL;
use fx_engine::FxService;

mod interactive;

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "FX conversion system", long_about = None)]
struct Cli {
    /// Base URL of the Bank of Canada Valet API
    #[arg(long, env = "FX_VALET_URL", default_value = VALET_BASE_URL)]
    valet_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Currency to convert from
        source: String,
        /// Currency to convert to
        target: String,
        /// Amount to convert
        amount: Decimal,
        /// Conversion date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Print the full response envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported currencies
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let provider = BankOfCanadaProvider::with_valet_url(&cli.valet_url);
    let service = FxService::new(provider);

    match cli.command {
        Some(Commands::Convert {
            source,
            target,
            amount,
            date,
            json,
        }) => {
            let response = service
                .convert(&source, &target, amount, date.as_deref())
                .await;
            let successful = response.is_successful();

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                match response.into_result() {
                    Ok(conversion) => {
                        if !conversion.direct {
                            println!(
                                "No direct pairing between '{}' and '{}' is available. An indirect conversion was performed.",
                                conversion.source, conversion.target
                            );
                        }
                        println!("{conversion}");
                    }
                    Err(err) => eprintln!("{}", err.message),
                }
            }

            if !successful {
                std::process::exit(1);
            }
        }

        Some(Commands::Currencies) => {
            for code in service.supported_currencies() {
                println!("{code}");
            }
        }

        None => interactive::run(&service).await?,
    }

    Ok(())
}
