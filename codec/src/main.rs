// debug-currency: exercise the codec from the command line
use anyhow::Result;
use clap::{Parser, Subcommand};
use codec::config::CodecSettings;
use codec::data::StatementCsvParser;
use codec::CurrencyCodec;
use shared::models::TransactionSummary;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "debug-currency", about = "Format and parse Brazilian currency values")]
struct Cli {
    /// JSON settings file; the bundled pt-BR settings are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render amounts, e.g. `format 1234.56 -7`
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        amounts: Vec<f64>,
        /// Omit the currency symbol
        #[arg(long)]
        no_symbol: bool,
    },
    /// Parse currency strings back into numbers
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        texts: Vec<String>,
    },
    /// Load a CSV statement and print its transactions and totals
    Statement { path: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => CodecSettings::from_file(path)?,
        None => CodecSettings::load_default()?,
    };
    info!("Using codec settings version {}", settings.version);
    let codec = CurrencyCodec::from_settings(&settings)?;

    match cli.command {
        Command::Format { amounts, no_symbol } => {
            for amount in amounts {
                let rendered = if no_symbol {
                    codec.format_without_symbol(amount)?
                } else {
                    codec.format_with_symbol(amount)?
                };
                println!("{} -> {}", amount, rendered);
            }
        }
        Command::Parse { texts } => {
            for text in texts {
                let value = codec.parse(&text)?;
                println!("{:?} -> {}", text, value);
            }
        }
        Command::Statement { path } => {
            let transactions =
                StatementCsvParser::load_transactions_from_csv(&path, &settings.statement, &codec)?;
            for tx in &transactions {
                println!(
                    "{}  {:<30} {:>18}  {}",
                    tx.date.format("%d/%m/%Y"),
                    tx.description,
                    codec.format_with_symbol(tx.amount)?,
                    tx.category.as_deref().unwrap_or("-"),
                );
            }
            let summary = TransactionSummary::from_transactions(&transactions);
            println!("Entradas: {}", codec.format_with_symbol(summary.income)?);
            println!("Saídas:   {}", codec.format_with_symbol(summary.expenses)?);
            println!("Saldo:    {}", codec.format_with_symbol(summary.balance)?);
        }
    }

    Ok(())
}
