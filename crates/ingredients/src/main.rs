use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ingredients::output::{self, OutputFormat};
use ingredients::{Config, CrustData};
use ingredients_core::storage::CrustTable;

/// Ingredients - crust inventory on a NoSQL table store
#[derive(Parser, Debug)]
#[command(name = "ingredients")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "pretty", global = true)]
    format: OutputFormat,

    /// Table name (overrides CRUSTS_TABLE_NAME)
    #[arg(long, global = true)]
    table_name: Option<String>,

    /// Endpoint URL for a local DynamoDB (overrides AWS_ENDPOINT_URL)
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// AWS region (overrides AWS_REGION)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Conditional writes tried per decrement (overrides CRUSTS_MAX_DECREMENT_ATTEMPTS)
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all crusts.
    List,
    /// Show a single crust.
    Get {
        /// Crust id, e.g. "thin12".
        id: String,
    },
    /// Take one unit of stock from a crust.
    Decrement {
        /// Crust id, e.g. "thin12".
        id: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(table_name) = &self.table_name {
            config.table_name = table_name.clone();
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            config.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_decrement_attempts = max_attempts;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingredients=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();

    #[cfg(feature = "dynamodb")]
    let table = {
        tracing::info!(
            endpoint = %config.target_display(),
            table = %config.table_name,
            "Using DynamoDB backend"
        );
        ingredients::storage::DynamoDbCrustTable::from_config(&config).await
    };

    #[cfg(not(feature = "dynamodb"))]
    let table = {
        tracing::info!("Using in-memory backend");
        ingredients::storage::InMemoryCrustTable::new()
    };

    let data = CrustData::new(table).with_max_attempts(config.max_decrement_attempts);
    run(&data, cli.command, cli.format).await
}

async fn run<T: CrustTable>(
    data: &CrustData<T>,
    command: Command,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::List => {
            let crusts = data.list().await?;
            match format {
                OutputFormat::Json => println!("{}", output::format_json(&crusts)),
                OutputFormat::Pretty => println!("{}", output::format_crusts(&crusts)),
            }
        }
        Command::Get { id } => {
            let crust = data
                .get(&id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Crust not found: {}", id))?;
            match format {
                OutputFormat::Json => println!("{}", output::format_json(&crust)),
                OutputFormat::Pretty => println!("{}", output::format_crust(&crust)),
            }
        }
        Command::Decrement { id } => {
            let update = data.decrement_stock(&id).await?;
            match format {
                OutputFormat::Json => println!("{}", output::format_json(&update)),
                OutputFormat::Pretty => println!("{}", output::format_stock_update(&id, &update)),
            }
        }
    }
    Ok(())
}
