//! Stock connector CLI - search, filter and license stock images.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stock_connector::{
    providers::Shutterstock, ConnectorConfig, ImageProviderConnector, SearchQuery,
};

/// Stock connector - search and license stock images from the command line
#[derive(Parser)]
#[command(name = "stock-connector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (credentials are also read from the environment)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search images by keyword or browse a collection
    Search(SearchArgs),

    /// License an image and print its download URL
    License {
        /// Provider image id
        image_id: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the available filters and their options
    Filters {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the subscription used for licensing
    Subscription,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search terms
    #[arg(default_value = "")]
    query: String,

    /// Page number
    #[arg(short, long, default_value = "1")]
    page: u32,

    /// Filter as name=value (repeatable), e.g. -f orientation=vertical
    #[arg(short = 'f', long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Collection id to browse instead of searching
    #[arg(long)]
    collection: Option<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let config = match &cli.config {
        Some(path) => ConnectorConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ConnectorConfig::from_env(),
    };
    let connector = Shutterstock::new(&config)?;

    match cli.command {
        Commands::Search(args) => run_search(&connector, args).await,
        Commands::License { image_id, format } => run_license(&connector, &image_id, format).await,
        Commands::Filters { format } => run_filters(&connector, format).await,
        Commands::Subscription => {
            match connector.resolve_subscription().await {
                Some(id) => println!("{}", id),
                None => anyhow::bail!("No subscription available"),
            }
            Ok(())
        }
    }
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

async fn run_search(connector: &Shutterstock, args: SearchArgs) -> Result<()> {
    let mut query = SearchQuery::new(&args.query).with_page(args.page);
    for (name, value) in args.filters {
        query = query.with_filter(name, value);
    }
    if let Some(collection) = args.collection {
        query = query.with_collection(collection);
    }

    let result = connector.search(&query).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if !result.success {
                anyhow::bail!(
                    "Search failed: {}",
                    result.message.as_deref().unwrap_or("unknown error")
                );
            }
            println!(
                "\nPage {} ({} of {} images):\n",
                result.page,
                result.items().len(),
                result.total_count
            );
            for (i, item) in result.items().iter().enumerate() {
                println!("{:>3}. {}", i + 1, item.id);
                println!("     Preview: {}", item.preview_url);
            }
            if !result.disabled_filters.is_empty() {
                println!("\nDisabled filters: {}", result.disabled_filters.join(", "));
            }
        }
    }

    Ok(())
}

async fn run_license(connector: &Shutterstock, image_id: &str, format: OutputFormat) -> Result<()> {
    let asset = connector.get_file_url_and_extension(image_id).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&asset)?),
        OutputFormat::Text => {
            match &asset.url {
                Some(url) => println!("URL:         {}", url),
                None => println!("URL:         (not licensed)"),
            }
            println!("Extension:   {}", asset.extension);
            println!("Title:       {}", asset.metadata.title);
            println!("Description: {}", asset.metadata.description);
            println!(
                "Size:        {}x{}",
                asset.metadata.width, asset.metadata.height
            );
            for error in &asset.errors {
                eprintln!("Error: {}", error);
            }
        }
    }

    Ok(())
}

async fn run_filters(connector: &Shutterstock, format: OutputFormat) -> Result<()> {
    let filters = connector.get_available_filters().await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&filters)?),
        OutputFormat::Text => {
            for filter in filters.iter() {
                println!("{} ({}):", filter.label, filter.name);
                if filter.options.is_empty() {
                    println!("    (no options)");
                }
                for option in &filter.options {
                    println!("    {:<24} {}", option.value, option.label);
                }
                println!();
            }
        }
    }

    Ok(())
}
