mod output;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use storefront_catalog::{
    get_product_price, list, render_listing, ListOutcome, ListingRequest, ListingStrategy,
    PageRequest, StorefrontClient, SORT_BATCH_LIMIT,
};
use storefront_core::{AppConfig, SortOption};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Trust the backend's ordering and paging.
    Backend,
    /// Sort a fixed batch locally, then paginate it.
    LocalSort,
}

impl From<StrategyArg> for ListingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Backend => ListingStrategy::Backend,
            StrategyArg::LocalSort => ListingStrategy::LocalSort,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a storefront listing page for a country.
    Page {
        #[arg(long)]
        country: String,
        #[arg(long, default_value_t = SortOption::CreatedAt)]
        sort: SortOption,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, value_enum, default_value_t = StrategyArg::Backend)]
        strategy: StrategyArg,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List raw products with pagination metadata.
    #[command(group(ArgGroup::new("scope").required(true).args(["country", "region"])))]
    Products {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long, default_value_t = SortOption::CreatedAt)]
        sort: SortOption,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Defaults to `STOREFRONT_PAGE_SIZE`.
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Backend)]
        strategy: StrategyArg,
        #[arg(long)]
        json: bool,
    },
    /// Show the display price of one product.
    Price {
        #[arg(long)]
        country: String,
        #[arg(long)]
        handle: String,
        /// Variant id or SKU.
        #[arg(long)]
        variant: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("storefront-cli: run with --help for available commands");
        return Ok(());
    };

    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = StorefrontClient::from_config(&config)?;
    run(command, &client, &config).await
}

async fn run(command: Commands, client: &StorefrontClient, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Page {
            country,
            sort,
            page,
            strategy,
            json,
        } => {
            let request = ListingRequest {
                sort,
                page,
                country_code: country,
            };
            let listing = render_listing(
                client,
                client,
                strategy.into(),
                &request,
                config.page_size,
                &config.locale,
            )
            .await?;

            match listing {
                Some(listing) if json => println!("{}", serde_json::to_string_pretty(&listing)?),
                Some(listing) => print!("{}", output::listing_text(&listing)),
                None => eprintln!("no region serves country \"{}\"", request.country_code),
            }
        }
        Commands::Products {
            country,
            region,
            sort,
            page,
            page_size,
            strategy,
            json,
        } => {
            let request = PageRequest {
                page,
                page_size: page_size.unwrap_or(config.page_size),
                sort,
                country_code: country,
                region_id: region,
            };

            match list(strategy.into(), client, client, &request).await? {
                ListOutcome::Found(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                ListOutcome::Found(result) => print!("{}", output::page_result_text(&result)),
                ListOutcome::RegionNotFound => eprintln!("no region matches the request"),
                ListOutcome::FetchFailed { reason } => {
                    anyhow::bail!("fetching products failed: {reason}")
                }
            }
        }
        Commands::Price {
            country,
            handle,
            variant,
        } => {
            let request = PageRequest::for_country(country).with_page_size(SORT_BATCH_LIMIT);
            let result = list(ListingStrategy::Backend, client, client, &request)
                .await?
                .into_page();
            let product = result
                .products
                .iter()
                .find(|p| p.handle.as_deref() == Some(handle.as_str()));
            if product.is_none() {
                tracing::warn!(handle = %handle, "product not found in the first batch");
            }

            let prices = get_product_price(product, variant.as_deref(), &config.locale)?;
            println!("{}", serde_json::to_string_pretty(&prices)?);
        }
    }

    Ok(())
}
