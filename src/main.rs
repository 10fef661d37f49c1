use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use giftlink::catalog::{self, Category, Condition};
use giftlink::config::CONFIG;
use giftlink::render::{NO_DESCRIPTION_PLACEHOLDER, NO_IMAGE_PLACEHOLDER};
use giftlink::{
    FetchOutcome, FilterState, HistoryNavigator, HttpListingsApi, ListingId, ListingsApi,
    SearchController,
};

#[derive(Parser, Debug)]
#[command(name = "giftlink", about = "Browse and search gift listings")]
struct Cli {
    /// Listings API base URL (defaults to GIFTLINK_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every listing
    Browse,
    /// Search listings by name, age, category and condition
    Search {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value_t = catalog::DEFAULT_AGE_YEARS)]
        age: u8,
        /// One of Living, Bedroom, Bathroom, Kitchen, Office; empty for any
        #[arg(long, default_value = "")]
        category: String,
        /// One of New, "Like New", Older; empty for any
        #[arg(long, default_value = "")]
        condition: String,
    },
    /// Show a single listing
    Show { id: String },
    /// Print the detail page route for a listing
    Open { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(CONFIG.log_level)
        .with_target(true)
        .init();
    for warning in &CONFIG.warnings {
        tracing::warn!("{warning}");
    }

    let cli = Cli::parse();
    let api = match &cli.backend_url {
        Some(url) => HttpListingsApi::with_timeout(url, CONFIG.request_timeout)?,
        None => HttpListingsApi::from_config()?,
    };
    let controller = SearchController::new(api, HistoryNavigator::new());

    match cli.command {
        Command::Browse => {
            let outcome = controller.initialize().await;
            report(&controller, outcome).await;
        }
        Command::Search {
            name,
            age,
            category,
            condition,
        } => {
            let filter = FilterState::new(
                name,
                age,
                catalog::parse_choice::<Category>(&category)?,
                catalog::parse_choice::<Condition>(&condition)?,
            )?;
            let outcome = controller.search(filter).await;
            report(&controller, outcome).await;
        }
        Command::Show { id } => {
            let listing = controller
                .api()
                .get(&ListingId::from(id.as_str()))
                .await
                .with_context(|| format!("failed to fetch listing {id}"))?;
            println!("{}", listing.name);
            println!(
                "  {}",
                listing.image.as_deref().unwrap_or(NO_IMAGE_PLACEHOLDER)
            );
            println!(
                "  {}",
                listing
                    .description
                    .as_deref()
                    .unwrap_or(NO_DESCRIPTION_PLACEHOLDER)
            );
        }
        Command::Open { id } => {
            controller.select_listing(id);
            if let Some(route) = controller.navigator().current() {
                println!("{}", route.path());
            }
        }
    }

    Ok(())
}

async fn report<A: ListingsApi>(
    controller: &SearchController<A, HistoryNavigator>,
    outcome: FetchOutcome,
) {
    tracing::debug!(?outcome, "fetch finished");
    print!("{}", controller.view().await);
}
