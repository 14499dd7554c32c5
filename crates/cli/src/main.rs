//! Hanami CLI - The storefront from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse and search the catalog
//! hanami products
//! hanami products --search dress
//! hanami product 1
//! hanami open /product/4
//!
//! # Manage the cart
//! hanami cart add 1 --size M
//! hanami cart set 1 3
//! hanami cart set 1 0 --yes
//! hanami cart remove 1 --size M
//! hanami cart show
//!
//! # Wishlist and ordering
//! hanami wishlist toggle 6
//! hanami notify 3
//! hanami order
//!
//! # Send a raw store action
//! hanami dispatch '{"type":"TOGGLE_WISHLIST","payload":2}'
//! ```
//!
//! Cart and wishlist persist between invocations in `HANAMI_DATA_DIR`.
//! See `hanami_storefront::config` for every environment variable.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hanami_core::ProductId;
use hanami_storefront::{AppError, AppState};
use hanami_storefront::config::{LogFormat, StorefrontConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "hanami")]
#[command(author, version, about = "Hanami storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered by name
    Products {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a product's details
    Product {
        /// Product ID
        id: ProductId,
    },
    /// Render the page at a storefront path (`/`, `/product/{id}`, `/cart`)
    Open {
        /// Path to open
        path: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Ask to be notified when an out-of-stock product returns
    Notify {
        /// Product ID
        id: ProductId,
    },
    /// Place an order for everything in the cart
    Order,
    /// Dispatch a raw store action given as JSON
    Dispatch {
        /// Action as `{"type": "...", "payload": ...}`
        json: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and the total
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,

        /// Size (defaults to the product's first size)
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Set the quantity for every size of a product
    Set {
        /// Product ID
        id: ProductId,

        /// New quantity (0 removes the product)
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Confirm removal when the quantity is 0
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove a product (all sizes unless --size is given)
    Remove {
        /// Product ID
        id: ProductId,

        /// Only remove this size
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlisted products
    Show,
    /// Add a product to the wishlist, or remove it
    Toggle {
        /// Product ID
        id: ProductId,
    },
}

fn init_tracing(format: LogFormat) {
    // Logs go to stderr; stdout carries the rendered page
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hanami_storefront=warn,hanami_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configuration decides the log format, so it loads first
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    init_tracing(config.log_format);

    match run(cli, config).await {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
        }
        Err(e) => {
            let code = exit_code(e.as_ref());
            if code == USER_ERROR_EXIT {
                tracing::warn!("{e}");
            } else {
                tracing::error!("Command failed: {e}");
            }
            std::process::exit(code);
        }
    }
}

/// Exit status for a request the storefront refused (unknown product,
/// empty cart, bad action).
const USER_ERROR_EXIT: i32 = 2;

/// Map a failure to the process exit status.
fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<AppError>() {
        Some(e) if e.is_user_error() => USER_ERROR_EXIT,
        _ => 1,
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<String, Box<dyn std::error::Error>> {
    let mut app = AppState::open(config)?;
    tracing::debug!(
        data_dir = %app.config().data_dir.display(),
        rehydration = %app.config().rehydration,
        "session opened"
    );

    let output = match cli.command {
        Commands::Products { search } => {
            commands::browse::products(&mut app, search.as_deref()).await
        }
        Commands::Product { id } => commands::browse::product(&app, id).await?,
        Commands::Open { path } => commands::browse::open(&mut app, &path).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app),
            CartAction::Add { id, size } => {
                commands::cart::add(&mut app, id, size.as_deref()).await?
            }
            CartAction::Set { id, quantity, yes } => {
                commands::cart::set_quantity(&mut app, id, quantity, yes)
            }
            CartAction::Remove { id, size } => {
                commands::cart::remove(&mut app, id, size.as_deref())
            }
            CartAction::Clear => commands::cart::clear(&mut app),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&mut app).await,
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut app, id).await?,
        },
        Commands::Notify { id } => commands::wishlist::notify(&app, id).await?,
        Commands::Order => commands::cart::order(&mut app)?,
        Commands::Dispatch { json } => commands::dispatch(&mut app, &json)?,
    };
    Ok(output)
}
