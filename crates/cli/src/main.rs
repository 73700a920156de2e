//! VTEX Orders CLI - Browse and cancel a customer's VTEX orders.
//!
//! # Usage
//!
//! ```bash
//! # List orders of a customer (by RUT)
//! vo-cli orders list --rut 262030067
//!
//! # Show one order
//! vo-cli orders show 1335140525044-01
//!
//! # Cancel an order
//! vo-cli orders cancel 1335140525044-01 --reason "Cliente desiste"
//! ```
//!
//! Results are written to stdout (JSON or plain text); logs go to stderr.
//! Set `LOG_FORMAT=json` for structured logs and `RUST_LOG` to change the
//! level.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vtex_orders_app::Session;
use vtex_orders_app::config::AppConfig;
use vtex_orders_app::vtex::VtexClient;
use vtex_orders_core::{CustomerRut, OrderId};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "vo-cli")]
#[command(author, version, about = "VTEX order tools for support agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and cancel orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List a customer's orders
    List {
        /// Customer RUT used as the VTEX search key
        #[arg(short, long)]
        rut: String,

        /// Fetch and remap the full detail of every order
        #[arg(long)]
        details: bool,
    },
    /// Show one order in the local schema
    Show {
        /// VTEX order id
        order_id: String,
    },
    /// Cancel an order
    Cancel {
        /// VTEX order id
        order_id: String,

        /// Cancellation reason (required)
        #[arg(short, long)]
        reason: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &AppConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            // Order data includes customer PII
            send_default_pii: false,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=info,vtex_orders_app=info");

/// Initialize tracing on stderr, leaving stdout for command output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let is_json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Sentry must be initialized before the tracing subscriber
    let config = AppConfig::from_env();
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let result = match config {
        Ok(config) => run(cli, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AppConfig) -> Result<(), CliError> {
    let client = VtexClient::new(&config.vtex)?;
    let session = Session::new(Arc::new(client));
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Orders { action } => match action {
            OrdersAction::List { rut, details } => {
                let session = session.with_contact_rut(CustomerRut::new(rut));
                commands::orders::list(&session, details, &mut out).await?;
            }
            OrdersAction::Show { order_id } => {
                commands::orders::show(&session, OrderId::new(order_id), &mut out).await?;
            }
            OrdersAction::Cancel { order_id, reason } => {
                commands::orders::cancel(&session, &OrderId::new(order_id), &reason, &mut out)
                    .await?;
            }
        },
    }
    Ok(())
}
