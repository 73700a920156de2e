//! CLI subcommands.

pub mod orders;

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use vtex_orders_app::config::ConfigError;
use vtex_orders_core::OrderId;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// No customer RUT was given for an order listing.
    #[error("No customer RUT given")]
    MissingContactRut,

    /// The order detail could not be fetched.
    #[error("Order not found or unavailable: {0}")]
    OrderUnavailable(OrderId),

    /// VTEX rejected the cancellation or the reason was blank.
    #[error("Order {0} was not cancelled")]
    CancelFailed(OrderId),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a value as pretty JSON.
fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a line of text.
fn write_line(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    writeln!(out, "{text}")?;
    Ok(())
}
