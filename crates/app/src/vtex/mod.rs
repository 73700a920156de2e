//! Direct VTEX integration.
//!
//! # Architecture
//!
//! - [`VtexClient`] implements [`TemplateInvoker`](crate::host::TemplateInvoker)
//!   over HTTPS with app key/token authentication
//! - Inside the support desk the host forwards the same three templates;
//!   this client is what the CLI uses instead
//!
//! # Security
//!
//! The app token can cancel orders. It is held as a `SecretString` and
//! redacted from `Debug` output.

mod client;

pub use client::VtexClient;
