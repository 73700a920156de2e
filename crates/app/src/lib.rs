//! VTEX Orders App library.
//!
//! Everything between the support desk and VTEX: the template-invocation
//! seam, the order and cancellation gateways built on it, a direct VTEX
//! client implementing the seam, configuration, and the view models the
//! orders modal renders.
//!
//! # Security
//!
//! The VTEX app token configured for this crate can cancel orders. Keep it
//! out of logs and version control.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gateway;
pub mod host;
pub mod session;
pub mod view;
pub mod vtex;

pub use error::{FetchError, InvokeError};
pub use gateway::{CancelOutcome, CancellationGateway, OrderGateway};
pub use host::{TemplateContext, TemplateInvoker, TemplateName, TemplateResponse};
pub use session::Session;
