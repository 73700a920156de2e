//! VTEX Orders Core - Shared types library.
//!
//! This crate provides the order model used by every component of the
//! support-desk orders widget:
//! - `app` - Template gateways, VTEX HTTP invoker and view models
//! - `cli` - Command-line front end for agents and operators
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here is total: malformed or partial VTEX payloads
//! degrade to documented defaults instead of failing.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, minor-unit money, email cleanup, coarse status
//! - [`vtex`] - VTEX order list/detail payloads
//! - [`order`] - Local display schema
//! - [`conversions`] - VTEX → local remapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod conversions;
pub mod order;
pub mod types;
pub mod vtex;

pub use conversions::remap_order;
pub use order::{CITY_NOT_AVAILABLE, ContactDetails, LocalOrder, LocalOrderItem, ShippingDetails};
pub use types::*;
pub use vtex::{
    ClientProfileData, OrderListResponse, ShippingAddress, ShippingData, VendorOrderDetail,
    VendorOrderItem, VendorOrderSummary,
};
