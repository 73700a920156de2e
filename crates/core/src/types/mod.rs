//! Core types for the VTEX orders widget.
//!
//! This module provides type-safe wrappers for ids, money, emails and
//! statuses.

pub mod email;
pub mod id;
pub mod money;
pub mod status;

pub use email::{clean_vendor_email, normalize_vendor_email};
pub use id::*;
pub use money::MinorUnits;
pub use status::OrderStatus;
