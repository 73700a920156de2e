//! View models for the orders modal.
//!
//! Rendering itself belongs to the host page; these types carry everything
//! the page needs: list cards, the remapped detail and cancellation feedback.

mod cancel;
mod cards;
mod detail;
pub mod format;

pub use cancel::{CancelFormError, CancelReason, MessageBox, MessageKind, confirm_cancellation};
pub use cards::{OrderCard, OrderListing, StatusPill, load_order_details};
pub use detail::open_order_detail;
