//! Per-modal session context.
//!
//! Holds the host invoker and the RUT of the ticket's contact. Everything
//! that talks to VTEX gets its gateway from here.

use std::sync::Arc;

use vtex_orders_core::{CustomerRut, LocalOrder};

use crate::gateway::{CancellationGateway, OrderGateway};
use crate::host::TemplateInvoker;
use crate::view::{OrderListing, load_order_details};

#[derive(Clone)]
pub struct Session {
    invoker: Arc<dyn TemplateInvoker>,
    contact_rut: Option<CustomerRut>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("contact_rut", &self.contact_rut)
            .finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn new(invoker: Arc<dyn TemplateInvoker>) -> Self {
        Self {
            invoker,
            contact_rut: None,
        }
    }

    /// Attach the contact's RUT, as read from the ticket.
    #[must_use]
    pub fn with_contact_rut(mut self, rut: CustomerRut) -> Self {
        self.contact_rut = Some(rut);
        self
    }

    #[must_use]
    pub const fn contact_rut(&self) -> Option<&CustomerRut> {
        self.contact_rut.as_ref()
    }

    #[must_use]
    pub fn orders(&self) -> OrderGateway {
        OrderGateway::new(Arc::clone(&self.invoker))
    }

    #[must_use]
    pub fn cancellations(&self) -> CancellationGateway {
        CancellationGateway::new(Arc::clone(&self.invoker))
    }

    /// Load the order cards of the contact.
    ///
    /// `None` when no contact RUT is attached.
    pub async fn contact_order_listing(&self) -> Option<OrderListing> {
        let rut = self.contact_rut.as_ref()?;
        Some(OrderListing::load(&self.orders(), rut).await)
    }

    /// Load and remap the full detail of every order of the contact.
    ///
    /// `None` when no contact RUT is attached.
    pub async fn contact_order_details(&self) -> Option<Vec<LocalOrder>> {
        let rut = self.contact_rut.as_ref()?;
        Some(load_order_details(&self.orders(), rut).await)
    }
}
