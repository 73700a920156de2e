//! Integration tests for VTEX Orders.
//!
//! The tests drive the gateways and view models end to end against
//! [`FakeHost`], an in-memory [`TemplateInvoker`] that answers each
//! template/context pair with a canned response and records every call.
//!
//! ```bash
//! cargo test -p vtex-orders-integration-tests
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use vtex_orders_app::{
    InvokeError, Session, TemplateContext, TemplateInvoker, TemplateName, TemplateResponse,
};

/// Canned answer for one template/context pair.
#[derive(Debug, Clone)]
enum Reply {
    Response(TemplateResponse),
    Failure {
        message: String,
        response: Option<String>,
    },
}

/// In-memory host answering template invocations from a routing table.
///
/// Unrouted invocations fail with a host error, the same way the real host
/// reports an unknown template.
#[derive(Debug, Default)]
pub struct FakeHost {
    routes: HashMap<(TemplateName, String), Reply>,
    calls: Mutex<Vec<(TemplateName, TemplateContext)>>,
}

fn route_key(template: TemplateName, context: &TemplateContext) -> (TemplateName, String) {
    // Contexts serialize to flat objects with a fixed field order
    let context = serde_json::to_string(context).unwrap_or_default();
    (template, context)
}

impl FakeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `template` invoked with `context` with a status and body.
    #[must_use]
    pub fn respond(
        mut self,
        template: TemplateName,
        context: &TemplateContext,
        status: Option<u16>,
        body: impl Into<String>,
    ) -> Self {
        let response = TemplateResponse {
            status,
            status_text: None,
            response: body.into(),
        };
        self.routes
            .insert(route_key(template, context), Reply::Response(response));
        self
    }

    /// Answer with a full response, status text included.
    #[must_use]
    pub fn respond_with(
        mut self,
        template: TemplateName,
        context: &TemplateContext,
        response: TemplateResponse,
    ) -> Self {
        self.routes
            .insert(route_key(template, context), Reply::Response(response));
        self
    }

    /// Make `template` invoked with `context` fail at the host.
    #[must_use]
    pub fn fail(
        mut self,
        template: TemplateName,
        context: &TemplateContext,
        message: impl Into<String>,
        response: Option<&str>,
    ) -> Self {
        let reply = Reply::Failure {
            message: message.into(),
            response: response.map(str::to_owned),
        };
        self.routes.insert(route_key(template, context), reply);
        self
    }

    /// Every invocation received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(TemplateName, TemplateContext)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of invocations of `template`.
    #[must_use]
    pub fn call_count(&self, template: TemplateName) -> usize {
        self.calls().iter().filter(|(t, _)| *t == template).count()
    }
}

#[async_trait]
impl TemplateInvoker for FakeHost {
    async fn invoke(
        &self,
        template: TemplateName,
        context: &TemplateContext,
    ) -> Result<TemplateResponse, InvokeError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((template, context.clone()));

        match self.routes.get(&route_key(template, context)) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Failure { message, response }) => Err(InvokeError::Host {
                message: message.clone(),
                response: response.clone(),
            }),
            None => {
                let message = format!("no route for template {template}");
                Err(InvokeError::host(message))
            }
        }
    }
}

/// Build a session over a shared fake host.
#[must_use]
pub fn session_for(host: &Arc<FakeHost>) -> Session {
    Session::new(Arc::clone(host) as Arc<dyn TemplateInvoker>)
}
