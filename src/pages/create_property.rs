//! New-listing form: validate locally, insert with the session user as
//! owner, then hand navigation back to the seller dashboard.

use std::sync::Arc;

use tracing::info;

use crate::gateway::PropertyGateway;
use crate::models::NewProperty;
use crate::pages::{failure_toast, Toast};
use crate::routes::{redirect_for, Route};
use crate::session::SessionProvider;
use crate::validation;

pub struct CreatePropertyPage {
    gateway: Arc<dyn PropertyGateway>,
    sessions: Arc<SessionProvider>,
    pub draft: NewProperty,
    loading: bool,
    toast: Option<Toast>,
}

impl CreatePropertyPage {
    pub fn new(gateway: Arc<dyn PropertyGateway>, sessions: Arc<SessionProvider>) -> Self {
        Self {
            gateway,
            sessions,
            draft: NewProperty::default(),
            loading: false,
            toast: None,
        }
    }

    pub fn mount(&self) -> Option<Route> {
        redirect_for(&Route::CreateProperty, self.sessions.current().as_ref())
    }

    /// Returns the route to navigate to on success. A validation failure
    /// toasts and never reaches the gateway.
    pub async fn submit(&mut self) -> Option<Route> {
        let Some(session) = self.sessions.current() else {
            return Some(Route::Auth);
        };
        if let Err(e) = validation::validate_new_property(&self.draft) {
            self.toast = Some(failure_toast("Validation Error", &e));
            return None;
        }

        self.loading = true;
        let outcome = match self.gateway.insert(session.user_id, &self.draft).await {
            Ok(property) => {
                info!("Seller {} listed property {}", session.user_id, property.id);
                self.toast = Some(Toast::success("Success!", "Your property has been listed."));
                Some(Route::SellerDashboard)
            }
            Err(e) => {
                self.toast = Some(failure_toast("Error", &e));
                None
            }
        };
        self.loading = false;
        outcome
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}
