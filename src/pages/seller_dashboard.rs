//! Seller dashboard: own listings plus the two-step deletion flow.
//!
//! Deletion never fires a remote call before the user confirms, and the
//! local list is pruned only after the gateway reports success.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::gateway::PropertyGateway;
use crate::models::Property;
use crate::pages::Toast;
use crate::routes::{redirect_for, Route};
use crate::session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFlow {
    Idle,
    /// The confirmation prompt is open for this listing.
    ConfirmPending(Uuid),
    /// The remote call is in flight.
    Deleting(Uuid),
}

pub struct SellerDashboard {
    gateway: Arc<dyn PropertyGateway>,
    sessions: Arc<SessionProvider>,
    properties: Vec<Property>,
    loading: bool,
    delete_flow: DeleteFlow,
    toast: Option<Toast>,
}

impl SellerDashboard {
    pub fn new(gateway: Arc<dyn PropertyGateway>, sessions: Arc<SessionProvider>) -> Self {
        Self {
            gateway,
            sessions,
            properties: Vec::new(),
            loading: true,
            delete_flow: DeleteFlow::Idle,
            toast: None,
        }
    }

    /// Role gate first; only a seller session proceeds to the fetch.
    pub async fn mount(&mut self) -> Option<Route> {
        let session = self.sessions.current();
        if let Some(route) = redirect_for(&Route::SellerDashboard, session.as_ref()) {
            return Some(route);
        }
        let Some(session) = session else {
            return Some(Route::Auth);
        };

        self.loading = true;
        match self.gateway.list_by_seller(session.user_id).await {
            Ok(rows) => self.properties = rows,
            Err(e) => {
                warn!("Own-listing fetch failed: {}", e);
                self.toast = Some(Toast::error("Error", "Failed to load your properties."));
            }
        }
        self.loading = false;
        None
    }

    /// Opens the confirmation prompt for one listing. Ignored while a
    /// delete is already in flight.
    pub fn request_delete(&mut self, id: Uuid) {
        if !matches!(self.delete_flow, DeleteFlow::Deleting(_)) {
            self.delete_flow = DeleteFlow::ConfirmPending(id);
        }
    }

    /// Declines the prompt; the list is untouched.
    pub fn cancel_delete(&mut self) {
        if matches!(self.delete_flow, DeleteFlow::ConfirmPending(_)) {
            self.delete_flow = DeleteFlow::Idle;
        }
    }

    /// Executes a confirmed delete. Without an open prompt this is a no-op.
    pub async fn confirm_delete(&mut self) {
        let DeleteFlow::ConfirmPending(id) = self.delete_flow else {
            return;
        };
        self.delete_flow = DeleteFlow::Deleting(id);

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.properties.retain(|p| p.id != id);
                info!("Listing {} deleted", id);
                self.toast = Some(Toast::success("Success", "Property deleted successfully."));
            }
            Err(e) => {
                warn!("Delete of {} failed: {}", id, e);
                self.toast = Some(Toast::error("Error", "Failed to delete property."));
            }
        }
        self.delete_flow = DeleteFlow::Idle;
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn delete_flow(&self) -> DeleteFlow {
        self.delete_flow
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}
