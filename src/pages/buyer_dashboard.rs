//! Buyer landing page. Its only logic is the role gate on mount; the rest
//! of the page is static affordances.

use std::sync::Arc;

use crate::routes::{redirect_for, Route};
use crate::session::SessionProvider;

pub struct BuyerDashboard {
    sessions: Arc<SessionProvider>,
}

impl BuyerDashboard {
    pub fn new(sessions: Arc<SessionProvider>) -> Self {
        Self { sessions }
    }

    pub fn mount(&self) -> Option<Route> {
        redirect_for(&Route::BuyerDashboard, self.sessions.current().as_ref())
    }
}
