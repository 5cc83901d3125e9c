//! Page controllers: the state and transitions each page owns, minus the
//! rendering. Every controller catches gateway and
//! validation failures at its boundary and converts them into a [`Toast`]
//! for the shell to display; nothing here panics or retries.

pub mod auth_page;
pub mod buyer_dashboard;
pub mod create_property;
pub mod properties;
pub mod property_detail;
pub mod seller_dashboard;

pub use auth_page::{AuthMode, AuthPage};
pub use buyer_dashboard::BuyerDashboard;
pub use create_property::CreatePropertyPage;
pub use properties::{search_filter, PropertiesPage};
pub use property_detail::{DetailState, PropertyDetailPage};
pub use seller_dashboard::{DeleteFlow, SellerDashboard};

use crate::error::MarketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Maps a failed operation onto the toast the user sees. Validation and
/// gateway messages are already human-readable; anything else collapses
/// into a generic apology.
pub(crate) fn failure_toast(title: &str, err: &MarketError) -> Toast {
    match err {
        MarketError::Validation(msg) => Toast::error("Validation Error", msg),
        MarketError::Gateway(msg) => Toast::error(title, msg),
        MarketError::NotFound => Toast::error(title, "The requested record was not found."),
        MarketError::Unexpected(_) => {
            Toast::error(title, "An unexpected error occurred. Please try again.")
        }
    }
}
