use std::time::Duration;

use crate::models::PropertyType;

/// Connection settings for the hosted data service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub base_url: String,
    /// Anonymous API key sent with every request
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Remote-side narrowing for the public listing query. The free-text
/// search is applied locally and never reaches the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub property_type: Option<PropertyType>,
}

impl ListingFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn of_type(property_type: PropertyType) -> Self {
        Self {
            property_type: Some(property_type),
        }
    }
}
