//! Public listing browser: remote fetch narrowed by listing type, with a
//! purely local free-text refinement over title and location.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::gateway::{ListingFilter, PropertyGateway};
use crate::models::{Property, PropertyType};
use crate::pages::Toast;

pub struct PropertiesPage {
    gateway: Arc<dyn PropertyGateway>,
    properties: Vec<Property>,
    loading: bool,
    search_term: String,
    type_filter: Option<PropertyType>,
    toast: Option<Toast>,
    // Bumped on every fetch so a result that raced a newer fetch is
    // discarded instead of clobbering fresher rows.
    generation: u64,
}

impl PropertiesPage {
    pub fn new(gateway: Arc<dyn PropertyGateway>) -> Self {
        Self {
            gateway,
            properties: Vec::new(),
            loading: true,
            search_term: String::new(),
            type_filter: None,
            toast: None,
            generation: 0,
        }
    }

    pub async fn mount(&mut self) {
        self.fetch().await;
    }

    /// Changing the remote-side type filter triggers a re-fetch; setting
    /// the same value again does not.
    pub async fn set_type_filter(&mut self, filter: Option<PropertyType>) {
        if self.type_filter == filter {
            return;
        }
        self.type_filter = filter;
        self.fetch().await;
    }

    /// Applied locally on the already-fetched rows; no remote call.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    async fn fetch(&mut self) {
        self.loading = true;
        self.generation += 1;
        let generation = self.generation;
        let filter = ListingFilter {
            property_type: self.type_filter,
        };
        debug!("Loading listings with filter {:?}", filter);
        match self.gateway.list_active(&filter).await {
            Ok(rows) => {
                if generation == self.generation {
                    self.properties = rows;
                }
            }
            Err(e) => {
                warn!("Listing fetch failed: {}", e);
                self.toast = Some(Toast::error(
                    "Error",
                    "Failed to load properties. Please try again.",
                ));
            }
        }
        self.loading = false;
    }

    /// Fetched rows narrowed by the current search term.
    pub fn visible(&self) -> Vec<&Property> {
        search_filter(&self.properties, &self.search_term)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn type_filter(&self) -> Option<PropertyType> {
        self.type_filter
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}

/// Case-insensitive substring match over title OR location. An empty term
/// matches everything.
pub fn search_filter<'a>(properties: &'a [Property], term: &str) -> Vec<&'a Property> {
    let needle = term.to_lowercase();
    properties
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle) || p.location.to_lowercase().contains(&needle)
        })
        .collect()
}
