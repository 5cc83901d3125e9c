//! Listing detail: the property row, then (dependent on it) the owning
//! seller's contact card. Either fetch failing aborts the page back to the
//! listing index with a toast.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::error::{MarketError, Result};
use crate::gateway::PropertyGateway;
use crate::links;
use crate::models::{card_image, Property, SellerProfile};
use crate::pages::Toast;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded {
        property: Property,
        seller: SellerProfile,
    },
    /// The view is abandoned; the shell must navigate to the given route.
    Aborted(Route),
}

pub struct PropertyDetailPage {
    gateway: Arc<dyn PropertyGateway>,
    id: Uuid,
    state: DetailState,
    toast: Option<Toast>,
}

impl PropertyDetailPage {
    pub fn new(gateway: Arc<dyn PropertyGateway>, id: Uuid) -> Self {
        Self {
            gateway,
            id,
            state: DetailState::Loading,
            toast: None,
        }
    }

    pub async fn mount(&mut self) {
        match self.load().await {
            Ok((property, seller)) => {
                self.state = DetailState::Loaded { property, seller };
            }
            Err(e) => {
                warn!("Detail fetch for {} failed: {}", self.id, e);
                self.toast = Some(Toast::error("Error", "Failed to load property details."));
                self.state = DetailState::Aborted(Route::Properties);
            }
        }
    }

    // The profile lookup needs the fetched row's seller_id, so the two
    // fetches are sequential by construction.
    async fn load(&self) -> Result<(Property, SellerProfile)> {
        let property = self.gateway.get_by_id(self.id).await?;
        let seller = self.gateway.seller_profile(property.seller_id).await?;
        Ok((property, seller))
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }

    /// Hero image: first listing photo, placeholder otherwise.
    pub fn main_image(&self) -> Option<&str> {
        match &self.state {
            DetailState::Loaded { property, .. } => Some(card_image(property, 0)),
            _ => None,
        }
    }

    /// WhatsApp deep link pre-filled with an enquiry about this listing.
    /// Errs when the seller left no phone number.
    pub fn whatsapp_contact(&self) -> Result<String> {
        let DetailState::Loaded { property, seller } = &self.state else {
            return Err(MarketError::NotFound);
        };
        links::whatsapp_link(
            seller.phone.as_deref().unwrap_or(""),
            &property.title,
            property.price,
        )
    }

    pub fn tel_contact(&self) -> Option<String> {
        match &self.state {
            DetailState::Loaded { seller, .. } => {
                seller.phone.as_deref().map(links::tel_link)
            }
            _ => None,
        }
    }
}
