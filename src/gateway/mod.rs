pub mod rest;
pub mod types;

pub use rest::RestGateway;
pub use types::{GatewayConfig, ListingFilter};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewProperty, Property, SellerProfile, Session, SignUpRequest};

/// Table-style access to the hosted data service.
/// Behind a trait so page controllers can be driven against a fake.
#[async_trait]
pub trait PropertyGateway: Send + Sync {
    /// Active listings, newest first, images joined in.
    async fn list_active(&self, filter: &ListingFilter) -> Result<Vec<Property>>;

    /// Single listing by id; `NotFound` when no row matches.
    async fn get_by_id(&self, id: Uuid) -> Result<Property>;

    /// Contact card of a listing's owner.
    async fn seller_profile(&self, seller_id: Uuid) -> Result<SellerProfile>;

    /// Everything a seller has listed, newest first, any status.
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>>;

    /// Inserts a validated draft owned by `seller_id`, returning the stored row.
    async fn insert(&self, seller_id: Uuid, draft: &NewProperty) -> Result<Property>;

    /// Deletes by id; `NotFound` when the gateway reports zero rows removed.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Sign-in / sign-up / sign-out against the hosted auth endpoint.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session>;
    async fn sign_out(&self) -> Result<()>;
}
