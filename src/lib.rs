//! Client library for the TumharaGhar property-listing marketplace.
//!
//! Everything persistent lives in a hosted database-with-auth service;
//! this crate wraps it with typed models, client-side validation, a
//! process-wide session provider, and the page controllers that drive the
//! browse / detail / dashboard flows.

pub mod error;
pub mod gateway;
pub mod links;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;
pub mod validation;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{MarketError, Result};
pub use gateway::{AuthGateway, GatewayConfig, ListingFilter, PropertyGateway, RestGateway};
pub use models::{
    NewProperty, Property, PropertyImage, PropertyStatus, PropertyType, SellerProfile, Session,
    SignUpRequest, UserRole,
};
pub use routes::{redirect_for, Route};
pub use session::SessionProvider;
