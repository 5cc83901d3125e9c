use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user picked at sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Buyer,
    Seller,
}

/// Current authenticated user, as reported by the auth gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Whether a listing is offered for rent or for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Rent,
    Sale,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Rent => "rent",
            PropertyType::Sale => "sale",
        }
    }
}

/// Listing lifecycle status. Only `Active` listings are shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Inactive,
    Sold,
    Rented,
    #[serde(other)]
    Unknown,
}

/// Image attached to a listing. The gateway returns these as a one-hop
/// join, where the owning reference is implicit and omitted from the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<Uuid>,
    pub image_url: String,
}

/// Core property listing as stored by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub area_sqft: Option<u32>,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub available_to: Option<NaiveDate>,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "property_images")]
    pub images: Vec<PropertyImage>,
}

/// Seller contact card, read-only from the buyer's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Candidate listing going through validation before an insert.
/// The owning `seller_id` is attached by the gateway call from the
/// current session, never by the form itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub price: f64,
    pub location: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area_sqft: Option<i64>,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
}

impl Default for NewProperty {
    /// Blank form state; "for rent" is the pre-selected listing type.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            property_type: PropertyType::Rent,
            price: 0.0,
            location: String::new(),
            bedrooms: 0,
            bathrooms: 0,
            area_sqft: None,
            available_from: None,
            available_to: None,
        }
    }
}

/// Sign-up payload. `phone` is required when `role` is `Seller` so buyers
/// can reach the seller over WhatsApp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

/// Bundled local images used when a listing carries no photos
pub const PLACEHOLDER_IMAGES: [&str; 3] = [
    "/assets/property-1.jpg",
    "/assets/property-2.jpg",
    "/assets/property-3.jpg",
];

/// First listing image, or a placeholder picked by position in the list
/// so adjacent cards do not all show the same stock photo.
pub fn card_image(property: &Property, index: usize) -> &str {
    property
        .images
        .first()
        .map(|img| img.image_url.as_str())
        .unwrap_or(PLACEHOLDER_IMAGES[index % PLACEHOLDER_IMAGES.len()])
}
