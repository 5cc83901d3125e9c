//! In-memory gateway fake shared by the controller tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::error::{MarketError, Result};
use crate::gateway::{AuthGateway, ListingFilter, PropertyGateway};
use crate::models::{
    NewProperty, Property, PropertyStatus, SellerProfile, Session, SignUpRequest, UserRole,
};

pub(crate) struct FakeGateway {
    pub user_id: Uuid,
    properties: Mutex<Vec<Property>>,
    profiles: Mutex<Vec<SellerProfile>>,
    auth_failure: Mutex<Option<String>>,
    property_failure: Mutex<Option<String>>,
    auth_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            properties: Mutex::new(Vec::new()),
            profiles: Mutex::new(Vec::new()),
            auth_failure: Mutex::new(None),
            property_failure: Mutex::new(None),
            auth_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeGateway {
    pub fn seed_property(&self, property: Property) {
        self.properties.lock().unwrap().push(property);
    }

    pub fn seed_profile(&self, profile: SellerProfile) {
        self.profiles.lock().unwrap().push(profile);
    }

    /// Every subsequent auth call fails with this gateway message.
    pub fn fail_auth_with(&self, message: &str) {
        *self.auth_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Every subsequent table call fails with this gateway message.
    pub fn fail_properties_with(&self, message: &str) {
        *self.property_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Property> {
        self.properties.lock().unwrap().clone()
    }

    fn table_guard(&self) -> Result<()> {
        if let Some(msg) = self.property_failure.lock().unwrap().clone() {
            return Err(MarketError::Gateway(msg));
        }
        Ok(())
    }

    fn auth_guard(&self) -> Result<()> {
        if let Some(msg) = self.auth_failure.lock().unwrap().clone() {
            return Err(MarketError::Gateway(msg));
        }
        Ok(())
    }

    /// The fake grants the seller role to addresses starting with "seller".
    fn role_for(email: &str) -> UserRole {
        if email.starts_with("seller") {
            UserRole::Seller
        } else {
            UserRole::Buyer
        }
    }
}

#[async_trait]
impl PropertyGateway for FakeGateway {
    async fn list_active(&self, filter: &ListingFilter) -> Result<Vec<Property>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.table_guard()?;
        let mut rows: Vec<Property> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.status == PropertyStatus::Active)
            .filter(|p| filter.property_type.map_or(true, |t| p.property_type == t))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Property> {
        self.table_guard()?;
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(MarketError::NotFound)
    }

    async fn seller_profile(&self, seller_id: Uuid) -> Result<SellerProfile> {
        self.table_guard()?;
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == seller_id)
            .cloned()
            .ok_or(MarketError::NotFound)
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.table_guard()?;
        let mut rows: Vec<Property> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, seller_id: Uuid, draft: &NewProperty) -> Result<Property> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.table_guard()?;
        let property = Property {
            id: Uuid::new_v4(),
            seller_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            property_type: draft.property_type,
            price: draft.price,
            location: draft.location.clone(),
            bedrooms: draft.bedrooms.max(0) as u32,
            bathrooms: draft.bathrooms.max(0) as u32,
            area_sqft: draft.area_sqft.map(|a| a.max(0) as u32),
            available_from: draft.available_from,
            available_to: draft.available_to,
            status: PropertyStatus::Active,
            created_at: Utc::now(),
            images: Vec::new(),
        };
        self.properties.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.table_guard()?;
        let mut rows = self.properties.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(MarketError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for FakeGateway {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        self.auth_guard()?;
        Ok(Session {
            user_id: self.user_id,
            email: email.to_string(),
            role: Self::role_for(email),
        })
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        self.auth_guard()?;
        Ok(Session {
            user_id: self.user_id,
            email: request.email.clone(),
            role: request.role,
        })
    }

    async fn sign_out(&self) -> Result<()> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        self.auth_guard()
    }
}

/// Listing builder for tests; `age_days` pushes `created_at` into the past
/// so ordering assertions have distinct timestamps.
pub(crate) fn listing(seller_id: Uuid, title: &str, location: &str, age_days: i64) -> Property {
    Property {
        id: Uuid::new_v4(),
        seller_id,
        title: title.to_string(),
        description: "A perfectly serviceable place to live, honestly.".to_string(),
        property_type: crate::models::PropertyType::Rent,
        price: 1500.0,
        location: location.to_string(),
        bedrooms: 2,
        bathrooms: 1,
        area_sqft: Some(900),
        available_from: None,
        available_to: None,
        status: PropertyStatus::Active,
        created_at: Utc::now() - Duration::days(age_days),
        images: Vec::new(),
    }
}
