//! `reqwest` implementation of the gateway traits against a hosted
//! Postgres-with-auth service (PostgREST table API + GoTrue-style auth).

use std::sync::RwLock;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{MarketError, Result};
use crate::gateway::types::{GatewayConfig, ListingFilter};
use crate::gateway::{AuthGateway, PropertyGateway};
use crate::models::{NewProperty, Property, SellerProfile, Session, SignUpRequest, UserRole};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const PROPERTY_SELECT: &str = "*,property_images(image_url)";

pub struct RestGateway {
    client: Client,
    config: GatewayConfig,
    /// Bearer token of the signed-in user; the anonymous key is used until
    /// sign-in and again after sign-out.
    access_token: RwLock<Option<String>>,
}

impl RestGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ghar-market/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            access_token: RwLock::new(None),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url.trim_end_matches('/'))
    }

    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let token = self
            .access_token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_else(|| self.config.api_key.clone());

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.config.api_key)
                .context("API key is not a valid header value")?,
        );
        headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .context("Access token is not a valid header value")?,
        );
        Ok(headers)
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.write() {
            *guard = token;
        }
    }

    /// Converts a non-success response into the error taxonomy, favoring
    /// the service-provided message when one is present.
    async fn reject(response: Response) -> MarketError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_ACCEPTABLE || status == StatusCode::NOT_FOUND {
            // PostgREST answers 406 when a single-object request matched
            // zero (or more than one) rows.
            return MarketError::NotFound;
        }
        warn!("Gateway returned status {}: {}", status, body);
        MarketError::Gateway(service_message(status, &body))
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| MarketError::Gateway(format!("unexpected response shape: {e}")))
    }

    async fn fetch_properties(&self, query: &[(String, String)]) -> Result<Vec<Property>> {
        let url = self.table_url("properties");
        debug!("Fetching URL: {} {:?}", url, query);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }
}

/// Query string for the public listing fetch: active rows, newest first,
/// images joined, optionally narrowed to one listing type.
fn listing_query(filter: &ListingFilter) -> Vec<(String, String)> {
    let mut query = vec![
        ("select".to_string(), PROPERTY_SELECT.to_string()),
        ("status".to_string(), "eq.active".to_string()),
        ("order".to_string(), "created_at.desc".to_string()),
    ];
    if let Some(property_type) = filter.property_type {
        query.push((
            "property_type".to_string(),
            format!("eq.{}", property_type.as_str()),
        ));
    }
    query
}

fn transport(e: reqwest::Error) -> MarketError {
    MarketError::Gateway(format!("request failed: {e}"))
}

/// Best-effort extraction of a human-readable message from an error body.
fn service_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error_description: Option<String>,
        msg: Option<String>,
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed
            .message
            .or(parsed.error_description)
            .or(parsed.msg)
            .filter(|m| !m.is_empty())
        {
            return msg;
        }
    }
    format!("service returned status {status}")
}

#[async_trait]
impl PropertyGateway for RestGateway {
    async fn list_active(&self, filter: &ListingFilter) -> Result<Vec<Property>> {
        let properties = self.fetch_properties(&listing_query(filter)).await?;
        info!("Fetched {} active listings", properties.len());
        Ok(properties)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Property> {
        let url = self.table_url("properties");
        debug!("Fetching listing {}", id);
        let id_filter = format!("eq.{id}");
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(&[("select", PROPERTY_SELECT), ("id", id_filter.as_str())])
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn seller_profile(&self, seller_id: Uuid) -> Result<SellerProfile> {
        let url = self.table_url("profiles");
        debug!("Fetching seller profile {}", seller_id);
        let id_filter = format!("eq.{seller_id}");
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>> {
        let query = vec![
            ("select".to_string(), PROPERTY_SELECT.to_string()),
            ("seller_id".to_string(), format!("eq.{seller_id}")),
            ("order".to_string(), "created_at.desc".to_string()),
        ];
        let properties = self.fetch_properties(&query).await?;
        info!("Fetched {} own listings for seller {}", properties.len(), seller_id);
        Ok(properties)
    }

    async fn insert(&self, seller_id: Uuid, draft: &NewProperty) -> Result<Property> {
        let url = self.table_url("properties");
        let mut body = serde_json::to_value(draft)
            .context("Failed to serialize property draft")?;
        body.as_object_mut()
            .context("property draft did not serialize to an object")?
            .insert("seller_id".to_string(), json!(seller_id));

        debug!("Inserting listing for seller {}", seller_id);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let mut rows: Vec<Property> = Self::decode(response).await?;
        let property = rows
            .pop()
            .ok_or_else(|| MarketError::Gateway("insert returned no row".to_string()))?;
        info!("✅ Created listing {}", property.id);
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let url = self.table_url("properties");
        debug!("Deleting listing {}", id);
        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers()?)
            .header("Prefer", "return=representation")
            .query(&[("id", &format!("eq.{id}"))])
            .send()
            .await
            .map_err(transport)?;

        // The returned representation doubles as an affected-row count:
        // an empty array means nothing was deleted.
        let rows: Vec<serde_json::Value> = Self::decode(response).await?;
        if rows.is_empty() {
            return Err(MarketError::NotFound);
        }
        info!("Deleted listing {}", id);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
    user: AuthUser,
}

impl AuthResponse {
    fn into_session(self) -> Session {
        let role = self
            .user
            .user_metadata
            .get("role")
            .and_then(|v| serde_json::from_value::<UserRole>(v.clone()).ok())
            .unwrap_or(UserRole::Buyer);
        Session {
            user_id: self.user.id,
            email: self.user.email.unwrap_or_default(),
            role,
        }
    }
}

#[async_trait]
impl AuthGateway for RestGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.auth_url("token");
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport)?;

        let auth: AuthResponse = Self::decode(response).await?;
        self.set_token(auth.access_token.clone());
        let session = auth.into_session();
        info!("Signed in {} as {:?}", session.email, session.role);
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session> {
        let url = self.auth_url("signup");
        let body = json!({
            "email": request.email,
            "password": request.password,
            "data": {
                "full_name": request.full_name,
                "role": request.role,
                "phone": request.phone,
            }
        });
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let auth: AuthResponse = Self::decode(response).await?;
        self.set_token(auth.access_token.clone());
        let session = auth.into_session();
        info!("Signed up {} as {:?}", session.email, session.role);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        let url = self.auth_url("logout");
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(transport)?;
        // Local token is dropped regardless; a dead remote session must not
        // keep the client signed in.
        self.set_token(None);
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    #[test]
    fn listing_query_defaults_to_all_active_newest_first() {
        let query = listing_query(&ListingFilter::all());
        assert_eq!(
            query,
            vec![
                ("select".to_string(), PROPERTY_SELECT.to_string()),
                ("status".to_string(), "eq.active".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn listing_query_narrows_by_type() {
        let query = listing_query(&ListingFilter::of_type(PropertyType::Sale));
        assert!(query.contains(&("property_type".to_string(), "eq.sale".to_string())));
    }

    #[test]
    fn service_message_prefers_body_over_status() {
        let body = r#"{"message":"new row violates row-level security policy"}"#;
        assert_eq!(
            service_message(StatusCode::FORBIDDEN, body),
            "new row violates row-level security policy"
        );
        let auth_body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            service_message(StatusCode::BAD_REQUEST, auth_body),
            "Invalid login credentials"
        );
        assert_eq!(
            service_message(StatusCode::BAD_GATEWAY, "<html>"),
            "service returned status 502 Bad Gateway"
        );
    }

    #[test]
    fn auth_response_maps_metadata_role() {
        let raw = serde_json::json!({
            "access_token": "jwt",
            "user": {
                "id": "e3b6b9a2-41f5-49f8-b6db-2b6d6a0f8e4d",
                "email": "seller@example.com",
                "user_metadata": { "role": "seller", "full_name": "Ayesha Khan" }
            }
        });
        let auth: AuthResponse = serde_json::from_value(raw).unwrap();
        let session = auth.into_session();
        assert_eq!(session.role, UserRole::Seller);
        assert_eq!(session.email, "seller@example.com");
    }

    #[test]
    fn missing_role_defaults_to_buyer() {
        let raw = serde_json::json!({
            "access_token": null,
            "user": { "id": "e3b6b9a2-41f5-49f8-b6db-2b6d6a0f8e4d", "email": null }
        });
        let auth: AuthResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(auth.into_session().role, UserRole::Buyer);
    }
}
