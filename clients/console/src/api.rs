//! HTTP client for the inventory API
//!
//! Each [`ApiClient`] instance carries its own optional bearer token;
//! there is no process-global credential.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the credential (401 or 403). The caller should
    /// clear the session and ask the user to log in again.
    #[error("{0}")]
    AuthRequired(String),

    /// Any other non-success response, with the server's message
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedProduct {
    #[serde(rename = "productId")]
    pub product_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatedCategory {
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: UserInfo,
}

/// Error body shape shared by every endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// API client with a per-instance credential
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the bearer token, if any, to an outgoing request
    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Turn a response into either the deserialized body or a [`ClientError`]
    async fn handle<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> ClientResult<T> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

        if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(ClientError::AuthRequired(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn register(&self, username: &str, password: &str) -> ClientResult<()> {
        let resp = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Self::handle::<serde_json::Value>(resp).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn profile(&self) -> ClientResult<UserInfo> {
        let resp = self
            .authed(self.http.get(self.url("/api/auth/profile")))
            .send()
            .await?;
        let profile: ProfileResponse = Self::handle(resp).await?;
        Ok(profile.user)
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let resp = self
            .authed(self.http.get(self.url("/api/products")))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn create_product(&self, fields: &ProductFields) -> ClientResult<CreatedProduct> {
        let resp = self
            .authed(self.http.post(self.url("/api/products")))
            .json(fields)
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn update_product(&self, id: i64, fields: &ProductFields) -> ClientResult<()> {
        let resp = self
            .authed(self.http.put(self.url(&format!("/api/products/{id}"))))
            .json(fields)
            .send()
            .await?;
        Self::handle::<serde_json::Value>(resp).await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let resp = self
            .authed(self.http.delete(self.url(&format!("/api/products/{id}"))))
            .send()
            .await?;
        Self::handle::<serde_json::Value>(resp).await?;
        Ok(())
    }

    pub async fn reset_inventory(&self) -> ClientResult<()> {
        let resp = self
            .authed(self.http.delete(self.url("/api/products")))
            .send()
            .await?;
        Self::handle::<serde_json::Value>(resp).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub async fn add_category(&self, name: &str) -> ClientResult<CreatedCategory> {
        let resp = self
            .authed(self.http.post(self.url("/api/products/category/add")))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::handle(resp).await
    }

    pub async fn list_categories(&self) -> ClientResult<Vec<String>> {
        let resp = self
            .authed(self.http.get(self.url("/api/products/categories/list")))
            .send()
            .await?;
        Self::handle(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:5000/", None);
        assert_eq!(client.url("/api/products"), "http://localhost:5000/api/products");

        let client = ApiClient::new("http://localhost:5000", None);
        assert_eq!(client.url("/api/products"), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{"id":1,"name":"Widget","category":"Hardware","quantity":2,"price":"9.99"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price.to_string(), "9.99");
    }
}
