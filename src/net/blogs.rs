//! Resource client for the blog collection.
//!
//! Every call is a single, non-retried round trip carrying the stored
//! credential as a bearer header. Nothing here touches the in-memory
//! list: reconciliation is the shell's job, driven by the confirmed
//! server responses these functions return.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{Blog, BlogFields};

/// Base path of the blog collection.
pub const BLOGS_URL: &str = "/api/blogs";

/// Fetch the full collection visible to the current identity.
pub async fn list() -> Result<Vec<Blog>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = super::http::with_bearer(gloo_net::http::Request::get(BLOGS_URL))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Fetch a single post by id.
pub async fn get(id: &str) -> Result<Blog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{BLOGS_URL}/{id}");
        let resp = super::http::with_bearer(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Submit a new post; the service assigns the id and author.
pub async fn create(fields: &BlogFields) -> Result<Blog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = super::http::with_bearer(gloo_net::http::Request::post(BLOGS_URL))
            .json(fields)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = fields;
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Replace an existing post wholesale; returns the service's confirmed
/// copy. The body carries the full record, id and server-assigned fields
/// included.
pub async fn update(blog: &Blog) -> Result<Blog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{BLOGS_URL}/{}", blog.id);
        let resp = super::http::with_bearer(gloo_net::http::Request::put(&url))
            .json(blog)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = blog;
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Delete a post; returns the deleted representation, which the shell uses
/// to evict the matching local entry.
pub async fn remove(id: &str) -> Result<Blog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{BLOGS_URL}/{id}");
        let resp = super::http::with_bearer(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}
