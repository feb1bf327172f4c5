//! Shared HTTP client for the platform REST API.
//!
//! Every domain module funnels its calls through these helpers, which:
//! - resolve the full URL via [`crate::core::config::get_api_url`],
//! - attach `Authorization: Bearer <token>` when a token is stored,
//! - deserialize responses into explicit typed models at the boundary,
//!   converting malformed bodies into [`ApiError::Decode`] instead of letting
//!   loosely-shaped data leak into the view layer.
//!
//! There are no retries, no caching and no de-duplication here: each call is
//! a single round trip whose failure is returned to the calling view.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::auth::token_store;
use crate::core::config::get_api_url;

/// Error returned by every request wrapper.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server-provided error text when the
    /// body carried one, otherwise the HTTP status text.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (DNS, refused, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// One page of a paginated listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    /// Number of pages implied by `total` and `per_page`.
    pub fn page_count(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page)) as u32
    }
}

/// Error body shape used by the platform API. Both field names appear in the
/// wild depending on the endpoint, so accept either.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// GET a typed JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&get_api_url(path))).await?;
    read_json(response).await
}

/// GET a typed JSON body with URL-encoded query parameters.
pub async fn get_json_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let builder =
        Request::get(&get_api_url(path)).query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let response = send(builder).await?;
    read_json(response).await
}

/// POST a JSON body, expecting a typed JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&get_api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// PUT a JSON body, expecting a typed JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_auth(Request::put(&get_api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// POST a JSON body where the response body is irrelevant (acknowledged
/// notifications, empty 204s). Only the status is inspected.
pub async fn post_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_auth(Request::post(&get_api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(&response).await)
    }
}

/// DELETE a resource. The platform returns an empty or informational body on
/// success, so only the status is inspected.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = send(Request::delete(&get_api_url(path))).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(&response).await)
    }
}

/// POST a `multipart/form-data` body (file uploads), expecting a typed JSON
/// response. The browser sets the multipart boundary header itself.
#[cfg(not(feature = "ssr"))]
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&get_api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// PUT a `multipart/form-data` body, expecting a typed JSON response.
#[cfg(not(feature = "ssr"))]
pub async fn put_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = with_auth(Request::put(&get_api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// Attach the bearer token when one is stored. Anonymous calls go out without
/// the header; the backend decides what they may see.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match token_store::get_token() {
        Some(token) => builder.header(
            "Authorization",
            &format!("Bearer {}", token.access_token),
        ),
        None => builder,
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    with_auth(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(&response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body
            .message
            .or(body.error)
            .unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_display() {
        let err = ApiError::Status {
            status: 404,
            message: "Blog post not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 404: Blog post not found"
        );
    }

    #[test]
    fn test_api_error_decode_display() {
        let err = ApiError::Decode("missing field `id`".to_string());
        assert!(err.to_string().contains("malformed response"));
    }

    #[test]
    fn test_page_count_rounds_up() {
        let page = Page::<u32> {
            items: vec![],
            total: 21,
            page: 1,
            per_page: 10,
        };
        assert_eq!(page.page_count(), 3);

        let exact = Page::<u32> {
            items: vec![],
            total: 20,
            page: 1,
            per_page: 10,
        };
        assert_eq!(exact.page_count(), 2);
    }

    #[test]
    fn test_error_body_accepts_either_field() {
        let with_message: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(with_message.message.as_deref(), Some("nope"));
        assert!(with_message.error.is_none());

        let with_error: ErrorBody = serde_json::from_str(r#"{"error":"denied"}"#).unwrap();
        assert_eq!(with_error.error.as_deref(), Some("denied"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none() && empty.error.is_none());
    }
}
