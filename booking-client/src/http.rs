//! HTTP client for the booking API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::request::{BookingQuery, PaymentUpdateRequest, StatusUpdateRequest};
use shared::response::{DataResponse, MutationResponse};
use shared::Booking;
use tracing::{debug, instrument};

use crate::{BookingApi, ClientConfig, ClientError, ClientResult};

/// Error body in the unified `{ code, message }` format
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Error body in the booking service's `{ success: false, error }` format
#[derive(serde::Deserialize)]
struct FailedEnvelope {
    pub success: bool,
    pub error: Option<String>,
}

/// Network HTTP client for the booking service
#[derive(Debug, Clone)]
pub struct NetworkBookingClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkBookingClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("base_url is empty".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authorize(self.client.get(self.url(path)));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.get(self.url(path)).query(query));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.put(self.url(path)).json(body));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            debug!(%status, body = %text, "booking service returned an error");

            if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                return Err(ClientError::Api {
                    code: api_err.code,
                    message: api_err.message,
                });
            }
            if let Ok(envelope) = serde_json::from_str::<FailedEnvelope>(&text)
                && !envelope.success
            {
                return Err(ClientError::Rejected(
                    envelope.error.unwrap_or_else(|| status.to_string()),
                ));
            }
            return match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(ClientError::Unauthorized(text))
                }
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(text))
                }
                _ => Err(ClientError::Internal(text)),
            };
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn unwrap_data<T>(resp: DataResponse<T>, what: &str) -> ClientResult<T> {
        if !resp.success {
            return Err(ClientError::Rejected(
                resp.error.unwrap_or_else(|| "Unknown error".into()),
            ));
        }
        resp.data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }
}

#[async_trait]
impl BookingApi for NetworkBookingClient {
    #[instrument(skip(self), fields(from = ?query.from, to = ?query.to))]
    async fn fetch_bookings(&self, query: &BookingQuery) -> ClientResult<Vec<Booking>> {
        let resp: DataResponse<Vec<Booking>> = self.get_with_query("api/bookings", query).await?;
        let bookings = Self::unwrap_data(resp, "bookings")?;
        debug!(count = bookings.len(), "fetched bookings");
        Ok(bookings)
    }

    #[instrument(skip(self))]
    async fn fetch_booking(&self, booking_id: &str) -> ClientResult<Booking> {
        let resp: DataResponse<Booking> = self.get(&format!("api/bookings/{}", booking_id)).await?;
        Self::unwrap_data(resp, "booking")
    }

    #[instrument(skip(self, request), fields(booking_id = %request.booking_id, status = %request.status))]
    async fn update_booking_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> ClientResult<MutationResponse> {
        self.put(&format!("api/bookings/{}/status", request.booking_id), request)
            .await
    }

    #[instrument(skip(self, request), fields(booking_id = %request.booking_id))]
    async fn update_booking_payment(
        &self,
        request: &PaymentUpdateRequest,
    ) -> ClientResult<MutationResponse> {
        self.put(&format!("api/bookings/{}/payment", request.booking_id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = NetworkBookingClient::new(&ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.url("/api/bookings"),
            "http://localhost:5000/api/bookings"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = NetworkBookingClient::new(&ClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_auth_header() {
        let client = NetworkBookingClient::new(&ClientConfig::default())
            .unwrap()
            .with_token("secret");
        assert_eq!(client.auth_header().as_deref(), Some("Bearer secret"));
    }

    #[test]
    fn test_unwrap_data_failure() {
        let resp: DataResponse<Vec<Booking>> =
            serde_json::from_str(r#"{"success":false,"error":"closed"}"#).unwrap();
        let err = NetworkBookingClient::unwrap_data(resp, "bookings").unwrap_err();
        assert!(matches!(err, ClientError::Rejected(msg) if msg == "closed"));
    }
}
