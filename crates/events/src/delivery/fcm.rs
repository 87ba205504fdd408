//! FCM multicast delivery over the legacy HTTP JSON API.
//!
//! [`FcmDelivery`] posts one request per multicast carrying the token
//! list and the payload, and maps the per-token `results` array into
//! [`SendOutcome`]s. The title/body are duplicated into both the
//! `notification` slot (background/OS display) and the `data` slot
//! (foreground in-app handling); clients consume whichever their display
//! model needs, so both must always be present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use super::{PushMessage, PushTransport, SendOutcome, TransportError};

/// HTTP request timeout for a single multicast attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers push messages through an FCM-compatible HTTP endpoint.
pub struct FcmDelivery {
    client: reqwest::Client,
    endpoint: String,
    server_key: String,
}

impl FcmDelivery {
    /// Create a delivery client for the given endpoint and server key.
    pub fn new(endpoint: impl Into<String>, server_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
            server_key: server_key.into(),
        }
    }

    /// Build the request body for one multicast.
    fn build_payload(message: &PushMessage) -> serde_json::Value {
        serde_json::json!({
            "registration_ids": message.tokens,
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": {
                "title": message.title,
                "body": message.body,
            },
            "webpush": {
                "fcm_options": {
                    "link": message.link,
                }
            },
        })
    }

    /// Map the response `results` array into per-token outcomes.
    ///
    /// Each entry either carries a `message_id` (delivered) or an `error`
    /// string (failed). A response without a `results` array is a shape
    /// error, not a partial failure.
    fn parse_results(body: &serde_json::Value) -> Result<Vec<SendOutcome>, TransportError> {
        let results = body
            .get("results")
            .and_then(|v| v.as_array())
            .ok_or_else(|| TransportError::Response("missing results array".to_string()))?;

        Ok(results
            .iter()
            .map(|entry| match entry.get("error").and_then(|e| e.as_str()) {
                Some(reason) => SendOutcome::Failed(reason.to_string()),
                None => SendOutcome::Delivered,
            })
            .collect())
    }
}

#[async_trait]
impl PushTransport for FcmDelivery {
    async fn send_multicast(
        &self,
        message: &PushMessage,
    ) -> Result<Vec<SendOutcome>, TransportError> {
        let payload = Self::build_payload(message);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("key={}", self.server_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::HttpStatus(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        Self::parse_results(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message() -> PushMessage {
        PushMessage::new(
            "Nuevo Evento: Feria de Ciencias",
            "Se ha agregado un nuevo evento para el 14 de marzo de 2025.",
            vec!["tok-1".to_string(), "tok-2".to_string()],
        )
    }

    #[test]
    fn payload_duplicates_title_and_body_into_both_slots() {
        let payload = FcmDelivery::build_payload(&message());

        assert_eq!(payload["registration_ids"], json!(["tok-1", "tok-2"]));
        // Both display slots must carry the same strings: "notification"
        // for background/OS display, "data" for the foreground handler.
        assert_eq!(payload["notification"]["title"], payload["data"]["title"]);
        assert_eq!(payload["notification"]["body"], payload["data"]["body"]);
        assert_eq!(
            payload["notification"]["title"],
            "Nuevo Evento: Feria de Ciencias"
        );
        assert_eq!(payload["webpush"]["fcm_options"]["link"], "/login");
    }

    #[test]
    fn parse_results_maps_entries_in_order() {
        let body = json!({
            "success": 1,
            "failure": 1,
            "results": [
                {"message_id": "m1"},
                {"error": "NotRegistered"},
            ],
        });

        let outcomes = FcmDelivery::parse_results(&body).unwrap();
        assert_eq!(
            outcomes,
            vec![
                SendOutcome::Delivered,
                SendOutcome::Failed("NotRegistered".to_string()),
            ]
        );
    }

    #[test]
    fn parse_results_rejects_missing_results_array() {
        let err = FcmDelivery::parse_results(&json!({"success": 0})).unwrap_err();
        assert!(err.to_string().contains("missing results array"));
    }

    #[test]
    fn transport_error_display_http_status() {
        let err = TransportError::HttpStatus(502);
        assert_eq!(err.to_string(), "push endpoint returned HTTP 502");
    }

    #[test]
    fn transport_error_display_request() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = TransportError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }

    #[test]
    fn new_does_not_panic() {
        let _delivery = FcmDelivery::new("https://fcm.googleapis.com/fcm/send", "server-key");
    }
}
