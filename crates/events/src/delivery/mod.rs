//! The push-transport capability consumed by the delivery dispatcher.
//!
//! A transport performs one multicast send and reports one outcome per
//! token, index-aligned with the token list it was given. The production
//! implementation is [`fcm::FcmDelivery`].

use async_trait::async_trait;

pub mod fcm;

/// Click-through target carried in the webpush options. The login page
/// redirects each role to its own dashboard.
pub const DEFAULT_CLICK_LINK: &str = "/login";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a multicast send that failed as a whole.
///
/// Per-token failures are not errors; they come back as
/// [`SendOutcome::Failed`] entries.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The push endpoint returned a non-2xx status code.
    #[error("push endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body did not have the expected shape.
    #[error("unexpected push response: {0}")]
    Response(String),
}

// ---------------------------------------------------------------------------
// Message and outcomes
// ---------------------------------------------------------------------------

/// One multicast push message: the same title/body for every token.
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    pub link: String,
    pub tokens: Vec<String>,
}

impl PushMessage {
    pub fn new(title: &str, body: &str, tokens: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            link: DEFAULT_CLICK_LINK.to_string(),
            tokens,
        }
    }
}

/// Per-token result of a multicast send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    /// The platform rejected this token, with its reported reason
    /// (e.g. `NotRegistered` for a stale installation).
    Failed(String),
}

// ---------------------------------------------------------------------------
// PushTransport
// ---------------------------------------------------------------------------

/// A multicast send capability: one call, many tokens, one outcome each.
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// Send `message` to every token it carries.
    ///
    /// On success the returned vector is index-aligned with
    /// `message.tokens`. Implementations make exactly one attempt; retry
    /// policy is not a transport concern here.
    async fn send_multicast(&self, message: &PushMessage)
        -> Result<Vec<SendOutcome>, TransportError>;
}
