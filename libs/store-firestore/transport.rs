use std::sync::Arc;

use derive_more::Deref;

use workdays_store_core::{PinFuture, StoreError, StoreResult};

/// A single authenticated JSON POST; both firestore endpoints use this
/// shape.
#[derive(Clone, Debug)]
pub struct PostRequest {
    pub url: String,
    pub bearer_token: String,
    pub body: serde_json::Value,
}

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct Transport(Arc<dyn ITransport>);

impl Transport {
    pub fn new(transport: impl ITransport + 'static) -> Self {
        Self(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<impl ITransport + 'static>) -> Self {
        Self(transport)
    }
}

pub trait ITransport: Send + Sync {
    fn post_json(&self, request: PostRequest) -> PinFuture<StoreResult<serde_json::Value>>;
}

/// Production transport. No timeout is configured beyond the client
/// default and no retries are attempted; a failure surfaces once.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }

    pub fn get() -> Transport {
        Transport::new(HttpTransport::new())
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ITransport for HttpTransport {
    fn post_json(&self, request: PostRequest) -> PinFuture<StoreResult<serde_json::Value>> {
        let client = self.client.clone();

        Box::pin(async move {
            let response = client
                .post(&request.url)
                .bearer_auth(&request.bearer_token)
                .json(&request.body)
                .send()
                .await
                .map_err(StoreError::transport)?;

            let status = response.status();
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return Err(StoreError::Unauthorized);
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Rejected(format!("{status}: {body}")));
            }

            response.json().await.map_err(StoreError::transport)
        })
    }
}
