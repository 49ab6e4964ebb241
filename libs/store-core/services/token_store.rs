use std::sync::{Arc, RwLock};

use derive_more::Deref;

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct TokenStore(Arc<dyn ITokenStore>);

impl TokenStore {
    pub fn new(store: impl ITokenStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    pub fn from_arc(store: Arc<impl ITokenStore + 'static>) -> Self {
        Self(store)
    }
}

pub trait ITokenStore: Send + Sync {
    /// Synchronous read of the persisted bearer token, when one is set.
    fn bearer_token(&self) -> Option<String>;
}

/// Keeps the bearer token in process memory; the embedding application is
/// responsible for refreshing it after login or expiry.
#[derive(Default)]
pub struct StaticTokenStore {
    token: RwLock<Option<String>>,
}

impl StaticTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        StaticTokenStore {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }
}

impl ITokenStore for StaticTokenStore {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }
}
