use std::sync::Arc;

use derive_more::Deref;

use crate::StoreError;

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct ErrorHandler(Arc<dyn IErrorHandler>);

impl ErrorHandler {
    pub fn new(handler: impl IErrorHandler + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn from_arc(handler: Arc<impl IErrorHandler + 'static>) -> Self {
        Self(handler)
    }
}

pub trait IErrorHandler: Send + Sync {
    /// Called once for every failed store call, before the error is
    /// returned to the caller. The handler decides whether to surface or
    /// log; it cannot swallow the error.
    fn handle_error(&self, error: &StoreError);
}
