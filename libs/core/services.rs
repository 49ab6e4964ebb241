use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info};
use typed_builder::TypedBuilder;

use workdays_store_core::services::error_handler::{ErrorHandler, IErrorHandler};
use workdays_store_core::services::loader::{ILoader, Loader};
use workdays_store_core::services::notifier::{INotifier, Notifier, Toast};
use workdays_store_core::StoreError;

/// Frontend collaborators wrapped around every save call. Defaults log
/// through tracing; real frontends plug in their own implementations.
#[derive(Clone, TypedBuilder)]
pub struct CoreServices {
    #[builder(default = TracingNotifier::get())]
    pub notifier: Notifier,
    #[builder(default = TracingErrorHandler::get())]
    pub error_handler: ErrorHandler,
    #[builder(default = Loader::new(FlagLoader::default()))]
    pub loader: Loader,
}

impl Default for CoreServices {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub struct TracingNotifier;

impl TracingNotifier {
    pub fn get() -> Notifier {
        Notifier::new(TracingNotifier)
    }
}

impl INotifier for TracingNotifier {
    fn show_toast(&self, toast: Toast) {
        info!(category = ?toast.category, "{}", toast.message);
    }
}

pub struct TracingErrorHandler;

impl TracingErrorHandler {
    pub fn get() -> ErrorHandler {
        ErrorHandler::new(TracingErrorHandler)
    }
}

impl IErrorHandler for TracingErrorHandler {
    fn handle_error(&self, error: &StoreError) {
        error!("store call failed: {error}");
    }
}

/// Process-wide loading flag; presentation layers poll `is_loading`.
#[derive(Default)]
pub struct FlagLoader {
    loading: AtomicBool,
}

impl FlagLoader {
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

impl ILoader for FlagLoader {
    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
    }
}
