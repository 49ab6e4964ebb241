pub mod config;
mod load;
mod navigation;
pub mod services;

pub use load::{load, load_core, BuiltinStorageType};
pub use navigation::{HomeBanner, INavigator, Navigator};

use workdays_store_core::services::error_handler::ErrorHandler;
use workdays_store_core::services::loader::Loader;
use workdays_store_core::services::notifier::{Notifier, Toast, ToastCategory};
use workdays_store_core::{StorageBox, StoreResult, Workday};

use crate::services::CoreServices;

/// Toast shown after every successful save.
pub const WORKDAY_SAVED_MESSAGE: &str = "Your workday has been saved.";

pub struct Core {
    storage: StorageBox,
    notifier: Notifier,
    error_handler: ErrorHandler,
    loader: Loader,
    /// Ok - found | Err - not found with error reason
    found_config_file: Result<(), eyre::Error>,
}

impl Core {
    /// Assemble a core around an already-built storage, without going
    /// through a config file.
    pub fn with_services(storage: StorageBox, services: CoreServices) -> Self {
        Core {
            storage,
            notifier: services.notifier,
            error_handler: services.error_handler,
            loader: services.loader,
            found_config_file: Ok(()),
        }
    }

    pub async fn save(&self, workday: Workday) -> StoreResult<()> {
        // Flag raised for the whole call, lowered on every exit path
        let _loading = self.loader.begin();

        match self.storage.save_workday(workday).await {
            Ok(()) => {
                self.notifier.show_toast(Toast {
                    category: ToastCategory::Success,
                    message: WORKDAY_SAVED_MESSAGE.to_string(),
                });
                Ok(())
            }
            Err(error) => {
                // The handler sees every failure exactly once; the error
                // still propagates to the caller afterwards
                self.error_handler.handle_error(&error);
                Err(error)
            }
        }
    }

    /// Fetch the single workday recorded for this user on this date, if
    /// any. Absence is not an error.
    pub async fn get_workday_by_date(
        &self,
        display_date: &str,
        user_id: &str,
    ) -> StoreResult<Option<Workday>> {
        self.storage
            .get_workday_by_date(display_date.to_string(), user_id.to_string())
            .await
    }

    pub fn get_inner_storage(&self) -> &StorageBox {
        &self.storage
    }

    pub fn has_found_config_file(&self) -> &Result<(), eyre::Error> {
        &self.found_config_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use workdays_store_core::services::date_formatter::IsoDateFormatter;
    use workdays_store_core::services::error_handler::IErrorHandler;
    use workdays_store_core::services::loader::ILoader;
    use workdays_store_core::services::notifier::INotifier;
    use workdays_store_core::{
        DueDate, MemoryStorage, PinFuture, Storage, StoreError, Task,
    };

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: Mutex<Vec<Toast>>,
    }

    impl INotifier for RecordingNotifier {
        fn show_toast(&self, toast: Toast) {
            self.toasts.lock().unwrap().push(toast);
        }
    }

    #[derive(Default)]
    struct RecordingErrorHandler {
        errors: Mutex<Vec<String>>,
    }

    impl IErrorHandler for RecordingErrorHandler {
        fn handle_error(&self, error: &StoreError) {
            self.errors.lock().unwrap().push(error.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingLoader {
        transitions: Mutex<Vec<bool>>,
    }

    impl ILoader for RecordingLoader {
        fn set_loading(&self, loading: bool) {
            self.transitions.lock().unwrap().push(loading);
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn save_workday(&self, _workday: Workday) -> PinFuture<StoreResult<()>> {
            Box::pin(async { Err(StoreError::Transport("connection reset".to_string())) })
        }

        fn get_workday_by_date(
            &self,
            _display_date: String,
            _user_id: String,
        ) -> PinFuture<StoreResult<Option<Workday>>> {
            Box::pin(async { Err(StoreError::Transport("connection reset".to_string())) })
        }
    }

    struct Harness {
        core: Core,
        notifier: Arc<RecordingNotifier>,
        error_handler: Arc<RecordingErrorHandler>,
        loader: Arc<RecordingLoader>,
    }

    fn build_harness(storage: StorageBox) -> Harness {
        let notifier = Arc::new(RecordingNotifier::default());
        let error_handler = Arc::new(RecordingErrorHandler::default());
        let loader = Arc::new(RecordingLoader::default());

        let core = Core::with_services(
            storage,
            CoreServices::builder()
                .notifier(Notifier::from_arc(notifier.clone()))
                .error_handler(ErrorHandler::from_arc(error_handler.clone()))
                .loader(Loader::from_arc(loader.clone()))
                .build(),
        );

        Harness {
            core,
            notifier,
            error_handler,
            loader,
        }
    }

    fn build_workday() -> Workday {
        Workday {
            id: None,
            user_id: "u1".to_string(),
            notes: "ok".to_string(),
            display_date: String::new(),
            due_date: DueDate::Seconds(1704067200),
            tasks: vec![Task {
                title: "A".to_string(),
                todo: 3,
                done: 1,
                completed: false,
            }],
        }
    }

    #[tokio::test]
    async fn successful_save_shows_a_toast_and_toggles_loading_once() {
        let harness = build_harness(StorageBox::new(MemoryStorage::new(IsoDateFormatter::get())));

        harness.core.save(build_workday()).await.unwrap();

        let toasts = harness.notifier.toasts.lock().unwrap();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].category, ToastCategory::Success);
        assert_eq!(toasts[0].message, WORKDAY_SAVED_MESSAGE);
        assert_eq!(
            *harness.loader.transitions.lock().unwrap(),
            vec![true, false]
        );
        assert!(harness.error_handler.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_save_runs_the_handler_and_still_releases_loading() {
        let harness = build_harness(StorageBox::new(FailingStorage));

        let result = harness.core.save(build_workday()).await;

        assert!(matches!(result, Err(StoreError::Transport(_))));
        assert_eq!(harness.error_handler.errors.lock().unwrap().len(), 1);
        assert_eq!(
            *harness.loader.transitions.lock().unwrap(),
            vec![true, false]
        );
        assert!(harness.notifier.toasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_workday_by_date_returns_what_was_saved() {
        let harness = build_harness(StorageBox::new(MemoryStorage::new(IsoDateFormatter::get())));

        harness.core.save(build_workday()).await.unwrap();

        let found = harness
            .core
            .get_workday_by_date("2024-01-01", "u1")
            .await
            .unwrap()
            .expect("saved workday should come back");

        assert_eq!(found.user_id, "u1");
        assert_eq!(found.tasks.len(), 1);
    }

    #[tokio::test]
    async fn get_workday_by_date_resolves_to_none_when_nothing_matches() {
        let harness = build_harness(StorageBox::new(MemoryStorage::new(IsoDateFormatter::get())));

        let found = harness
            .core
            .get_workday_by_date("2024-01-01", "u1")
            .await
            .unwrap();

        assert!(found.is_none());
        // No loader or toast activity on the read path
        assert!(harness.loader.transitions.lock().unwrap().is_empty());
        assert!(harness.notifier.toasts.lock().unwrap().is_empty());
    }
}
