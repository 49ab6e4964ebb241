use std::sync::Mutex;

use serde_derive::Deserialize;
use ulid::Ulid;

use crate::services::date_formatter::DateFormatter;
use crate::storage_config::{StorageConfig, StoreServices};
use crate::{PinFuture, Storage, StorageBox, StoreError, StoreResult, Workday};

/// This storage type is used for testing, workdays are not persisted
/// anywhere but kept in process memory.
pub struct MemoryStorage {
    date_formatter: DateFormatter,
    workdays: Mutex<Vec<Workday>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MemoryStorageConfig {}

impl StorageConfig for MemoryStorageConfig {
    type Storage = MemoryStorage;

    fn try_into_storage(self, services: StoreServices) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(MemoryStorage::new(
            services.date_formatter,
        )))
    }
}

impl MemoryStorage {
    pub fn new(date_formatter: DateFormatter) -> Self {
        MemoryStorage {
            date_formatter,
            workdays: Mutex::new(Vec::new()),
        }
    }
}

impl Storage for MemoryStorage {
    fn save_workday(&self, workday: Workday) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            let mut stored = workday;
            // Same derivations a real backend performs on write
            stored.display_date = self
                .date_formatter
                .display_date(stored.due_date.as_unix_millis());
            stored.id = Some(Ulid::new().to_string());

            self.workdays
                .lock()
                .map_err(StoreError::operation_failed)?
                .push(stored);
            Ok(())
        })
    }

    fn get_workday_by_date(
        &self,
        display_date: String,
        user_id: String,
    ) -> PinFuture<StoreResult<Option<Workday>>> {
        Box::pin(async move {
            let workdays = self
                .workdays
                .lock()
                .map_err(StoreError::operation_failed)?;

            Ok(workdays
                .iter()
                .find(|workday| {
                    workday.display_date == display_date && workday.user_id == user_id
                })
                .cloned())
        })
    }
}
