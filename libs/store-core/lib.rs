use std::{future::Future, pin::Pin};

mod due_date;
mod errors;
mod memory;
mod storage;
mod storage_config;
mod task;
mod workday;

pub mod services {
    pub mod date_formatter;
    pub mod error_handler;
    pub mod loader;
    pub mod notifier;
    pub mod token_store;
}

pub use due_date::DueDate;
pub use errors::{StoreError, StoreResult};
pub use memory::{MemoryStorage, MemoryStorageConfig};
pub use storage::{Storage, StorageBox};
pub use storage_config::{StorageConfig, StoreServices};
pub use task::Task;
pub use workday::{Workday, WorkdayId};

pub type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
