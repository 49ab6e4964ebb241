use serde::de::DeserializeOwned;
use typed_builder::TypedBuilder;

use crate::services::date_formatter::{DateFormatter, IsoDateFormatter};
use crate::services::token_store::TokenStore;
use crate::storage::{Storage, StorageBox};

/// Client-side collaborators a storage backend consumes, whatever the
/// transport.
#[derive(Clone, TypedBuilder)]
pub struct StoreServices {
    pub token_store: TokenStore,
    #[builder(default = IsoDateFormatter::get())]
    pub date_formatter: DateFormatter,
}

pub trait StorageConfig: DeserializeOwned + Default {
    type Storage: Storage;

    fn try_into_storage(self, services: StoreServices) -> eyre::Result<StorageBox>;
}
