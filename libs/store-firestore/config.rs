use serde_derive::Deserialize;

use workdays_store_core::{StorageBox, StorageConfig, StoreServices};

use crate::storage::FirestoreStorage;
use crate::transport::HttpTransport;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FirestoreStorageConfig {
    /// Firestore REST base url, up to and including `/documents`
    pub base_url: String,

    /// Web api key, forwarded as the `key` query parameter
    pub api_key: String,

    /// Collection holding the workday documents (default to: workdays)
    pub collection_id: Option<String>,
}

impl FirestoreStorageConfig {
    pub fn get_collection_id(&self) -> String {
        self.collection_id
            .clone()
            .unwrap_or_else(|| String::from("workdays"))
    }
}

impl StorageConfig for FirestoreStorageConfig {
    type Storage = FirestoreStorage;

    fn try_into_storage(self, services: StoreServices) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(
            FirestoreStorage::builder()
                .config(self)
                .transport(HttpTransport::get())
                .services(services)
                .build(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_id_defaults_to_workdays() {
        let config = FirestoreStorageConfig::default();
        assert_eq!(config.get_collection_id(), "workdays");
    }
}
