use crate::services::CoreServices;
use crate::{config, Core};
use workdays_store_core::{MemoryStorageConfig, StorageConfig, StoreServices};
use workdays_store_firestore::FirestoreStorageConfig;

#[derive(Clone, Debug)]
pub enum BuiltinStorageType {
    Firestore,
    InMemory,
}

pub async fn load(
    storage_type: BuiltinStorageType,
    config_path: &str,
    store_services: StoreServices,
    core_services: CoreServices,
) -> eyre::Result<Core> {
    match storage_type {
        BuiltinStorageType::Firestore => {
            load_core::<FirestoreStorageConfig>(config_path, store_services, core_services).await
        }
        BuiltinStorageType::InMemory => {
            load_core::<MemoryStorageConfig>(config_path, store_services, core_services).await
        }
    }
}

pub async fn load_core<SC>(
    config_path: &str,
    store_services: StoreServices,
    core_services: CoreServices,
) -> eyre::Result<Core>
where
    SC: StorageConfig,
{
    let mut found_config_file = Ok(());
    let config = match config::get_config_from_path::<SC>(config_path).await {
        Ok(v) => v,
        Err(e) => {
            found_config_file = Err(e);
            config::get_default_storage_config::<SC>()
        }
    };

    let storage = config.storage.try_into_storage(store_services)?;

    Ok(Core {
        storage,
        notifier: core_services.notifier,
        error_handler: core_services.error_handler,
        loader: core_services.loader,
        found_config_file,
    })
}
