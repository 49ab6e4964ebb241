mod codec;
mod config;
mod storage;

pub mod query;
pub mod transport;
pub mod wire;

pub use codec::{decode_workday, encode_workday, workday_id_from_resource_name, DocumentBody};
pub use config::FirestoreStorageConfig;
pub use storage::FirestoreStorage;
