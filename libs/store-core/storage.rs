use crate::{PinFuture, StoreResult, Workday};
use derive_more::{Deref, DerefMut};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StorageBox(pub Box<dyn Storage>);

impl StorageBox {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self(Box::new(storage))
    }
}

pub trait Storage: Send + Sync {
    /// Create the workday document; the store assigns a fresh identifier,
    /// so saving twice creates two documents
    fn save_workday(&self, workday: Workday) -> PinFuture<StoreResult<()>>;

    /// Fetch the single workday matching this display date and owner.
    /// `None` means no match, which is not an error.
    fn get_workday_by_date(
        &self,
        display_date: String,
        user_id: String,
    ) -> PinFuture<StoreResult<Option<Workday>>>;
}
