use std::sync::Arc;

use derive_more::Deref;

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct Loader(Arc<dyn ILoader>);

impl Loader {
    pub fn new(loader: impl ILoader + 'static) -> Self {
        Self(Arc::new(loader))
    }

    pub fn from_arc(loader: Arc<impl ILoader + 'static>) -> Self {
        Self(loader)
    }

    /// Raise the loading flag; the returned guard lowers it on drop, error
    /// paths included.
    pub fn begin(&self) -> LoadingGuard {
        self.set_loading(true);
        LoadingGuard {
            loader: self.clone(),
        }
    }
}

pub trait ILoader: Send + Sync {
    fn set_loading(&self, loading: bool);
}

pub struct LoadingGuard {
    loader: Loader,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loader.set_loading(false);
    }
}
