use std::sync::Arc;

use derive_more::Deref;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastCategory {
    Success,
    Info,
    Error,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub category: ToastCategory,
    pub message: String,
}

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct Notifier(Arc<dyn INotifier>);

impl Notifier {
    pub fn new(notifier: impl INotifier + 'static) -> Self {
        Self(Arc::new(notifier))
    }

    pub fn from_arc(notifier: Arc<impl INotifier + 'static>) -> Self {
        Self(notifier)
    }
}

pub trait INotifier: Send + Sync {
    /// Present a toast to the user; rendering is the frontend's concern.
    fn show_toast(&self, toast: Toast);
}
