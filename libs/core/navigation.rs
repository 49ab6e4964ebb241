use std::sync::Arc;

use derive_more::Deref;

pub trait INavigator: Send + Sync {
    /// Request an immediate transition to the given page; failures are the
    /// router's concern.
    fn navigate(&self, page: &str);
}

#[derive(Deref, Clone)]
#[deref(forward)]
pub struct Navigator(Arc<dyn INavigator>);

impl Navigator {
    pub fn new(navigator: impl INavigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn from_arc(navigator: Arc<impl INavigator + 'static>) -> Self {
        Self(navigator)
    }
}

/// Banner of the public home page; its only job is to hand the clicked
/// destination to the router.
pub struct HomeBanner {
    navigator: Navigator,
    pub login_path: String,
}

impl HomeBanner {
    pub fn new(navigator: Navigator) -> Self {
        HomeBanner {
            navigator,
            login_path: "login".to_string(),
        }
    }

    pub fn navigate(&self, page: &str) {
        self.navigator.navigate(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        pages: Mutex<Vec<String>>,
    }

    impl INavigator for RecordingNavigator {
        fn navigate(&self, page: &str) {
            self.pages.lock().unwrap().push(page.to_string());
        }
    }

    #[test]
    fn banner_forwards_the_destination() {
        let recorder = Arc::new(RecordingNavigator::default());
        let banner = HomeBanner::new(Navigator::from_arc(recorder.clone()));

        banner.navigate(&banner.login_path);

        assert_eq!(*recorder.pages.lock().unwrap(), vec!["login"]);
    }
}
