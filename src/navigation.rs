//! src/navigation.rs
use std::sync::Mutex;

/// Path every exit of the prompt leads to unless configured otherwise.
pub const HOME_PATH: &str = "/";

/// The router capability: move the user to another page.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<T> Navigator for &T
where
    T: Navigator,
{
    fn navigate_to(&self, path: &str) {
        (**self).navigate_to(path)
    }
}

/// Remembers where the prompt asked to go so a request handler can answer
/// with a redirect once the prompt is done.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    location: Mutex<Option<String>>,
}

impl PendingRedirect {
    pub fn location(&self) -> Option<String> {
        self.location
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for PendingRedirect {
    fn navigate_to(&self, path: &str) {
        tracing::info!(location = %path, "Redirecting");
        *self
            .location
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(path.to_string());
    }
}
