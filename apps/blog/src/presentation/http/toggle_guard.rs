use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Post ids with a like toggle in flight. A second toggle for the same post
/// is refused until the first one has been confirmed or rolled back.
#[derive(Clone, Default)]
pub struct PendingToggles {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl PendingToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when a toggle for `post_id` is already pending.
    pub fn try_acquire(&self, post_id: &str) -> Option<ToggleGuard> {
        let mut pending = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        if !pending.insert(post_id.to_string()) {
            return None;
        }
        Some(ToggleGuard {
            pending: self.inner.clone(),
            post_id: post_id.to_string(),
        })
    }

    pub fn is_pending(&self, post_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains(post_id)
    }
}

/// Releases the post when dropped, including when the handler future is
/// dropped mid-flight.
pub struct ToggleGuard {
    pending: Arc<Mutex<HashSet<String>>>,
    post_id: String,
}

impl Drop for ToggleGuard {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&self.post_id);
    }
}
