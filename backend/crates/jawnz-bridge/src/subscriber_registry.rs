use crate::SubscriberId;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

/// Set of attached subscribers.
///
/// Uses a blocking mutex: every critical section is a single set operation and
/// must be callable from `Drop`.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    inner: Arc<Mutex<HashSet<SubscriberId>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, subscriber_id: SubscriberId) {
        let mut subscribers = self.lock();
        subscribers.insert(subscriber_id);
        debug!(
            "Registered subscriber {subscriber_id} ({} total)",
            subscribers.len()
        );
    }

    /// Returns false when the subscriber was already gone (e.g. after `clear`)
    pub fn unregister(&self, subscriber_id: SubscriberId) -> bool {
        let mut subscribers = self.lock();
        let removed = subscribers.remove(&subscriber_id);
        if removed {
            debug!(
                "Unregistered subscriber {subscriber_id} ({} remaining)",
                subscribers.len()
            );
        }
        removed
    }

    pub fn contains(&self, subscriber_id: SubscriberId) -> bool {
        self.lock().contains(&subscriber_id)
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Remove everyone, returning how many were attached
    pub fn clear(&self) -> usize {
        let mut subscribers = self.lock();
        let count = subscribers.len();
        subscribers.clear();
        count
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<SubscriberId>> {
        // A panic elsewhere cannot leave a HashSet half-updated
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
