//! Shared, observable value containers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(u64, Subscriber<T>)>>,
    next_subscriber: AtomicU64,
}

/// A cloneable handle to a shared value. Clones observe the same value.
///
/// Reads go through [`Store::get`] or [`Store::with`]; writes replace the value
/// or mutate it in place, then notify subscribers with no lock held.
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.inner.value.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("Store").field("value", &*value).finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber: AtomicU64::new(1),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.inner.value.read().unwrap_or_else(|e| e.into_inner());
        f(&value)
    }

    pub fn set(&self, value: T) {
        {
            let mut slot = self.inner.value.write().unwrap_or_else(|e| e.into_inner());
            *slot = value;
        }
        self.notify();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = {
            let mut slot = self.inner.value.write().unwrap_or_else(|e| e.into_inner());
            f(&mut slot)
        };
        self.notify();
        out
    }

    /// Registers `f` for change notifications. The callback is not invoked for
    /// the current value; call [`Store::get`] for that.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, Arc::new(f)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .subscribers
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, s)| Arc::clone(s))
            .collect();
        if subscribers.is_empty() {
            return;
        }
        let value = self.get();
        for s in subscribers {
            s(&value);
        }
    }
}

/// Keeps a subscription alive; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Leaves the subscription registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

#[cfg(test)]
#[path = "../tests/state/reactive_tests.rs"]
mod tests;
