//! Transient toast notifications with timed auto-dismissal.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::state::{Store, Subscription};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Error,
    Success,
    Warning,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Error => "error",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    /// Zero means the toast stays until removed.
    pub duration: Duration,
}

/// Source of toast identifiers.
pub trait ToastIds: Send + Sync {
    fn next_id(&self) -> String;
}

/// Monotonic ids: `t1`, `t2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds(AtomicU64);

impl ToastIds for SequentialIds {
    fn next_id(&self) -> String {
        format!("t{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Random base36 ids backed by OS randomness.
#[derive(Debug, Default)]
pub struct RandomIds;

impl ToastIds for RandomIds {
    fn next_id(&self) -> String {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_err() {
            // Clock fallback.
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            bytes = nanos.to_le_bytes();
        }
        to_base36(u64::from_le_bytes(bytes))
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Ordered list of active toasts.
#[derive(Clone)]
pub struct Toasts {
    list: Store<Vec<Toast>>,
    ids: Arc<dyn ToastIds>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_ids(SequentialIds::default())
    }
}

impl fmt::Debug for Toasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toasts").field("list", &self.list).finish()
    }
}

impl Toasts {
    pub fn with_ids(ids: impl ToastIds + 'static) -> Self {
        Self {
            list: Store::new(Vec::new()),
            ids: Arc::new(ids),
        }
    }

    /// Appends a toast and, for a non-zero duration, schedules its removal.
    pub fn popup(&self, kind: ToastKind, message: impl Into<String>, duration: Duration) -> String {
        let toast = Toast {
            id: self.ids.next_id(),
            kind,
            message: message.into(),
            duration,
        };
        let id = toast.id.clone();
        tracing::debug!(id = %id, kind = kind.as_str(), "toast");
        self.list.update(|list| list.push(toast));

        if !duration.is_zero() {
            let list = self.list.clone();
            let expired = id.clone();
            std::thread::spawn(move || {
                std::thread::sleep(duration);
                remove_from(&list, &expired);
            });
        }
        id
    }

    pub fn popup_default(&self, kind: ToastKind, message: impl Into<String>) -> String {
        self.popup(kind, message, DEFAULT_TOAST_DURATION)
    }

    pub fn remove(&self, id: &str) {
        remove_from(&self.list, id);
    }

    pub fn list(&self) -> Vec<Toast> {
        self.list.get()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.with(|l| l.iter().any(|t| t.id == id))
    }

    /// Takes every active toast, leaving the list empty.
    pub fn drain(&self) -> Vec<Toast> {
        self.list.update(std::mem::take)
    }

    pub fn subscribe(&self, f: impl Fn(&Vec<Toast>) + Send + Sync + 'static) -> Subscription {
        self.list.subscribe(f)
    }
}

fn remove_from(list: &Store<Vec<Toast>>, id: &str) {
    list.update(|l| l.retain(|t| t.id != id));
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
