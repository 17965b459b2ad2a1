//! Document-level listeners as an owned, scoped resource.
//!
//! While a drag is in progress the pointer may leave the control's own
//! bounds, so move/up events must be observed at document level. A
//! `ListenerGuard` is acquired when a gesture session opens and detaches
//! the listeners when dropped, whichever way the session ends.

use std::fmt;
use std::sync::Arc;

/// Opaque id handed out by a [`ListenerHost`] for one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// Something that can register document-level move/up listeners.
pub trait ListenerHost: Send + Sync + fmt::Debug {
    /// Register move and release listeners, returning a token for removal.
    fn attach(&self) -> ListenerToken;

    /// Remove the listeners registered under `token`.
    fn detach(&self, token: ListenerToken);
}

/// Detaches its listeners on drop.
pub struct ListenerGuard {
    host: Arc<dyn ListenerHost>,
    token: ListenerToken,
}

impl ListenerGuard {
    pub fn acquire(host: Arc<dyn ListenerHost>) -> Self {
        let token = host.attach();
        tracing::trace!(token = token.0, "document listeners attached");
        Self { host, token }
    }

    pub fn token(&self) -> ListenerToken {
        self.token
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.host.detach(self.token);
        tracing::trace!(token = self.token.0, "document listeners detached");
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("token", &self.token)
            .finish()
    }
}

/// In-memory listener host that counts live attachments.
#[derive(Debug, Default)]
pub struct CountingListenerHost {
    next: std::sync::atomic::AtomicU64,
    live: std::sync::Mutex<Vec<ListenerToken>>,
}

impl CountingListenerHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of attachments not yet detached.
    pub fn live(&self) -> usize {
        self.live.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Total attachments ever made.
    pub fn attached_total(&self) -> u64 {
        self.next.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl ListenerHost for CountingListenerHost {
    fn attach(&self) -> ListenerToken {
        let id = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let token = ListenerToken(id);
        self.live
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(token);
        token
    }

    fn detach(&self, token: ListenerToken) {
        self.live
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|t| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_detaches_on_drop() {
        let host = CountingListenerHost::new();
        {
            let _guard = ListenerGuard::acquire(host.clone());
            assert_eq!(host.live(), 1);
        }
        assert_eq!(host.live(), 0);
        assert_eq!(host.attached_total(), 1);
    }

    #[test]
    fn guards_get_distinct_tokens() {
        let host = CountingListenerHost::new();
        let a = ListenerGuard::acquire(host.clone());
        let b = ListenerGuard::acquire(host.clone());
        assert_ne!(a.token(), b.token());
        drop(a);
        assert_eq!(host.live(), 1);
        drop(b);
        assert_eq!(host.live(), 0);
    }
}
