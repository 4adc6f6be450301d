//! Outside-click handling.
//!
//! The host forwards every document-level click to a [`Document`]. A mounted
//! [`VisibilityController`] holds a [`ListenerGuard`]; dropping the guard
//! unregisters the listener so repeated mount/unmount cycles do not pile up
//! listeners on the document.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::events::{EventSink, MenuEvent};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct DocumentInner {
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<u64, Listener>>,
}

impl DocumentInner {
    fn listeners(&self) -> MutexGuard<'_, BTreeMap<u64, Listener>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Document-level click source owned by the host.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_click_listener<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners().insert(id, Arc::new(listener));
        ListenerGuard {
            document: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver one click to every registered listener.
    pub fn click(&self) {
        // Snapshot so listeners may register or drop guards while running.
        let listeners: Vec<Listener> = self.inner.listeners().values().cloned().collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners().len()
    }
}

/// Registration handle; the listener is removed when this is dropped.
#[must_use = "dropping the guard unregisters the listener"]
pub struct ListenerGuard {
    document: Weak<DocumentInner>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(document) = self.document.upgrade() {
            document.listeners().remove(&self.id);
        }
    }
}

/// Asks the host to hide the menu.
#[derive(Clone)]
pub struct VisibilityController {
    sink: Arc<dyn EventSink>,
}

impl VisibilityController {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    pub fn hide(&self) {
        tracing::trace!(target: "dagmenu.menu", stage = "menu.hide");
        self.sink.emit(MenuEvent::Hide);
    }

    /// Register the outside-click listener. Every document click hides the
    /// menu, including clicks on the menu's own entries.
    pub fn mount(&self, document: &Document) -> ListenerGuard {
        let this = self.clone();
        document.add_click_listener(move || this.hide())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::events::ChannelSink;

    #[test]
    fn test_click_hides_exactly_once() {
        let (sink, mut rx) = ChannelSink::new();
        let document = Document::new();
        let _guard = VisibilityController::new(Arc::new(sink)).mount(&document);

        document.click();

        assert_eq!(rx.try_recv().unwrap(), MenuEvent::Hide);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unmount_releases_listener() {
        let (sink, mut rx) = ChannelSink::new();
        let document = Document::new();
        let controller = VisibilityController::new(Arc::new(sink));

        for _ in 0..3 {
            let guard = controller.mount(&document);
            assert_eq!(document.listener_count(), 1);
            drop(guard);
        }
        assert_eq!(document.listener_count(), 0);

        document.click();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_guard_outliving_document() {
        let (sink, _rx) = ChannelSink::new();
        let document = Document::new();
        let guard = VisibilityController::new(Arc::new(sink)).mount(&document);
        drop(document);
        drop(guard);
    }
}
