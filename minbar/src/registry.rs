use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A callback attached to an element for one event kind.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Maps (element id, event name) to a handler. Widgets register handlers
/// while building their elements each frame; the event loop clears the
/// registry before every rebuild so stale ids never fire.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler for the element event, if one is registered.
    /// Returns true when a handler fired.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispatch_runs_the_registered_handler() {
        let registry = HandlerRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        registry.register(
            "row-3",
            "on_activate",
            Arc::new(move || {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(registry.dispatch("row-3", "on_activate"));
        assert!(!registry.dispatch("row-3", "on_click"));
        assert!(!registry.dispatch("row-9", "on_activate"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let registry = HandlerRegistry::new();
        registry.register("a", "on_activate", Arc::new(|| {}));
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.dispatch("a", "on_activate"));
    }
}
