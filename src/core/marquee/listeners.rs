//! Listener ownership for the marquee.
//!
//! Every subscription the controller makes is an owned [`Listener`]; dropping
//! it detaches the subscription. The controller keeps them in a [`ListenerSet`]
//! and clears the set before every rebuild, so subscriptions never pile up.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Environmental events the marquee subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Viewport resize (window).
    Resize,
    /// Page visibility change (document).
    Visibility,
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Track,
    Window,
    Document,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 6] = [
        ListenerKind::PointerEnter,
        ListenerKind::PointerLeave,
        ListenerKind::TouchStart,
        ListenerKind::TouchEnd,
        ListenerKind::Resize,
        ListenerKind::Visibility,
    ];

    pub fn target(self) -> ListenerTarget {
        match self {
            ListenerKind::Resize => ListenerTarget::Window,
            ListenerKind::Visibility => ListenerTarget::Document,
            ListenerKind::PointerEnter
            | ListenerKind::PointerLeave
            | ListenerKind::TouchStart
            | ListenerKind::TouchEnd => ListenerTarget::Track,
        }
    }
}

/// An attached subscription. Detaches when dropped.
pub struct Listener {
    kind: ListenerKind,
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    pub fn new(kind: ListenerKind, dispose: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("kind", &self.kind).finish()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

/// All listeners owned by one controller.
#[derive(Debug, Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    /// Attach a listener, replacing any previous one of the same kind.
    pub fn attach(&mut self, listener: Listener) {
        let kind = listener.kind();
        self.listeners.retain(|existing| existing.kind() != kind);
        self.listeners.push(listener);
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|listener| listener.kind() == kind)
    }

    pub fn dispose_all(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Host-side record of which listener kinds are currently attached.
///
/// Hosts hand out listeners from here and consult it before delivering an
/// event, so a disposed listener stops receiving events immediately.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<RefCell<HashMap<ListenerKind, usize>>>,
}

impl ListenerRegistry {
    pub fn register(&self, kind: ListenerKind) -> Listener {
        *self.active.borrow_mut().entry(kind).or_insert(0) += 1;
        let active = self.active.clone();
        Listener::new(kind, move || {
            let mut active = active.borrow_mut();
            if let Some(count) = active.get_mut(&kind) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    active.remove(&kind);
                }
            }
        })
    }

    pub fn count(&self, kind: ListenerKind) -> usize {
        self.active.borrow().get(&kind).copied().unwrap_or(0)
    }

    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.count(kind) > 0
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.active.borrow().values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_detaches() {
        let registry = ListenerRegistry::default();
        let listener = registry.register(ListenerKind::Resize);
        assert_eq!(registry.count(ListenerKind::Resize), 1);
        drop(listener);
        assert!(!registry.is_active(ListenerKind::Resize));
    }

    #[test]
    fn test_attach_replaces_same_kind() {
        let registry = ListenerRegistry::default();
        let mut set = ListenerSet::default();
        set.attach(registry.register(ListenerKind::PointerEnter));
        set.attach(registry.register(ListenerKind::PointerEnter));
        assert_eq!(set.len(), 1);
        assert_eq!(registry.count(ListenerKind::PointerEnter), 1);
    }

    #[test]
    fn test_dispose_all_clears_registry() {
        let registry = ListenerRegistry::default();
        let mut set = ListenerSet::default();
        for kind in ListenerKind::ALL {
            set.attach(registry.register(kind));
        }
        assert_eq!(registry.total(), ListenerKind::ALL.len());
        set.dispose_all();
        assert!(set.is_empty());
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn test_targets() {
        assert_eq!(ListenerKind::Resize.target(), ListenerTarget::Window);
        assert_eq!(ListenerKind::Visibility.target(), ListenerTarget::Document);
        assert_eq!(ListenerKind::TouchEnd.target(), ListenerTarget::Track);
    }
}
