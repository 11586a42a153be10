//! Document-wide pointer-down observation for dismissing transient UI.
//!
//! The shell element at the root of the app forwards every pointer-down to a
//! [`PointerHub`]. Bounded elements (the search input) call [`PointerHub::enter`]
//! from their own handler, which runs before the event bubbles up to the shell,
//! so by the time the hub dispatches it knows every region the event crossed.
//! Listeners hold a [`Subscription`] that deregisters itself when dropped.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a bounded region of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

/// A completed pointer-down event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerDown {
    regions: Vec<RegionId>,
}

impl PointerDown {
    /// Whether the event target lies inside `region`'s subtree.
    pub fn within(&self, region: RegionId) -> bool {
        self.regions.contains(&region)
    }
}

type Listener = Rc<RefCell<dyn FnMut(&PointerDown)>>;

#[derive(Default)]
struct Registry {
    next_region: u64,
    next_listener: u64,
    listeners: Vec<(u64, Listener)>,
    in_flight: Vec<RegionId>,
}

#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<Registry>>,
}

impl PointerHub {
    /// Allocates a fresh boundary handle.
    pub fn region(&self) -> RegionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_region += 1;
        RegionId(inner.next_region)
    }

    /// Records that the in-flight pointer-down passed through `region`.
    pub fn enter(&self, region: RegionId) {
        let mut inner = self.inner.borrow_mut();
        if !inner.in_flight.contains(&region) {
            inner.in_flight.push(region);
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&PointerDown) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.next_listener += 1;
        let id = inner.next_listener;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        tracing::trace!(listener = id, "pointer-down listener registered");
        Subscription {
            id,
            hub: self.clone(),
        }
    }

    /// Closes the in-flight event and delivers it to every live listener.
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self) -> usize {
        // Snapshot so listeners may subscribe or drop guards while running.
        let (event, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let event = PointerDown {
                regions: std::mem::take(&mut inner.in_flight),
            };
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (event, listeners)
        };
        for listener in &listeners {
            (listener.borrow_mut())(&event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn unsubscribe(&self, id: u64) {
        self.inner.borrow_mut().listeners.retain(|(l, _)| *l != id);
        tracing::trace!(listener = id, "pointer-down listener removed");
    }
}

impl PartialEq for PointerHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Live registration on a [`PointerHub`]. Dropping it removes the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    hub: PointerHub,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
