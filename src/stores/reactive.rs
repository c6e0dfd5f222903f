// ============================================================================
// REACTIVE CELL - shared state with change notification
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Subscriber = Rc<dyn Fn()>;
type SubscriberList = RefCell<Vec<(usize, Subscriber)>>;

/// Shared mutable state the stores build on. Every `update` notifies the
/// registered subscribers; subscriptions unregister themselves on drop so a
/// component can come and go without leaking callbacks.
pub struct ReactiveCell<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<SubscriberList>,
    next_id: Rc<Cell<usize>>,
}

impl<T> ReactiveCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Read access through a closure, so no borrow escapes the cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Mutate and notify.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    fn notify(&self) {
        // Snapshot first: a subscriber may subscribe or mutate while running.
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback();
        }
    }

    /// Identity comparison, used by the Yew context machinery.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Handle to a registered subscriber. Dropping it removes the callback.
pub struct Subscription {
    id: usize,
    subscribers: Weak<SubscriberList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
