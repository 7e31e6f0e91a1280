//! Scoped global effects
//!
//! The drawer touches two pieces of page-global state: the document's scroll
//! behaviour and the window-level key and resize listeners. Both are modelled as
//! guards that undo their effect on `Drop`, so an exit path cannot forget
//! the release.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::navigation::Key;
use crate::view::Viewport;

/// Something whose scrolling can be switched off, usually the page body
pub trait ScrollSurface {
    fn disable_scroll(&self);
    fn enable_scroll(&self);
}

/// Holds the surface unscrollable for as long as it lives
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        debug!("Scroll lock engaged");
        surface.disable_scroll();
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        debug!("Scroll lock released");
        self.surface.enable_scroll();
    }
}

impl<S: ScrollSurface> fmt::Debug for ScrollLock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock").finish_non_exhaustive()
    }
}

/// In-memory surface that records lock state, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    locked: Rc<Cell<bool>>,
    transitions: Rc<Cell<usize>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Number of lock and unlock calls seen so far
    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }
}

impl ScrollSurface for MemorySurface {
    fn disable_scroll(&self) {
        self.locked.set(true);
        self.transitions.set(self.transitions.get() + 1);
    }

    fn enable_scroll(&self) {
        self.locked.set(false);
        self.transitions.set(self.transitions.get() + 1);
    }
}

/// A live event subscription; dropping it unsubscribes
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release now instead of at end of scope
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Page-global events a mounted component can listen to
///
/// Implemented by the browser window in the site crate and by [`EventBus`]
/// in tests. Each subscription stays live until the returned guard drops.
pub trait PageEvents {
    fn on_key(&self, handler: impl Fn(Key) + 'static) -> Subscription;
    fn on_resize(&self, handler: impl Fn(Viewport) + 'static) -> Subscription;
}

type KeyHandler = Rc<dyn Fn(Key)>;
type ResizeHandler = Rc<dyn Fn(Viewport)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    keys: Vec<(u64, KeyHandler)>,
    resizes: Vec<(u64, ResizeHandler)>,
}

impl BusInner {
    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory page event source
///
/// Stands in for the window's `keydown` and `resize` listener lists so
/// listener lifetimes can be observed.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a key press to every live key listener
    pub fn dispatch(&self, key: Key) {
        // Snapshot first so handlers may subscribe or unsubscribe.
        let handlers: Vec<KeyHandler> = self
            .inner
            .borrow()
            .keys
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(key);
        }
    }

    /// Deliver a viewport change to every live resize listener
    pub fn resize(&self, viewport: Viewport) {
        let handlers: Vec<ResizeHandler> = self
            .inner
            .borrow()
            .resizes
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(viewport);
        }
    }

    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.keys.len() + inner.resizes.len()
    }

    fn release(&self, id: u64) -> Subscription {
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.borrow_mut();
                inner.keys.retain(|(other, _)| *other != id);
                inner.resizes.retain(|(other, _)| *other != id);
                trace!(id, "Listener removed");
            }
        })
    }
}

impl PageEvents for EventBus {
    fn on_key(&self, handler: impl Fn(Key) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.keys.push((id, Rc::new(handler)));
            id
        };
        trace!(id, "Key listener attached");
        self.release(id)
    }

    fn on_resize(&self, handler: impl Fn(Viewport) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.resizes.push((id, Rc::new(handler)));
            id
        };
        trace!(id, "Resize listener attached");
        self.release(id)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
