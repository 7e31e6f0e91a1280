//! Header navigation drawer
//!
//! Two states, `Closed` and `Open`. Entering `Open` locks page scrolling;
//! every way out of `Open` (close control, link selection, Escape, growing
//! past the desktop breakpoint, teardown) releases it because the lock is a
//! guard owned by the state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, NavLink, SocialLink, NAVIGATION, SOCIAL};
use crate::effects::{PageEvents, ScrollLock, ScrollSurface, Subscription};
use crate::view::{HeaderView, Layout, Viewport};
use crate::{check_index, CoreResult};

/// Keys the page cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Older browsers report `Esc`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }
}

/// Navigation drawer state machine bound to a scroll surface
pub struct NavigationDrawer<S: ScrollSurface + Clone> {
    state: DrawerState,
    surface: S,
    lock: Option<ScrollLock<S>>,
    links: Catalog<NavLink>,
    social: Catalog<SocialLink>,
}

impl<S: ScrollSurface + Clone> NavigationDrawer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_links(surface, NAVIGATION, SOCIAL)
    }

    pub fn with_links(surface: S, links: Catalog<NavLink>, social: Catalog<SocialLink>) -> Self {
        Self {
            state: DrawerState::Closed,
            surface,
            lock: None,
            links,
            social,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn links(&self) -> Catalog<NavLink> {
        self.links
    }

    pub fn social(&self) -> Catalog<SocialLink> {
        self.social
    }

    /// Hamburger control
    pub fn open(&mut self) {
        if self.state == DrawerState::Open {
            return;
        }
        debug!("Navigation drawer opened");
        self.state = DrawerState::Open;
        self.lock = Some(ScrollLock::acquire(self.surface.clone()));
    }

    /// Close control
    pub fn close(&mut self) {
        if self.state == DrawerState::Closed {
            return;
        }
        debug!("Navigation drawer closed");
        self.state = DrawerState::Closed;
        self.lock = None;
    }

    /// Global key press; only Escape while open does anything.
    /// Returns whether the state changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// A navigation link was activated. Closes the drawer and hands back
    /// the link so the caller can follow its href.
    pub fn select_link(&mut self, index: usize) -> CoreResult<&'static NavLink> {
        check_index("navigation link", index, self.links.len())?;
        self.close();
        let link = &self.links.entries()[index];
        debug!(href = link.href, "Navigation link selected");
        Ok(link)
    }

    /// The viewport changed. The drawer only exists below the desktop
    /// breakpoint, so crossing it closes the drawer.
    /// Returns whether the state changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport.layout() == Layout::Desktop && self.is_open() {
            debug!(width = viewport.width, "Desktop layout, closing drawer");
            self.close();
            true
        } else {
            false
        }
    }

    /// Component is going away
    pub fn teardown(&mut self) {
        self.close();
    }

    pub fn render(&self, viewport: Viewport) -> HeaderView {
        HeaderView::new(self.state, viewport, self.links, self.social)
    }
}

type Observer = Rc<dyn Fn(DrawerState)>;

struct HeaderInner<S: ScrollSurface + Clone> {
    drawer: RefCell<NavigationDrawer<S>>,
    observer: RefCell<Option<Observer>>,
}

impl<S: ScrollSurface + Clone> HeaderInner<S> {
    /// Run a transition, then tell the observer if the state moved. The
    /// drawer borrow ends before the observer runs so it may render.
    fn apply<R>(&self, f: impl FnOnce(&mut NavigationDrawer<S>) -> R) -> R {
        let (result, before, after) = {
            let mut drawer = self.drawer.borrow_mut();
            let before = drawer.state();
            let result = f(&mut drawer);
            (result, before, drawer.state())
        };
        if before != after {
            let observer = self.observer.borrow().clone();
            if let Some(observer) = observer {
                observer(after);
            }
        }
        result
    }
}

/// A header mounted on a page: the drawer plus its window-level Escape and
/// resize listeners. Dropping it tears all of them down.
pub struct MountedHeader<S: ScrollSurface + Clone + 'static> {
    inner: Rc<HeaderInner<S>>,
    _keys: Subscription,
    _resize: Subscription,
}

impl<S: ScrollSurface + Clone + 'static> MountedHeader<S> {
    pub fn mount(events: &impl PageEvents, surface: S) -> Self {
        Self::mount_with_links(events, surface, NAVIGATION, SOCIAL)
    }

    pub fn mount_with_links(
        events: &impl PageEvents,
        surface: S,
        links: Catalog<NavLink>,
        social: Catalog<SocialLink>,
    ) -> Self {
        let inner = Rc::new(HeaderInner {
            drawer: RefCell::new(NavigationDrawer::with_links(surface, links, social)),
            observer: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let keys = events.on_key(move |key| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(|drawer| drawer.handle_key(key));
            }
        });
        let weak = Rc::downgrade(&inner);
        let resize = events.on_resize(move |viewport| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(|drawer| drawer.set_viewport(viewport));
            }
        });
        debug!("Header mounted");

        Self {
            inner,
            _keys: keys,
            _resize: resize,
        }
    }

    /// Called with the new state after every transition, whatever caused it
    pub fn observe(&self, observer: impl Fn(DrawerState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn open(&self) {
        self.inner.apply(|drawer| drawer.open());
    }

    pub fn close(&self) {
        self.inner.apply(|drawer| drawer.close());
    }

    pub fn select_link(&self, index: usize) -> CoreResult<&'static NavLink> {
        self.inner.apply(|drawer| drawer.select_link(index))
    }

    pub fn state(&self) -> DrawerState {
        self.inner.drawer.borrow().state()
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.drawer.borrow().scroll_locked()
    }

    pub fn render(&self, viewport: Viewport) -> HeaderView {
        self.inner.drawer.borrow().render(viewport)
    }

    /// Explicit unmount; same as dropping
    pub fn unmount(self) {}
}

impl<S: ScrollSurface + Clone + 'static> Drop for MountedHeader<S> {
    fn drop(&mut self) {
        // Nobody is listening once the component is gone.
        self.inner.observer.borrow_mut().take();
        self.inner.drawer.borrow_mut().teardown();
        debug!("Header unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EventBus, MemorySurface};
    use crate::view::DESKTOP_BREAKPOINT;
    use crate::CoreError;
    use std::cell::Cell;

    fn drawer() -> (NavigationDrawer<MemorySurface>, MemorySurface) {
        let surface = MemorySurface::new();
        (NavigationDrawer::new(surface.clone()), surface)
    }

    #[test]
    fn test_starts_closed() {
        let (drawer, surface) = drawer();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(!drawer.scroll_locked());
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_open_locks_close_unlocks() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        assert!(drawer.is_open());
        assert!(surface.is_locked());

        drawer.close();
        assert!(!drawer.is_open());
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        drawer.close();
        let transitions = surface.transitions();
        drawer.close();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert_eq!(surface.transitions(), transitions);
    }

    #[test]
    fn test_open_twice_locks_once() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        drawer.open();
        assert_eq!(surface.transitions(), 1);
        drawer.close();
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let (mut drawer, surface) = drawer();
        assert!(!drawer.handle_key(Key::Escape));
        assert_eq!(surface.transitions(), 0);

        drawer.open();
        assert!(!drawer.handle_key(Key::Other));
        assert!(drawer.is_open());
        assert!(drawer.handle_key(Key::Escape));
        assert!(!drawer.is_open());
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_select_link_closes_and_returns_href() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        let link = drawer.select_link(0).unwrap();
        assert_eq!(link.href, "#features");
        assert!(!drawer.is_open());
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_select_link_out_of_range() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        let err = drawer.select_link(9).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { index: 9, .. }));
        // A rejected selection leaves the drawer alone.
        assert!(drawer.is_open());
        assert!(surface.is_locked());
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        drop(drawer);
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_key_from_key() {
        assert_eq!(Key::from_key("Escape"), Key::Escape);
        assert_eq!(Key::from_key("Esc"), Key::Escape);
        assert_eq!(Key::from_key("e"), Key::Other);
        assert_eq!(Key::from_key("Enter"), Key::Other);
    }

    #[test]
    fn test_desktop_viewport_closes_open_drawer() {
        let (mut drawer, surface) = drawer();
        drawer.open();

        assert!(drawer.set_viewport(Viewport::DESKTOP));
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(!surface.is_locked());

        let view = drawer.render(Viewport::DESKTOP);
        assert!(view.toggle.is_none());
        assert!(view.drawer.is_none());
    }

    #[test]
    fn test_mobile_viewport_keeps_drawer_open() {
        let (mut drawer, surface) = drawer();
        drawer.open();
        assert!(!drawer.set_viewport(Viewport::new(DESKTOP_BREAKPOINT - 1)));
        assert!(drawer.is_open());
        assert!(surface.is_locked());

        assert!(drawer.set_viewport(Viewport::new(DESKTOP_BREAKPOINT)));
        assert!(!drawer.set_viewport(Viewport::DESKTOP));
        assert_eq!(surface.transitions(), 2);
    }

    #[test]
    fn test_mounted_header_escape() {
        let bus = EventBus::new();
        let surface = MemorySurface::new();
        let header = MountedHeader::mount(&bus, surface.clone());

        header.open();
        bus.dispatch(Key::Escape);
        assert_eq!(header.state(), DrawerState::Closed);
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_mounted_header_resize_to_desktop() {
        let bus = EventBus::new();
        let surface = MemorySurface::new();
        let header = MountedHeader::mount(&bus, surface.clone());

        header.open();
        bus.resize(Viewport::MOBILE);
        assert!(header.scroll_locked());

        bus.resize(Viewport::DESKTOP);
        assert_eq!(header.state(), DrawerState::Closed);
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_observer_sees_every_transition() {
        let bus = EventBus::new();
        let header = MountedHeader::mount(&bus, MemorySurface::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        header.observe(move |state| sink.borrow_mut().push(state));

        header.open();
        header.open();
        bus.dispatch(Key::Escape);
        header.open();
        bus.resize(Viewport::DESKTOP);
        header.open();
        header.select_link(0).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                DrawerState::Open,
                DrawerState::Closed,
                DrawerState::Open,
                DrawerState::Closed,
                DrawerState::Open,
                DrawerState::Closed,
            ]
        );
    }

    #[test]
    fn test_observer_may_render_during_notification() {
        let bus = EventBus::new();
        let header = Rc::new(MountedHeader::mount(&bus, MemorySurface::new()));
        let rendered = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&header);
        let count = Rc::clone(&rendered);
        header.observe(move |_| {
            if let Some(header) = weak.upgrade() {
                header.render(Viewport::MOBILE);
                count.set(count.get() + 1);
            }
        });

        header.open();
        bus.dispatch(Key::Escape);
        assert_eq!(rendered.get(), 2);
    }

    #[test]
    fn test_unmount_is_silent() {
        let bus = EventBus::new();
        let header = MountedHeader::mount(&bus, MemorySurface::new());
        let calls = Rc::new(Cell::new(0));
        let count = Rc::clone(&calls);
        header.observe(move |_| count.set(count.get() + 1));

        header.open();
        header.unmount();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unmount_while_open_releases_everything() {
        let bus = EventBus::new();
        let surface = MemorySurface::new();
        let header = MountedHeader::mount(&bus, surface.clone());
        assert_eq!(bus.listener_count(), 2);

        header.open();
        header.unmount();

        assert_eq!(bus.listener_count(), 0);
        assert!(!surface.is_locked());
    }

    #[test]
    fn test_remount_cycles_do_not_leak() {
        let bus = EventBus::new();
        let surface = MemorySurface::new();
        for round in 0..5 {
            let header = MountedHeader::mount(&bus, surface.clone());
            if round % 2 == 0 {
                header.open();
            }
            assert_eq!(bus.listener_count(), 2);
            assert_eq!(surface.is_locked(), header.state().is_open());
        }
        assert_eq!(bus.listener_count(), 0);
        assert!(!surface.is_locked());
    }
}
