//! Whole-page interaction flows against the core components

use bookmark_core::catalog::NAVIGATION;
use bookmark_core::effects::MemorySurface;
use bookmark_core::navigation::{DrawerState, Key, MountedHeader, NavigationDrawer};
use bookmark_core::view::{ToggleControl, Viewport, DESKTOP_BREAKPOINT};
use bookmark_core::{ContactForm, EventBus, FeatureSelector, SiteVariant};
use proptest::prelude::*;

#[test]
fn test_hamburger_then_link_follows_href() {
    let config = SiteVariant::Complete.config();
    let bus = EventBus::new();
    let surface = MemorySurface::new();
    let header = MountedHeader::mount(&bus, surface.clone());

    header.open();
    assert_eq!(header.state(), DrawerState::Open);
    assert!(surface.is_locked());

    let view = header.render(Viewport::MOBILE);
    assert!(view.drawer.as_ref().unwrap().visible);

    // "contact", not the login button
    let link = header.select_link(2).unwrap();
    assert!(!link.emphasis);
    assert_eq!(header.state(), DrawerState::Closed);
    assert!(!surface.is_locked());
    assert!(config.follow_links);
    assert_eq!(link.href, "#contact");
}

#[test]
fn test_widening_past_breakpoint_unlocks_page() {
    let bus = EventBus::new();
    let surface = MemorySurface::new();
    let header = MountedHeader::mount(&bus, surface.clone());

    header.open();
    assert!(surface.is_locked());

    bus.resize(Viewport::new(DESKTOP_BREAKPOINT));

    let view = header.render(Viewport::new(DESKTOP_BREAKPOINT));
    assert!(view.toggle.is_none() && view.drawer.is_none());
    assert_eq!(header.state(), DrawerState::Closed);
    assert!(!surface.is_locked());
}

#[test]
fn test_escape_while_closed_is_noop() {
    let bus = EventBus::new();
    let surface = MemorySurface::new();
    let header = MountedHeader::mount(&bus, surface.clone());

    bus.dispatch(Key::Escape);

    assert_eq!(header.state(), DrawerState::Closed);
    assert_eq!(surface.transitions(), 0);
}

#[test]
fn test_components_are_independent() {
    let bus = EventBus::new();
    let header = MountedHeader::mount(&bus, MemorySurface::new());
    let mut features = FeatureSelector::new();
    let mut form = ContactForm::new();

    header.open();
    features.select(2).unwrap();
    form.submit("not-an-email");
    bus.dispatch(Key::Escape);

    assert_eq!(header.state(), DrawerState::Closed);
    assert_eq!(features.selected_index(), 2);
    assert!(form.is_invalid());
}

#[test]
fn test_newsletter_examples() {
    let mut form = ContactForm::new();
    for bad in ["", "not-an-email", "user@domain"] {
        assert!(!form.submit(bad).is_accepted());
        assert!(form.is_invalid());
    }
    assert!(form.submit("user@example.com").is_accepted());
    assert!(!form.is_invalid());
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Open,
    Close,
    Escape,
    OtherKey,
    Link(usize),
    Resize(u32),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Open),
        Just(Action::Close),
        Just(Action::Escape),
        Just(Action::OtherKey),
        (0..NAVIGATION.len()).prop_map(Action::Link),
        (320u32..1920).prop_map(Action::Resize),
    ]
}

proptest! {
    #[test]
    fn prop_render_and_lock_track_latest_call(actions in prop::collection::vec(action(), 0..64)) {
        let surface = MemorySurface::new();
        let mut drawer = NavigationDrawer::new(surface.clone());
        let mut expected = DrawerState::Closed;

        for action in actions {
            match action {
                Action::Open => {
                    drawer.open();
                    expected = DrawerState::Open;
                }
                Action::Close => {
                    drawer.close();
                    expected = DrawerState::Closed;
                }
                Action::Escape => {
                    drawer.handle_key(Key::Escape);
                    expected = DrawerState::Closed;
                }
                Action::OtherKey => {
                    drawer.handle_key(Key::Other);
                }
                Action::Link(index) => {
                    drawer.select_link(index).unwrap();
                    expected = DrawerState::Closed;
                }
                Action::Resize(width) => {
                    drawer.set_viewport(Viewport::new(width));
                    if width >= DESKTOP_BREAKPOINT {
                        expected = DrawerState::Closed;
                    }
                }
            }

            prop_assert_eq!(drawer.state(), expected);
            prop_assert_eq!(surface.is_locked(), expected.is_open());

            let view = drawer.render(Viewport::MOBILE);
            let toggle = view.toggle.unwrap();
            prop_assert_eq!(view.drawer.unwrap().visible, expected.is_open());
            prop_assert_eq!(toggle.expanded, expected.is_open());
            let control = if expected.is_open() { ToggleControl::Close } else { ToggleControl::Hamburger };
            prop_assert_eq!(toggle.control, control);
        }

        drop(drawer);
        prop_assert!(!surface.is_locked());
    }

    #[test]
    fn prop_mount_cycles_never_leak(opens in prop::collection::vec(any::<bool>(), 1..16)) {
        let bus = EventBus::new();
        let surface = MemorySurface::new();

        for open in opens {
            let header = MountedHeader::mount(&bus, surface.clone());
            if open {
                header.open();
            }
            // Escape and resize
            prop_assert_eq!(bus.listener_count(), 2);
            prop_assert_eq!(surface.is_locked(), open);
        }

        prop_assert_eq!(bus.listener_count(), 0);
        prop_assert!(!surface.is_locked());
    }
}
