//! Browser side of the core's page effects
//!
//! [`BodyScroll`] and [`WindowEvents`] are what a mounted header locks and
//! listens to on a real page. During server rendering neither touches
//! anything.

use bookmark_core::navigation::Key;
use bookmark_core::view::Viewport;
use bookmark_core::{PageEvents, ScrollSurface, Subscription};
use leptos::*;

/// The document body. Outside the browser this does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn disable_scroll(&self) {
        set_overflow(Some("hidden"));
    }

    fn enable_scroll(&self) {
        set_overflow(None);
    }
}

#[cfg(feature = "hydrate")]
fn set_overflow(value: Option<&str>) {
    let Some(body) = document().body() else {
        return;
    };

    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(err) = result {
        tracing::warn!(?err, "Could not update body overflow");
    }
}

#[cfg(not(feature = "hydrate"))]
fn set_overflow(_value: Option<&str>) {}

/// `keydown` and `resize` on the window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvents;

impl PageEvents for WindowEvents {
    fn on_key(&self, handler: impl Fn(Key) + 'static) -> Subscription {
        let handle = window_event_listener(ev::keydown, move |ev| {
            handler(Key::from_key(&ev.key()));
        });
        Subscription::new(move || handle.remove())
    }

    fn on_resize(&self, handler: impl Fn(Viewport) + 'static) -> Subscription {
        let handle = window_event_listener(ev::resize, move |_| {
            let width = window().inner_width().ok().and_then(|width| width.as_f64());
            match width {
                Some(width) => handler(Viewport::new(width as u32)),
                None => tracing::warn!("Window width unavailable"),
            }
        });
        Subscription::new(move || handle.remove())
    }
}
