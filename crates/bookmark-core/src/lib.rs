//! Bookmark Landing Page Core
//!
//! This crate holds everything on the landing page that is not markup: the
//! fixed content catalogs, the small UI state machines (navigation drawer,
//! feature tabs, FAQ accordion, newsletter form), the scoped global effects
//! they drive, and the `render` functions that turn state into plain view
//! descriptions for the presentation layer.

pub mod catalog;
pub mod contact;
pub mod effects;
pub mod faq;
pub mod features;
pub mod navigation;
pub mod variant;
pub mod view;

use thiserror::Error;

pub use catalog::{
    Catalog, ExtensionEntry, FaqEntry, FeatureEntry, Image, NavLink, SocialLink,
};
pub use contact::{ContactForm, NewsletterHandoff, NoopHandoff, Signup, Submission};
pub use effects::{
    EventBus, MemorySurface, PageEvents, ScrollLock, ScrollSurface, Subscription,
};
pub use faq::FaqAccordion;
pub use features::FeatureSelector;
pub use navigation::{DrawerState, Key, MountedHeader, NavigationDrawer};
pub use variant::{PageConfig, Section, SiteVariant};
pub use view::Viewport;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid argument: {what} index {index} is outside 0..{len}")]
    InvalidArgument {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown site variant: {0}")]
    UnknownVariant(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Bounds-check an index coming from outside a component.
pub(crate) fn check_index(what: &'static str, index: usize, len: usize) -> CoreResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::InvalidArgument { what, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index("tab", 2, 3).is_ok());
        assert_eq!(
            check_index("tab", 3, 3),
            Err(CoreError::InvalidArgument {
                what: "tab",
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidArgument {
            what: "feature",
            index: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument: feature index 7 is outside 0..3"
        );
    }
}
