//! View descriptions
//!
//! Plain data produced by each component's `render`. The presentation layer
//! draws these; nothing here knows about markup or CSS.

use serde::Serialize;

use crate::catalog::{Catalog, ExtensionEntry, NavLink, SocialLink};
use crate::navigation::DrawerState;

/// Viewport width (px) at which the desktop navigation takes over
pub const DESKTOP_BREAKPOINT: u32 = 768;

pub const OPEN_MENU_LABEL: &str = "Open Menu";
pub const CLOSE_MENU_LABEL: &str = "Close Menu";
pub const LOGO_LABEL: &str = "Bookmark Logo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const MOBILE: Viewport = Viewport { width: 375 };
    pub const DESKTOP: Viewport = Viewport { width: 1440 };

    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn layout(&self) -> Layout {
        if self.width < DESKTOP_BREAKPOINT {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleControl {
    Hamburger,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub control: ToggleControl,
    /// Visually-hidden label
    pub label: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemView {
    pub index: usize,
    pub label: &'static str,
    pub href: &'static str,
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerView {
    /// On-screen when true, parked off-screen and hidden otherwise
    pub visible: bool,
    pub links: Vec<NavItemView>,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub layout: Layout,
    pub state: DrawerState,
    pub logo_label: &'static str,
    /// Logo switches to its light rendering over the open drawer
    pub logo_inverted: bool,
    /// Mobile only
    pub toggle: Option<ToggleView>,
    /// Mobile only
    pub drawer: Option<DrawerView>,
    /// Desktop only
    pub desktop_nav: Option<Vec<NavItemView>>,
}

impl HeaderView {
    pub(crate) fn new(
        state: DrawerState,
        viewport: Viewport,
        links: Catalog<NavLink>,
        social: Catalog<SocialLink>,
    ) -> Self {
        let layout = viewport.layout();
        let expanded = state.is_open();
        let items = nav_items(links);

        match layout {
            Layout::Mobile => Self {
                layout,
                state,
                logo_label: LOGO_LABEL,
                logo_inverted: expanded,
                toggle: Some(ToggleView {
                    control: if expanded {
                        ToggleControl::Close
                    } else {
                        ToggleControl::Hamburger
                    },
                    label: if expanded {
                        CLOSE_MENU_LABEL
                    } else {
                        OPEN_MENU_LABEL
                    },
                    expanded,
                }),
                drawer: Some(DrawerView {
                    visible: expanded,
                    links: items,
                    social: social.iter().copied().collect(),
                }),
                desktop_nav: None,
            },
            Layout::Desktop => Self {
                layout,
                state,
                logo_label: LOGO_LABEL,
                logo_inverted: false,
                toggle: None,
                drawer: None,
                desktop_nav: Some(items),
            },
        }
    }
}

pub fn nav_items(links: Catalog<NavLink>) -> Vec<NavItemView> {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| NavItemView {
            index,
            label: link.label,
            href: link.href,
            emphasis: link.emphasis,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureTabView {
    pub index: usize,
    pub label: &'static str,
    /// Underline indicator shown
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDetailView {
    pub title: &'static str,
    pub summary: &'static str,
    pub image_src: String,
    pub image_alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureView {
    pub tabs: Vec<FeatureTabView>,
    pub detail: FeatureDetailView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub invalid: bool,
    /// Inline message next to the input
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItemView {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCardView {
    pub heading: String,
    pub caption: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub width: u32,
    pub height: u32,
}

/// Extension cards, in catalog order
pub fn render_extensions(catalog: Catalog<ExtensionEntry>) -> Vec<ExtensionCardView> {
    catalog
        .iter()
        .map(|entry| ExtensionCardView {
            heading: format!("Add to {}", capitalize(entry.browser)),
            caption: format!("Minimum version {}", entry.minimum_version),
            logo_src: entry.logo.src(),
            logo_alt: format!("{} logo", capitalize(entry.browser)),
            width: entry.logo.width,
            height: entry.logo.height,
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EXTENSIONS, NAVIGATION, SOCIAL};

    #[test]
    fn test_breakpoint() {
        assert_eq!(Viewport::new(767).layout(), Layout::Mobile);
        assert_eq!(Viewport::new(768).layout(), Layout::Desktop);
    }

    #[test]
    fn test_mobile_header_follows_state() {
        let closed = HeaderView::new(DrawerState::Closed, Viewport::MOBILE, NAVIGATION, SOCIAL);
        let toggle = closed.toggle.as_ref().unwrap();
        assert_eq!(toggle.control, ToggleControl::Hamburger);
        assert_eq!(toggle.label, OPEN_MENU_LABEL);
        assert!(!closed.drawer.as_ref().unwrap().visible);
        assert!(closed.desktop_nav.is_none());

        let open = HeaderView::new(DrawerState::Open, Viewport::MOBILE, NAVIGATION, SOCIAL);
        let toggle = open.toggle.as_ref().unwrap();
        assert_eq!(toggle.control, ToggleControl::Close);
        assert_eq!(toggle.label, CLOSE_MENU_LABEL);
        assert!(open.drawer.as_ref().unwrap().visible);
        assert!(open.logo_inverted);
    }

    #[test]
    fn test_desktop_header_has_no_drawer() {
        let view = HeaderView::new(DrawerState::Open, Viewport::DESKTOP, NAVIGATION, SOCIAL);
        assert!(view.toggle.is_none());
        assert!(view.drawer.is_none());
        assert_eq!(view.desktop_nav.unwrap().len(), NAVIGATION.len());
    }

    #[test]
    fn test_drawer_keeps_social_labels() {
        let view = HeaderView::new(DrawerState::Open, Viewport::MOBILE, NAVIGATION, SOCIAL);
        let labels: Vec<_> = view.drawer.unwrap().social.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["facebook", "twitter"]);
    }

    #[test]
    fn test_extension_cards() {
        let cards = render_extensions(EXTENSIONS);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].heading, "Add to Chrome");
        assert_eq!(cards[1].caption, "Minimum version 55");
        assert_eq!(cards[2].logo_src, "/images/logo-opera.svg");
        assert_eq!(cards[2].width, 96);
    }

    #[test]
    fn test_view_serializes() {
        let view = HeaderView::new(DrawerState::Open, Viewport::MOBILE, NAVIGATION, SOCIAL);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "open");
        assert_eq!(json["toggle"]["control"], "close");
        assert_eq!(json["layout"], "mobile");
    }
}
