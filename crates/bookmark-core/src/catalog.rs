//! Fixed content catalogs
//!
//! Every list the page shows is literal data compiled into the binary. Order
//! is significant: it is the tab order and the visual order.

use serde::Serialize;
use std::collections::HashSet;

use crate::{CoreError, CoreResult};

/// Image reference with its declared intrinsic footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Image {
    /// File name under the site's image directory
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub const fn new(url: &'static str, width: u32, height: u32) -> Self {
        Self { url, width, height }
    }

    /// Path the browser requests the asset from
    pub fn src(&self) -> String {
        format!("/images/{}", self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Tab label, also the entry's identity
    pub key: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    pub browser: &'static str,
    pub minimum_version: u32,
    pub logo: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Rendered as a bordered call-to-action instead of a plain link
    pub emphasis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Visually-hidden label for the icon-only link
    pub label: &'static str,
    pub href: &'static str,
}

/// Records that can live in a [`Catalog`]
pub trait CatalogEntry {
    fn key(&self) -> &'static str;

    fn image(&self) -> Option<Image> {
        None
    }
}

impl CatalogEntry for FeatureEntry {
    fn key(&self) -> &'static str {
        self.key
    }

    fn image(&self) -> Option<Image> {
        Some(self.image)
    }
}

impl CatalogEntry for ExtensionEntry {
    fn key(&self) -> &'static str {
        self.browser
    }

    fn image(&self) -> Option<Image> {
        Some(self.logo)
    }
}

impl CatalogEntry for FaqEntry {
    fn key(&self) -> &'static str {
        self.question
    }
}

impl CatalogEntry for NavLink {
    fn key(&self) -> &'static str {
        self.label
    }
}

impl CatalogEntry for SocialLink {
    fn key(&self) -> &'static str {
        self.label
    }
}

/// Read-only ordered list of literal records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog<T: 'static> {
    name: &'static str,
    entries: &'static [T],
}

impl<T: CatalogEntry> Catalog<T> {
    pub const fn new(name: &'static str, entries: &'static [T]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [T] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static T> {
        self.entries.iter()
    }

    /// Check the static data for authoring mistakes
    pub fn validate(&self) -> CoreResult<()> {
        if self.entries.is_empty() {
            return Err(CoreError::InvalidCatalog(format!("{} is empty", self.name)));
        }

        let mut seen = HashSet::new();
        for entry in self.entries {
            let key = entry.key();
            if key.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "{} has an entry with a blank key",
                    self.name
                )));
            }
            if !seen.insert(key) {
                return Err(CoreError::InvalidCatalog(format!(
                    "{} has duplicate key {:?}",
                    self.name, key
                )));
            }
            if let Some(image) = entry.image() {
                if image.width == 0 || image.height == 0 {
                    return Err(CoreError::InvalidCatalog(format!(
                        "{} entry {:?} declares a zero-sized image",
                        self.name, key
                    )));
                }
            }
        }

        Ok(())
    }
}

const FEATURE_ENTRIES: &[FeatureEntry] = &[
    FeatureEntry {
        key: "simple bookmarking",
        title: "Bookmark in one click",
        summary: "Organize your bookmarks however you like. Our simple drag-and-drop interface \
                  gives you complete control over how you manage your favourite sites.",
        image: Image::new("simple-bookmarking.svg", 536, 346),
    },
    FeatureEntry {
        key: "speedy searching",
        title: "Intelligent search",
        summary: "Our powerful search feature will help you find saved sites in no time at all. \
                  No need to trawl through all of your bookmarks.",
        image: Image::new("speedy-searching.svg", 478, 416),
    },
    FeatureEntry {
        key: "easy sharing",
        title: "Share your bookmarks",
        summary: "Easily share your bookmarks and collections with others. Create a shareable \
                  link that you can send at the click of a button.",
        image: Image::new("easy-sharing.svg", 380, 440),
    },
];

const EXTENSION_ENTRIES: &[ExtensionEntry] = &[
    ExtensionEntry {
        browser: "chrome",
        minimum_version: 62,
        logo: Image::new("logo-chrome.svg", 102, 100),
    },
    ExtensionEntry {
        browser: "firefox",
        minimum_version: 55,
        logo: Image::new("logo-firefox.svg", 103, 106),
    },
    ExtensionEntry {
        browser: "opera",
        minimum_version: 46,
        logo: Image::new("logo-opera.svg", 96, 100),
    },
];

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Bookmark?",
        answer: "Bookmark is a browser extension that keeps your favourite websites one click \
                 away. Save a page, drop it into a collection and open it again from any new tab.",
    },
    FaqEntry {
        question: "How can I request a new browser?",
        answer: "Send us a note through the contact link. We track every request and prioritize \
                 the browsers our users ask for the most.",
    },
    FaqEntry {
        question: "Is there a mobile app?",
        answer: "Not yet. Your bookmarks already sync between desktop browsers, and a mobile \
                 companion is on the roadmap.",
    },
    FaqEntry {
        question: "What about other Chromium browsers?",
        answer: "Most Chromium based browsers can install the Chrome extension directly from \
                 the Chrome Web Store. Brave, Edge and Vivaldi are known to work.",
    },
];

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "features",
        href: "#features",
        emphasis: false,
    },
    NavLink {
        label: "pricing",
        href: "#pricing",
        emphasis: false,
    },
    NavLink {
        label: "contact",
        href: "#contact",
        emphasis: false,
    },
    NavLink {
        label: "login",
        href: "#login",
        emphasis: true,
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "facebook",
        href: "https://www.facebook.com",
    },
    SocialLink {
        label: "twitter",
        href: "https://twitter.com",
    },
];

pub const FEATURES: Catalog<FeatureEntry> = Catalog::new("features", FEATURE_ENTRIES);
pub const EXTENSIONS: Catalog<ExtensionEntry> = Catalog::new("extensions", EXTENSION_ENTRIES);
pub const FAQ: Catalog<FaqEntry> = Catalog::new("faq", FAQ_ENTRIES);
pub const NAVIGATION: Catalog<NavLink> = Catalog::new("navigation", NAV_LINKS);
pub const SOCIAL: Catalog<SocialLink> = Catalog::new("social", SOCIAL_LINKS);

/// Validate every shipped catalog
pub fn validate_all() -> CoreResult<()> {
    FEATURES.validate()?;
    EXTENSIONS.validate()?;
    FAQ.validate()?;
    NAVIGATION.validate()?;
    SOCIAL.validate()
}
