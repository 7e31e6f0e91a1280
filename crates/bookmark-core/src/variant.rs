//! Page variants
//!
//! The page went through several snapshots that differ only in which
//! sections are present. Each snapshot is a [`SiteVariant`] whose
//! [`PageConfig`] drives one shared set of components.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::{
    Catalog, ExtensionEntry, FaqEntry, FeatureEntry, NavLink, EXTENSIONS, FAQ, FEATURES,
    NAVIGATION,
};
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Features,
    Extensions,
    Faq,
    Newsletter,
    Footer,
}

impl Section {
    /// In-page anchor id
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Extensions => "extensions",
            Section::Faq => "faq",
            Section::Newsletter => "contact",
            Section::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteVariant {
    /// Header, hero, features, extensions
    Initial,
    /// Adds the FAQ accordion
    WithFaq,
    /// Adds the newsletter form and the footer
    WithNewsletter,
    /// Every section, nav links jump to their sections
    #[default]
    Complete,
}

impl SiteVariant {
    pub const ALL: [SiteVariant; 4] = [
        SiteVariant::Initial,
        SiteVariant::WithFaq,
        SiteVariant::WithNewsletter,
        SiteVariant::Complete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SiteVariant::Initial => "initial",
            SiteVariant::WithFaq => "with-faq",
            SiteVariant::WithNewsletter => "with-newsletter",
            SiteVariant::Complete => "complete",
        }
    }

    pub fn config(&self) -> PageConfig {
        let sections: &'static [Section] = match self {
            SiteVariant::Initial => &[Section::Hero, Section::Features, Section::Extensions],
            SiteVariant::WithFaq => &[
                Section::Hero,
                Section::Features,
                Section::Extensions,
                Section::Faq,
            ],
            SiteVariant::WithNewsletter | SiteVariant::Complete => &[
                Section::Hero,
                Section::Features,
                Section::Extensions,
                Section::Faq,
                Section::Newsletter,
                Section::Footer,
            ],
        };

        PageConfig {
            variant: *self,
            sections,
            follow_links: matches!(self, SiteVariant::Complete),
            features: FEATURES,
            extensions: EXTENSIONS,
            faq: FAQ,
            navigation: NAVIGATION,
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SiteVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SiteVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant(s.to_string()))
    }
}

/// What one page variant shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub variant: SiteVariant,
    /// Enabled sections in page order
    pub sections: &'static [Section],
    /// Whether activating a nav link navigates to its href. When false,
    /// drawer links only close the drawer and desktop links do nothing.
    pub follow_links: bool,
    pub features: Catalog<FeatureEntry>,
    pub extensions: Catalog<ExtensionEntry>,
    pub faq: Catalog<FaqEntry>,
    pub navigation: Catalog<NavLink>,
}

impl PageConfig {
    pub fn has(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for variant in SiteVariant::ALL {
            assert_eq!(variant.name().parse::<SiteVariant>().unwrap(), variant);
        }
        assert_eq!(" Complete ".parse::<SiteVariant>().unwrap(), SiteVariant::Complete);
    }

    #[test]
    fn test_unknown_variant() {
        assert_eq!(
            "v5".parse::<SiteVariant>(),
            Err(CoreError::UnknownVariant("v5".to_string()))
        );
    }

    #[test]
    fn test_sections_grow_with_snapshots() {
        let initial = SiteVariant::Initial.config();
        assert!(initial.has(Section::Features));
        assert!(!initial.has(Section::Faq));
        assert!(!initial.has(Section::Footer));

        assert!(SiteVariant::WithFaq.config().has(Section::Faq));
        assert!(SiteVariant::WithNewsletter.config().has(Section::Newsletter));
        assert!(!SiteVariant::WithNewsletter.config().follow_links);
        assert!(SiteVariant::Complete.config().follow_links);
    }

    #[test]
    fn test_only_complete_follows_links() {
        let following: Vec<_> = SiteVariant::ALL
            .into_iter()
            .filter(|variant| variant.config().follow_links)
            .collect();
        assert_eq!(following, vec![SiteVariant::Complete]);
    }

    #[test]
    fn test_hero_always_first() {
        for variant in SiteVariant::ALL {
            assert_eq!(variant.config().sections[0], Section::Hero);
        }
    }
}
