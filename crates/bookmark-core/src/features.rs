//! Feature tab selector

use tracing::debug;

use crate::catalog::{Catalog, FeatureEntry, FEATURES};
use crate::view::{FeatureDetailView, FeatureTabView, FeatureView};
use crate::{check_index, CoreError, CoreResult};

/// Which feature tab is showing. Index 0 until something else is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelector {
    catalog: Catalog<FeatureEntry>,
    selected: usize,
}

impl FeatureSelector {
    pub fn new() -> Self {
        Self {
            catalog: FEATURES,
            selected: 0,
        }
    }

    pub fn with_catalog(catalog: Catalog<FeatureEntry>) -> CoreResult<Self> {
        if catalog.is_empty() {
            return Err(CoreError::InvalidCatalog(format!(
                "{} has no tabs to select",
                catalog.name()
            )));
        }
        Ok(Self {
            catalog,
            selected: 0,
        })
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &'static FeatureEntry {
        &self.catalog.entries()[self.selected]
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn select(&mut self, index: usize) -> CoreResult<()> {
        check_index("feature tab", index, self.catalog.len())?;
        if index != self.selected {
            debug!(from = self.selected, to = index, "Feature tab selected");
            self.selected = index;
        }
        Ok(())
    }

    pub fn render(&self) -> FeatureView {
        let tabs = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| FeatureTabView {
                index,
                label: entry.key,
                active: index == self.selected,
            })
            .collect();

        let entry = self.selected();
        FeatureView {
            tabs,
            detail: FeatureDetailView {
                title: entry.title,
                summary: entry.summary,
                image_src: entry.image.src(),
                image_alt: entry.title,
                width: entry.image.width,
                height: entry.image.height,
            },
        }
    }
}

impl Default for FeatureSelector {
    fn default() -> Self {
        Self::new()
    }
}
