//! FAQ accordion

use tracing::debug;

use crate::catalog::{Catalog, FaqEntry, FAQ};
use crate::view::FaqItemView;
use crate::{check_index, CoreResult};

/// Independently expandable FAQ entries, all collapsed at first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    catalog: Catalog<FaqEntry>,
    open: Vec<bool>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::with_catalog(FAQ)
    }

    pub fn with_catalog(catalog: Catalog<FaqEntry>) -> Self {
        Self {
            catalog,
            open: vec![false; catalog.len()],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> CoreResult<bool> {
        check_index("faq entry", index, self.open.len())?;
        let flag = &mut self.open[index];
        *flag = !*flag;
        debug!(index, open = *flag, "FAQ entry toggled");
        Ok(*flag)
    }

    pub fn render(&self) -> Vec<FaqItemView> {
        self.catalog
            .iter()
            .zip(&self.open)
            .enumerate()
            .map(|(index, (entry, open))| FaqItemView {
                index,
                question: entry.question,
                answer: entry.answer,
                open: *open,
            })
            .collect()
    }
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new()
    }
}
