//! Server configuration

const DEFAULT_IMAGE_DIR: &str = "assets/images";
const DEFAULT_LOG_FILTER: &str = "bookmark_marketing=info,bookmark_core=info,tower_http=info";

/// Settings read from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory served under `/images`
    pub image_dir: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            image_dir: lookup("BOOKMARK_IMAGE_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_DIR.to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
