//! Landing page components

mod cards;
mod faq;
mod feature_tabs;
mod footer;
mod icons;
mod nav;
mod newsletter;

pub use cards::*;
pub use faq::FaqList;
pub use feature_tabs::FeatureTabs;
pub use footer::Footer;
pub use icons::*;
pub use nav::Header;
pub use newsletter::NewsletterForm;
