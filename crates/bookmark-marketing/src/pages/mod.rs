//! Landing page routes

mod home;

pub use home::{HomePage, LandingPage, VariantPage};
