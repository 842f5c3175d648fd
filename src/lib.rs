pub mod build_info;
pub mod export;
pub mod manifest;
pub mod site;
pub mod web;

pub use build_info::BuildInfo;
pub use manifest::Manifest;
pub use web::{GreetingPanel, PageShell};
