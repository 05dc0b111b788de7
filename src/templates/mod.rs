pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::{portal_layout, LayoutCtx, Tab};

pub const STYLESHEET: &str = include_str!("../../static/main.css");
