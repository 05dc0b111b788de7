pub mod portal;

pub use portal::{portal_layout, LayoutCtx, Tab};
