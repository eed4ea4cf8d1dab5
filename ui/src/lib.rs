//! This crate contains all shared UI for the Pista Express site.

mod nav;
pub use nav::*;

mod theme;
pub use theme::*;

mod layout;
pub use layout::Layout;
