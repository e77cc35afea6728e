//! Command plugins
//!
//! - `menu`: top-level and category menus
//! - `play`: track search and delivery

pub mod menu;
pub mod play;
