pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod render;
pub mod source;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use error::{MenuError, Result};
pub use menu::{Icon, MenuItem, Node};
pub use render::{project, render_menu, MenuEntry, MenuRenderer};
