pub mod menu;
pub mod render;

pub use menu::{ConsoleMenu, MenuOption};
