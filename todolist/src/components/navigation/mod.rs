pub mod menu;
pub mod menu_list;

pub use menu::Menu;
pub use menu_list::{MenuItem, MenuList};
