pub mod expand;
pub mod load;
pub mod tree;
pub mod view;

pub use expand::ExpandState;
pub use load::{load_menu, MenuLoad, MenuSource};
pub use tree::{build_tree, MenuNode};
