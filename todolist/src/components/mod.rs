pub mod layout;
pub mod navigation;
pub mod typography;

pub use typography::{Htag, P};
