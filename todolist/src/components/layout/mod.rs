pub mod app_shell;
pub mod footer;
pub mod header;
pub mod loading;
pub mod sidebar;

pub use app_shell::AppShell;
pub use footer::Footer;
pub use header::Header;
pub use loading::Loading;
pub use sidebar::Sidebar;
