mod contact;
mod greeting;
mod navbar;
mod shell;

// Exports
pub use contact::{ContactKind, ContactLink};
pub use greeting::GreetingPanel;
pub use navbar::{NavBar, NavLink};
pub use shell::PageShell;
