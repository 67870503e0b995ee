//! Console front end for the Secure Eye dashboards
//!
//! Drives an admin or user dashboard from text commands and prints the views
//! they derive.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod command;
pub mod navigator;
pub mod render;
pub mod repl;

// Re-export commonly used types
pub use command::{Command, CommandError, parse_admin, parse_user};
pub use navigator::ConsoleNavigator;
pub use render::{AdminScreen, UserScreen, describe_event};
pub use repl::{Session, run};
