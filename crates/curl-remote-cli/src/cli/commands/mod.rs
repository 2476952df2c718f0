//! CLI command handlers. Each command is in its own file.

mod check;
mod send;

pub use check::run_check;
pub use send::run_send;
