//! Command implementations for bucket-cli

pub mod check;
pub mod create;
pub mod expect;
pub mod info;
pub mod init;
pub mod rename;

pub use check::run_check;
pub use create::run_create;
pub use expect::{run_expect, run_expect_set};
pub use info::run_info;
pub use init::run_init;
pub use rename::run_rename;
