//! CLI commands for promptlib

pub mod build;
pub mod check;
pub mod dispatch;
pub mod init;
pub mod list;
pub mod nav;
pub mod show;
pub mod state;
pub mod toggle;
pub mod tree;
