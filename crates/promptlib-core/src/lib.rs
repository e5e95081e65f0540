//! Promptlib Core Library
//!
//! Prompt collection loading, category tree construction, sidebar
//! expand/collapse state and static site rendering.

pub mod config;
pub mod content;
pub mod error;
pub mod expansion;
pub mod format;
pub mod logging;
pub mod project;
pub mod records;
pub mod site;
pub mod tree;
