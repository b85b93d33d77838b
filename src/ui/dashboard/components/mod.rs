//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod logs;
pub mod notice;
pub mod stats;
pub mod trends;
