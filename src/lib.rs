pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod slug;
pub mod templates;
pub mod toc;
