pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod expansion;
pub mod models;
pub mod motion;
pub mod navigation;
pub mod shell;
pub mod theme;
pub mod tree;
pub mod typewriter;
pub mod viewport;
