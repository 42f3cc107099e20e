// Portfolio library - exposes all modules for testing

pub mod app;
pub mod config;
pub mod content;
pub mod mail;
pub mod theme;
pub mod ui;
