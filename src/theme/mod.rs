//! Theme module - color schemes and selection state
//!
//! This module is organized into two parts:
//!
//! - **`registry`**: the fixed, ordered catalog of built-in themes
//!   - `Theme` struct with gradient stop fields
//!   - `themes()` for the full ordered list
//!   - `find_by_id()` / `resolve_or_default()` for lookup
//!
//! - **`context`**: the single source of truth for the active theme
//!   - `ThemeContext` holding the current selection
//!   - `PreferenceStore` trait for durable persistence of the chosen id
//!
//! # Usage
//!
//! ```ignore
//! use portfolio::theme::{self, ThemeContext, MemoryPreferenceStore};
//!
//! let mut ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::default()));
//! let ocean = theme::resolve_or_default("ocean");
//! ctx.set_current(ocean);
//! assert_eq!(ctx.current().id, "ocean");
//! ```

mod context;
mod registry;

pub use context::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeContext};
pub use registry::{default_theme, find_by_id, resolve_or_default, themes, Theme};
