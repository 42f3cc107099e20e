//! Active-theme state and persistence
//!
//! `ThemeContext` is the single source of truth for "which theme is
//! active". It is explicitly constructed (no module-level singleton) so
//! tests can build isolated instances against an in-memory store, and so
//! reading the current theme before initialization is unrepresentable:
//! the only way to obtain a context is through [`ThemeContext::init`],
//! which performs the one-time hydration from the store.

use std::path::PathBuf;

use super::registry::{default_theme, find_by_id, Theme};

/// Durable storage for the selected theme id.
///
/// The stored value is the id string only, never the full theme. An absent
/// or unrecognized id hydrates as the default theme.
pub trait PreferenceStore {
    /// Read the persisted theme id, if any.
    fn load_theme_id(&self) -> Option<String>;

    /// Persist a theme id. Failures are non-fatal to callers.
    fn save_theme_id(&mut self, id: &str) -> anyhow::Result<()>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Option<String>,
}

impl MemoryPreferenceStore {
    /// Store pre-seeded with a persisted id, as if left by a previous run.
    pub fn seeded(id: &str) -> Self {
        Self {
            saved: Some(id.to_string()),
        }
    }

    /// The id currently held by the store.
    pub fn saved_id(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme_id(&self) -> Option<String> {
        self.saved.clone()
    }

    fn save_theme_id(&mut self, id: &str) -> anyhow::Result<()> {
        self.saved = Some(id.to_string());
        Ok(())
    }
}

/// Store backed by the config file on disk.
///
/// Reads and rewrites the whole [`Config`](crate::config::Config) so a
/// theme change never clobbers unrelated settings.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme_id(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        Some(crate::config::Config::load_from(&self.path).theme)
    }

    fn save_theme_id(&mut self, id: &str) -> anyhow::Result<()> {
        let mut config = crate::config::Config::load_from(&self.path);
        config.theme = id.to_string();
        config.save_to(&self.path)
    }
}

/// Session-wide holder of the active theme.
pub struct ThemeContext {
    current: &'static Theme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeContext {
    /// Hydrate the context from the store.
    ///
    /// A present id matching a registry entry initializes to that entry;
    /// an absent or stale id initializes to the default. This transition
    /// happens exactly once, at construction.
    pub fn init(store: Box<dyn PreferenceStore>) -> Self {
        let current = match store.load_theme_id() {
            Some(id) => match find_by_id(&id) {
                Some(theme) => {
                    tracing::debug!(theme = theme.id, "restored persisted theme");
                    theme
                }
                None => {
                    tracing::warn!(id, "persisted theme id not in registry, using default");
                    default_theme()
                }
            },
            None => default_theme(),
        };
        Self { current, store }
    }

    /// The active theme. Never fails: a constructed context always holds
    /// a registry entry.
    pub fn current(&self) -> &'static Theme {
        self.current
    }

    /// Replace the active theme and write its id through to the store.
    ///
    /// Persistence is best-effort: a failed write is logged and the
    /// in-memory state still changes.
    pub fn set_current(&mut self, theme: &'static Theme) {
        self.current = theme;
        if let Err(err) = self.store.save_theme_id(theme.id) {
            tracing::warn!("failed to persist theme selection: {err:#}");
        }
    }

    /// Replace the active theme without persisting (one-run override,
    /// e.g. a `--theme` flag).
    pub fn set_current_transient(&mut self, theme: &'static Theme) {
        self.current = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry::resolve_or_default;

    #[test]
    fn test_init_without_persisted_value_uses_default() {
        let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::default()));
        assert_eq!(ctx.current().id, "modern");
    }

    #[test]
    fn test_init_with_persisted_value() {
        let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::seeded("ocean")));
        assert_eq!(ctx.current().id, "ocean");
    }

    #[test]
    fn test_init_with_stale_persisted_value_falls_back() {
        let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::seeded("retro-unknown")));
        assert_eq!(ctx.current().id, "modern");
    }

    #[test]
    fn test_set_current_updates_state_and_store() {
        let mut ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::default()));
        let ocean = resolve_or_default("ocean");
        ctx.set_current(ocean);
        assert_eq!(ctx.current().id, "ocean");
        assert_eq!(ctx.store.load_theme_id().as_deref(), Some("ocean"));
    }

    #[test]
    fn test_set_current_is_idempotent() {
        let mut ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::default()));
        let forest = resolve_or_default("forest");
        ctx.set_current(forest);
        ctx.set_current(forest);
        assert_eq!(ctx.current().id, "forest");
        assert_eq!(ctx.store.load_theme_id().as_deref(), Some("forest"));
    }

    #[test]
    fn test_transient_override_is_not_persisted() {
        let mut ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::seeded("dark")));
        ctx.set_current_transient(resolve_or_default("neon"));
        assert_eq!(ctx.current().id, "neon");
        assert_eq!(ctx.store.load_theme_id().as_deref(), Some("dark"));
    }
}
