//! End-to-end theme selection and persistence scenarios.

use portfolio::config::Config;
use portfolio::theme::{
    resolve_or_default, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeContext,
};

/// Store whose writes always fail, standing in for a full or read-only disk.
struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load_theme_id(&self) -> Option<String> {
        None
    }

    fn save_theme_id(&mut self, _id: &str) -> anyhow::Result<()> {
        anyhow::bail!("store unavailable")
    }
}

#[test]
fn new_session_starts_on_default_theme() {
    let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::default()));
    assert_eq!(ctx.current().id, "modern");
}

#[test]
fn persisted_id_is_restored() {
    let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::seeded("ocean")));
    assert_eq!(ctx.current().id, "ocean");
}

#[test]
fn stale_persisted_id_falls_back_to_default() {
    let ctx = ThemeContext::init(Box::new(MemoryPreferenceStore::seeded("retro-unknown")));
    assert_eq!(ctx.current().id, "modern");
}

#[test]
fn selection_survives_a_reload_with_storage_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut ctx = ThemeContext::init(Box::new(FilePreferenceStore::new(path.clone())));
    assert_eq!(ctx.current().id, "modern");
    ctx.set_current(resolve_or_default("ocean"));
    drop(ctx);

    // Reload: new context, same storage
    let ctx = ThemeContext::init(Box::new(FilePreferenceStore::new(path)));
    assert_eq!(ctx.current().id, "ocean");
}

#[test]
fn write_failure_still_updates_in_memory_state() {
    let mut ctx = ThemeContext::init(Box::new(FailingStore));
    ctx.set_current(resolve_or_default("sunset"));
    assert_eq!(ctx.current().id, "sunset");
}

#[test]
fn double_selection_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut ctx = ThemeContext::init(Box::new(FilePreferenceStore::new(path.clone())));
    ctx.set_current(resolve_or_default("neon"));
    let after_first = std::fs::read_to_string(&path).unwrap();
    ctx.set_current(resolve_or_default("neon"));
    let after_second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(after_first, after_second);
    assert_eq!(ctx.current().id, "neon");
}

#[test]
fn theme_write_preserves_unrelated_config_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        recipient_email: "someone@example.com".to_string(),
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let mut ctx = ThemeContext::init(Box::new(FilePreferenceStore::new(path.clone())));
    ctx.set_current(resolve_or_default("forest"));

    let reloaded = Config::load_from(&path);
    assert_eq!(reloaded.theme, "forest");
    assert_eq!(reloaded.recipient_email, "someone@example.com");
}

#[test]
fn corrupt_storage_hydrates_the_default_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "!! not json !!").unwrap();
    let ctx = ThemeContext::init(Box::new(FilePreferenceStore::new(path)));
    assert_eq!(ctx.current().id, "modern");
}
