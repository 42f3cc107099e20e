//! The fixed catalog of built-in themes
//!
//! The registry is a static, ordered, non-empty slice. The first entry is
//! the default. Entries are never added or removed at run time; user
//! selection only ever points at one of these.

use ratatui::style::Color;

/// A named bundle of visual style tokens.
///
/// Gradient stops are truecolor RGB values. `primary` drives accents and
/// headings, `secondary` drives panel surfaces, `background` is the base
/// fill behind everything, and `preview` is only used for the swatch in
/// the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Stable identity key, unique across the registry.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Accent gradient stops (headings, highlights).
    pub primary: [Color; 2],
    /// Surface gradient stops (panels, cards).
    pub secondary: [Color; 3],
    /// Base background fill.
    pub background: Color,
    /// Default text color against `background`.
    pub foreground: Color,
    /// De-emphasized text color (captions, hints).
    pub muted: Color,
    /// Swatch stops rendered in the picker.
    pub preview: [Color; 3],
    /// Short human-readable caption.
    pub description: &'static str,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

static THEMES: &[Theme] = &[
    Theme {
        id: "modern",
        name: "Modern Dark",
        primary: [rgb(0x9333ea), rgb(0xdb2777)],
        secondary: [rgb(0x312e81), rgb(0x581c87), rgb(0x9d174d)],
        background: rgb(0x1e1b4b),
        foreground: rgb(0xf9fafb),
        muted: rgb(0x9ca3af),
        preview: [rgb(0x312e81), rgb(0x7c3aed), rgb(0xec4899)],
        description: "Modern dark theme with purple and pink gradients",
    },
    Theme {
        id: "light",
        name: "Classic Light",
        primary: [rgb(0x2563eb), rgb(0x9333ea)],
        secondary: [rgb(0xffffff), rgb(0xf9fafb), rgb(0xf3f4f6)],
        background: rgb(0xffffff),
        foreground: rgb(0x111827),
        muted: rgb(0x6b7280),
        preview: [rgb(0xffffff), rgb(0xf9fafb), rgb(0xf3f4f6)],
        description: "Clean light theme for professional presentation",
    },
    Theme {
        id: "dark",
        name: "Classic Dark",
        primary: [rgb(0x3b82f6), rgb(0xa855f7)],
        secondary: [rgb(0x111827), rgb(0x1f2937), rgb(0x000000)],
        background: rgb(0x030712),
        foreground: rgb(0xf9fafb),
        muted: rgb(0x9ca3af),
        preview: [rgb(0x111827), rgb(0x1f2937), rgb(0x000000)],
        description: "Pure dark theme for comfortable viewing",
    },
    Theme {
        id: "ocean",
        name: "Ocean Blue",
        primary: [rgb(0x2563eb), rgb(0x0891b2)],
        secondary: [rgb(0x1e3a8a), rgb(0x164e63), rgb(0x115e59)],
        background: rgb(0x172554),
        foreground: rgb(0xf0f9ff),
        muted: rgb(0x93c5fd),
        preview: [rgb(0x1e3a8a), rgb(0x0891b2), rgb(0x0f766e)],
        description: "Ocean-inspired blue and cyan tones",
    },
    Theme {
        id: "sunset",
        name: "Sunset Orange",
        primary: [rgb(0xea580c), rgb(0xdc2626)],
        secondary: [rgb(0x7c2d12), rgb(0x7f1d1d), rgb(0x9d174d)],
        background: rgb(0x431407),
        foreground: rgb(0xfff7ed),
        muted: rgb(0xfdba74),
        preview: [rgb(0xea580c), rgb(0xdc2626), rgb(0xbe185d)],
        description: "Warm sunset colors with orange and red gradients",
    },
    Theme {
        id: "forest",
        name: "Forest Green",
        primary: [rgb(0x16a34a), rgb(0x059669)],
        secondary: [rgb(0x14532d), rgb(0x064e3b), rgb(0x115e59)],
        background: rgb(0x052e16),
        foreground: rgb(0xf0fdf4),
        muted: rgb(0x86efac),
        preview: [rgb(0x14532d), rgb(0x047857), rgb(0x0f766e)],
        description: "Nature-inspired green and emerald tones",
    },
    Theme {
        id: "neon",
        name: "Neon Cyber",
        primary: [rgb(0x22d3ee), rgb(0x9333ea)],
        secondary: [rgb(0x111827), rgb(0x164e63), rgb(0x581c87)],
        background: rgb(0x0b1020),
        foreground: rgb(0xecfeff),
        muted: rgb(0x67e8f9),
        preview: [rgb(0x111827), rgb(0x155e75), rgb(0x581c87)],
        description: "Futuristic cyberpunk theme with neon accents",
    },
];

/// Ordered list of all built-in themes.
pub fn themes() -> &'static [Theme] {
    THEMES
}

/// The default theme (first registry entry).
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Look up a theme by its id. Unknown ids are "not found", not an error;
/// callers that need a theme unconditionally use [`resolve_or_default`].
pub fn find_by_id(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// Resolve an id to a theme, substituting the default for unknown ids.
///
/// Stale ids persisted by an older registry resolve here without being
/// surfaced to the user.
pub fn resolve_or_default(id: &str) -> &'static Theme {
    find_by_id(id).unwrap_or_else(default_theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_nonempty_with_unique_ids() {
        assert!(!themes().is_empty());
        let ids: HashSet<_> = themes().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), themes().len());
    }

    #[test]
    fn test_find_by_id_returns_every_registry_theme() {
        for theme in themes() {
            assert_eq!(find_by_id(theme.id), Some(theme));
        }
    }

    #[test]
    fn test_find_by_id_unknown_is_none() {
        assert_eq!(find_by_id("retro-unknown"), None);
        assert_eq!(find_by_id(""), None);
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(default_theme().id, "modern");
        assert_eq!(default_theme(), &themes()[0]);
    }

    #[test]
    fn test_resolve_or_default() {
        assert_eq!(resolve_or_default("ocean").id, "ocean");
        assert_eq!(resolve_or_default("retro-unknown").id, "modern");
    }
}
