//! Theme identifiers and name resolution
//!
//! Every profile carries one of a fixed set of visual themes. Stored theme
//! names that are missing or unrecognized resolve to the default variant
//! instead of failing, so a profile is always renderable.

use serde::{Deserialize, Serialize};

/// One of the fixed visual layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ThemeId {
    Minimalist,
    Professional,
    Creative,
    Modern,
    Elegant,
    Bold,
    Compact,
    Nature,
    Cyber,
    Newspaper,
    Terminal,
    Swiss,
    Warm,
    Cold,
    Outline,
}

impl ThemeId {
    /// All theme variants in presentation order.
    pub const ALL: [ThemeId; 15] = [
        ThemeId::Minimalist,
        ThemeId::Professional,
        ThemeId::Creative,
        ThemeId::Modern,
        ThemeId::Elegant,
        ThemeId::Bold,
        ThemeId::Compact,
        ThemeId::Nature,
        ThemeId::Cyber,
        ThemeId::Newspaper,
        ThemeId::Terminal,
        ThemeId::Swiss,
        ThemeId::Warm,
        ThemeId::Cold,
        ThemeId::Outline,
    ];

    /// The stored identifier for this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Minimalist => "minimalist",
            ThemeId::Professional => "professional",
            ThemeId::Creative => "creative",
            ThemeId::Modern => "modern",
            ThemeId::Elegant => "elegant",
            ThemeId::Bold => "bold",
            ThemeId::Compact => "compact",
            ThemeId::Nature => "nature",
            ThemeId::Cyber => "cyber",
            ThemeId::Newspaper => "newspaper",
            ThemeId::Terminal => "terminal",
            ThemeId::Swiss => "swiss",
            ThemeId::Warm => "warm",
            ThemeId::Cold => "cold",
            ThemeId::Outline => "outline",
        }
    }

    /// Human-readable name shown in theme pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeId::Minimalist => "Minimalist",
            ThemeId::Professional => "Professional",
            ThemeId::Creative => "Creative",
            ThemeId::Modern => "Modern Tech",
            ThemeId::Elegant => "Elegant",
            ThemeId::Bold => "Bold",
            ThemeId::Compact => "Compact",
            ThemeId::Nature => "Nature",
            ThemeId::Cyber => "Cyber",
            ThemeId::Newspaper => "Newspaper",
            ThemeId::Terminal => "Terminal",
            ThemeId::Swiss => "Swiss",
            ThemeId::Warm => "Warm",
            ThemeId::Cold => "Cold",
            ThemeId::Outline => "Outline",
        }
    }

    /// Short description of the visual style.
    pub fn blurb(&self) -> &'static str {
        match self {
            ThemeId::Minimalist => "Clean, typography-focused, high contrast.",
            ThemeId::Professional => "Structured, corporate, card-based layout.",
            ThemeId::Creative => "Dark mode, bold accents, modern feel.",
            ThemeId::Modern => "Dark, developer-focused, monospace.",
            ThemeId::Elegant => "Serif fonts, sidebar layout, sophisticated.",
            ThemeId::Bold => "High contrast, massive typography, impactful.",
            ThemeId::Compact => "Dense layout, efficient, grid-based.",
            ThemeId::Nature => "Organic, earth tones, rounded soft feel.",
            ThemeId::Cyber => "Neon, futuristic, hacker aesthetic.",
            ThemeId::Newspaper => "Classic print style, multi-column, serif.",
            ThemeId::Terminal => "Command line interface, green on black.",
            ThemeId::Swiss => "Clean, modernist, red accents, grid.",
            ThemeId::Warm => "Cozy, yellow/orange tones, inviting.",
            ThemeId::Cold => "Crisp, blue/cyan tones, professional.",
            ThemeId::Outline => "Brutalist, wireframe, high contrast borders.",
        }
    }

    /// Look up a theme by its stored identifier.
    ///
    /// Returns None for unrecognized names. Most callers want [`resolve`],
    /// which falls back to the default variant instead.
    ///
    /// [`resolve`]: ThemeId::resolve
    pub fn from_name(name: &str) -> Option<ThemeId> {
        ThemeId::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Resolve a stored identifier to a theme, falling back to the default
    /// variant for unrecognized names.
    pub fn resolve(name: &str) -> ThemeId {
        ThemeId::from_name(name).unwrap_or_default()
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::Minimalist
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ThemeId> for String {
    fn from(theme: ThemeId) -> String {
        theme.as_str().to_string()
    }
}

impl From<String> for ThemeId {
    fn from(name: String) -> ThemeId {
        ThemeId::resolve(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_name() {
        assert_eq!(ThemeId::resolve("professional"), ThemeId::Professional);
        assert_eq!(ThemeId::resolve("cyber"), ThemeId::Cyber);
    }

    #[test]
    fn test_resolve_unknown_name_falls_back() {
        assert_eq!(ThemeId::resolve("vaporwave"), ThemeId::Minimalist);
        assert_eq!(ThemeId::resolve(""), ThemeId::Minimalist);
    }

    #[test]
    fn test_from_name_unknown_is_none() {
        assert_eq!(ThemeId::from_name("vaporwave"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for theme in ThemeId::ALL {
            assert_eq!(ThemeId::from_name(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_serde_unknown_string_falls_back() {
        let theme: ThemeId = serde_json::from_str(r#""retrowave""#).unwrap();
        assert_eq!(theme, ThemeId::Minimalist);

        let json = serde_json::to_string(&ThemeId::Swiss).unwrap();
        assert_eq!(json, r#""swiss""#);
    }
}
