//! Theme rendering: a pure mapping from profile and theme to a document tree
//!
//! Rendering is total. Every theme handles every well-formed profile and
//! absent data degrades to omitted sections, never an error. Dispatch is an
//! exhaustive match with one handler per theme, so adding a variant is a
//! new branch checked at compile time, not a change to shared logic.

pub mod helpers;
pub mod themes;

use crate::document::{DocumentTree, Node};
use crate::profile::Profile;
use crate::theme::ThemeId;

/// A theme's layout function. Takes the profile read-only and produces the
/// root of the visual tree.
type ThemeFn = fn(&Profile) -> Node;

fn handler(theme: ThemeId) -> ThemeFn {
    match theme {
        ThemeId::Minimalist => themes::minimalist::render,
        ThemeId::Professional => themes::professional::render,
        ThemeId::Creative => themes::creative::render,
        ThemeId::Modern => themes::modern::render,
        ThemeId::Elegant => themes::elegant::render,
        ThemeId::Bold => themes::bold::render,
        ThemeId::Compact => themes::compact::render,
        ThemeId::Nature => themes::nature::render,
        ThemeId::Cyber => themes::cyber::render,
        ThemeId::Newspaper => themes::newspaper::render,
        ThemeId::Terminal => themes::terminal::render,
        ThemeId::Swiss => themes::swiss::render,
        ThemeId::Warm => themes::warm::render,
        ThemeId::Cold => themes::cold::render,
        ThemeId::Outline => themes::outline::render,
    }
}

/// Render a profile under its own stored theme.
pub fn render(profile: &Profile) -> DocumentTree {
    render_with(profile, profile.theme)
}

/// Render a profile under an explicit theme.
pub fn render_with(profile: &Profile, theme: ThemeId) -> DocumentTree {
    DocumentTree {
        theme,
        root: handler(theme)(profile),
    }
}

/// Render a profile under a theme given by name, falling back to the
/// default variant for unrecognized names.
pub fn render_named(profile: &Profile, theme_name: &str) -> DocumentTree {
    render_with(profile, ThemeId::resolve(theme_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_profile_theme() {
        let mut profile = Profile::default();
        profile.theme = ThemeId::Cyber;
        assert_eq!(render(&profile).theme, ThemeId::Cyber);
    }

    #[test]
    fn test_render_named_falls_back_to_default() {
        let profile = Profile::sample();
        let fallback = render_named(&profile, "not-a-theme");
        let default = render_with(&profile, ThemeId::default());
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_every_theme_renders_empty_profile() {
        let profile = Profile::default();
        for theme in ThemeId::ALL {
            let tree = render_with(&profile, theme);
            assert_eq!(tree.theme, theme);
        }
    }
}
