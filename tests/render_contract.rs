//! Contract tests for the theme renderers
//!
//! The visual styling differs per theme, but the data-exposure rules are
//! shared: pure re-rendering, empty-field suppression, total and
//! order-preserving list rendering, stable per-item keys, and default
//! fallback for unknown theme names.

use pretty_assertions::assert_eq;

use quickresume::document::{NodeKey, Tag};
use quickresume::{render_named, render_with, EntryId, ExperienceEntry, Profile, ProjectEntry, ThemeId};

fn listed_profile() -> Profile {
    let mut profile = Profile::default();
    profile.full_name = "Jane Doe".into();
    profile.skills = vec!["Go".into(), "Rust".into(), "TypeScript".into()];
    profile.experience = vec![
        ExperienceEntry {
            id: EntryId(10),
            role: "First Role".into(),
            company: "Acme".into(),
            duration: "2020".into(),
            description: "Did things".into(),
        },
        ExperienceEntry {
            id: EntryId(11),
            role: "Second Role".into(),
            company: "Initech".into(),
            duration: "2021".into(),
            description: "Did more things".into(),
        },
    ];
    profile.projects = vec![ProjectEntry {
        id: EntryId(12),
        name: "Flagship".into(),
        description: "Shipped it".into(),
        tags: vec!["first-tag".into(), "second-tag".into()],
    }];
    profile
}

#[test]
fn rendering_twice_is_structurally_identical() {
    let profile = Profile::sample();
    for theme in ThemeId::ALL {
        assert_eq!(
            render_with(&profile, theme),
            render_with(&profile, theme),
            "theme {theme} is not pure"
        );
    }
}

#[test]
fn empty_contact_fields_leave_no_stray_separator() {
    let mut profile = Profile::default();
    profile.full_name = "Jane Doe".into();
    profile.phone = "555-0100".into();
    // email and location stay empty

    for theme in ThemeId::ALL {
        let tree = render_with(&profile, theme);
        for text in tree.texts() {
            assert_ne!(text, "|", "stray separator under theme {theme}");
        }
    }

    // The minimalist contact row shows the phone and nothing else.
    let tree = render_with(&profile, ThemeId::Minimalist);
    assert!(tree.contains_text("555-0100"));
}

#[test]
fn separator_appears_only_between_present_fields() {
    let mut profile = Profile::default();
    profile.phone = "555-0100".into();
    profile.email = "jane@example.com".into();

    let tree = render_with(&profile, ThemeId::Minimalist);
    let separators = tree.select(|n| n.text.as_deref() == Some("|"));
    assert_eq!(separators.len(), 1);
}

#[test]
fn lists_render_totally_and_in_order_under_every_theme() {
    let profile = listed_profile();

    for theme in ThemeId::ALL {
        let tree = render_with(&profile, theme);
        let joined = tree.texts().join("\n");

        for needle in ["Go", "Rust", "TypeScript", "First Role", "Second Role", "Flagship"] {
            assert_eq!(
                joined.matches(needle).count(),
                1,
                "{needle:?} should appear exactly once under theme {theme}"
            );
        }

        let go = joined.find("Go").unwrap();
        let rust = joined.find("Rust").unwrap();
        let ts = joined.find("TypeScript").unwrap();
        assert!(go < rust && rust < ts, "skill order broken under theme {theme}");

        let first = joined.find("First Role").unwrap();
        let second = joined.find("Second Role").unwrap();
        assert!(first < second, "experience order broken under theme {theme}");

        let tag_a = joined.find("first-tag");
        let tag_b = joined.find("second-tag");
        if let (Some(a), Some(b)) = (tag_a, tag_b) {
            assert!(a < b, "tag order broken under theme {theme}");
        }
    }
}

#[test]
fn minimalist_decomposes_descriptions_into_bullets() {
    let mut profile = Profile::default();
    profile.experience = vec![ExperienceEntry {
        id: EntryId(1),
        role: "Engineer".into(),
        company: String::new(),
        duration: String::new(),
        description: "Led the team. Shipped v2.\nImproved latency.".into(),
    }];

    let tree = render_with(&profile, ThemeId::Minimalist);
    let items: Vec<_> = tree
        .select(|n| n.tag == Tag::Item)
        .into_iter()
        .filter_map(|n| n.text.clone())
        .collect();
    assert_eq!(items, vec!["Led the team.", "Shipped v2.", "Improved latency."]);
}

#[test]
fn other_themes_keep_descriptions_as_flowing_text() {
    let mut profile = Profile::default();
    profile.experience = vec![ExperienceEntry {
        id: EntryId(1),
        description: "Led the team. Shipped v2.".into(),
        ..ExperienceEntry::default()
    }];

    let tree = render_with(&profile, ThemeId::Professional);
    assert!(tree.contains_text("Led the team. Shipped v2."));
    assert!(tree.select(|n| n.tag == Tag::Item).is_empty());
}

#[test]
fn unknown_theme_name_renders_as_default() {
    let profile = Profile::sample();
    let fallback = render_named(&profile, "sparkle-pop");
    let default = render_with(&profile, ThemeId::Minimalist);
    assert_eq!(fallback, default);
}

#[test]
fn entry_nodes_are_keyed_by_id_under_every_theme() {
    let profile = listed_profile();

    for theme in ThemeId::ALL {
        let tree = render_with(&profile, theme);
        for id in [10, 11, 12] {
            let keyed = tree.select(|n| n.key == NodeKey::Entry(id));
            assert_eq!(keyed.len(), 1, "entry {id} not keyed once under theme {theme}");
        }
    }
}

#[test]
fn skill_chips_are_keyed_by_position() {
    let profile = listed_profile();
    let tree = render_with(&profile, ThemeId::Professional);

    for (i, skill) in profile.skills.iter().enumerate() {
        let keyed = tree.select(|n| n.key == NodeKey::Index(i) && n.text.as_deref() == Some(skill));
        assert_eq!(keyed.len(), 1, "skill {skill:?} not keyed at {i}");
    }
}

#[test]
fn rendering_does_not_mutate_the_profile() {
    let profile = listed_profile();
    let before = profile.clone();
    for theme in ThemeId::ALL {
        let _ = render_with(&profile, theme);
    }
    assert_eq!(profile, before);
}

#[test]
fn empty_lists_render_without_failing() {
    let mut profile = Profile::default();
    profile.full_name = "Jane Doe".into();

    for theme in ThemeId::ALL {
        let tree = render_with(&profile, theme);
        assert!(tree.select(|n| n.tag == Tag::Item).is_empty());
        // The cyber theme uppercases the display name.
        let joined = tree.texts().join("\n").to_lowercase();
        assert!(joined.contains("jane doe"), "name missing under theme {theme}");
    }
}
