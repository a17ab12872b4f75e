//! Profile record and its mutation operations
//!
//! The profile is a single plain record: scalar contact fields where the
//! empty string is the valid "unset" state, plus ordered lists of skills,
//! experience entries, and project entries. List order is display order.
//! There is no hidden derived state; editors mutate fields directly and
//! rely on the operations here for list membership.

pub mod store;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeId;

/// Uniqueness token for a list entry, assigned at creation and stable for
/// the entry's lifetime. Only used to identify the entry within its own
/// sequence; nothing references entries across lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Default for EntryId {
    fn default() -> Self {
        EntryId(0)
    }
}

impl ProjectEntry {
    /// Rebuild the tag list from a comma-separated input.
    ///
    /// Segments are trimmed but empty segments are retained, so a trailing
    /// comma yields a trailing empty tag. Renderers must tolerate this.
    pub fn set_tags_csv(&mut self, input: &str) {
        self.tags = split_csv(input);
    }
}

/// The resume content for one person.
///
/// Serialized field names match the persisted record shape (`fullName`,
/// `linkedin`, ...). Every field carries a default so partially-shaped
/// stored records still parse field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub theme: ThemeId,
}

impl Profile {
    /// Append a blank experience entry and return its fresh id.
    pub fn add_experience(&mut self) -> EntryId {
        let id = self.next_id();
        self.experience.push(ExperienceEntry {
            id,
            ..ExperienceEntry::default()
        });
        id
    }

    /// Remove an experience entry by id. Returns whether an entry was removed.
    pub fn remove_experience(&mut self, id: EntryId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }

    /// Field-level access to an experience entry by id.
    pub fn experience_mut(&mut self, id: EntryId) -> Option<&mut ExperienceEntry> {
        self.experience.iter_mut().find(|e| e.id == id)
    }

    /// Append a blank project entry and return its fresh id.
    pub fn add_project(&mut self) -> EntryId {
        let id = self.next_id();
        self.projects.push(ProjectEntry {
            id,
            ..ProjectEntry::default()
        });
        id
    }

    /// Remove a project entry by id. Returns whether an entry was removed.
    pub fn remove_project(&mut self, id: EntryId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    /// Field-level access to a project entry by id.
    pub fn project_mut(&mut self, id: EntryId) -> Option<&mut ProjectEntry> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Rebuild the skill list from a comma-separated input.
    ///
    /// Same derivation as project tags: trimmed segments, empties retained.
    pub fn set_skills_csv(&mut self, input: &str) {
        self.skills = split_csv(input);
    }

    /// Successor of the largest id in either entry list.
    ///
    /// Monotonic within a profile, so freshly minted ids never collide even
    /// under rapid insertion.
    fn next_id(&self) -> EntryId {
        let max = self
            .experience
            .iter()
            .map(|e| e.id.0)
            .chain(self.projects.iter().map(|p| p.id.0))
            .max()
            .unwrap_or(0);
        EntryId(max + 1)
    }

    /// A filled-in demo profile for previews and the CLI's `--sample` flag.
    pub fn sample() -> Profile {
        Profile {
            full_name: "Alex Rivera".into(),
            title: "Senior Product Designer".into(),
            bio: "Passionate about creating intuitive and engaging user experiences. \
                  With over 8 years of experience in digital product design, I specialize \
                  in bridging the gap between user needs and business goals. I believe in \
                  data-driven design and the power of empathy to build products that \
                  people love."
                .into(),
            email: "alex.rivera@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            linkedin: "linkedin.com/in/arivera".into(),
            github: "github.com/arivera".into(),
            skills: [
                "Figma",
                "React",
                "TypeScript",
                "UI/UX Design",
                "Prototyping",
                "User Research",
                "Design Systems",
                "Tailwind CSS",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            experience: vec![
                ExperienceEntry {
                    id: EntryId(1),
                    role: "Lead Product Designer".into(),
                    company: "TechFlow Solutions".into(),
                    duration: "2021 - Present".into(),
                    description: "Leading a team of 5 designers. Spearheaded the redesign \
                                  of the core SaaS platform, resulting in a 25% increase in \
                                  user engagement. Implemented a comprehensive design system \
                                  used across 4 products."
                        .into(),
                },
                ExperienceEntry {
                    id: EntryId(2),
                    role: "Senior UI Designer".into(),
                    company: "Creative Pulse Agency".into(),
                    duration: "2018 - 2021".into(),
                    description: "Collaborated with major fintech clients to deliver \
                                  award-winning mobile banking apps. Mentored junior designers \
                                  and established best practices for accessibility compliance."
                        .into(),
                },
            ],
            projects: vec![
                ProjectEntry {
                    id: EntryId(3),
                    name: "E-Commerce Dashboard".into(),
                    description: "A comprehensive analytics dashboard for online retailers, \
                                  featuring real-time data visualization and inventory \
                                  management."
                        .into(),
                    tags: ["UX Research", "Figma", "React"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
                ProjectEntry {
                    id: EntryId(4),
                    name: "HealthTrack App".into(),
                    description: "Mobile application for tracking daily fitness and \
                                  nutrition, integrated with wearable devices."
                        .into(),
                    tags: ["Mobile Design", "Prototyping", "iOS"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
            ],
            theme: ThemeId::Professional,
        }
    }
}

/// Split a comma-separated input into trimmed segments.
///
/// Empty segments are retained as empty strings, matching the editor's
/// derivation rule. The empty input yields a single empty segment.
pub fn split_csv(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let profile = Profile::default();
        assert_eq!(profile.full_name, "");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.projects.is_empty());
        assert_eq!(profile.theme, ThemeId::Minimalist);
    }

    #[test]
    fn test_add_experience_mints_fresh_ids() {
        let mut profile = Profile::default();
        let a = profile.add_experience();
        let b = profile.add_experience();
        assert_ne!(a, b);
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].role, "");
    }

    #[test]
    fn test_ids_unique_across_lists() {
        let mut profile = Profile::default();
        let exp = profile.add_experience();
        let proj = profile.add_project();
        assert_ne!(exp, proj);
    }

    #[test]
    fn test_remove_by_id() {
        let mut profile = Profile::default();
        let a = profile.add_experience();
        let b = profile.add_experience();
        assert!(profile.remove_experience(a));
        assert!(!profile.remove_experience(a));
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].id, b);
    }

    #[test]
    fn test_update_field_by_id() {
        let mut profile = Profile::default();
        let id = profile.add_project();
        profile.project_mut(id).unwrap().name = "CLI toolkit".into();
        assert_eq!(profile.projects[0].name, "CLI toolkit");
        assert!(profile.project_mut(EntryId(999)).is_none());
    }

    #[test]
    fn test_split_csv_trims_and_keeps_empties() {
        assert_eq!(split_csv("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_csv("a, b, "), vec!["a", "b", ""]);
        assert_eq!(split_csv(""), vec![""]);
    }

    #[test]
    fn test_set_tags_csv() {
        let mut project = ProjectEntry::default();
        project.set_tags_csv("Rust, wasm,");
        assert_eq!(project.tags, vec!["Rust", "wasm", ""]);
    }

    #[test]
    fn test_partial_record_parses_with_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"fullName":"Sam Park","skills":["Go"]}"#).unwrap();
        assert_eq!(profile.full_name, "Sam Park");
        assert_eq!(profile.skills, vec!["Go"]);
        assert_eq!(profile.theme, ThemeId::Minimalist);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let json = serde_json::to_string(&Profile::sample()).unwrap();
        assert!(json.contains(r#""fullName":"Alex Rivera""#));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Profile::sample());
    }
}
