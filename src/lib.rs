//! QuickResume - a form-driven resume and portfolio builder core
//!
//! This library maintains a structured [`Profile`] record and renders it
//! through one of fifteen visual themes into a [`DocumentTree`], which can
//! be realized as HTML markup, exported as a standalone snapshot page, or
//! paginated into a raster PDF.
//!
//! Rendering is a pure function of the profile and the selected theme:
//! no side effects, no external state, and unknown theme names fall back
//! to the default variant.
//!
//! # Example
//!
//! ```rust
//! use quickresume::{render_with, Profile, ThemeId};
//!
//! let mut profile = Profile::default();
//! profile.full_name = "Ada Lovelace".to_string();
//!
//! let tree = render_with(&profile, ThemeId::Minimalist);
//! assert!(tree.contains_text("Ada Lovelace"));
//!
//! let html = quickresume::html::realize(&tree);
//! assert!(html.contains("Ada Lovelace"));
//! ```

pub mod document;
pub mod enhance;
pub mod export;
pub mod html;
pub mod profile;
pub mod render;
pub mod theme;

pub use document::{DocumentTree, Node, NodeKey, Tag};
pub use export::{ExportConfig, ExportError};
pub use profile::store::{ProfileStore, StoreError};
pub use profile::{EntryId, ExperienceEntry, Profile, ProjectEntry};
pub use render::{render, render_named, render_with};
pub use theme::ThemeId;
