//! Scripted content enhancement
//!
//! The "enhance" features are deterministic text transforms over stock
//! phrasing, not a model. Marker substrings keep the transforms
//! idempotent: a description that already carries its stock sentence is
//! left alone. At most one enhancement is outstanding at a time; the
//! [`Enhancer`] session enforces the disabled-trigger contract without a
//! global lock, and a begun session can complete or be cancelled.

use rand::Rng;
use thiserror::Error;

use crate::profile::Profile;

/// Stock bios for the rewrite operation.
pub const ENHANCED_BIOS: [&str; 3] = [
    "A visionary Senior Product Designer dedicated to crafting seamless digital experiences. \
     I leverage a deep understanding of human-computer interaction to solve complex problems \
     and deliver elegant, user-centric solutions that drive business growth.",
    "Results-oriented Product Designer with a proven track record of transforming abstract \
     concepts into polished, market-ready products. Expert in design systems and agile \
     methodologies, I thrive in fast-paced environments where innovation is key.",
    "Creative and analytical Senior Designer specializing in building scalable design systems \
     and intuitive interfaces. I combine aesthetic excellence with functional precision to \
     create products that not only look great but work perfectly.",
];

const BIO_MARKER: &str = "innovative technology solutions";
const BIO_TAIL: &str = " Passionate about driving business growth through innovative \
                        technology solutions and user-centric design.";
const BIO_FALLBACK: &str = "A dedicated professional with a focus on delivering high-quality \
                            results and continuous improvement.";

const EXPERIENCE_MARKER: &str = "efficiency";
const EXPERIENCE_TAIL: &str =
    " Successfully optimized workflows to improve team efficiency by 20%.";
const EXPERIENCE_FALLBACK: &str = "Led key initiatives and collaborated with cross-functional \
                                   teams to deliver project goals on time.";

const PROJECT_MARKER: &str = "scalable";
const PROJECT_TAIL: &str = " Built using modern best practices and scalable architecture to \
                            ensure long-term maintainability.";
const PROJECT_FALLBACK: &str =
    "Designed and developed a comprehensive solution addressing core user needs.";

/// Which enhancement a session will apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceKind {
    /// Polish the bio and every entry description with stock phrasing.
    Polish,
    /// Replace the bio with one of the stock bios.
    RewriteBio,
}

/// Errors from the enhancement session guard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("an enhancement is already in progress")]
    Busy,
}

/// Append the stock tail unless its marker is already present; substitute
/// the fallback when the text is empty.
fn polish_field(text: &str, marker: &str, tail: &str, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else if text.contains(marker) {
        text.to_string()
    } else {
        format!("{}{}", text.trim_end(), tail)
    }
}

/// Polish the bio and all entry descriptions in place. Deterministic and
/// idempotent: applying it twice changes nothing further.
pub fn polish(profile: &mut Profile) {
    profile.bio = polish_field(&profile.bio, BIO_MARKER, BIO_TAIL, BIO_FALLBACK);
    for exp in &mut profile.experience {
        exp.description = polish_field(
            &exp.description,
            EXPERIENCE_MARKER,
            EXPERIENCE_TAIL,
            EXPERIENCE_FALLBACK,
        );
    }
    for proj in &mut profile.projects {
        proj.description = polish_field(
            &proj.description,
            PROJECT_MARKER,
            PROJECT_TAIL,
            PROJECT_FALLBACK,
        );
    }
}

/// Replace the bio with one of the stock bios. Selection is the only
/// randomized step; callers pass the RNG so tests control it.
pub fn rewrite_bio<R: Rng>(profile: &mut Profile, rng: &mut R) {
    let pick = rng.random_range(0..ENHANCED_BIOS.len());
    profile.bio = ENHANCED_BIOS[pick].to_string();
}

/// Single in-flight session guard for enhancement operations.
///
/// `begin` rejects while a session is outstanding, mirroring the disabled
/// trigger control; everything else stays live. A session either
/// completes, applying its transform, or is cancelled and applies nothing.
/// There is no timeout path.
#[derive(Debug, Default)]
pub struct Enhancer {
    pending: Option<EnhanceKind>,
}

impl Enhancer {
    /// Create an idle enhancer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a session. Fails while another is outstanding.
    pub fn begin(&mut self, kind: EnhanceKind) -> Result<(), EnhanceError> {
        if self.pending.is_some() {
            return Err(EnhanceError::Busy);
        }
        self.pending = Some(kind);
        Ok(())
    }

    /// Apply the pending transform and clear the session. Returns the kind
    /// that was applied, or None when no session was outstanding.
    pub fn complete<R: Rng>(
        &mut self,
        profile: &mut Profile,
        rng: &mut R,
    ) -> Option<EnhanceKind> {
        let kind = self.pending.take()?;
        match kind {
            EnhanceKind::Polish => polish(profile),
            EnhanceKind::RewriteBio => rewrite_bio(profile, rng),
        }
        Some(kind)
    }

    /// Drop the pending session without applying anything.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_polish_appends_stock_sentences() {
        let mut profile = Profile::sample();
        polish(&mut profile);
        assert!(profile.bio.contains(BIO_MARKER));
        for exp in &profile.experience {
            assert!(exp.description.contains(EXPERIENCE_MARKER));
        }
        for proj in &profile.projects {
            assert!(proj.description.contains(PROJECT_MARKER));
        }
    }

    #[test]
    fn test_polish_is_idempotent() {
        let mut profile = Profile::sample();
        polish(&mut profile);
        let once = profile.clone();
        polish(&mut profile);
        assert_eq!(profile, once);
    }

    #[test]
    fn test_polish_fills_empty_fields() {
        let mut profile = Profile::default();
        profile.add_experience();
        profile.add_project();
        polish(&mut profile);
        assert_eq!(profile.bio, BIO_FALLBACK);
        assert_eq!(profile.experience[0].description, EXPERIENCE_FALLBACK);
        assert_eq!(profile.projects[0].description, PROJECT_FALLBACK);
    }

    #[test]
    fn test_rewrite_bio_picks_a_stock_bio() {
        let mut profile = Profile::sample();
        let mut rng = StdRng::seed_from_u64(7);
        rewrite_bio(&mut profile, &mut rng);
        assert!(ENHANCED_BIOS.contains(&profile.bio.as_str()));
    }

    #[test]
    fn test_enhancer_rejects_second_begin() {
        let mut enhancer = Enhancer::new();
        enhancer.begin(EnhanceKind::Polish).unwrap();
        assert!(enhancer.is_busy());
        assert_eq!(enhancer.begin(EnhanceKind::RewriteBio), Err(EnhanceError::Busy));
    }

    #[test]
    fn test_enhancer_complete_applies_and_frees() {
        let mut enhancer = Enhancer::new();
        let mut profile = Profile::default();
        let mut rng = StdRng::seed_from_u64(7);

        enhancer.begin(EnhanceKind::Polish).unwrap();
        assert_eq!(
            enhancer.complete(&mut profile, &mut rng),
            Some(EnhanceKind::Polish)
        );
        assert_eq!(profile.bio, BIO_FALLBACK);
        assert!(!enhancer.is_busy());
        assert_eq!(enhancer.complete(&mut profile, &mut rng), None);
    }

    #[test]
    fn test_enhancer_cancel_leaves_profile_untouched() {
        let mut enhancer = Enhancer::new();
        let mut profile = Profile::sample();
        let before = profile.clone();

        enhancer.begin(EnhanceKind::RewriteBio).unwrap();
        enhancer.cancel();
        assert!(!enhancer.is_busy());
        assert_eq!(profile, before);
        // The guard is free again after cancellation.
        enhancer.begin(EnhanceKind::Polish).unwrap();
    }
}
