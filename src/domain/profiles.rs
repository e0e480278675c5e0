//! Built-in audience profiles
//!
//! The three profiles are compiled-in literals; the tool takes no external
//! profile input.

use crate::domain::entities::{AudienceKind, AudienceProfile};

fn profile(name: &str, priorities: &[&str], highlight_sections: &[&str]) -> AudienceProfile {
    AudienceProfile::new(
        name,
        priorities.iter().map(|p| p.to_string()).collect(),
        highlight_sections.iter().map(|s| s.to_string()).collect(),
    )
}

/// The built-in profile for one audience kind.
pub fn builtin_profile(kind: AudienceKind) -> AudienceProfile {
    match kind {
        AudienceKind::HiringManagers => profile(
            "Hiring Managers",
            &[
                "Proof of measurable impact",
                "Evidence of cross-functional collaboration",
                "Fast onboarding to regulated spaces",
            ],
            &[
                "Impact dashboards",
                "Rapid experimentation logs",
                "Trust & safety response playbooks",
            ],
        ),
        AudienceKind::FellowshipCommittees => profile(
            "Fellowship Committees",
            &[
                "Alignment with program mission",
                "Scholarly rigor",
                "Community reciprocity",
            ],
            &[
                "Theory of change",
                "Long-term research narratives",
                "Community testimonials",
            ],
        ),
        AudienceKind::Collaborators => profile(
            "Collaborators",
            &[
                "Shared values",
                "Co-creation practices",
                "Accessible onboarding",
            ],
            &[
                "Collaboration roadmap",
                "Tooling preferences",
                "Care and accessibility agreements",
            ],
        ),
    }
}

/// All built-in profiles in report order:
/// Hiring Managers, Fellowship Committees, Collaborators.
pub fn default_profiles() -> Vec<AudienceProfile> {
    vec![
        builtin_profile(AudienceKind::HiringManagers),
        builtin_profile(AudienceKind::FellowshipCommittees),
        builtin_profile(AudienceKind::Collaborators),
    ]
}
