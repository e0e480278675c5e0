//! Domain entities: core data structures

/// A specific portfolio audience: who the portfolio is being tailored for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceProfile {
    /// Display name, e.g. "Hiring Managers"
    pub name: String,
    /// What this audience cares about, in display order
    pub priorities: Vec<String>,
    /// Portfolio sections to surface for this audience, in display order
    pub highlight_sections: Vec<String>,
}

impl AudienceProfile {
    pub fn new(
        name: impl Into<String>,
        priorities: Vec<String>,
        highlight_sections: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            priorities,
            highlight_sections,
        }
    }

    /// Classify this profile by name match.
    pub fn kind(&self) -> AudienceKind {
        AudienceKind::from_name(&self.name)
    }
}

/// The known audience categories.
///
/// Profiles are matched by exact name; everything else lands on
/// `Collaborators`, the general-audience default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceKind {
    HiringManagers,
    FellowshipCommittees,
    Collaborators,
}

impl AudienceKind {
    /// Map an audience name to its kind.
    ///
    /// Unrecognized names (including the empty string) take the
    /// `Collaborators` branch. This is the intentional catch-all, not an
    /// error path: unknown audiences get the general collaboration advice.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Hiring Managers" => Self::HiringManagers,
            "Fellowship Committees" => Self::FellowshipCommittees,
            _ => Self::Collaborators,
        }
    }

    /// Canonical display name for the built-in profile of this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HiringManagers => "Hiring Managers",
            Self::FellowshipCommittees => "Fellowship Committees",
            Self::Collaborators => "Collaborators",
        }
    }
}

/// A concrete suggestion for tailoring the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Short imperative headline
    pub heading: String,
    /// Supporting points, in display order
    pub talking_points: Vec<String>,
    /// The single suggested next action
    pub call_to_action: String,
}

impl Recommendation {
    pub fn new(
        heading: impl Into<String>,
        talking_points: Vec<String>,
        call_to_action: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            talking_points,
            call_to_action: call_to_action.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_names_when_classifying_then_exact_match() {
        assert_eq!(
            AudienceKind::from_name("Hiring Managers"),
            AudienceKind::HiringManagers
        );
        assert_eq!(
            AudienceKind::from_name("Fellowship Committees"),
            AudienceKind::FellowshipCommittees
        );
    }

    #[test]
    fn given_unknown_name_when_classifying_then_falls_back_to_collaborators() {
        assert_eq!(
            AudienceKind::from_name("Collaborators"),
            AudienceKind::Collaborators
        );
        assert_eq!(AudienceKind::from_name(""), AudienceKind::Collaborators);
        assert_eq!(
            AudienceKind::from_name("hiring managers"), // case-sensitive
            AudienceKind::Collaborators
        );
    }

    #[test]
    fn given_profile_when_asking_kind_then_delegates_to_name() {
        let profile = AudienceProfile::new("Fellowship Committees", vec![], vec![]);
        assert_eq!(profile.kind(), AudienceKind::FellowshipCommittees);
    }
}
