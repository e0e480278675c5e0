//! Tests for report rendering and the end-to-end output stream

use tailor::application::{render_profile, render_report, write_report, SEPARATOR_WIDTH};
use tailor::domain::{build_recommendations, builtin_profile, default_profiles, AudienceKind};

fn separator() -> String {
    format!("\n{}\n\n", "=".repeat(SEPARATOR_WIDTH))
}

#[test]
fn given_hiring_managers_when_rendering_then_starts_with_expected_header() {
    let profile = builtin_profile(AudienceKind::HiringManagers);
    let rendered = render_profile(&profile, &build_recommendations(&profile));

    let expected_prefix = "Audience: Hiring Managers\nPriorities:\n- Proof of measurable impact\n- Evidence of cross-functional collaboration\n- Fast onboarding to regulated spaces\n\nSuggested sections:\n  • Impact dashboards\n";
    assert!(rendered.starts_with(expected_prefix));
}

#[test]
fn given_hiring_managers_when_rendering_then_exactly_two_numbered_blocks() {
    let profile = builtin_profile(AudienceKind::HiringManagers);
    let rendered = render_profile(&profile, &build_recommendations(&profile));

    assert!(rendered.contains("\nRecommendations:\n1. "));
    assert!(rendered.contains("\n2. "));
    assert!(!rendered.contains("\n3. "));
}

#[test]
fn given_collaborators_when_rendering_then_byte_exact() {
    let profile = builtin_profile(AudienceKind::Collaborators);
    let rendered = render_profile(&profile, &build_recommendations(&profile));

    let expected = "\
Audience: Collaborators
Priorities:
- Shared values
- Co-creation practices
- Accessible onboarding

Suggested sections:
  • Collaboration roadmap
  • Tooling preferences
  • Care and accessibility agreements

Recommendations:
1. Invite collaboration
      - State the experiments or pilots where you want feedback right now.
      - Share tooling preferences and working rhythms to ease onboarding.
      → Next step: Embed a quick intake form for partners.
2. Document community care
      - Outline how you compensate or support collaborators.
      - List safety protocols or accessibility commitments you maintain.
      → Next step: Publish a lightweight memorandum of understanding template.";

    assert_eq!(rendered, expected);
}

#[test]
fn given_recommendation_blocks_when_rendering_then_joined_with_single_newline() {
    let profile = builtin_profile(AudienceKind::FellowshipCommittees);
    let rendered = render_profile(&profile, &build_recommendations(&profile));

    // No blank line between block 1's next step and block 2's heading.
    assert!(rendered.contains("outcomes.\n2. Highlight scholarly rigor"));
}

#[test]
fn given_rendering_twice_then_deterministic() {
    let profile = builtin_profile(AudienceKind::FellowshipCommittees);
    let recs = build_recommendations(&profile);
    assert_eq!(render_profile(&profile, &recs), render_profile(&profile, &recs));
    assert_eq!(
        render_report(&default_profiles()),
        render_report(&default_profiles())
    );
}

#[test]
fn given_default_profiles_when_writing_then_three_blocks_and_three_separators() {
    let mut out = Vec::new();
    write_report(&default_profiles(), &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(report.matches("Audience: ").count(), 3);
    assert_eq!(report.matches(&separator()).count(), 3);
    // Separator follows the last profile too.
    assert!(report.ends_with(&separator()));
}

#[test]
fn given_default_profiles_when_writing_then_fixed_audience_order() {
    let report = render_report(&default_profiles());

    let hiring = report.find("Audience: Hiring Managers").unwrap();
    let fellowship = report.find("Audience: Fellowship Committees").unwrap();
    let collaborators = report.find("Audience: Collaborators").unwrap();
    assert!(hiring < fellowship);
    assert!(fellowship < collaborators);
}

#[test]
fn given_single_profile_when_writing_then_rendered_text_plus_separator() {
    let profile = builtin_profile(AudienceKind::HiringManagers);
    let rendered = render_profile(&profile, &build_recommendations(&profile));

    let report = render_report(std::slice::from_ref(&profile));
    assert_eq!(report, format!("{rendered}\n{}", separator()));
}
