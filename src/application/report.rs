//! Plain-text report rendering.
//!
//! The layout is fixed and must stay byte-stable: downstream notes and the
//! landing-page selector are checked against this exact format.

use std::io::{self, Write};

use itertools::Itertools;
use tracing::debug;

use crate::domain::{build_recommendations, AudienceProfile, Recommendation};

/// Width of the `=` separator line printed after each profile.
pub const SEPARATOR_WIDTH: usize = 60;

/// Format one profile and its recommendations as a human-readable summary.
///
/// Layout: audience header, `- ` priority bullets, blank line, `  • ` section
/// bullets, blank line, numbered recommendation blocks joined with a single
/// newline (no blank line between blocks). Empty sequences render as empty
/// blocks.
pub fn render_profile(profile: &AudienceProfile, recommendations: &[Recommendation]) -> String {
    let priorities_block = profile
        .priorities
        .iter()
        .map(|priority| format!("- {priority}"))
        .join("\n");

    let sections_block = profile
        .highlight_sections
        .iter()
        .map(|section| format!("  • {section}"))
        .join("\n");

    let recommendations_block = recommendations
        .iter()
        .enumerate()
        .map(|(index, rec)| {
            let talking_points = rec
                .talking_points
                .iter()
                .map(|point| format!("      - {point}"))
                .join("\n");
            format!(
                "{}. {}\n{}\n      → Next step: {}",
                index + 1,
                rec.heading,
                talking_points,
                rec.call_to_action
            )
        })
        .join("\n");

    format!(
        "Audience: {}\nPriorities:\n{}\n\nSuggested sections:\n{}\n\nRecommendations:\n{}",
        profile.name, priorities_block, sections_block, recommendations_block
    )
}

/// Render the full report for a sequence of profiles, separators included.
pub fn render_report(profiles: &[AudienceProfile]) -> String {
    let mut out = Vec::new();
    // Vec<u8> writes cannot fail
    write_report(profiles, &mut out).expect("in-memory write");
    String::from_utf8(out).expect("report is valid UTF-8")
}

/// Write the report for each profile, followed by a separator (blank line,
/// 60 `=` characters, blank line). The separator also follows the last
/// profile.
pub fn write_report(profiles: &[AudienceProfile], out: &mut impl Write) -> io::Result<()> {
    for profile in profiles {
        debug!("rendering profile: {}", profile.name);
        let recommendations = build_recommendations(profile);
        writeln!(out, "{}", render_profile(profile, &recommendations))?;
        writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
    }
    Ok(())
}
