//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};

use crate::domain::AudienceKind;

/// Portfolio tailoring advisor: audience-specific recommendations for case studies and application packets
#[derive(Parser, Debug)]
#[command(name = "tailor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Restrict the report to one audience (default: all three)
    #[arg(value_enum)]
    pub audience: Option<AudienceArg>,

    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}

/// Audience selectable on the command line.
///
/// This is the closed set of built-in audiences; clap rejects anything else
/// at parse time, so the domain-level name fallback is never reached from
/// here.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceArg {
    /// People screening you for a role
    HiringManagers,
    /// Committees reviewing a fellowship application
    FellowshipCommittees,
    /// Peers and partners you want to build with
    Collaborators,
}

impl From<AudienceArg> for AudienceKind {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::HiringManagers => AudienceKind::HiringManagers,
            AudienceArg::FellowshipCommittees => AudienceKind::FellowshipCommittees,
            AudienceArg::Collaborators => AudienceKind::Collaborators,
        }
    }
}
