//! Portfolio tailoring advisor.
//!
//! Maps a fixed set of audience profiles (hiring managers, fellowship
//! committees, collaborators) to canned recommendation records and renders
//! them as a plain-text report. The output mirrors the audience selector on
//! the landing page and acts as a lightweight content planning tool before
//! revising a case study or application packet.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;
