//! Meeting minutes compiler for IRC-style transcripts.
//!
//! The [`minutes`] module holds the transcript compiler and its renderers;
//! everything else is the thin layer that loads rosters and configuration,
//! wraps the output in a page, and composes outbound messages.

pub mod cli;
pub mod config;
pub mod error;
pub mod global;
pub mod minutes;
pub mod publish;
pub mod roster;

pub use error::{Result, ScrawlError};
pub use minutes::{Compiler, MeetingContext, Minutes, OutputMode, Settings};
pub use roster::{AliasIndex, Participant, Roster};
