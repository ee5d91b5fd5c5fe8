//! cowsay: cowfile parsing and speech/thought bubble rendering.
//!
//! The pipeline is: raw cowfile → [`template::extract`] → [`ArtBody`];
//! mood/overrides → [`Face`]; message → [`Message`] → [`Bubble`];
//! finally [`format_cow`] substitutes the face into the art and stacks the
//! bubble on top. [`Cowsay`] bundles these steps for a single render.

pub mod bubble;
mod cow;
mod error;
pub mod face;
pub mod library;
pub mod message;
pub mod template;

pub use bubble::{build_speech, build_thought, Bubble, BubbleKind};
pub use cow::{format_cow, Cowsay};
pub use error::{CowError, Result};
pub use face::{is_known_mode, preset_for, Face, Mood};
pub use library::{CowLibrary, DEFAULT_COW};
pub use message::{longest_line, wrap, Message, DEFAULT_WRAP};
pub use template::{extract, ArtBody, ArtPart, CowTemplate, Placeholder, TemplateResource};

// Test utilities
pub mod test_support;
