//! Collaborator prompt services
//!
//! This module provides:
//! - The `AssetSelect` and `PercentInput` service traits
//! - A terminal-backed implementation of both
//! - Asset → underlying-reference translation
//!
//! Feature modules interact exclusively through the traits; the
//! terminal implementation is wired in by the binary entry point
//! and replaced by scripted fakes in tests.

pub mod assets;
pub mod percent;
pub mod terminal;

pub use assets::{AssetSelect, translate_asset_to_underlying};
pub use percent::PercentInput;
pub use terminal::TerminalPrompter;
