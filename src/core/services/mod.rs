//! Business logic services
//!
//! - [`classifier`] - Partition lines into kept and useless
//! - [`moderation`] - Reject, accept or edit plugin request issues
//! - [`plugin_maker`] - Normalize and submit plugin requests
//! - [`codegen`] - Render a C plugin from extracted setter calls

pub mod classifier;
pub mod codegen;
pub mod moderation;
pub mod plugin_maker;

pub use classifier::{classify, classify_text};
pub use codegen::render_plugin_source;
pub use moderation::{ModerationAction, ModerationReport, Moderator, plan_moderation, review};
pub use plugin_maker::{PluginMaker, SubmitOutcome, SubmitState, Submission, normalize_settings};
