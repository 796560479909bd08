// Application layer: script replay and summary rendering on top of the core.

pub mod replay;
pub mod report;

pub use replay::{ReplayOutcome, ScriptRunner, SkippedEvent};
pub use report::{render_summary, OutputFormat};
