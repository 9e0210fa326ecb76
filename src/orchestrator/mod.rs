//! Download orchestration glue.
//!
//! The orchestrator itself (queueing, transport, de-duplication) is an
//! external collaborator; this module carries its consumed contract, the
//! completion channel that feeds finished variants back onto the owner
//! thread, and the process-wide broadcast signal consumers re-poll on.

mod pump;
mod signal;
mod types;

pub use pump::CompletionPump;
pub use signal::DownloadNotifier;
pub use types::{completion_channel, CompletionSender, DownloadOrchestrator, DownloadRequest, VariantReady};
