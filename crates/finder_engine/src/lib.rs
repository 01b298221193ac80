//! Finder engine: HTTP lookup client and background effect execution.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, LookupBackend, ReqwestBackend};
pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, Generation, LookupError};
