use crate::request::LookupRequest;
use crate::state::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch exactly one lookup against the backend. The completion must
    /// echo `generation` so stale responses can be discarded.
    DispatchLookup {
        generation: Generation,
        endpoint: &'static str,
        request: LookupRequest,
    },
}
