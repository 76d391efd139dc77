//! High-frequency loop requests.
//!
//! While any component holds a request, the host loop should service
//! components at least every [`HIGH_FREQUENCY_POLL_US`] instead of idling
//! until the next deadline.

use super::types::ComponentId;

/// Poll interval promised while a high-frequency request is active
pub const HIGH_FREQUENCY_POLL_US: u64 = 550;

/// Start/stop interface a component uses to ask for more loop attention.
pub trait HighFrequencyRequest {
    /// Begin requesting. A second `start` from the same owner has no effect.
    fn start(&mut self, owner: ComponentId);

    /// Release the request. Harmless if `owner` never started.
    fn stop(&mut self, owner: ComponentId);
}

/// Requester set shared by all components on one loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighFrequencyLoop {
    requesters: u32,
}

impl HighFrequencyLoop {
    pub const fn new() -> Self {
        Self { requesters: 0 }
    }

    /// Whether any component currently wants high-frequency servicing
    pub fn is_requested(&self) -> bool {
        self.requesters != 0
    }

    /// Number of active requesters
    pub fn active_count(&self) -> u32 {
        self.requesters.count_ones()
    }

    pub fn is_active(&self, owner: ComponentId) -> bool {
        self.requesters & owner.mask() != 0
    }
}

impl HighFrequencyRequest for HighFrequencyLoop {
    fn start(&mut self, owner: ComponentId) {
        self.requesters |= owner.mask();
    }

    fn stop(&mut self, owner: ComponentId) {
        self.requesters &= !owner.mask();
    }
}
