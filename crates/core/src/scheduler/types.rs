//! Identifiers and errors shared by the timeout table and the
//! high-frequency loop request.

use core::fmt;

/// Maximum number of components that can hold a scheduler handle
///
/// Bounded by the width of the high-frequency requester mask.
pub const MAX_COMPONENTS: u8 = 32;

/// Handle identifying one component instance to the scheduler
///
/// Deferred callbacks are keyed by this handle plus a [`TimeoutId`] instead
/// of capturing the component, so two clamps on the same board never see
/// each other's deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(u8);

impl ComponentId {
    /// Create a handle, `None` if `id >= MAX_COMPONENTS`
    pub const fn new(id: u8) -> Option<Self> {
        if id < MAX_COMPONENTS {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Bit used in requester masks
    pub(crate) const fn mask(self) -> u32 {
        1 << self.0
    }
}

/// Fixed set of deferred operations a component can arm
///
/// Declaration order is the tie-break when two timeouts share a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeoutId {
    /// End of the sampling window
    CloseWindow,
    /// Periodic trigger that opens a sampling window
    Update,
}

impl TimeoutId {
    /// Short name used in log output
    pub const fn name(self) -> &'static str {
        match self {
            TimeoutId::Update => "update",
            TimeoutId::CloseWindow => "read",
        }
    }
}

/// Errors from the deferred timeout table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// No free slot for a new timeout
    QueueFull,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::QueueFull => write!(f, "timeout queue full"),
        }
    }
}
