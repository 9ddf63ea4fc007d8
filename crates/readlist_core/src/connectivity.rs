//! Passive connectivity mirror.
//!
//! # Responsibility
//! - Track a binary online/offline signal reported by the host layer.
//! - Log transitions for diagnostics.
//!
//! # Invariants
//! - Purely observational; has no effect on store behavior or persistence.
//! - `observe` is a no-op when the state does not change.

use log::info;
use serde::{Deserialize, Serialize};

/// Binary connectivity state mirrored from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityState {
    Online,
    Offline,
}

impl ConnectivityState {
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

/// One-way mirror of an external connectivity signal.
///
/// The host layer probes the initial state at startup and feeds transition
/// events through [`ConnectivityMonitor::observe`]; consumers only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityMonitor {
    state: ConnectivityState,
}

impl ConnectivityMonitor {
    /// Creates a monitor seeded with the host-probed initial state.
    pub fn new(initial: ConnectivityState) -> Self {
        Self { state: initial }
    }

    /// Records a host-reported transition; returns whether the state changed.
    pub fn observe(&mut self, state: ConnectivityState) -> bool {
        if self.state == state {
            return false;
        }

        info!(
            "event=connectivity_change module=connectivity from={:?} to={:?}",
            self.state, state
        );
        self.state = state;
        true
    }

    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    pub fn is_online(&self) -> bool {
        self.state.is_online()
    }
}
