//! Shared data model for Boolean and tri-state netlists.
//!
//! This crate has no knowledge of transformation, partitioning, or
//! encoding; it only defines the wire/gate/netlist types every other
//! crate in the workspace builds on, and the leaf error type they all
//! wrap.

mod error;
mod gate;
mod netlist;
mod wire;

pub use error::CoreError;
pub use gate::{BoolGateKind, BoolGate, TriGateKind, TriGate};
pub use netlist::{BoolNetlist, TriNetlist};
pub use wire::{WireAllocator, WireId};
