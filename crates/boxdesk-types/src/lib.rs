//! Record types shared by every boxdesk crate
//!
//! Boxes and devices as served by the record store, the typed device patch
//! used for optimistic edits, and the request bodies sent back to the
//! ticketing backend.

#![forbid(unsafe_code)]

pub mod model;
pub mod patch;
pub mod wire;

pub use model::{Assignee, BoxId, BoxRecord, Device, DeviceId, ParseStatusError, Status, UNASSIGNED};
pub use patch::DevicePatch;
pub use wire::{AssigneeUpdate, BoxStatusUpdate, TicketUpdate};
