//! Optimistic editing and snapshot loading for the boxdesk dashboard
//!
//! The remote record store is reached through the [`RecordStore`] trait.
//! Edits are applied locally first and rolled back when the store refuses
//! them; see [`BoxSession`] and [`Optimistic`]. This crate has no async
//! runtime of its own and runs in the browser as well as on the server.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions, clippy::significant_drop_tightening)]

pub mod error;
pub mod loader;
pub mod mock;
pub mod optimistic;
pub mod session;
pub mod store;
pub mod view;

pub use error::{SyncError, SyncResult};
pub use loader::{LoadState, load_snapshot};
pub use mock::{MockRecordStore, StoreCall};
pub use optimistic::{EditId, EditOutcome, EditStatus, Optimistic, PendingEdit};
pub use session::{AssigneeEdit, BoxSession, DeviceEdit, StatusEdit, submit_tickets};
pub use store::{RecordStore, endpoints};
pub use view::DashboardState;
