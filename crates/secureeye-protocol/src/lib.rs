//! Record store and dashboard logic for Secure Eye
//!
//! Everything here is synchronous and free of I/O. A [`RecordStore`] is owned
//! by exactly one dashboard controller; the controller turns input messages
//! into [`Mutation`]s, drains the store's events and derives a view.
//!
//! ```
//! use secureeye_protocol::{AdminDashboard, AdminMessage, RecordStore};
//! use secureeye_types::{ApprovalStatus, CameraRecord};
//!
//! let store = RecordStore::with_records([
//!     CameraRecord::new("CAM0001", "Front Door Camera", "123 Main St"),
//! ])?;
//! let mut admin = AdminDashboard::new(store);
//! admin.update(AdminMessage::Approve("CAM0001".into()));
//!
//! assert_eq!(admin.view().rows[0].status, ApprovalStatus::Approved);
//! # Ok::<(), secureeye_types::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod admin;
pub mod dispatcher;
pub mod events;
pub mod filter;
pub mod navigation;
pub mod notice;
pub mod selection;
pub mod store;
pub mod user;

// Re-export commonly used types
pub use admin::{AdminDashboard, AdminDetail, AdminMessage, AdminRow, AdminView, Decision};
pub use dispatcher::{Change, Mutation, Outcome};
pub use events::{StoreEvent, Subscription};
pub use filter::{SearchQuery, filter_records};
pub use navigation::{Navigator, RecordingNavigator, Route};
pub use notice::{Notice, NoticeLevel};
pub use selection::{Commit, SelectedCamera, Selection};
pub use store::{RecordStore, Revision};
pub use user::{UserCard, UserDashboard, UserDetail, UserMessage, UserView};
