//! Session journal: the chat-log stand-in.
//!
//! Roll results, attribute rises, and notes are appended as structured
//! entries and rendered on export, so presentation never leaks into
//! the mechanics layer.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
