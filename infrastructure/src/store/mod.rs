//! File-backed implementation of the
//! [`DiscussionStore`](roundtable_application::DiscussionStore) port.

mod json_file;

pub use json_file::JsonFileStore;
