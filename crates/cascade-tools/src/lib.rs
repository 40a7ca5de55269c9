//! Process bootstrap shared by the `get_rts`, `get_users_of_cascade` and
//! `unique_times` binaries.

pub mod bootstrap;
