//! State Management
//!
//! Notices and the in-flight request count shared by every page.

pub mod app;

pub use app::{provide_app_state, use_app_state, Notice, NoticeKind};
