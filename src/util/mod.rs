//! Browser helpers shared by the app shell and pages.

pub mod navigation;
