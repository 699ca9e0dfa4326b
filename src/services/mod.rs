//! Business operations driven by the binaries.

/// Administrative store maintenance.
pub mod admin_service;
/// Thumbnail lookup and webhook announcement.
pub mod announcer;
/// CSV catalog import.
pub mod catalog_service;
/// Orchestration of a single picker run.
pub mod picker_service;
/// Weighted selection policy.
pub mod selection;
