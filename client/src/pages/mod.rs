//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod create;
pub(crate) mod floor_workspace;
pub mod home;
pub(crate) mod home_content;
pub mod tables;
