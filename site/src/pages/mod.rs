//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the catalog from context and arranges the section
//! components from `components`. Pages hold no state; a route change renders
//! the next page from scratch.

pub mod home;
pub mod not_found;
pub mod tool;
