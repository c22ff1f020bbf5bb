//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic so
//! the rendering code stays a pure function of the catalog.

pub mod nav;
