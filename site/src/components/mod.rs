//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `actions` holds the clickable primitives, `blocks` maps a record slice to
//! one block per record, and the remaining modules are the catalog sections
//! built on those two. Sections take their records as props; only pages read
//! the catalog from context.

pub mod actions;
pub mod blocks;
pub mod investigators;
pub mod publications;
pub mod sponsor_strip;
pub mod team_grid;
pub mod toolkit;
