//! Small containers shared by the `polybind` crates.
//!
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId) that never rehashes the id.
//! - [`hash`]: fixed-seed and pass-through hashers plus the map/set aliases built on them.
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
