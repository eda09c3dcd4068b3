// -----------------------------------------------------------------------------
// Modules

mod extends;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use extends::Extends;
pub use reflect::Reflect;
