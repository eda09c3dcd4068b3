// -----------------------------------------------------------------------------
// Modules

mod driver;
mod processor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;
pub use processor::SerializeProcessor;
