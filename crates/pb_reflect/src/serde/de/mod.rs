// -----------------------------------------------------------------------------
// Modules

mod driver;
mod processor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::DeserializeDriver;
pub use processor::DeserializeProcessor;
