//! Conversion between reflected values and [`Value`](crate::value::Value) trees.
//!
//! # Overview
//!
//! - [`SerializeDriver`]: walks a value against its declared type and emits a
//!   tree, writing a type tag where the runtime type must be recorded.
//! - [`DeserializeDriver`]: rebuilds a value from a tree, resolving type tags
//!   through the [`Binder`](crate::binder::Binder) and matching constructors.
//! - [`SerializeProcessor`] / [`DeserializeProcessor`]: per-value hooks that
//!   replace the default walk.
//! - [`Settings`]: per-call options; [`SettingsConfig`] is their loadable form.
//!
//! Both drivers are stateless between calls. Each call walks the tree
//! recursively and fails with [`ErrorKind::DepthLimitExceeded`] past
//! [`Settings::max_depth`], which bounds stack use on untrusted input.
//!
//! With the `debug` feature, every error records the path of the failing
//! node, e.g. `$.g.x`.
//!
//! [`ErrorKind::DepthLimitExceeded`]: crate::error::ErrorKind::DepthLimitExceeded

// -----------------------------------------------------------------------------
// Modules

mod config;
mod de;
mod ser;
mod settings;
mod value_path;

// -----------------------------------------------------------------------------
// Exports

pub use config::SettingsConfig;
pub use de::{DeserializeDriver, DeserializeProcessor};
pub use ser::{SerializeDriver, SerializeProcessor};
pub use settings::{Settings, TypeTagging};
