mod default;

pub use default::TypeTraitDefault;
