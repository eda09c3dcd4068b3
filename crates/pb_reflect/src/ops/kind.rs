use crate::info::ReflectKind;
use crate::ops::{List, Map, OptionValue, PolyValue, Scalar, Struct, Tuple};

/// An immutable, kind-specific view of a reflected value.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Tuple(&'a dyn Tuple),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Option(&'a dyn OptionValue),
    Poly(&'a dyn PolyValue),
    Scalar(&'a dyn Scalar),
}

/// A mutable, kind-specific view of a reflected value.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Tuple(&'a mut dyn Tuple),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Option(&'a mut dyn OptionValue),
    Poly(&'a mut dyn PolyValue),
    Scalar(&'a mut dyn Scalar),
}

impl ReflectRef<'_> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Tuple(_) => ReflectKind::Tuple,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Poly(_) => ReflectKind::Poly,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }
}

impl ReflectMut<'_> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Tuple(_) => ReflectKind::Tuple,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Poly(_) => ReflectKind::Poly,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }
}
