use alloc::string::String;
#[cfg(feature = "debug")]
use alloc::vec::Vec;

/// One step from a value to a nested value.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment {
    Member(&'static str),
    Index(usize),
}

/// The path from the root to the node being walked, e.g. `$.member7.x`.
///
/// Only recorded with the `debug` feature; otherwise every operation is a
/// no-op and errors carry no location.
#[derive(Debug, Default)]
pub(crate) struct ValuePath {
    #[cfg(feature = "debug")]
    segments: Vec<Segment>,
}

impl ValuePath {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, segment: Segment) {
        #[cfg(feature = "debug")]
        self.segments.push(segment);
        #[cfg(not(feature = "debug"))]
        let _ = segment;
    }

    #[inline]
    pub fn pop(&mut self) {
        #[cfg(feature = "debug")]
        self.segments.pop();
    }

    /// Renders the path, or an empty string when paths are not recorded.
    pub fn render(&self) -> String {
        #[cfg(feature = "debug")]
        {
            use core::fmt::Write;

            let mut out = String::from("$");
            for segment in &self.segments {
                let _ = match segment {
                    Segment::Member(name) => write!(out, ".{name}"),
                    Segment::Index(index) => write!(out, "[{index}]"),
                };
            }
            out
        }
        #[cfg(not(feature = "debug"))]
        String::new()
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::{Segment, ValuePath};

    #[test]
    fn render() {
        let mut path = ValuePath::new();
        assert_eq!(path.render(), "$");
        path.push(Segment::Member("e"));
        path.push(Segment::Index(2));
        path.push(Segment::Member("x"));
        assert_eq!(path.render(), "$.e[2].x");
        path.pop();
        assert_eq!(path.render(), "$.e[2]");
    }
}
