//! Crate-level error types.

use std::fmt;

use crate::shape::ShapeClass;

/// Errors produced by the netfold crate.
#[derive(Debug)]
pub enum NetError {
    /// The shape has no planar net (sphere).
    NonDevelopable(ShapeClass),
    /// A shape identifier did not name any known shape.
    UnknownShape(String),
    /// A segmented shape was configured with an unusable segment count.
    InvalidSegmentCount {
        /// Shape being built.
        shape: ShapeClass,
        /// Requested number of lateral segments.
        count: u32,
        /// Which rule the count violates.
        reason: &'static str,
    },
    /// A dimension was zero, negative or not finite.
    InvalidDimension {
        /// Option name of the offending dimension.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// Piece parent links do not form a single rooted tree.
    MalformedHingeTree(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDevelopable(shape) => {
                write!(f, "{shape} has no planar net")
            }
            Self::UnknownShape(name) => write!(f, "unknown shape: {name:?}"),
            Self::InvalidSegmentCount {
                shape,
                count,
                reason,
            } => {
                write!(f, "invalid {shape} segment count {count}: {reason}")
            }
            Self::InvalidDimension { name, value } => {
                write!(f, "invalid dimension {name} = {value}")
            }
            Self::MalformedHingeTree(msg) => {
                write!(f, "malformed hinge tree: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = NetError::InvalidSegmentCount {
            shape: ShapeClass::Cylinder,
            count: 14,
            reason: "must divide 360 evenly",
        };
        assert_eq!(
            err.to_string(),
            "invalid cylinder segment count 14: must divide 360 evenly"
        );
        assert_eq!(
            NetError::NonDevelopable(ShapeClass::Sphere).to_string(),
            "sphere has no planar net"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;
        let err = NetError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
    }
}
