//! Error types shared by every fallible operation in the crate.

use thiserror::Error;

use crate::shapes::ShapeKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A named shape parameter was not supplied at creation time.
    #[error("missing parameter `{name}` for {kind} shape")]
    MissingParameter { kind: ShapeKind, name: &'static str },

    /// A shape or body parameter is outside its valid range.
    #[error("invalid value {value} for parameter `{name}`")]
    InvalidParameter { name: &'static str, value: f32 },

    /// The shape kind cannot be used for this kind of body.
    #[error("{0} shapes cannot be rigid bodies")]
    UnsupportedBodyKind(ShapeKind),

    /// A contact was built from two references to the same body.
    #[error("contact created from a single body (index {body})")]
    SelfContact { body: usize },

    /// The combined inverse mass of a contact is zero or not finite.
    #[error("degenerate inverse mass sum {inv_mass_sum} for contact")]
    DegenerateMass { inv_mass_sum: f32 },

    /// No contact or overlap routine exists for this pair of shape kinds.
    #[error("unsupported shape pair {a} / {b}")]
    UnsupportedPair { a: ShapeKind, b: ShapeKind },

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl PhysicsError {
    /// Invariant violations abort the current step; everything else is a
    /// recoverable error reported back to the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PhysicsError::SelfContact { .. }
                | PhysicsError::DegenerateMass { .. }
                | PhysicsError::UnsupportedPair { .. }
        )
    }
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
