// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

// FIELD ERROR
// ================================================================================================

/// Failure kinds surfaced by fallible field and transform operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Inversion or division was attempted on the zero element.
    #[error("cannot compute the multiplicative inverse of zero")]
    InverseOfZero,

    /// The requested order of a root of unity is not a supported power of two.
    #[error("no primitive root of unity exists for order {0}")]
    NoRootOfUnity(u64),

    /// A transform was attempted on a sequence of unsupported length.
    #[error("sequence length {0} must be a power of two not exceeding 2^32")]
    InvalidLength(usize),

    /// A raw decoder saw a value greater than or equal to the field modulus.
    #[error("value {0} is greater than or equal to the field modulus")]
    NotCanonical(u64),

    /// A field element does not fit into the range of the requested integer type.
    #[error("field element does not fit into the requested integer type")]
    OutOfRange,

    /// A parser was handed an empty string.
    #[error("cannot parse a field element from an empty string")]
    EmptyString,

    /// A decimal parser encountered a non-digit character.
    #[error("invalid decimal digit: {0}")]
    InvalidDigit(char),

    /// A hexadecimal parser encountered a non-digit character.
    #[error("invalid hexadecimal digit: {0}")]
    InvalidHexChar(char),

    /// A parsed magnitude exceeded the supported precision.
    #[error("parsed value exceeds the supported precision")]
    ParseOverflow,

    /// A conversion to the base field was attempted on an extension element with non-zero
    /// higher coefficients.
    #[error("cannot convert an extension element with non-zero higher coefficients")]
    InvalidUnlift,
}
