// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{errors::FieldError, field::goldilocks::BaseElement};

// FIELD ELEMENT
// ================================================================================================

/// Defines an element of a finite field built on top of [`BaseElement`].
///
/// This trait captures the minimal algebraic surface shared by the base field and its cubic
/// extension: ring operations among elements of the same type, multiplication by a base field
/// element, and inversion. The number-theoretic transforms are generic over this trait; their
/// twiddle factors stay in the base field regardless of the element type being transformed.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Neg<Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Multiplies this element by a base field element.
    fn mul_base(self, rhs: BaseElement) -> Self;

    /// Returns the multiplicative inverse of this element.
    ///
    /// # Errors
    /// Returns [`FieldError::InverseOfZero`] if this element is zero.
    fn inverse(self) -> Result<Self, FieldError>;

    /// Returns a primitive root of unity of order `n`; orders 0 and 1 map to the identity.
    ///
    /// # Errors
    /// Returns [`FieldError::NoRootOfUnity`] if `n` is not a power of two or exceeds $2^{32}$.
    fn primitive_root_of_unity(n: u64) -> Result<Self, FieldError>;

    /// Returns this element raised to power 2.
    #[inline]
    fn square(self) -> Self {
        self * self
    }

    /// Returns true if this element is the additive identity.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns true if this element is the multiplicative identity.
    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Returns the multiplicative inverse of this element, or zero if this element is zero.
    fn inverse_or_zero(self) -> Self {
        match self.inverse() {
            Ok(inverse) => inverse,
            Err(_) => Self::ZERO,
        }
    }

    /// Raises this element to the power `exponent`.
    ///
    /// Exponentiation runs most-significant-bit first with the bit length of the exponent
    /// determined up front; `0^0` yields the identity.
    fn mod_pow_u64(self, exponent: u64) -> Self {
        let mut acc = Self::ONE;
        let bit_length = u64::BITS - exponent.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = acc.square();
            if exponent & (1 << i) != 0 {
                acc *= self;
            }
        }
        acc
    }

    /// Raises this element to the power `exponent`; equivalent to [`Self::mod_pow_u64`] with a
    /// zero-extended exponent.
    fn mod_pow_u32(self, exponent: u32) -> Self {
        self.mod_pow_u64(exponent as u64)
    }

    /// Returns the elements of the cyclic group generated by this element.
    ///
    /// The sequence starts at the identity and stops when the running product returns to the
    /// identity or when it reaches `max` elements. The zero element yields `[ZERO]`.
    fn cyclic_group_elements(self, max: Option<usize>) -> Vec<Self> {
        if self.is_zero() {
            return vec![Self::ZERO];
        }

        let mut elements = vec![Self::ONE];
        let mut current = self;
        while !current.is_one() && max.map_or(true, |max| elements.len() < max) {
            elements.push(current);
            current *= self;
        }
        elements
    }
}
