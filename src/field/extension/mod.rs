// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A cubic extension of the base field defined by the irreducible polynomial $x^3 - x + 1$.

use core::{
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::FieldError,
    field::{goldilocks::BaseElement, traits::FieldElement},
};

// CUBIC EXTENSION ELEMENT
// ================================================================================================

/// Represents an element of the cubic extension of the base field.
///
/// An element is a polynomial $c_0 + c_1 x + c_2 x^2$ over the base field, with arithmetic
/// performed modulo $x^3 - x + 1$.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeExtension(BaseElement, BaseElement, BaseElement);

impl CubeExtension {
    /// Returns a new extension element with the provided coefficients of $1$, $x$, and $x^2$.
    pub const fn new(c0: BaseElement, c1: BaseElement, c2: BaseElement) -> Self {
        Self(c0, c1, c2)
    }

    /// Returns an extension element with the constant coefficient set to `element` and the
    /// two higher coefficients set to zero.
    pub const fn new_const(element: BaseElement) -> Self {
        Self(element, BaseElement::ZERO, BaseElement::ZERO)
    }

    /// Returns the coefficients of this element, constant coefficient first.
    pub const fn to_base_elements(self) -> [BaseElement; 3] {
        [self.0, self.1, self.2]
    }

    /// Projects this element back into the base field.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidUnlift`] if the coefficients of $x$ or $x^2$ are non-zero.
    pub fn unlift(self) -> Result<BaseElement, FieldError> {
        if self.1.is_zero() && self.2.is_zero() {
            Ok(self.0)
        } else {
            Err(FieldError::InvalidUnlift)
        }
    }
}

impl BaseElement {
    /// Embeds this element into the cubic extension field.
    pub const fn lift(self) -> CubeExtension {
        CubeExtension::new_const(self)
    }
}

impl FieldElement for CubeExtension {
    const ZERO: Self = Self::new(BaseElement::ZERO, BaseElement::ZERO, BaseElement::ZERO);
    const ONE: Self = Self::new(BaseElement::ONE, BaseElement::ZERO, BaseElement::ZERO);

    #[inline]
    fn mul_base(self, rhs: BaseElement) -> Self {
        Self(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }

    fn inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::InverseOfZero);
        }

        let Self(c0, c1, c2) = self;

        // first column of the adjugate of the multiplication-by-self matrix; multiplying self
        // by this triple leaves the field norm in the constant coefficient and zeroes the rest
        let d0 = (c0 + c2).square() - c1 * (c1 - c2);
        let d1 = -(c0 * c1 + c2.square());
        let d2 = c1.square() - c2 * (c0 + c2);

        let norm = c0 * d0 - c2 * d1 - c1 * d2;
        let norm_inv = norm.inverse()?;

        Ok(Self(d0 * norm_inv, d1 * norm_inv, d2 * norm_inv))
    }

    fn primitive_root_of_unity(n: u64) -> Result<Self, FieldError> {
        let root = BaseElement::primitive_root_of_unity(n)?;
        Ok(Self::new_const(root))
    }
}

impl Display for CubeExtension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for CubeExtension {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl AddAssign for CubeExtension {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for CubeExtension {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl SubAssign for CubeExtension {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for CubeExtension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let Self(c0, c1, c2) = self;
        let Self(f0, f1, f2) = rhs;

        // multiply out to degree 4 and reduce with x^3 = x - 1 and x^4 = x^2 - x
        Self(
            c0 * f0 - c2 * f1 - c1 * f2,
            c1 * f0 + c0 * f1 + c2 * f1 + c1 * f2 - c2 * f2,
            c2 * f0 + c1 * f1 + c0 * f2 + c2 * f2,
        )
    }
}

impl MulAssign for CubeExtension {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Div for CubeExtension {
    type Output = Self;

    // panics on a zero divisor, like the integer Div impls in std; the recoverable path
    // is FieldElement::inverse()
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        match rhs.inverse() {
            Ok(inverse) => self * inverse,
            Err(_) => panic!("division by a zero field element"),
        }
    }
}

impl DivAssign for CubeExtension {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for CubeExtension {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0, -self.1, -self.2)
    }
}

// MIXED BASE FIELD OPERATORS
// ------------------------------------------------------------------------------------------------

impl Add<BaseElement> for CubeExtension {
    type Output = Self;

    #[inline]
    fn add(self, rhs: BaseElement) -> Self {
        Self(self.0 + rhs, self.1, self.2)
    }
}

impl Sub<BaseElement> for CubeExtension {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: BaseElement) -> Self {
        Self(self.0 - rhs, self.1, self.2)
    }
}

impl Mul<BaseElement> for CubeExtension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: BaseElement) -> Self {
        self.mul_base(rhs)
    }
}

impl MulAssign<BaseElement> for CubeExtension {
    #[inline]
    fn mul_assign(&mut self, rhs: BaseElement) {
        *self = self.mul_base(rhs);
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<BaseElement> for CubeExtension {
    fn from(element: BaseElement) -> Self {
        Self::new_const(element)
    }
}

// TESTS
// ================================================================================================
