//! Field elements that carry their own modulus.

use core::fmt;

use crate::error::GaloisError;
use crate::structures::poly::{Polynomial, GENERATOR};
use crate::structures::primes::{field_order, supported_degree};

/// A single element of a binary field, bundled with the modulus of that field.
///
/// Useful when a function must accept elements whose modulus is not known
/// statically. The value is always reduced: it is zero or of degree strictly
/// below the modulus. Combining elements of different fields fails with
/// [`GaloisError::ModulusMismatch`] instead of computing a meaningless value.
///
/// # Example
///
/// ```
/// use gf2m::{FieldElement, Polynomial, PRIME_POLYNOMIAL_DEGREE_8};
///
/// let a = FieldElement::new(Polynomial::new(0xBC), PRIME_POLYNOMIAL_DEGREE_8).unwrap();
/// let b = FieldElement::new(Polynomial::new(0xDE), PRIME_POLYNOMIAL_DEGREE_8).unwrap();
///
/// let c = a.try_mul(&b).unwrap();
/// assert_eq!(c.value(), Polynomial::new(0x6D));
/// assert_eq!(c.try_div(&a).unwrap(), b);
///
/// let inv = a.inverse().unwrap();
/// assert!(a.try_mul(&inv).unwrap().is_one());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFieldElement")
)]
pub struct FieldElement {
    modulus: Polynomial,
    value: Polynomial,
}

impl FieldElement {
    /// Create an element from any polynomial, reducing it modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::UnsupportedDegree`] if `modulus` has degree 0 or
    /// above 32.
    pub fn new(value: Polynomial, modulus: Polynomial) -> Result<Self, GaloisError> {
        supported_degree(modulus)?;
        Ok(Self::from_reduced(value.div_rem_unchecked(modulus).1, modulus))
    }

    /// Create the element `x^exponent`, with the exponent taken modulo
    /// `field_order(modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::UnsupportedDegree`] if `modulus` has degree 0 or
    /// above 32.
    pub fn generate(exponent: u64, modulus: Polynomial) -> Result<Self, GaloisError> {
        supported_degree(modulus)?;
        let exponent = exponent % field_order(modulus);
        let base = GENERATOR.div_rem_unchecked(modulus).1;
        Ok(Self::from_reduced(base.pow_reduced(exponent, modulus), modulus))
    }

    /// Sample a uniformly random element of the field, zero included.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::UnsupportedDegree`] if `modulus` has degree 0 or
    /// above 32.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(
        modulus: Polynomial,
        rng: &mut R,
    ) -> Result<Self, GaloisError> {
        let degree = supported_degree(modulus)?;
        let value = rng.gen_range(0..(1u64 << degree));
        Ok(Self::from_reduced(Polynomial::new(value), modulus))
    }

    /// Callers guarantee `modulus` is supported and `value` is reduced.
    pub(crate) const fn from_reduced(value: Polynomial, modulus: Polynomial) -> Self {
        Self { modulus, value }
    }

    /// The zero element of the same field as `self`.
    pub const fn zero_like(&self) -> Self {
        Self::from_reduced(Polynomial::ZERO, self.modulus)
    }

    /// The one element of the same field as `self`.
    pub const fn one_like(&self) -> Self {
        Self::from_reduced(Polynomial::ONE, self.modulus)
    }

    /// The reduced polynomial value.
    pub const fn value(&self) -> Polynomial {
        self.value
    }

    pub const fn modulus(&self) -> Polynomial {
        self.modulus
    }

    /// Check if this is the additive identity.
    pub const fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if this is the multiplicative identity.
    pub const fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn check_same_modulus(&self, other: &Self) -> Result<(), GaloisError> {
        if self.modulus != other.modulus {
            return Err(GaloisError::ModulusMismatch {
                lhs: self.modulus,
                rhs: other.modulus,
            });
        }
        Ok(())
    }

    /// Sum of two elements of the same field.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::ModulusMismatch`] if the moduli differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, GaloisError> {
        self.check_same_modulus(other)?;
        Ok(Self::from_reduced(self.value + other.value, self.modulus))
    }

    /// Product of two elements of the same field.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::ModulusMismatch`] if the moduli differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self, GaloisError> {
        self.check_same_modulus(other)?;
        if other.is_one() {
            return Ok(*self);
        }
        if self.is_one() {
            return Ok(*other);
        }

        let value = self.value.mul_reduced(other.value, self.modulus);
        Ok(Self::from_reduced(value, self.modulus))
    }

    /// Multiplicative inverse, via the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `self` is zero.
    ///
    /// # Panics
    ///
    /// Panics if the modulus turns out not to be irreducible.
    pub fn inverse(&self) -> Result<Self, GaloisError> {
        let inverse = self.value.inverse_mod(self.modulus)?;
        Ok(Self::from_reduced(inverse, self.modulus))
    }

    /// Divide `self` by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::ModulusMismatch`] if the moduli differ, checked
    /// first, and [`GaloisError::DivisionByZero`] if `denominator` is zero.
    pub fn try_div(&self, denominator: &Self) -> Result<Self, GaloisError> {
        self.check_same_modulus(denominator)?;
        self.try_mul(&denominator.inverse()?)
    }

    /// Raise `self` to the power `exponent`.
    ///
    /// The exponent is reduced modulo `field_order(modulus)`. An exponent of
    /// zero returns one, for the zero element too.
    pub fn pow(&self, exponent: u64) -> Self {
        if exponent == 0 {
            return self.one_like();
        }
        if self.is_zero() {
            return *self;
        }

        let exponent = exponent % field_order(self.modulus);
        Self::from_reduced(self.value.pow_reduced(exponent, self.modulus), self.modulus)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:#b} mod {:#b})", self.value, self.modulus)
    }
}

/// Renders as `<value> mod <modulus>` in standard polynomial form.
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod {}", self.value, self.modulus)
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        subtle::ConstantTimeEq::ct_eq(&self.modulus, &other.modulus)
            & subtle::ConstantTimeEq::ct_eq(&self.value, &other.value)
    }
}

/// Wire form of a [`FieldElement`]; validated and reduced on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFieldElement {
    modulus: Polynomial,
    value: Polynomial,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldElement> for FieldElement {
    type Error = GaloisError;

    fn try_from(raw: RawFieldElement) -> Result<Self, Self::Error> {
        FieldElement::new(raw.value, raw.modulus)
    }
}
