//! Fixed-modulus view of a binary field GF(2^m).
//!
//! A [`Field`] binds one irreducible modulus to an output integer width and is
//! then reused for any number of operations. Elements are plain integers of
//! that width; arithmetic is carried out on 64-bit polynomials internally.

use core::fmt;
use core::marker::PhantomData;

use crate::algebra::word::Word;
use crate::error::GaloisError;
use crate::structures::element::FieldElement;
use crate::structures::poly::{Polynomial, GENERATOR};
use crate::structures::primes::{field_order, supported_degree};

/// A finite field of polynomials modulo an irreducible polynomial, handing
/// out elements as `W`.
///
/// # Example
///
/// ```
/// use gf2m::{Field, PRIME_POLYNOMIAL_DEGREE_8};
///
/// let gf256 = Field::<u8>::new(PRIME_POLYNOMIAL_DEGREE_8).unwrap();
///
/// let product = gf256.mul(&[0xBC, 0xDE]);
/// assert_eq!(product, 0x6D);
/// assert_eq!(gf256.div(product, 0xBC).unwrap(), 0xDE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<W: Word> {
    modulus: Polynomial,
    _word: PhantomData<W>,
}

impl<W: Word> Field<W> {
    /// Create the field generated by `modulus`.
    ///
    /// `modulus` should be irreducible; this is trusted, not checked.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::UnsupportedDegree`] if `modulus` has degree 0 or
    /// above 32, and [`GaloisError::WidthTooSmall`] if `W` cannot represent
    /// every element of the field.
    pub fn new(modulus: Polynomial) -> Result<Self, GaloisError> {
        let degree = supported_degree(modulus)?;

        // The largest element is 2^degree - 1.
        if field_order(modulus) > W::MAX {
            #[cfg(feature = "tracing")]
            tracing::warn!(degree, bits = W::BITS, "element width too small for field");
            return Err(GaloisError::WidthTooSmall {
                degree,
                bits: W::BITS,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(modulus = modulus.bits(), degree, bits = W::BITS, "created field");

        Ok(Self {
            modulus,
            _word: PhantomData,
        })
    }

    /// The irreducible modulus of the field.
    pub const fn modulus(&self) -> Polynomial {
        self.modulus
    }

    /// Degree `m` of the modulus, for a field of order `2^m`.
    pub const fn degree(&self) -> u32 {
        self.modulus.degree()
    }

    /// Number of elements in the field, including zero.
    pub const fn order(&self) -> u64 {
        1 << self.modulus.degree()
    }

    #[inline]
    fn reduce(&self, value: W) -> Polynomial {
        value.to_polynomial().div_rem_unchecked(self.modulus).1
    }

    /// Returns `x^exponent`, with the exponent taken modulo `order() - 1`.
    ///
    /// Exponents `0..order() - 1` produce every nonzero element exactly once.
    pub fn generate(&self, exponent: u64) -> W {
        let exponent = exponent % field_order(self.modulus);
        let base = GENERATOR.div_rem_unchecked(self.modulus).1;
        W::from_polynomial(base.pow_reduced(exponent, self.modulus))
    }

    /// Sum of the given elements. Returns zero for an empty slice.
    ///
    /// Addition and subtraction coincide, since coefficients are added modulo
    /// two.
    pub fn add(&self, values: &[W]) -> W {
        let sum = values
            .iter()
            .fold(Polynomial::ZERO, |acc, v| acc + v.to_polynomial());
        W::from_polynomial(sum)
    }

    /// Product of the given elements, multiplied left to right.
    ///
    /// Returns zero for an empty slice (not one), and zero as soon as any
    /// operand is zero.
    pub fn mul(&self, values: &[W]) -> W {
        if values.is_empty() || values.contains(&W::ZERO) {
            return W::ZERO;
        }

        let product = values.iter().fold(Polynomial::ONE, |acc, &v| {
            acc.mul_reduced(self.reduce(v), self.modulus)
        });
        W::from_polynomial(product)
    }

    /// Multiplicative inverse of `y`, via the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `y` is zero.
    ///
    /// # Panics
    ///
    /// Panics if the modulus turns out not to be irreducible.
    pub fn inverse(&self, y: W) -> Result<W, GaloisError> {
        let inverse = self.reduce(y).inverse_mod(self.modulus)?;
        Ok(W::from_polynomial(inverse))
    }

    /// Divide `numerator` by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `denominator` is zero.
    pub fn div(&self, numerator: W, denominator: W) -> Result<W, GaloisError> {
        let inverse = self.inverse(denominator)?;
        Ok(self.mul(&[numerator, inverse]))
    }

    /// Raise `base` to the power `exponent`.
    ///
    /// The exponent is reduced modulo the multiplicative group order
    /// `order() - 1`. An exponent of zero returns one for every base.
    pub fn pow(&self, base: W, exponent: u64) -> W {
        if exponent == 0 {
            return W::ONE;
        }

        let base = self.reduce(base);
        if base.is_zero() {
            return W::ZERO;
        }

        let exponent = exponent % field_order(self.modulus);
        W::from_polynomial(base.pow_reduced(exponent, self.modulus))
    }

    /// Iterate over every nonzero element as `x^0, x^1, ..., x^(order - 2)`.
    pub fn nonzero_elements(&self) -> NonzeroElements<W> {
        NonzeroElements {
            modulus: self.modulus,
            generator: GENERATOR.div_rem_unchecked(self.modulus).1,
            current: Polynomial::ONE,
            remaining: field_order(self.modulus),
            _word: PhantomData,
        }
    }

    /// Wrap `value` as a [`FieldElement`] carrying this field's modulus.
    pub fn element(&self, value: W) -> FieldElement {
        FieldElement::from_reduced(self.reduce(value), self.modulus)
    }

    /// Sample a uniformly random element, zero included.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> W {
        W::from_polynomial(Polynomial::new(rng.gen_range(0..self.order())))
    }
}

impl<W: Word> fmt::Debug for Field<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("modulus", &format_args!("{}", self.modulus))
            .field("bits", &W::BITS)
            .finish()
    }
}

impl<W: Word> fmt::Display for Field<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod ({})", self.degree(), self.modulus)
    }
}

/// Iterator over the nonzero elements of a [`Field`] in generator order.
///
/// Created by [`Field::nonzero_elements`].
#[derive(Clone, Debug)]
pub struct NonzeroElements<W: Word> {
    modulus: Polynomial,
    generator: Polynomial,
    current: Polynomial,
    remaining: u64,
    _word: PhantomData<W>,
}

impl<W: Word> Iterator for NonzeroElements<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let item = self.current;
        self.current = self.current.mul_reduced(self.generator, self.modulus);
        Some(W::from_polynomial(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
