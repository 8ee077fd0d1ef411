//! Standard irreducible polynomials for binary fields GF(2^n), n = 2..=32.
//!
//! Each constant is a primitive trinomial or pentanomial, so `x` generates the
//! whole multiplicative group of the resulting field. They are trusted, not
//! checked at runtime.

use crate::error::GaloisError;
use crate::structures::poly::Polynomial;

/// Number of nonzero elements in the field generated by `modulus`, i.e. the
/// order of its multiplicative group: `2^degree - 1`.
///
/// Assumes `modulus` is irreducible.
///
/// # Example
///
/// ```
/// use gf2m::{field_order, PRIME_POLYNOMIAL_DEGREE_8};
///
/// assert_eq!(field_order(PRIME_POLYNOMIAL_DEGREE_8), 255);
/// ```
pub const fn field_order(modulus: Polynomial) -> u64 {
    (1u64 << modulus.degree()) - 1
}

pub const PRIME_POLYNOMIAL_DEGREE_2: Polynomial = Polynomial::new(0b111); // x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_3: Polynomial = Polynomial::new(0b1011); // x^3 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_4: Polynomial = Polynomial::new(0b1_0011); // x^4 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_5: Polynomial = Polynomial::new(0b10_0101); // x^5 + x^2 + 1
pub const PRIME_POLYNOMIAL_DEGREE_6: Polynomial = Polynomial::new(0b100_0011); // x^6 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_7: Polynomial = Polynomial::new(0b1000_0011); // x^7 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_8: Polynomial = Polynomial::new(0b1_0001_1101); // x^8 + x^4 + x^3 + x^2 + 1
pub const PRIME_POLYNOMIAL_DEGREE_9: Polynomial = Polynomial::new(0b10_0001_0001); // x^9 + x^4 + 1
pub const PRIME_POLYNOMIAL_DEGREE_10: Polynomial = Polynomial::new(0b100_0000_1001); // x^10 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_11: Polynomial = Polynomial::new(0b1000_0000_0101); // x^11 + x^2 + 1
pub const PRIME_POLYNOMIAL_DEGREE_12: Polynomial = Polynomial::new(0b1_0000_0101_0011); // x^12 + x^6 + x^4 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_13: Polynomial = Polynomial::new(0b10_0000_0001_1011); // x^13 + x^4 + x^3 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_14: Polynomial = Polynomial::new(0b100_0001_0100_0011); // x^14 + x^8 + x^6 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_15: Polynomial = Polynomial::new(0b1000_0000_0000_0011); // x^15 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_16: Polynomial = Polynomial::new(0b1_0001_0000_0000_1011); // x^16 + x^12 + x^3 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_17: Polynomial = Polynomial::new(0b10_0000_0000_0000_1001); // x^17 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_18: Polynomial = Polynomial::new(0b100_0000_0000_1000_0001); // x^18 + x^7 + 1
pub const PRIME_POLYNOMIAL_DEGREE_19: Polynomial = Polynomial::new(0b1000_0000_0000_0010_0111); // x^19 + x^5 + x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_20: Polynomial = Polynomial::new(0b1_0000_0000_0000_0000_1001); // x^20 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_21: Polynomial = Polynomial::new(0b10_0000_0000_0000_0000_0101); // x^21 + x^2 + 1
pub const PRIME_POLYNOMIAL_DEGREE_22: Polynomial = Polynomial::new(0b100_0000_0000_0000_0000_0011); // x^22 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_23: Polynomial = Polynomial::new(0b1000_0000_0000_0000_0010_0001); // x^23 + x^5 + 1
pub const PRIME_POLYNOMIAL_DEGREE_24: Polynomial = Polynomial::new(0b1_0000_0000_0000_0000_1000_0111); // x^24 + x^7 + x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_25: Polynomial = Polynomial::new(0b10_0000_0000_0000_0000_0000_1001); // x^25 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_26: Polynomial = Polynomial::new(0b100_0000_0000_0000_0000_0100_0111); // x^26 + x^6 + x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_27: Polynomial = Polynomial::new(0b1000_0000_0000_0000_0000_0010_0111); // x^27 + x^5 + x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_28: Polynomial = Polynomial::new(0b1_0000_0000_0000_0000_0000_0000_1001); // x^28 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_29: Polynomial = Polynomial::new(0b10_0000_0000_0000_0000_0000_0000_0101); // x^29 + x^2 + 1
pub const PRIME_POLYNOMIAL_DEGREE_30: Polynomial = Polynomial::new(0b100_0000_1000_0000_0000_0000_0000_0111); // x^30 + x^23 + x^2 + x + 1
pub const PRIME_POLYNOMIAL_DEGREE_31: Polynomial = Polynomial::new(0b1000_0000_0000_0000_0000_0000_0000_1001); // x^31 + x^3 + 1
pub const PRIME_POLYNOMIAL_DEGREE_32: Polynomial = Polynomial::new(0b1_0000_0000_0100_0000_0000_0000_0000_0111); // x^32 + x^22 + x^2 + x + 1

/// Lowest degree covered by the catalogue.
pub const MIN_PRIME_DEGREE: u32 = 2;

/// Highest degree covered by the catalogue.
pub const MAX_PRIME_DEGREE: u32 = 32;

/// All catalogue moduli, indexed by `degree - 2`.
pub const PRIME_POLYNOMIALS: [Polynomial; 31] = [
    PRIME_POLYNOMIAL_DEGREE_2,
    PRIME_POLYNOMIAL_DEGREE_3,
    PRIME_POLYNOMIAL_DEGREE_4,
    PRIME_POLYNOMIAL_DEGREE_5,
    PRIME_POLYNOMIAL_DEGREE_6,
    PRIME_POLYNOMIAL_DEGREE_7,
    PRIME_POLYNOMIAL_DEGREE_8,
    PRIME_POLYNOMIAL_DEGREE_9,
    PRIME_POLYNOMIAL_DEGREE_10,
    PRIME_POLYNOMIAL_DEGREE_11,
    PRIME_POLYNOMIAL_DEGREE_12,
    PRIME_POLYNOMIAL_DEGREE_13,
    PRIME_POLYNOMIAL_DEGREE_14,
    PRIME_POLYNOMIAL_DEGREE_15,
    PRIME_POLYNOMIAL_DEGREE_16,
    PRIME_POLYNOMIAL_DEGREE_17,
    PRIME_POLYNOMIAL_DEGREE_18,
    PRIME_POLYNOMIAL_DEGREE_19,
    PRIME_POLYNOMIAL_DEGREE_20,
    PRIME_POLYNOMIAL_DEGREE_21,
    PRIME_POLYNOMIAL_DEGREE_22,
    PRIME_POLYNOMIAL_DEGREE_23,
    PRIME_POLYNOMIAL_DEGREE_24,
    PRIME_POLYNOMIAL_DEGREE_25,
    PRIME_POLYNOMIAL_DEGREE_26,
    PRIME_POLYNOMIAL_DEGREE_27,
    PRIME_POLYNOMIAL_DEGREE_28,
    PRIME_POLYNOMIAL_DEGREE_29,
    PRIME_POLYNOMIAL_DEGREE_30,
    PRIME_POLYNOMIAL_DEGREE_31,
    PRIME_POLYNOMIAL_DEGREE_32,
];

/// Returns the catalogue modulus of the given degree, if there is one.
///
/// # Example
///
/// ```
/// use gf2m::{prime_polynomial, PRIME_POLYNOMIAL_DEGREE_16};
///
/// assert_eq!(prime_polynomial(16), Some(PRIME_POLYNOMIAL_DEGREE_16));
/// assert_eq!(prime_polynomial(33), None);
/// ```
pub const fn prime_polynomial(degree: u32) -> Option<Polynomial> {
    if degree < MIN_PRIME_DEGREE || degree > MAX_PRIME_DEGREE {
        return None;
    }
    Some(PRIME_POLYNOMIALS[(degree - MIN_PRIME_DEGREE) as usize])
}

/// Degree of `modulus` if it can define a field here: at least 1 and at most
/// [`MAX_PRIME_DEGREE`], so that products of reduced elements fit in 64 bits.
pub(crate) fn supported_degree(modulus: Polynomial) -> Result<u32, GaloisError> {
    let degree = modulus.degree();
    if degree == 0 || degree > MAX_PRIME_DEGREE {
        #[cfg(feature = "tracing")]
        tracing::warn!(modulus = modulus.bits(), degree, "unsupported modulus degree");
        return Err(GaloisError::UnsupportedDegree { degree });
    }
    Ok(degree)
}
