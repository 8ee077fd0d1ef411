use core::fmt;

use crate::structures::poly::Polynomial;

/// Error type for binary field construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaloisError {
    /// The chosen integer width cannot represent every element of the field.
    WidthTooSmall { degree: u32, bits: u32 },
    /// The modulus degree is outside `1..=32`.
    UnsupportedDegree { degree: u32 },
    /// Inversion of, or division by, the additive identity.
    DivisionByZero,
    /// Two field elements with different moduli were combined.
    ModulusMismatch { lhs: Polynomial, rhs: Polynomial },
    /// The exact product would need more than 64 bits.
    Overflow { lhs_degree: u32, rhs_degree: u32 },
}

impl fmt::Display for GaloisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaloisError::WidthTooSmall { degree, bits } => {
                write!(
                    f,
                    "cannot use a {}-bit integer to represent elements of GF(2^{})",
                    bits, degree
                )
            }
            GaloisError::UnsupportedDegree { degree } => {
                write!(f, "unsupported modulus degree {}: expected 1..=32", degree)
            }
            GaloisError::DivisionByZero => write!(f, "division by zero"),
            GaloisError::ModulusMismatch { lhs, rhs } => {
                write!(
                    f,
                    "field elements have different moduli: ({}) and ({})",
                    lhs, rhs
                )
            }
            GaloisError::Overflow {
                lhs_degree,
                rhs_degree,
            } => write!(
                f,
                "overflow: product of degree {} and degree {} polynomials exceeds degree 63",
                lhs_degree, rhs_degree
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GaloisError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_width_too_small() {
        let err = GaloisError::WidthTooSmall {
            degree: 17,
            bits: 16,
        };
        assert_eq!(
            err.to_string(),
            "cannot use a 16-bit integer to represent elements of GF(2^17)"
        );
    }

    #[test]
    fn display_mismatch_renders_polynomials() {
        let err = GaloisError::ModulusMismatch {
            lhs: Polynomial::new(0b1011),
            rhs: Polynomial::new(0b111),
        };
        assert_eq!(
            err.to_string(),
            "field elements have different moduli: (x^3 + x + 1) and (x^2 + x + 1)"
        );
    }

    #[test]
    fn display_overflow() {
        let err = GaloisError::Overflow {
            lhs_degree: 40,
            rhs_degree: 30,
        };
        assert!(err.to_string().contains("degree 40"));
    }
}
