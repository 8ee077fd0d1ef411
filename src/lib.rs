//! Exact arithmetic in binary finite fields GF(2^m), for m up to 32.
//!
//! Field elements are polynomials with coefficients in GF(2), packed into the
//! bits of a `u64` and reduced modulo an irreducible polynomial. Two views are
//! provided on top of the [`Polynomial`] engine:
//!
//! - [`Field`] fixes one modulus and an output integer width, and is reused
//!   for many operations on plain integers.
//! - [`FieldElement`] carries its modulus along with its value, for code that
//!   cannot fix the field statically.
//!
//! ```
//! use gf2m::{Field, PRIME_POLYNOMIAL_DEGREE_8};
//!
//! let gf256 = Field::<u8>::new(PRIME_POLYNOMIAL_DEGREE_8).unwrap();
//! let a = gf256.mul(&[100, gf256.add(&[10, 5])]);
//! let b = gf256.add(&[gf256.mul(&[100, 10]), gf256.mul(&[100, 5])]);
//! assert_eq!(a, b);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod algebra;
pub mod error;
pub mod structures;

pub use algebra::word::Word;
pub use error::GaloisError;
pub use structures::element::FieldElement;
pub use structures::field::{Field, NonzeroElements};
pub use structures::poly::{Polynomial, ADD_IDENTITY, GENERATOR, MULT_IDENTITY};
pub use structures::primes::*;
