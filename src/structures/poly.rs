//! Polynomials over GF(2) packed into a single 64-bit register.
//!
//! Bit `i` of the register is the coefficient of `x^i`. Addition is XOR,
//! multiplication is carry-less, and every operation runs in at most 64
//! iterations.

use core::convert::Infallible;
use core::fmt;
use core::ops::{Add, AddAssign, BitXor, Sub, SubAssign};

use crate::error::GaloisError;

/// The additive identity element in any binary field.
pub const ADD_IDENTITY: Polynomial = Polynomial::ZERO;

/// The multiplicative identity element in any binary field.
pub const MULT_IDENTITY: Polynomial = Polynomial::ONE;

/// The primitive element `x` whose powers enumerate every nonzero element of a
/// field built over one of the catalogue moduli.
pub const GENERATOR: Polynomial = Polynomial::X;

/// A polynomial whose coefficients are either zero or one.
///
/// Least-significant bits are the lowest-degree coefficients. For example
/// `0b1_0110_1001` (361) represents `x^8 + x^6 + x^5 + x^3 + 1`.
///
/// # Example
///
/// ```
/// use gf2m::Polynomial;
///
/// let a = Polynomial::new(0b1011); // x^3 + x + 1
/// let b = Polynomial::new(0b101); // x^2 + 1
///
/// assert_eq!(a + b, Polynomial::new(0b1110));
/// assert_eq!(a.try_mul(b).unwrap(), Polynomial::new(0b100111));
///
/// let (q, r) = a.div_rem(b).unwrap();
/// assert_eq!(q.try_mul(b).unwrap() + r, a);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Polynomial(u64);

impl Polynomial {
    /// The zero polynomial.
    pub const ZERO: Self = Self(0);

    /// The constant polynomial `1`.
    pub const ONE: Self = Self(1);

    /// The polynomial `x`.
    pub const X: Self = Self(2);

    /// Create a polynomial from its packed coefficient bits.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The packed coefficient bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Number of bits needed to store the polynomial (`degree + 1`, or 0 for
    /// the zero polynomial).
    #[inline]
    pub const fn bit_len(self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }

    /// Degree of the highest nonzero term.
    ///
    /// The zero polynomial reports degree 0. Division relies on this and
    /// checks `is_zero` separately.
    #[inline]
    pub const fn degree(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            self.bit_len() - 1
        }
    }

    /// Number of nonzero terms.
    #[inline]
    pub const fn count_terms(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` for a lone power of `x` (`1`, `x`, `x^2`, ...).
    #[inline]
    pub const fn is_power_of_x(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Multiply two polynomials with coefficients taken modulo two.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::Overflow`] if the product would have degree
    /// greater than 63.
    pub fn try_mul(self, rhs: Self) -> Result<Self, GaloisError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }

        let (lhs_degree, rhs_degree) = (self.degree(), rhs.degree());
        if lhs_degree + rhs_degree > 63 {
            return Err(GaloisError::Overflow {
                lhs_degree,
                rhs_degree,
            });
        }

        Ok(self.mul_unchecked(rhs))
    }

    /// Carry-less product without the overflow check.
    ///
    /// Callers must guarantee the combined degree is at most 63.
    pub(crate) fn mul_unchecked(self, rhs: Self) -> Self {
        debug_assert!(
            self.is_zero() || rhs.is_zero() || self.degree() + rhs.degree() <= 63,
            "carry-less product overflows 64 bits"
        );

        // Multiplying by a power of x is a shift.
        if self.is_power_of_x() {
            return Self(rhs.0 << self.degree());
        }
        if rhs.is_power_of_x() {
            return Self(self.0 << rhs.degree());
        }

        let mut product = 0u64;
        let mut bits = self.0;
        while bits != 0 {
            product ^= rhs.0 << bits.trailing_zeros();
            bits &= bits - 1;
        }
        Self(product)
    }

    /// Divide by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The remainder is either zero or of degree strictly less than the
    /// divisor, and `quotient * divisor + remainder == self`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self), GaloisError> {
        if divisor.is_zero() {
            return Err(GaloisError::DivisionByZero);
        }
        Ok(self.div_rem_unchecked(divisor))
    }

    /// Long division for a divisor already known to be nonzero.
    pub(crate) fn div_rem_unchecked(self, divisor: Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero(), "division by the zero polynomial");

        let divisor_degree = divisor.degree();
        let mut quotient = 0u64;
        let mut remainder = self;

        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let shift = remainder.degree() - divisor_degree;
            quotient ^= 1 << shift;
            remainder.0 ^= divisor.0 << shift;
        }

        (Self(quotient), remainder)
    }

    /// Remainder of division by `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `modulus` is zero.
    pub fn rem(self, modulus: Self) -> Result<Self, GaloisError> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Reduce modulo `modulus`, or return `self` untouched when it is zero.
    #[inline]
    fn reduce_or_keep(self, modulus: Self) -> Self {
        if modulus.is_zero() {
            self
        } else {
            self.div_rem_unchecked(modulus).1
        }
    }

    /// Compute `self^exponent mod modulus` using square-and-multiply.
    ///
    /// A zero `modulus` disables reduction, giving the plain polynomial power.
    /// An exponent of zero yields `1` for every base, zero included.
    ///
    /// A nonzero `modulus` reduces `self` before exponentiating, so an
    /// exponent of one returns `self mod modulus` rather than `self` itself.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::Overflow`] if an intermediate product does not
    /// fit in 64 bits. This cannot happen when `modulus` has degree at most 32
    /// and `self` is already reduced.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2m::Polynomial;
    ///
    /// let modulus = Polynomial::new(0b1011); // x^3 + x + 1
    /// assert_eq!(Polynomial::X.pow_mod(7, modulus).unwrap(), Polynomial::ONE);
    /// assert_eq!(Polynomial::X.pow_mod(7, Polynomial::ZERO).unwrap(), Polynomial::new(1 << 7));
    ///
    /// // x^3 + x^2 + x + 1 is congruent to 1 mod x^2 + x + 1.
    /// let base = Polynomial::new(0b1111);
    /// assert_eq!(base.pow_mod(1, Polynomial::new(0b111)).unwrap(), Polynomial::ONE);
    /// ```
    pub fn pow_mod(self, exponent: u64, modulus: Self) -> Result<Self, GaloisError> {
        let base = self.reduce_or_keep(modulus);
        base.square_and_multiply(exponent, |a, b| {
            a.try_mul(b).map(|product| product.reduce_or_keep(modulus))
        })
    }

    /// `self^exponent mod modulus` for a reduced `self` and a nonzero modulus
    /// of degree at most 32, where no product can overflow.
    pub(crate) fn pow_reduced(self, exponent: u64, modulus: Self) -> Self {
        let result = self.square_and_multiply::<Infallible>(exponent, |a, b| {
            Ok(a.mul_reduced(b, modulus))
        });
        match result {
            Ok(p) => p,
            Err(never) => match never {},
        }
    }

    /// `self * rhs mod modulus` for reduced operands and a nonzero modulus of
    /// degree at most 32.
    #[inline]
    pub(crate) fn mul_reduced(self, rhs: Self, modulus: Self) -> Self {
        debug_assert!(modulus.degree() <= 32 && !modulus.is_zero());
        self.mul_unchecked(rhs).div_rem_unchecked(modulus).1
    }

    /// Left-to-right binary exponentiation over the bits of `exponent`.
    fn square_and_multiply<E>(
        self,
        exponent: u64,
        mut mul: impl FnMut(Self, Self) -> Result<Self, E>,
    ) -> Result<Self, E> {
        if exponent == 0 {
            return Ok(Self::ONE);
        }

        let mut result = self;
        let len = u64::BITS - exponent.leading_zeros();
        for i in (0..len - 1).rev() {
            result = mul(result, result)?;
            if (exponent >> i) & 1 == 1 {
                result = mul(result, self)?;
            }
        }

        Ok(result)
    }

    /// Multiplicative inverse of `self` modulo an irreducible `modulus`, via
    /// the extended Euclidean algorithm.
    ///
    /// `self` is reduced first, so any representative of a residue class is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`GaloisError::DivisionByZero`] if `modulus` is zero or `self`
    /// is congruent to zero.
    ///
    /// # Panics
    ///
    /// Panics if the algorithm ends on a non-unit gcd, which only happens when
    /// `modulus` is not irreducible.
    pub fn inverse_mod(self, modulus: Self) -> Result<Self, GaloisError> {
        let y = self.rem(modulus)?;
        if y.is_zero() {
            return Err(GaloisError::DivisionByZero);
        }

        let (mut r, mut new_r) = (modulus, y);
        let (mut t, mut new_t) = (Self::ZERO, Self::ONE);

        // deg(new_r) strictly decreases, so this runs at most deg(modulus) times.
        while !new_r.is_zero() {
            let (quotient, remainder) = r.div_rem_unchecked(new_r);
            let next_t = t + quotient.mul_unchecked(new_t);
            (r, new_r) = (new_r, remainder);
            (t, new_t) = (new_t, next_t);
        }

        if r.degree() > 0 {
            #[cfg(feature = "tracing")]
            tracing::error!(
                element = y.0,
                modulus = modulus.0,
                gcd = r.0,
                "extended euclid ended on a non-unit gcd"
            );
            panic!(
                "failed to find inverse of ({}) mod ({}): modulus is not irreducible",
                y, modulus
            );
        }

        Ok(t.reduce_or_keep(modulus))
    }
}

impl From<u64> for Polynomial {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Polynomial> for u64 {
    fn from(p: Polynomial) -> Self {
        p.0
    }
}

impl Add for Polynomial {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

// Subtraction and addition coincide when coefficients live in GF(2).
impl Sub for Polynomial {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXor for Polynomial {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl SubAssign for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({:#b})", self.0)
    }
}

/// Standard form with terms in descending degree, e.g. `x^8 + x^4 + x + 1`.
/// The zero polynomial renders as the empty string.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in (0..self.bit_len()).rev() {
            if (self.0 >> i) & 1 == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Binary for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConstantTimeEq for Polynomial {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        subtle::ConstantTimeEq::ct_eq(&self.0, &other.0)
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConditionallySelectable for Polynomial {
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        Self(subtle::ConditionallySelectable::conditional_select(
            &a.0, &b.0, choice,
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Self)
    }
}
