use core::fmt;
use core::hash::Hash;

use crate::structures::poly::Polynomial;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type a [`Field`](crate::Field) can hand elements out as.
///
/// All arithmetic runs on 64-bit [`Polynomial`]s; a `Word` only fixes the
/// width at the API boundary. Implemented for `u8`, `u16`, `u32`, `u64` and
/// `Polynomial` itself.
pub trait Word: Copy + Eq + Ord + Hash + Default + fmt::Debug + sealed::Sealed {
    /// Width of the type in bits.
    const BITS: u32;

    /// Largest representable value, `2^BITS - 1`.
    const MAX: u64 = u64::MAX >> (u64::BITS - Self::BITS);

    const ZERO: Self;
    const ONE: Self;

    /// Widen to a polynomial.
    fn to_polynomial(self) -> Polynomial;

    /// Narrow a polynomial to this width.
    ///
    /// Bits above `BITS` are discarded. A [`Field`](crate::Field) only calls
    /// this on reduced elements, which its constructor guarantees fit.
    fn from_polynomial(p: Polynomial) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_polynomial(self) -> Polynomial {
                    Polynomial::new(self as u64)
                }

                #[inline]
                fn from_polynomial(p: Polynomial) -> Self {
                    p.bits() as $t
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

impl sealed::Sealed for Polynomial {}

impl Word for Polynomial {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = Polynomial::ZERO;
    const ONE: Self = Polynomial::ONE;

    #[inline]
    fn to_polynomial(self) -> Polynomial {
        self
    }

    #[inline]
    fn from_polynomial(p: Polynomial) -> Self {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_closed_form() {
        assert_eq!(<u8 as Word>::MAX, u8::MAX as u64);
        assert_eq!(<u16 as Word>::MAX, u16::MAX as u64);
        assert_eq!(<u32 as Word>::MAX, u32::MAX as u64);
        assert_eq!(<u64 as Word>::MAX, u64::MAX);
        assert_eq!(<Polynomial as Word>::MAX, u64::MAX);
    }

    #[test]
    fn widen_then_narrow() {
        assert_eq!(u8::from_polynomial(0xABu8.to_polynomial()), 0xAB);
        assert_eq!(u16::from_polynomial(Polynomial::new(0x1_2345)), 0x2345);
        assert_eq!(
            Polynomial::from_polynomial(Polynomial::new(7)).to_polynomial(),
            Polynomial::new(7)
        );
    }

    #[test]
    fn identities() {
        assert_eq!(<u32 as Word>::ZERO.to_polynomial(), Polynomial::ZERO);
        assert_eq!(<u32 as Word>::ONE.to_polynomial(), Polynomial::ONE);
        assert_eq!(<Polynomial as Word>::ONE, Polynomial::ONE);
    }
}
