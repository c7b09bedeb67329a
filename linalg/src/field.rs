use ark_std::{
    fmt::{Debug, Display},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    One, Zero,
};

/// The default real scalar.
pub type Real = f64;
/// The default complex scalar.
pub type Complex = num_complex::Complex<f64>;

/// A scalar field element.
///
/// The containers in this crate are generic over one fixed scalar choice;
/// the blanket impl below covers `f32`/`f64` and `num_complex::Complex`
/// without per-type boilerplate. Exact integer types also qualify, which
/// is convenient for tests, although their `Div` is of course not a field
/// division.
pub trait Field:
    'static
    + Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Sum<Self>
    + Product<Self>
{
    /// The multiplicative inverse, `1 / self`.
    fn recip(self) -> Self {
        Self::one() / self
    }
}

impl<T> Field for T where
    T: 'static
        + Copy
        + Debug
        + Display
        + Default
        + Send
        + Sync
        + PartialEq
        + Zero
        + One
        + Neg<Output = T>
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Mul<T, Output = T>
        + Div<T, Output = T>
        + AddAssign<T>
        + SubAssign<T>
        + MulAssign<T>
        + DivAssign<T>
        + Sum<T>
        + Product<T>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recip_real() {
        assert_eq!(2.0f64.recip(), 0.5);
        assert_eq!(Field::recip(-4.0f64), -0.25);
    }

    #[test]
    fn recip_complex() {
        let z = Complex::new(0.0, 2.0);
        assert_eq!(Field::recip(z), Complex::new(0.0, -0.5));
        assert_eq!(Field::recip(z) * z, Complex::one());
    }

    fn takes_field<K: Field>(k: K) -> K {
        k + k
    }

    #[test]
    fn field_is_open_to_all_scalars() {
        assert_eq!(takes_field(3i64), 6);
        assert_eq!(takes_field(1.5f32), 3.0);
        assert_eq!(takes_field(Complex::new(1.0, -1.0)), Complex::new(2.0, -2.0));
    }
}
