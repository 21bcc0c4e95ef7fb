/// Payloads an [`Ast`](crate::Ast) can be evaluated over.
///
/// Integer arithmetic wraps on overflow so evaluation never panics.
pub trait Numeric: Clone {
    fn zero() -> Self;
    fn one() -> Self;
    fn add(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
}

macro_rules! wrapping_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn add(&self, other: &Self) -> Self {
                    self.wrapping_add(*other)
                }

                fn mul(&self, other: &Self) -> Self {
                    self.wrapping_mul(*other)
                }
            }
        )*
    };
}

wrapping_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn add(&self, other: &Self) -> Self {
                    self + other
                }

                fn mul(&self, other: &Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

float_numeric!(f32, f64);
