use core::fmt::{Debug, Display};
use num_traits::{Float, Num};

mod sealed {
    pub trait Sealed {}
}

/// Element type of [`FixedVector`](crate::FixedVector) and
/// [`FixedMatrix`](crate::FixedMatrix): a primitive integer or floating point type.
///
/// The trait is sealed, so the set of element types is closed.
///
/// ```
/// use linalg::FixedVector;
///
/// let ints = FixedVector::<2, i32>::zero();
/// let floats = FixedVector::<2, f64>::zero();
/// assert_eq!(ints.magnitude(), floats.magnitude());
/// ```
///
/// Non-numeric elements are rejected:
///
/// ```compile_fail
/// use linalg::FixedVector;
///
/// let flags = FixedVector::<2, bool>::zero();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an arithmetic type",
    label = "vector and matrix elements must be arithmetic",
    note = "`Arithmetic` is only implemented for the primitive integer and floating point types"
)]
pub trait Arithmetic:
    Num + Copy + PartialOrd + Debug + Display + Default + sealed::Sealed + 'static
{
    /// Floating point type lengths and directions are computed in. Integers promote to
    /// `f64`, floats keep their own precision.
    type Real: Arithmetic + Float;

    fn to_real(self) -> Self::Real;
}

macro_rules! impl_arithmetic {
    ($real:ty => $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                type Real = $real;

                #[inline]
                fn to_real(self) -> $real {
                    self as $real
                }
            }
        )+
    };
}

impl_arithmetic!(f32 => f32);
impl_arithmetic!(f64 => f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
