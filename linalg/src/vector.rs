use crate::{dot, Arithmetic, LinalgError};
use core::{
    fmt,
    ops::{Add, AddAssign, Deref, DerefMut, Mul, Neg, Sub, SubAssign},
};
use num_traits::{Float, Zero};

/// An `N` component vector stored inline as `[T; N]`.
///
/// Components are reached through indexing (`v[i]`, which panics when `i >= N`), the
/// checked [`get`](Self::get) family, or the named accessors of [`ComponentX`],
/// [`ComponentY`] and [`ComponentZ`] for 1 to 3 component vectors.
///
/// ```
/// use linalg::FixedVector;
///
/// let v = FixedVector::<3, f32>::from_values(&[1.0, 2.0]).unwrap();
/// assert_eq!(v[2], 0.0);
/// ```
///
/// The dimension cannot be zero:
///
/// ```compile_fail
/// use linalg::FixedVector;
///
/// let v = FixedVector::<0, f32>::zero();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedVector<const N: usize, T: Arithmetic = f32>(pub(crate) [T; N]);

pub type Vector2<T> = FixedVector<2, T>;
pub type Vector3<T> = FixedVector<3, T>;

impl<const N: usize, T: Arithmetic> FixedVector<N, T> {
    const NON_ZERO: () = assert!(N > 0, "FixedVector: the dimension N cannot be zero");

    #[inline]
    pub fn zero() -> Self {
        Self::from_array([T::zero(); N])
    }

    #[inline]
    pub fn from_array(values: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self(values)
    }

    /// Builds a vector from up to `N` leading components, zero filling the rest.
    pub fn from_values(values: &[T]) -> Result<Self, LinalgError> {
        if values.len() > N {
            return Err(LinalgError::TooManyComponents {
                expected: N,
                actual: values.len(),
            });
        }
        let mut vector = Self::zero();
        vector.0[..values.len()].copy_from_slice(values);
        Ok(vector)
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(core::array::from_fn(f))
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    pub fn get(&self, index: usize) -> Result<&T, LinalgError> {
        self.0
            .get(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len: N })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinalgError> {
        self.0
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len: N })
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.0.get_unchecked(index)
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.0.get_unchecked_mut(index)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        dot(self, rhs)
    }

    /// Euclidean length, computed in `T::Real` so integer components are not truncated.
    pub fn magnitude(&self) -> T::Real {
        self.0
            .iter()
            .fold(T::Real::zero(), |sum, &v| {
                let v = v.to_real();
                sum + v * v
            })
            .sqrt()
    }

    /// Divides every component by the magnitude. A zero vector has no direction and
    /// produces NaN components.
    pub fn normalize(&self) -> FixedVector<N, T::Real> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            log::debug!("normalizing zero-magnitude vector {:?}", self.0);
        }
        FixedVector::from_fn(|n| self.0[n].to_real() / magnitude)
    }
}

impl<T: Arithmetic> FixedVector<2, T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T: Arithmetic> FixedVector<3, T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

/// Named access to the first component, available for 1, 2 and 3 component vectors.
///
/// ```
/// use linalg::{ComponentX, FixedVector};
///
/// assert_eq!(FixedVector::from([7]).x(), 7);
/// assert_eq!(FixedVector::from([7, 8]).x(), 7);
/// assert_eq!(FixedVector::from([7, 8, 9]).x(), 7);
/// ```
///
/// ```compile_fail
/// use linalg::{ComponentX, FixedVector};
///
/// let _ = FixedVector::<4, f32>::zero().x();
/// ```
pub trait ComponentX<T> {
    fn x(&self) -> T;
    fn set_x(&mut self, value: T);
}

/// Named access to the second component, available for 2 and 3 component vectors.
///
/// ```
/// use linalg::{ComponentY, FixedVector};
///
/// assert_eq!(FixedVector::from([7, 8]).y(), 8);
/// assert_eq!(FixedVector::from([7, 8, 9]).y(), 8);
/// ```
///
/// ```compile_fail
/// use linalg::{ComponentY, FixedVector};
///
/// let _ = FixedVector::from([7]).y();
/// ```
pub trait ComponentY<T>: ComponentX<T> {
    fn y(&self) -> T;
    fn set_y(&mut self, value: T);
}

/// Named access to the third component, available for 3 component vectors only.
///
/// ```
/// use linalg::{ComponentZ, Vector3};
///
/// let mut v = Vector3::new(1, 2, 3);
/// v.set_z(4);
/// assert_eq!(v.z(), 4);
/// ```
///
/// ```compile_fail
/// use linalg::{ComponentZ, Vector2};
///
/// let _ = Vector2::new(1, 2).z();
/// ```
///
/// ```compile_fail
/// use linalg::{ComponentZ, FixedVector};
///
/// let _ = FixedVector::from([1, 2, 3, 4]).z();
/// ```
pub trait ComponentZ<T>: ComponentY<T> {
    fn z(&self) -> T;
    fn set_z(&mut self, value: T);
}

macro_rules! impl_component {
    ($trait:ident, $get:ident, $set:ident, $index:literal => $($n:literal),+) => {
        $(
            impl<T: Arithmetic> $trait<T> for FixedVector<$n, T> {
                #[inline]
                fn $get(&self) -> T {
                    self.0[$index]
                }

                #[inline]
                fn $set(&mut self, value: T) {
                    self.0[$index] = value;
                }
            }
        )+
    };
}

impl_component!(ComponentX, x, set_x, 0 => 1, 2, 3);
impl_component!(ComponentY, y, set_y, 1 => 2, 3);
impl_component!(ComponentZ, z, set_z, 2 => 3);

impl<const N: usize, T: Arithmetic> Default for FixedVector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T: Arithmetic> Deref for FixedVector<N, T> {
    type Target = [T; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize, T: Arithmetic> DerefMut for FixedVector<N, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize, T: Arithmetic> From<[T; N]> for FixedVector<N, T> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<const N: usize, T: Arithmetic> From<FixedVector<N, T>> for [T; N] {
    #[inline]
    fn from(v: FixedVector<N, T>) -> Self {
        v.0
    }
}

impl<const N: usize, T: Arithmetic> TryFrom<&[T]> for FixedVector<N, T> {
    type Error = LinalgError;
    #[inline]
    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl<const N: usize, T: Arithmetic> AsRef<[T]> for FixedVector<N, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<const N: usize, T: Arithmetic> Add<FixedVector<N, T>> for FixedVector<N, T> {
    type Output = FixedVector<N, T>;
    #[inline]
    fn add(self, rhs: FixedVector<N, T>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] = tmp[n] + rhs[n];
        }
        tmp
    }
}

impl<const N: usize, T: Arithmetic> Sub<FixedVector<N, T>> for FixedVector<N, T> {
    type Output = FixedVector<N, T>;
    #[inline]
    fn sub(self, rhs: FixedVector<N, T>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] = tmp[n] - rhs[n];
        }
        tmp
    }
}

impl<const N: usize, T: Arithmetic> Mul<T> for FixedVector<N, T> {
    type Output = FixedVector<N, T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] = tmp[n] * rhs;
        }
        tmp
    }
}

impl<const N: usize, T: Arithmetic + Neg<Output = T>> Neg for FixedVector<N, T> {
    type Output = FixedVector<N, T>;
    #[inline]
    fn neg(self) -> Self::Output {
        FixedVector(self.0.map(|v| -v))
    }
}

impl<const N: usize, T: Arithmetic> AddAssign<FixedVector<N, T>> for FixedVector<N, T> {
    #[inline]
    fn add_assign(&mut self, rhs: FixedVector<N, T>) {
        for n in 0..N {
            self[n] = self[n] + rhs[n];
        }
    }
}

impl<const N: usize, T: Arithmetic> SubAssign<FixedVector<N, T>> for FixedVector<N, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: FixedVector<N, T>) {
        for n in 0..N {
            self[n] = self[n] - rhs[n];
        }
    }
}

impl<const N: usize, T: Arithmetic> fmt::Display for FixedVector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (n, v) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("]")
    }
}
