use crate::{Arithmetic, FixedVector};

/// Sum of the component-wise products. Both vectors must share `N`.
///
/// ```
/// use linalg::{dot, Vector2};
///
/// assert_eq!(dot(&Vector2::new(1, 2), &Vector2::new(1, 2)), 5);
/// ```
///
/// ```compile_fail
/// use linalg::{dot, Vector2, Vector3};
///
/// let _ = dot(&Vector2::new(1, 2), &Vector3::new(1, 2, 3));
/// ```
pub fn dot<const N: usize, T: Arithmetic>(a: &FixedVector<N, T>, b: &FixedVector<N, T>) -> T {
    a.0.iter()
        .zip(b.0.iter())
        .fold(T::zero(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
}

/// Cross product, defined for 2 and 3 component vectors only.
///
/// The 3 component form returns a vector. The 2 component form returns the scalar
/// `a.x * b.y - a.y * b.x`, the z component the 3 component form would have for two
/// vectors in the xy plane.
///
/// With unsigned element types the subtraction can underflow. Like any integer
/// overflow this panics when debug assertions are enabled and wraps otherwise.
///
/// ```
/// use linalg::{cross, Vector2, Vector3};
///
/// let z: i32 = cross(&Vector2::new(1, 2), &Vector2::new(2, 1));
/// assert_eq!(z, -3);
///
/// let x = Vector3::new(1, 0, 0);
/// let y = Vector3::new(0, 1, 0);
/// assert_eq!(cross(&x, &y), Vector3::new(0, 0, 1));
/// ```
///
/// Other dimensions have no cross product:
///
/// ```compile_fail
/// use linalg::{cross, FixedVector};
///
/// let a = FixedVector::from([1, 2, 3, 4]);
/// let _ = cross(&a, &a);
/// ```
pub trait Cross<Rhs = Self> {
    type Output;
    fn cross(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: Arithmetic> Cross for FixedVector<3, T> {
    type Output = FixedVector<3, T>;

    #[inline]
    fn cross(&self, rhs: &Self) -> Self::Output {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        FixedVector::<3, T>::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Arithmetic> Cross for FixedVector<2, T> {
    type Output = T;

    #[inline]
    fn cross(&self, rhs: &Self) -> T {
        let [ax, ay] = self.0;
        let [bx, by] = rhs.0;
        ax * by - ay * bx
    }
}

#[inline]
pub fn cross<V: Cross>(a: &V, b: &V) -> V::Output {
    a.cross(b)
}
