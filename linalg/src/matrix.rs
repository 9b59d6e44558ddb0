use crate::{dot, Arithmetic, FixedVector, LinalgError};
use core::{
    fmt,
    ops::{Index, IndexMut, Mul},
};
use num_traits::{One, Zero};

/// An `R` by `C` matrix stored as `R` rows of `C` elements.
///
/// Elements are reached with `m[(row, col)]`, which panics when out of range, or the
/// checked [`get`](Self::get) family.
///
/// Multiplication needs the inner dimensions to agree:
///
/// ```
/// use linalg::FixedMatrix;
///
/// let a = FixedMatrix::from([[1, 2, 3], [4, 5, 6]]);
/// let p: FixedMatrix<2, 2, i32> = a * a.transpose();
/// assert_eq!(p[(0, 0)], 14);
/// ```
///
/// ```compile_fail
/// use linalg::FixedMatrix;
///
/// let a = FixedMatrix::from([[1, 2, 3], [4, 5, 6]]);
/// let _ = a * a;
/// ```
///
/// Neither dimension can be zero:
///
/// ```compile_fail
/// use linalg::FixedMatrix;
///
/// let m = FixedMatrix::<0, 2, f32>::zero();
/// ```
///
/// ```compile_fail
/// use linalg::FixedMatrix;
///
/// let m = FixedMatrix::<2, 0, f32>::zero();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedMatrix<const R: usize, const C: usize, T: Arithmetic = f32> {
    pub(crate) rows: [FixedVector<C, T>; R],
}

pub type SquareMatrix<const N: usize, T> = FixedMatrix<N, N, T>;

impl<const R: usize, const C: usize, T: Arithmetic> FixedMatrix<R, C, T> {
    const NON_EMPTY: () = assert!(
        R > 0 && C > 0,
        "FixedMatrix: the row and column counts cannot be zero"
    );

    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    #[inline]
    pub fn zero() -> Self {
        Self::from_row_vectors([FixedVector::zero(); R])
    }

    #[inline]
    pub fn from_row_vectors(rows: [FixedVector<C, T>; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { rows }
    }

    /// Builds a matrix from up to `R` rows of up to `C` elements each. Missing rows and
    /// elements are zero.
    pub fn from_rows(rows: &[&[T]]) -> Result<Self, LinalgError> {
        if rows.len() > R {
            return Err(LinalgError::TooManyRows {
                expected: R,
                actual: rows.len(),
            });
        }
        let mut mat = Self::zero();
        for (r, row) in rows.iter().enumerate() {
            mat.rows[r] = FixedVector::from_values(row).map_err(|_| LinalgError::TooManyColumns {
                row: r,
                expected: C,
                actual: row.len(),
            })?;
        }
        Ok(mat)
    }

    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_row_vectors(core::array::from_fn(|r| FixedVector::from_fn(|c| f(r, c))))
    }

    #[inline]
    pub fn row(&self, index: usize) -> &FixedVector<C, T> {
        &self.rows[index]
    }

    #[inline]
    pub fn rows(&self) -> &[FixedVector<C, T>; R] {
        &self.rows
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    #[inline]
    pub fn to_array(self) -> [[T; C]; R] {
        self.rows.map(FixedVector::to_array)
    }

    fn out_of_range(row: usize, col: usize) -> LinalgError {
        LinalgError::ElementOutOfRange {
            row,
            col,
            rows: R,
            cols: C,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, LinalgError> {
        self.rows
            .get(row)
            .and_then(|r| r.0.get(col))
            .ok_or_else(|| Self::out_of_range(row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.0.get_mut(col))
            .ok_or_else(|| Self::out_of_range(row, col))
    }

    /// # Safety
    ///
    /// `row` must be less than `R` and `col` less than `C`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        self.rows.get_unchecked(row).get_unchecked(col)
    }

    /// # Safety
    ///
    /// `row` must be less than `R` and `col` less than `C`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.rows.get_unchecked_mut(row).get_unchecked_mut(col)
    }

    #[inline]
    pub fn transpose(&self) -> FixedMatrix<C, R, T> {
        let mut mat = FixedMatrix::zero();
        for r in 0..R {
            for c in 0..C {
                mat.rows[c][r] = self.rows[r][c];
            }
        }
        mat
    }
}

impl<const N: usize, T: Arithmetic> FixedMatrix<N, N, T> {
    pub fn identity() -> Self {
        let mut mat = Self::zero();
        for i in 0..N {
            mat.rows[i][i] = T::one();
        }
        mat
    }

    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Default for FixedMatrix<R, C, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> From<[[T; C]; R]> for FixedMatrix<R, C, T> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_row_vectors(rows.map(FixedVector::from_array))
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> From<FixedMatrix<R, C, T>> for [[T; C]; R] {
    #[inline]
    fn from(m: FixedMatrix<R, C, T>) -> Self {
        m.to_array()
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Index<(usize, usize)> for FixedMatrix<R, C, T> {
    type Output = T;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> IndexMut<(usize, usize)>
    for FixedMatrix<R, C, T>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Mul<FixedVector<C, T>>
    for FixedMatrix<R, C, T>
{
    type Output = FixedVector<R, T>;
    #[inline]
    fn mul(self, rhs: FixedVector<C, T>) -> Self::Output {
        let mut tmp = FixedVector::zero();
        for r in 0..R {
            tmp[r] = dot(&self.rows[r], &rhs);
        }
        tmp
    }
}

impl<const R: usize, const C: usize, const K: usize, T: Arithmetic> Mul<FixedMatrix<C, K, T>>
    for FixedMatrix<R, C, T>
{
    type Output = FixedMatrix<R, K, T>;
    #[inline]
    fn mul(self, rhs: FixedMatrix<C, K, T>) -> Self::Output {
        let rhs_transpose = rhs.transpose();

        let mut tmp = FixedMatrix::zero();
        for r in 0..R {
            for k in 0..K {
                tmp.rows[r][k] = dot(&self.rows[r], &rhs_transpose.rows[k]);
            }
        }
        tmp
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Mul<T> for FixedMatrix<R, C, T> {
    type Output = FixedMatrix<R, C, T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::from_row_vectors(self.rows.map(|row| row * rhs))
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> fmt::Display for FixedMatrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> Zero for FixedMatrix<R, C, T> {
    fn zero() -> Self {
        FixedMatrix::zero()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(T::is_zero)
    }
}

impl<const R: usize, const C: usize, T: Arithmetic> core::ops::Add for FixedMatrix<R, C, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut tmp = self;
        for r in 0..R {
            tmp.rows[r] += rhs.rows[r];
        }
        tmp
    }
}

impl<const N: usize, T: Arithmetic> One for FixedMatrix<N, N, T> {
    fn one() -> Self {
        Self::identity()
    }
}
