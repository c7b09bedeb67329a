use crate::{field::Complex, index::normalize, AlgebraError, Field, Idx, Orient, Real, Vector};
use ark_std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    rand::Rng,
    vec::*,
    UniformRand,
};
use derive_more::From;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A two-dimensional row-major container of field elements.
///
/// Invariant: every row has length `ncols`; `nrows == vals.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<K> {
    nrows: usize,
    ncols: usize,
    vals: Vec<Vec<K>>,
}

impl<K> Matrix<K> {
    pub fn empty() -> Self {
        Self {
            nrows: 0,
            ncols: 0,
            vals: vec![],
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub(crate) fn vals(&self) -> &Vec<Vec<K>> {
        &self.vals
    }

    pub(crate) fn from_parts(nrows: usize, ncols: usize, vals: Vec<Vec<K>>) -> Self {
        Self { nrows, ncols, vals }
    }
}

impl<K: Field> Matrix<K> {
    pub fn fill(k: K, nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            vals: vec![vec![k; ncols]; nrows],
        }
    }

    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self::fill(K::zero(), nrows, ncols)
    }

    /// The n-by-n Kronecker-delta matrix.
    pub fn identity(n: usize) -> Self {
        let vals = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { K::one() } else { K::zero() })
                    .collect()
            })
            .collect();
        Self {
            nrows: n,
            ncols: n,
            vals,
        }
    }

    /// Build from row-major rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<K>>) -> Result<Self, AlgebraError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(AlgebraError::DifferentLengths(ncols, bad.len()));
        }
        Ok(Self {
            nrows: rows.len(),
            ncols,
            vals: rows,
        })
    }

    /// Build from columns; the transpose of row-major input.
    pub fn from_cols(cols: Vec<Vec<K>>) -> Result<Self, AlgebraError> {
        let nrows = cols.first().map_or(0, Vec::len);
        if let Some(bad) = cols.iter().find(|c| c.len() != nrows) {
            return Err(AlgebraError::DifferentLengths(nrows, bad.len()));
        }
        let ncols = cols.len();
        let vals = (0..nrows)
            .map(|i| cols.iter().map(|c| c[i]).collect())
            .collect();
        Ok(Self { nrows, ncols, vals })
    }

    // --- Row and column views (always independent copies) ---

    pub fn row(&self, i: isize) -> Result<Vector<K>, AlgebraError> {
        let i = normalize(i, self.nrows)?;
        Ok(Vector::row(self.vals[i].clone()))
    }

    pub fn col(&self, j: isize) -> Result<Vector<K>, AlgebraError> {
        let j = normalize(j, self.ncols)?;
        Ok(Vector::col(self.vals.iter().map(|r| r[j]).collect()))
    }

    pub fn rows(&self) -> Vec<Vector<K>> {
        self.vals.iter().map(|r| Vector::row(r.clone())).collect()
    }

    pub fn cols(&self) -> Vec<Vector<K>> {
        (0..self.ncols)
            .map(|j| Vector::col(self.vals.iter().map(|r| r[j]).collect()))
            .collect()
    }

    // --- Mutators ---

    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), AlgebraError> {
        let m = self.nrows;
        if r1 >= m {
            return Err(AlgebraError::OutOfRange(r1 as isize, m));
        }
        if r2 >= m {
            return Err(AlgebraError::OutOfRange(r2 as isize, m));
        }
        self.vals.swap(r1, r2);
        Ok(())
    }

    pub fn swap_cols(&mut self, c1: usize, c2: usize) -> Result<(), AlgebraError> {
        let n = self.ncols;
        if c1 >= n {
            return Err(AlgebraError::OutOfRange(c1 as isize, n));
        }
        if c2 >= n {
            return Err(AlgebraError::OutOfRange(c2 as isize, n));
        }
        for row in self.vals.iter_mut() {
            row.swap(c1, c2);
        }
        Ok(())
    }

    // --- Indexing ---

    pub fn get(&self, i: isize, j: isize) -> Result<K, AlgebraError> {
        let i = normalize(i, self.nrows)?;
        let j = normalize(j, self.ncols)?;
        Ok(self.vals[i][j])
    }

    pub fn set(&mut self, i: isize, j: isize, val: K) -> Result<(), AlgebraError> {
        let i = normalize(i, self.nrows)?;
        let j = normalize(j, self.ncols)?;
        self.vals[i][j] = val;
        Ok(())
    }

    /// One row position, fancy columns: a row-oriented vector in
    /// resolution order.
    pub fn slice_row(
        &self,
        i: isize,
        jj: impl Into<Idx>,
    ) -> Result<Vector<K>, AlgebraError> {
        let i = normalize(i, self.nrows)?;
        let cols = jj.into().resolve(self.ncols)?;
        Ok(Vector::row(cols.into_iter().map(|j| self.vals[i][j]).collect()))
    }

    /// Fancy rows, one column position: a column-oriented vector in
    /// resolution order.
    pub fn slice_col(
        &self,
        ii: impl Into<Idx>,
        j: isize,
    ) -> Result<Vector<K>, AlgebraError> {
        let j = normalize(j, self.ncols)?;
        let rows = ii.into().resolve(self.nrows)?;
        Ok(Vector::col(rows.into_iter().map(|i| self.vals[i][j]).collect()))
    }

    /// Fancy rows and columns: a new matrix, rows selected and reordered
    /// by `ii`, columns by `jj` (row resolution outer, column inner).
    pub fn slice(
        &self,
        ii: impl Into<Idx>,
        jj: impl Into<Idx>,
    ) -> Result<Self, AlgebraError> {
        let rows = ii.into().resolve(self.nrows)?;
        let cols = jj.into().resolve(self.ncols)?;
        Ok(self.gather(&rows, &cols))
    }

    pub fn assign_row(
        &mut self,
        i: isize,
        jj: impl Into<Idx>,
        src: &Vector<K>,
    ) -> Result<(), AlgebraError> {
        let i = normalize(i, self.nrows)?;
        let cols = jj.into().resolve(self.ncols)?;
        if cols.len() != src.len() {
            return Err(AlgebraError::DifferentLengths(cols.len(), src.len()));
        }
        for (j, x) in cols.into_iter().zip(src.iter().copied()) {
            self.vals[i][j] = x;
        }
        Ok(())
    }

    pub fn assign_col(
        &mut self,
        ii: impl Into<Idx>,
        j: isize,
        src: &Vector<K>,
    ) -> Result<(), AlgebraError> {
        let j = normalize(j, self.ncols)?;
        let rows = ii.into().resolve(self.nrows)?;
        if rows.len() != src.len() {
            return Err(AlgebraError::DifferentLengths(rows.len(), src.len()));
        }
        for (i, x) in rows.into_iter().zip(src.iter().copied()) {
            self.vals[i][j] = x;
        }
        Ok(())
    }

    /// Fancy write on both axes from a matching-shaped source.
    ///
    /// The source is a separate borrow; reordering a matrix through its
    /// own rows or columns is written with an explicit snapshot, e.g.
    /// `let src = m.slice(..)?; m.assign(.., .., &src)`.
    pub fn assign(
        &mut self,
        ii: impl Into<Idx>,
        jj: impl Into<Idx>,
        src: &Self,
    ) -> Result<(), AlgebraError> {
        let rows = ii.into().resolve(self.nrows)?;
        let cols = jj.into().resolve(self.ncols)?;
        self.scatter(&rows, &cols, src)
    }

    /// Complement ("without") read: every row not selected by `ii` and
    /// every column not selected by `jj`, the minor-extraction primitive.
    pub fn without(
        &self,
        ii: impl Into<Idx>,
        jj: impl Into<Idx>,
    ) -> Result<Self, AlgebraError> {
        let rows = ii.into().complement(self.nrows)?;
        let cols = jj.into().complement(self.ncols)?;
        Ok(self.gather(&rows, &cols))
    }

    /// Complement write, mirroring [`Matrix::without`].
    pub fn assign_without(
        &mut self,
        ii: impl Into<Idx>,
        jj: impl Into<Idx>,
        src: &Self,
    ) -> Result<(), AlgebraError> {
        let rows = ii.into().complement(self.nrows)?;
        let cols = jj.into().complement(self.ncols)?;
        self.scatter(&rows, &cols, src)
    }

    // Resolved positions are always in bounds.
    fn gather(&self, rows: &[usize], cols: &[usize]) -> Self {
        let vals: Vec<Vec<K>> = rows
            .iter()
            .map(|&i| cols.iter().map(|&j| self.vals[i][j]).collect())
            .collect();
        Self {
            nrows: rows.len(),
            ncols: cols.len(),
            vals,
        }
    }

    fn scatter(&mut self, rows: &[usize], cols: &[usize], src: &Self) -> Result<(), AlgebraError> {
        if rows.len() != src.nrows || cols.len() != src.ncols {
            return Err(AlgebraError::DifferentShapes(
                rows.len(),
                cols.len(),
                src.nrows,
                src.ncols,
            ));
        }
        for (i, src_row) in rows.iter().zip(src.vals.iter()) {
            for (j, x) in cols.iter().zip(src_row.iter()) {
                self.vals[*i][*j] = *x;
            }
        }
        Ok(())
    }

    // --- Arithmetic ---

    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(AlgebraError::DifferentShapes(
                self.nrows,
                self.ncols,
                other.nrows,
                other.ncols,
            ));
        }
        let vals = self
            .vals
            .iter()
            .zip(other.vals.iter())
            .map(|(r1, r2)| r1.iter().zip(r2.iter()).map(|(a, b)| *a + *b).collect())
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_add(&other.scale(-K::one()))
    }

    pub fn scale(&self, k: K) -> Self {
        let vals = self
            .vals
            .iter()
            .map(|row| row.iter().map(|x| *x * k).collect())
            .collect();
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        }
    }

    /// Standard triple-loop product; `self.ncols` must equal `other.nrows`.
    pub fn checked_matmul(&self, other: &Self) -> Option<Self> {
        if self.ncols != other.nrows {
            return None;
        }
        let vals: Vec<Vec<K>> = cfg_iter!(self.vals)
            .map(|row| {
                (0..other.ncols)
                    .map(|j| (0..self.ncols).map(|k| row[k] * other.vals[k][j]).sum())
                    .collect()
            })
            .collect();
        Some(Self {
            nrows: self.nrows,
            ncols: other.ncols,
            vals,
        })
    }

    pub fn try_matmul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.checked_matmul(other).ok_or(AlgebraError::DifferentShapes(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }

    pub fn checked_mul_vec(&self, v: &Vector<K>) -> Option<Vector<K>> {
        if self.ncols != v.len() {
            return None;
        }
        Some(Vector::col(
            self.vals
                .iter()
                .map(|row| row.iter().zip(v.iter()).map(|(a, b)| *a * *b).sum())
                .collect(),
        ))
    }

    pub fn try_mul_vec(&self, v: &Vector<K>) -> Result<Vector<K>, AlgebraError> {
        self.checked_mul_vec(v)
            .ok_or(AlgebraError::DifferentLengths(self.ncols, v.len()))
    }

    // --- Concatenation ---

    /// Column-wise concatenation, `self | other`.
    pub fn concat_right(&self, other: impl Into<Self>) -> Result<Self, AlgebraError> {
        let other = other.into();
        if self.nrows != other.nrows {
            return Err(AlgebraError::DifferentShapes(
                self.nrows,
                self.ncols,
                other.nrows,
                other.ncols,
            ));
        }
        let vals = self
            .vals
            .iter()
            .zip(other.vals)
            .map(|(r1, r2)| {
                let mut row = r1.clone();
                row.extend(r2);
                row
            })
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: self.ncols + other.ncols,
            vals,
        })
    }

    /// Column-wise concatenation, `other | self`.
    pub fn concat_left(&self, other: impl Into<Self>) -> Result<Self, AlgebraError> {
        other.into().concat_right(self.clone())
    }

    /// Row-wise concatenation, `self` on top.
    pub fn concat_below(&self, other: impl Into<Self>) -> Result<Self, AlgebraError> {
        let other = other.into();
        if self.ncols != other.ncols {
            return Err(AlgebraError::DifferentShapes(
                self.nrows,
                self.ncols,
                other.nrows,
                other.ncols,
            ));
        }
        let mut vals = self.vals.clone();
        vals.extend(other.vals);
        Ok(Self {
            nrows: self.nrows + other.nrows,
            ncols: self.ncols,
            vals,
        })
    }

    /// Row-wise concatenation, `other` on top.
    pub fn concat_above(&self, other: impl Into<Self>) -> Result<Self, AlgebraError> {
        other.into().concat_below(self.clone())
    }

    /// `true` iff the matrix differs from the null matrix of its shape.
    pub fn is_nonzero(&self) -> bool {
        self.vals.iter().any(|row| row.iter().any(|x| !x.is_zero()))
    }
}

impl<K: Field + UniformRand> Matrix<K> {
    pub fn rand<RND: Rng>(rng: &mut RND, nrows: usize, ncols: usize) -> Self {
        let vals = (0..nrows)
            .map(|_| (0..ncols).map(|_| K::rand(rng)).collect::<Vec<K>>())
            .collect::<Vec<Vec<K>>>();
        Self { nrows, ncols, vals }
    }
}

impl Matrix<Real> {
    /// Interpret this real matrix as a complex matrix.
    pub fn as_complex(&self) -> Matrix<Complex> {
        let vals = self
            .vals
            .iter()
            .map(|row| row.iter().map(|x| Complex::new(*x, 0.0)).collect())
            .collect();
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            vals,
        }
    }
}

impl<K: Field> From<Vec<Vec<K>>> for Matrix<K> {
    fn from(rows: Vec<Vec<K>>) -> Matrix<K> {
        let ncols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == ncols));
        Self {
            nrows: rows.len(),
            ncols,
            vals: rows,
        }
    }
}

impl<K: Field> From<Vector<K>> for Matrix<K> {
    fn from(v: Vector<K>) -> Matrix<K> {
        match v.orient {
            Orient::Row => {
                let n = v.len();
                Self {
                    nrows: 1,
                    ncols: n,
                    vals: vec![v.into_elems()],
                }
            }
            Orient::Col => {
                let m = v.len();
                Self {
                    nrows: m,
                    ncols: 1,
                    vals: v.into_elems().into_iter().map(|x| vec![x]).collect(),
                }
            }
        }
    }
}

impl<K: Field> Add<&Matrix<K>> for &Matrix<K> {
    type Output = Matrix<K>;

    fn add(self, rhs: &Matrix<K>) -> Matrix<K> {
        self.try_add(rhs).unwrap()
    }
}

impl<K: Field> Sub<&Matrix<K>> for &Matrix<K> {
    type Output = Matrix<K>;

    fn sub(self, rhs: &Matrix<K>) -> Matrix<K> {
        self.try_sub(rhs).unwrap()
    }
}

impl<K: Field> Neg for Matrix<K> {
    type Output = Matrix<K>;

    fn neg(self) -> Matrix<K> {
        self.scale(-K::one())
    }
}

impl<K: Field> Neg for &Matrix<K> {
    type Output = Matrix<K>;

    fn neg(self) -> Matrix<K> {
        self.scale(-K::one())
    }
}

impl<K: Field> Mul<K> for &Matrix<K> {
    type Output = Matrix<K>;

    fn mul(self, k: K) -> Matrix<K> {
        self.scale(k)
    }
}

impl<K: Field> Div<K> for &Matrix<K> {
    type Output = Matrix<K>;

    fn div(self, k: K) -> Matrix<K> {
        self.scale(k.recip())
    }
}

impl<K: Field> Mul<&Matrix<K>> for &Matrix<K> {
    type Output = Matrix<K>;

    fn mul(self, rhs: &Matrix<K>) -> Matrix<K> {
        self.try_matmul(rhs).unwrap()
    }
}

impl<K: Field> Mul<&Vector<K>> for &Matrix<K> {
    type Output = Vector<K>;

    fn mul(self, v: &Vector<K>) -> Vector<K> {
        self.try_mul_vec(v).unwrap()
    }
}

impl<K: Field> AddAssign<&Matrix<K>> for Matrix<K> {
    fn add_assign(&mut self, rhs: &Matrix<K>) {
        *self = self.try_add(rhs).unwrap();
    }
}

impl<K: Field> SubAssign<&Matrix<K>> for Matrix<K> {
    fn sub_assign(&mut self, rhs: &Matrix<K>) {
        *self = self.try_sub(rhs).unwrap();
    }
}

impl<K: Field> MulAssign<K> for Matrix<K> {
    fn mul_assign(&mut self, k: K) {
        cfg_iter_mut!(self.vals).for_each(|row| row.iter_mut().for_each(|x| *x *= k))
    }
}

impl<K: Field> DivAssign<K> for Matrix<K> {
    fn div_assign(&mut self, k: K) {
        let r = k.recip();
        cfg_iter_mut!(self.vals).for_each(|row| row.iter_mut().for_each(|x| *x *= r))
    }
}

impl<K: Field> fmt::Display for Matrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nrows {
            0 => write!(f, "[]"),
            1 => {
                write!(f, "[")?;
                for x in self.vals[0].iter() {
                    write!(f, "{x}\t")?;
                }
                write!(f, "]")
            }
            m => {
                for (i, r) in self.vals.iter().enumerate() {
                    let (left, right) = match i {
                        0 => ("⎡", "⎤"),
                        i if i == m - 1 => ("⎣", "⎦"),
                        _ => ("⎢", "⎥"),
                    };
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{left}")?;
                    for x in r.iter() {
                        write!(f, "{x}\t")?;
                    }
                    write!(f, "{right}")?;
                }
                Ok(())
            }
        }
    }
}

/// Operand accepted by the [`mat`] coercion helper.
#[derive(Clone, Debug, From)]
pub enum MatOperand<K: Field> {
    Scalar(K),
    Vector(Vector<K>),
    Matrix(Matrix<K>),
}

/// Coerce a scalar, vector or matrix into a canonical [`Matrix`]; an
/// existing matrix is passed through without copying. A row vector
/// becomes a 1-by-n matrix, a column vector an m-by-1 one.
pub fn mat<K: Field>(x: impl Into<MatOperand<K>>) -> Matrix<K> {
    match x.into() {
        MatOperand::Scalar(k) => Matrix {
            nrows: 1,
            ncols: 1,
            vals: vec![vec![k]],
        },
        MatOperand::Vector(v) => v.into(),
        MatOperand::Matrix(m) => m,
    }
}
