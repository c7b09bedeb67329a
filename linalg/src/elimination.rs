//! Gaussian elimination and the algorithms built on it.
//!
//! The elimination recurses on owned sub-matrices: pivot on the first
//! column, normalize, clear below, then recurse without row 0 and
//! column 0. Pivot choice is the first nonzero entry found scanning
//! down, not the entry of largest magnitude; numerical conditioning is
//! out of scope.

use crate::{AlgebraError, Field, Matrix};
use ark_std::vec::*;

impl<K: Field> Matrix<K> {
    /// Row-echelon form with unit pivots (Gauss, not Gauss-Jordan).
    /// Always a new matrix; the receiver is untouched.
    pub fn gauss(&self) -> Self {
        let (rows, _) = echelon(self.vals().clone());
        Self::from_parts(self.nrows(), self.ncols(), rows)
    }

    /// The determinant of a square matrix.
    ///
    /// Elimination normalizes every pivot row, so the echelon diagonal
    /// alone is not the determinant; the pivot product and row-swap
    /// parity accumulated during elimination are factored back in.
    pub fn det(&self) -> Result<K, AlgebraError> {
        if self.nrows() != self.ncols() {
            return Err(AlgebraError::NotSquare(self.nrows(), self.ncols()));
        }
        let (rows, factor) = echelon(self.vals().clone());
        let diag: K = (0..self.nrows()).map(|i| rows[i][i]).product();
        Ok(factor * diag)
    }

    /// `false` for a non-square matrix, otherwise `det != 0`.
    pub fn invertible(&self) -> bool {
        self.nrows() == self.ncols() && self.det().map_or(false, |d| !d.is_zero())
    }

    /// The inverse by cofactor expansion: `inv[i][j]` is
    /// `(-1)^(i+j) det(minor(j, i)) / det`. Factorial cost; meant for
    /// small matrices.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        if self.nrows() != self.ncols() {
            return Err(AlgebraError::NotSquare(self.nrows(), self.ncols()));
        }
        let d = self.det()?;
        if d.is_zero() {
            return Err(AlgebraError::NotInvertible);
        }
        let n = self.nrows();
        let mut vals = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                let minor = self.without(j as isize, i as isize)?;
                let mut c = minor.det()? / d;
                if (i + j) % 2 == 1 {
                    c = -c;
                }
                row.push(c);
            }
            vals.push(row);
        }
        Ok(Self::from_parts(n, n, vals))
    }
}

/// Recursive elimination over owned rows. Returns the echelon rows and
/// the factor relating their determinant to the input's: the product of
/// the pivots, negated once per row swap.
fn echelon<K: Field>(mut rows: Vec<Vec<K>>) -> (Vec<Vec<K>>, K) {
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || ncols == 0 {
        return (rows, K::one());
    }

    // An all-zero first column is kept as-is; eliminate the rest.
    if rows.iter().all(|r| r[0].is_zero()) {
        let stripped = rows.iter().map(|r| r[1..].to_vec()).collect();
        let (sub, factor) = echelon(stripped);
        let rows = sub
            .into_iter()
            .map(|s| {
                let mut row = vec![K::zero()];
                row.extend(s);
                row
            })
            .collect();
        return (rows, factor);
    }

    let mut factor = K::one();

    // First-found pivot: swap up the first row with a nonzero leading
    // entry. Each swap flips the determinant's sign.
    if rows[0][0].is_zero() {
        let r = rows
            .iter()
            .position(|row| !row[0].is_zero())
            .expect("a nonzero entry exists in the first column");
        rows.swap(0, r);
        factor = -factor;
    }

    // Normalize the pivot row to a leading 1.
    let pivot = rows[0][0];
    factor *= pivot;
    let r = pivot.recip();
    for x in rows[0].iter_mut() {
        *x *= r;
    }

    // Clear the first column below the pivot.
    let pivot_row = rows[0].clone();
    for row in rows.iter_mut().skip(1) {
        let c = row[0];
        if c.is_zero() {
            continue;
        }
        for (x, p) in row.iter_mut().zip(pivot_row.iter()) {
            *x -= c * *p;
        }
    }

    // Recurse without row 0 and column 0, then reassemble.
    let sub_rows = rows[1..].iter().map(|r| r[1..].to_vec()).collect();
    let (sub, sub_factor) = echelon(sub_rows);
    factor *= sub_factor;

    let mut out = Vec::with_capacity(rows.len());
    out.push(rows.swap_remove(0));
    for s in sub {
        let mut row = vec![K::zero()];
        row.extend(s);
        out.push(row);
    }
    (out, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Complex;

    #[test]
    fn gauss_known_echelon() {
        let m = Matrix::from(vec![vec![2.0, 4.0], vec![1.0, 3.0]]);
        assert_eq!(m.gauss(), Matrix::from(vec![vec![1.0, 2.0], vec![0.0, 1.0]]));
        // receiver untouched
        assert_eq!(m.get(0, 0).unwrap(), 2.0);
    }

    #[test]
    fn gauss_keeps_zero_columns() {
        let m = Matrix::from(vec![vec![0.0, 2.0], vec![0.0, 4.0]]);
        assert_eq!(m.gauss(), Matrix::from(vec![vec![0.0, 1.0], vec![0.0, 0.0]]));
    }

    #[test]
    fn gauss_swaps_for_a_zero_leading_entry() {
        let m = Matrix::from(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(m.gauss(), Matrix::from(vec![vec![1.0, 0.0], vec![0.0, 1.0]]));
    }

    #[test]
    fn gauss_of_zero_matrix_is_itself() {
        let z = Matrix::<f64>::zero(3, 2);
        assert_eq!(z.gauss(), z);
        let e = Matrix::<f64>::empty();
        assert_eq!(e.gauss(), e);
    }

    #[test]
    fn gauss_rectangular() {
        let m = Matrix::from(vec![vec![2.0, 2.0, 4.0], vec![1.0, 2.0, 3.0]]);
        assert_eq!(
            m.gauss(),
            Matrix::from(vec![vec![1.0, 1.0, 2.0], vec![0.0, 1.0, 1.0]])
        );
    }

    #[test]
    fn determinant_known_values() {
        assert_eq!(Matrix::from(vec![vec![5.0]]).det().unwrap(), 5.0);
        // 2x2 with an exact division path
        let m = Matrix::from(vec![vec![2.0, 1.0], vec![4.0, 4.0]]);
        assert_eq!(m.det().unwrap(), 4.0);
        // diagonal
        let d = Matrix::from(vec![
            vec![1.0, 2.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 4.0],
        ]);
        assert_eq!(d.det().unwrap(), 8.0);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        for n in 0..5 {
            assert_eq!(Matrix::<f64>::identity(n).det().unwrap(), 1.0);
        }
    }

    #[test]
    fn determinant_sign_flips_on_swap() {
        let m = Matrix::from(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(m.det().unwrap(), -2.0);
    }

    #[test]
    fn determinant_zero_cases() {
        let zero_row = Matrix::from(vec![vec![1.0, 1.0], vec![0.0, 0.0]]);
        assert_eq!(zero_row.det().unwrap(), 0.0);
        let zero_col = Matrix::from(vec![vec![0.0, 1.0], vec![0.0, 2.0]]);
        assert_eq!(zero_col.det().unwrap(), 0.0);
    }

    #[test]
    fn determinant_requires_square() {
        let m = Matrix::<f64>::zero(2, 3);
        assert_eq!(m.det(), Err(AlgebraError::NotSquare(2, 3)));
        assert_eq!(m.inverse(), Err(AlgebraError::NotSquare(2, 3)));
        // the query is asymmetric by design: no error, just false
        assert!(!m.invertible());
    }

    #[test]
    fn determinant_complex() {
        let i = Complex::new(0.0, 1.0);
        let one = Complex::new(1.0, 0.0);
        let two = Complex::new(2.0, 0.0);
        let m = Matrix::from(vec![vec![one, i], vec![-i, two]]);
        // 1*2 - i*(-i) = 2 - 1
        assert_eq!(m.det().unwrap(), one);
    }

    #[test]
    fn inverse_one_by_one() {
        let m = Matrix::from(vec![vec![5.0]]);
        assert_eq!(m.inverse().unwrap(), Matrix::from(vec![vec![1.0 / 5.0]]));
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = Matrix::from(vec![vec![2.0, 1.0], vec![4.0, 4.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from(vec![vec![1.0, -0.25], vec![-1.0, 0.5]]));
        assert_eq!(&inv * &m, Matrix::identity(2));
        assert_eq!(&m * &inv, Matrix::identity(2));

        let m = Matrix::from(vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 4.0, 0.0],
            vec![0.0, 0.0, 2.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_eq!(&inv * &m, Matrix::identity(3));
        assert_eq!(&m * &inv, Matrix::identity(3));
    }

    #[test]
    fn inverse_complex() {
        let i = Complex::new(0.0, 1.0);
        let one = Complex::new(1.0, 0.0);
        let two = Complex::new(2.0, 0.0);
        let m = Matrix::from(vec![vec![one, i], vec![-i, two]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from(vec![vec![two, -i], vec![i, one]]));
        assert_eq!(&inv * &m, Matrix::identity(2));
    }

    #[test]
    fn singular_matrix_is_not_invertible() {
        let m = Matrix::from(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert!(!m.invertible());
        assert_eq!(m.inverse(), Err(AlgebraError::NotInvertible));
        assert!(Matrix::<f64>::identity(4).invertible());
    }

    #[test]
    fn empty_matrix_determinant_is_one() {
        // the empty product convention keeps det(I_0) = 1
        assert_eq!(Matrix::<f64>::empty().det().unwrap(), 1.0);
        assert!(Matrix::<f64>::empty().invertible());
    }
}
