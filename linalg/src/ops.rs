use crate::{Field, Matrix, Vector};
use ark_std::vec::*;

pub trait Transpose {
    fn transpose(&self) -> Self;
}

// Rows must be rectangular; `Matrix` guarantees this.
impl<K: Clone> Transpose for Vec<Vec<K>> {
    fn transpose(&self) -> Self {
        let ncols = self.first().map_or(0, Vec::len);
        (0..ncols)
            .map(|c| self.iter().map(|row| row[c].clone()).collect())
            .collect()
    }
}

impl<K: Field> Transpose for Matrix<K> {
    fn transpose(&self) -> Self {
        Self::from_parts(self.ncols(), self.nrows(), self.vals().transpose())
    }
}

/// For a vector, transposition only flips the orientation tag.
impl<K: Field> Transpose for Vector<K> {
    fn transpose(&self) -> Self {
        let mut v = self.clone();
        v.orient = v.orient.flipped();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orient;

    #[test]
    fn transpose_vec_of_vecs() {
        let v = vec![vec![1, 2, 3], vec![4, 5, 6]].transpose();
        assert_eq!(v, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn transpose_matrix() {
        let m = Matrix::from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(
            t,
            Matrix::from(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]])
        );
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn transpose_vector_flips_orientation_only() {
        let v = Vector::row(vec![1.0, 2.0]);
        let t = v.transpose();
        assert_eq!(t.orient, Orient::Col);
        assert_eq!(t, v);
    }
}
