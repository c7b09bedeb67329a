use crate::{field::Complex, index::normalize, AlgebraError, Field, Idx, Real};
use ark_std::{
    fmt,
    iter::FromIterator,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    rand::Rng,
    vec::*,
    UniformRand,
};
use derive_more::From;

/// Orientation metadata on a [`Vector`].
///
/// Affects concatenation and display conventions only; never arithmetic
/// or equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orient {
    #[default]
    Row,
    Col,
}

impl Orient {
    pub fn flipped(self) -> Self {
        match self {
            Orient::Row => Orient::Col,
            Orient::Col => Orient::Row,
        }
    }
}

/// A one-dimensional ordered container of field elements.
#[derive(Clone, Debug)]
pub struct Vector<K> {
    elems: Vec<K>,
    pub orient: Orient,
}

// Orientation is not part of value equality.
impl<K: PartialEq> PartialEq for Vector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<K: Eq> Eq for Vector<K> {}

impl<K: Field> Vector<K> {
    pub fn new(elems: Vec<K>) -> Self {
        Self::row(elems)
    }

    pub fn row(elems: Vec<K>) -> Self {
        Self {
            elems,
            orient: Orient::Row,
        }
    }

    pub fn col(elems: Vec<K>) -> Self {
        Self {
            elems,
            orient: Orient::Col,
        }
    }

    pub fn fill(k: K, len: usize) -> Self {
        Self::row(vec![k; len])
    }

    pub fn zero(len: usize) -> Self {
        Self::fill(K::zero(), len)
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.elems
    }

    pub(crate) fn into_elems(self) -> Vec<K> {
        self.elems
    }

    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.elems.iter()
    }

    /// The element at position `i`; negative counts from the end.
    pub fn get(&self, i: isize) -> Result<K, AlgebraError> {
        Ok(self.elems[normalize(i, self.len())?])
    }

    pub fn set(&mut self, i: isize, val: K) -> Result<(), AlgebraError> {
        let i = normalize(i, self.len())?;
        self.elems[i] = val;
        Ok(())
    }

    /// Fancy read: the elements selected by `spec`, in resolution order,
    /// as a new vector with the receiver's orientation.
    pub fn select(&self, spec: impl Into<Idx>) -> Result<Self, AlgebraError> {
        let picked = spec.into().resolve(self.len())?;
        Ok(Self {
            elems: picked.into_iter().map(|i| self.elems[i]).collect(),
            orient: self.orient,
        })
    }

    /// Fancy write: assign the positions selected by `spec`, in resolution
    /// order, from an equal-length source.
    ///
    /// The source is a separate borrow, so a permutation of a vector
    /// through itself is written with an explicit snapshot, e.g.
    /// `let src = v.clone(); v.assign(spec, &src)`.
    pub fn assign(&mut self, spec: impl Into<Idx>, src: &Self) -> Result<(), AlgebraError> {
        let picked = spec.into().resolve(self.len())?;
        if picked.len() != src.len() {
            return Err(AlgebraError::DifferentLengths(picked.len(), src.len()));
        }
        for (i, x) in picked.into_iter().zip(src.iter().copied()) {
            self.elems[i] = x;
        }
        Ok(())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.len() != other.len() {
            return Err(AlgebraError::DifferentLengths(self.len(), other.len()));
        }
        Ok(Self {
            elems: self
                .iter()
                .zip(other.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
            orient: self.orient,
        })
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_add(&other.clone().neg())
    }

    pub fn scale(&self, k: K) -> Self {
        Self {
            elems: self.iter().map(|x| *x * k).collect(),
            orient: self.orient,
        }
    }

    /// Concatenate to the right; the receiver's orientation is kept.
    pub fn concat_right(&self, other: impl Into<VecOperand<K>>) -> Self {
        let mut elems = self.elems.clone();
        match other.into() {
            VecOperand::Scalar(k) => elems.push(k),
            VecOperand::Vector(v) => elems.extend(v.elems),
        }
        Self {
            elems,
            orient: self.orient,
        }
    }

    /// Concatenate to the left; the receiver's orientation is kept.
    pub fn concat_left(&self, other: impl Into<VecOperand<K>>) -> Self {
        let mut elems = match other.into() {
            VecOperand::Scalar(k) => vec![k],
            VecOperand::Vector(v) => v.elems,
        };
        elems.extend_from_slice(&self.elems);
        Self {
            elems,
            orient: self.orient,
        }
    }

    /// `true` iff the vector differs from the all-zero vector.
    pub fn is_nonzero(&self) -> bool {
        self.iter().any(|x| !x.is_zero())
    }
}

impl<K: Field + UniformRand> Vector<K> {
    pub fn rand<RND: Rng>(rng: &mut RND, len: usize) -> Self {
        Self::row((0..len).map(|_| K::rand(rng)).collect())
    }
}

impl Vector<Real> {
    /// Interpret this real vector as a complex vector.
    pub fn as_complex(&self) -> Vector<Complex> {
        Vector {
            elems: self.iter().map(|x| Complex::new(*x, 0.0)).collect(),
            orient: self.orient,
        }
    }
}

impl<K: Field> From<Vec<K>> for Vector<K> {
    fn from(elems: Vec<K>) -> Self {
        Self::row(elems)
    }
}

impl<K: Field> FromIterator<K> for Vector<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::row(iter.into_iter().collect())
    }
}

impl<K> IntoIterator for Vector<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Vector<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<K: Field> Add<&Vector<K>> for &Vector<K> {
    type Output = Vector<K>;

    fn add(self, rhs: &Vector<K>) -> Vector<K> {
        self.try_add(rhs).unwrap()
    }
}

impl<K: Field> Sub<&Vector<K>> for &Vector<K> {
    type Output = Vector<K>;

    fn sub(self, rhs: &Vector<K>) -> Vector<K> {
        self.try_sub(rhs).unwrap()
    }
}

impl<K: Field> Neg for Vector<K> {
    type Output = Vector<K>;

    fn neg(self) -> Vector<K> {
        self.scale(-K::one())
    }
}

impl<K: Field> Neg for &Vector<K> {
    type Output = Vector<K>;

    fn neg(self) -> Vector<K> {
        self.scale(-K::one())
    }
}

impl<K: Field> Mul<K> for &Vector<K> {
    type Output = Vector<K>;

    fn mul(self, k: K) -> Vector<K> {
        self.scale(k)
    }
}

impl<K: Field> Div<K> for &Vector<K> {
    type Output = Vector<K>;

    fn div(self, k: K) -> Vector<K> {
        self.scale(k.recip())
    }
}

impl<K: Field> AddAssign<&Vector<K>> for Vector<K> {
    fn add_assign(&mut self, rhs: &Vector<K>) {
        *self = self.try_add(rhs).unwrap();
    }
}

impl<K: Field> SubAssign<&Vector<K>> for Vector<K> {
    fn sub_assign(&mut self, rhs: &Vector<K>) {
        *self = self.try_sub(rhs).unwrap();
    }
}

impl<K: Field> MulAssign<K> for Vector<K> {
    fn mul_assign(&mut self, k: K) {
        self.elems.iter_mut().for_each(|x| *x *= k);
    }
}

impl<K: Field> DivAssign<K> for Vector<K> {
    fn div_assign(&mut self, k: K) {
        let r = k.recip();
        self.elems.iter_mut().for_each(|x| *x *= r);
    }
}

impl<K: Field> fmt::Display for Vector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// Operand accepted by vector concatenation and the [`vec`] helper.
#[derive(Clone, Debug, From)]
pub enum VecOperand<K: Field> {
    Scalar(K),
    Vector(Vector<K>),
}

/// Coerce a scalar or an existing vector into a canonical [`Vector`];
/// an existing vector is passed through without copying.
pub fn vec<K: Field>(x: impl Into<VecOperand<K>>) -> Vector<K> {
    match x.into() {
        VecOperand::Scalar(k) => Vector::row(vec![k]),
        VecOperand::Vector(v) => v,
    }
}
