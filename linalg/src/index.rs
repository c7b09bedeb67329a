use crate::AlgebraError;
use ark_std::{
    ops::{Range, RangeFrom, RangeFull, RangeTo},
    vec::*,
};
use derive_more::From;

/// A contiguous range-with-step selection over one axis.
///
/// Resolution follows Python slice semantics: negative endpoints count
/// from the end of the axis, endpoints are clipped to the axis rather
/// than rejected, and a negative step walks backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Span {
    pub fn new(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// The full axis, `..`.
    pub fn all() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }

    pub fn step(self, step: isize) -> Self {
        Self { step, ..self }
    }

    /// Concrete positions selected on an axis of length `len`.
    pub fn positions(&self, len: usize) -> Result<Vec<usize>, AlgebraError> {
        if self.step == 0 {
            return Err(AlgebraError::ZeroStep);
        }
        let len = len as isize;
        let (lower, upper) = if self.step < 0 { (-1, len - 1) } else { (0, len) };
        let default_start = if self.step < 0 { upper } else { lower };
        let default_stop = if self.step < 0 { lower } else { upper };
        let clip = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(mut b) => {
                if b < 0 {
                    b += len;
                }
                b.clamp(lower, upper)
            }
        };
        let start = clip(self.start, default_start);
        let stop = clip(self.stop, default_stop);

        let mut out = Vec::new();
        let mut i = start;
        while (self.step > 0 && i < stop) || (self.step < 0 && i > stop) {
            out.push(i as usize);
            i += self.step;
        }
        Ok(out)
    }
}

/// An index specification for one axis: a single position, a [`Span`], or
/// an ordered collection of further specifications.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum Idx {
    /// A single position; negative counts from the end of the axis.
    At(isize),
    Span(Span),
    Seq(Vec<Idx>),
}

impl Idx {
    pub fn seq(items: impl IntoIterator<Item = Idx>) -> Self {
        Idx::Seq(items.into_iter().collect())
    }

    /// Resolve against an axis of length `len` into ordered concrete
    /// positions. Duplicates are allowed and specification order is
    /// preserved, so `[2, 0..2]` on a length-5 axis yields `[2, 0, 1]`.
    pub fn resolve(&self, len: usize) -> Result<Vec<usize>, AlgebraError> {
        match self {
            Idx::At(i) => Ok(vec![normalize(*i, len)?]),
            Idx::Span(s) => s.positions(len),
            Idx::Seq(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend(item.resolve(len)?);
                }
                Ok(out)
            }
        }
    }

    /// The positions of the axis *not* selected by `resolve`, ascending.
    pub fn complement(&self, len: usize) -> Result<Vec<usize>, AlgebraError> {
        let picked = self.resolve(len)?;
        Ok((0..len).filter(|i| !picked.contains(i)).collect())
    }
}

impl From<Range<isize>> for Idx {
    fn from(r: Range<isize>) -> Self {
        Idx::Span(Span::new(r.start, r.end))
    }
}

impl From<RangeFrom<isize>> for Idx {
    fn from(r: RangeFrom<isize>) -> Self {
        Idx::Span(Span {
            start: Some(r.start),
            stop: None,
            step: 1,
        })
    }
}

impl From<RangeTo<isize>> for Idx {
    fn from(r: RangeTo<isize>) -> Self {
        Idx::Span(Span {
            start: None,
            stop: Some(r.end),
            step: 1,
        })
    }
}

impl From<RangeFull> for Idx {
    fn from(_: RangeFull) -> Self {
        Idx::Span(Span::all())
    }
}

/// Map a possibly-negative position onto `[0, len)`.
pub(crate) fn normalize(i: isize, len: usize) -> Result<usize, AlgebraError> {
    let n = len as isize;
    let j = if i < 0 { i + n } else { i };
    if (0..n).contains(&j) {
        Ok(j as usize)
    } else {
        Err(AlgebraError::OutOfRange(i, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_position() {
        assert_eq!(Idx::At(2).resolve(5).unwrap(), vec![2]);
        assert_eq!(Idx::At(-1).resolve(5).unwrap(), vec![4]);
        assert_eq!(Idx::At(5).resolve(5), Err(AlgebraError::OutOfRange(5, 5)));
        assert_eq!(Idx::At(-6).resolve(5), Err(AlgebraError::OutOfRange(-6, 5)));
    }

    #[test]
    fn span_forward() {
        assert_eq!(Idx::from(..).resolve(5).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(Idx::from(2..).resolve(5).unwrap(), vec![2, 3, 4]);
        assert_eq!(Idx::from(..3).resolve(5).unwrap(), vec![0, 1, 2]);
        assert_eq!(Idx::from(1..-1).resolve(5).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            Idx::from(Span::all().step(2)).resolve(5).unwrap(),
            vec![0, 2, 4]
        );
    }

    #[test]
    fn span_backward() {
        assert_eq!(
            Idx::from(Span::all().step(-1)).resolve(4).unwrap(),
            vec![3, 2, 1, 0]
        );
        // -1:-3:-1
        assert_eq!(
            Idx::from(Span::new(-1, -3).step(-1)).resolve(5).unwrap(),
            vec![4, 3]
        );
    }

    #[test]
    fn span_clips_out_of_range_endpoints() {
        assert_eq!(Idx::from(3..100).resolve(5).unwrap(), vec![3, 4]);
        assert_eq!(Idx::from(-100..2).resolve(5).unwrap(), vec![0, 1]);
        assert_eq!(Idx::from(4..1).resolve(5).unwrap(), Vec::<usize>::new());
        assert_eq!(Idx::from(..).resolve(0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(
            Idx::from(Span::all().step(0)).resolve(5),
            Err(AlgebraError::ZeroStep)
        );
    }

    #[test]
    fn collection_preserves_order_and_duplicates() {
        let spec = Idx::seq([Idx::At(2), Idx::from(0..2)]);
        assert_eq!(spec.resolve(5).unwrap(), vec![2, 0, 1]);

        let spec = Idx::seq([Idx::At(0), Idx::At(0), Idx::At(0)]);
        assert_eq!(spec.resolve(5).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn nested_collections() {
        let inner = Idx::seq([Idx::At(4), Idx::At(3)]);
        let spec = Idx::seq([Idx::from(0..1), inner]);
        assert_eq!(spec.resolve(5).unwrap(), vec![0, 4, 3]);
    }

    #[test]
    fn complement_is_sorted_set_difference() {
        let spec = Idx::from(Span::all().step(2));
        assert_eq!(spec.complement(5).unwrap(), vec![1, 3]);
        assert_eq!(Idx::At(1).complement(3).unwrap(), vec![0, 2]);
        assert_eq!(Idx::from(..).complement(3).unwrap(), Vec::<usize>::new());
    }
}
