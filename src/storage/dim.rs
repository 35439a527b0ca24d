use std::fmt::Debug;

/// Extent of a storage axis, either known at compile time or at run time.
pub trait Dim: Copy + Debug + PartialEq {
    /// `Some(n)` for compile-time extents.
    const FIXED: Option<usize>;

    fn value(&self) -> usize;

    /// `None` if `extent` is not representable by this dimension.
    fn try_from_usize(extent: usize) -> Option<Self>;
}

/// Compile-time extent, zero-sized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// Run-time extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dyn(pub usize);

impl<const N: usize> Dim for Const<N> {
    const FIXED: Option<usize> = Some(N);

    #[inline(always)]
    fn value(&self) -> usize {
        N
    }

    #[inline(always)]
    fn try_from_usize(extent: usize) -> Option<Self> {
        (extent == N).then_some(Const)
    }
}

impl Dim for Dyn {
    const FIXED: Option<usize> = None;

    #[inline(always)]
    fn value(&self) -> usize {
        self.0
    }

    #[inline(always)]
    fn try_from_usize(extent: usize) -> Option<Self> {
        Some(Dyn(extent))
    }
}
