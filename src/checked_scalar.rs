//! A scalar that panics on uninitialized access.
//!
//! [`CheckedScalar`] stands in for a plain numeric type in tests. Storage that is
//! allocated but never written leaves it uninitialized, and the first read of such
//! a value aborts the test at the offending call site.

use crate::numeric::NumTraits;
use num_traits::{AsPrimitive, One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const UNINITIALIZED_ACCESS: &str = "Uninitialized access.";

#[derive(Clone, Copy)]
pub struct CheckedScalar<T> {
    value: Option<T>,
}

#[cold]
#[track_caller]
fn uninitialized_access() -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(%location, "read of an uninitialized scalar");
    panic!("{UNINITIALIZED_ACCESS}");
}

impl<T> CheckedScalar<T> {
    #[inline(always)]
    pub const fn uninit() -> Self {
        Self { value: None }
    }

    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Converts `source` with an `as` cast and stores the result.
    #[inline(always)]
    pub fn cast_from<Source>(source: Source) -> Self
    where
        Source: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::new(source.as_())
    }

    /// Overwrites the stored value, whether or not one was present.
    #[inline(always)]
    pub fn set(&mut self, value: T) -> &mut Self {
        self.value = Some(value);
        self
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// Reads the value without the initialization check.
    #[inline(always)]
    pub fn try_get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Reads the value.
    ///
    /// # Panics
    /// If no value has been written yet. A `tracing` error event carrying the
    /// caller's location is emitted before the panic.
    #[inline(always)]
    #[track_caller]
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => uninitialized_access(),
        }
    }

    #[inline(always)]
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self.value {
            Some(value) => value,
            None => uninitialized_access(),
        }
    }

    /// Reads the value and converts it with an `as` cast.
    #[inline(always)]
    #[track_caller]
    pub fn cast<Target>(&self) -> Target
    where
        T: AsPrimitive<Target>,
        Target: Copy + 'static,
    {
        self.get().as_()
    }
}

impl<T> Default for CheckedScalar<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T> From<T> for CheckedScalar<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for CheckedScalar<T> {
    type Target = T;

    #[inline(always)]
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for CheckedScalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("CheckedScalar").field(value).finish(),
            None => f.write_str("CheckedScalar(<uninitialized>)"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for CheckedScalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("<uninitialized>"),
        }
    }
}

impl<T: PartialEq> PartialEq for CheckedScalar<T> {
    #[inline(always)]
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: PartialOrd> PartialOrd for CheckedScalar<T> {
    #[inline(always)]
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

macro_rules! impl_checked_binop {
    ($($Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident);+ $(;)?) => {
        $(
            impl<T: $Op<Output = T> + Copy> $Op for CheckedScalar<T> {
                type Output = Self;

                #[inline(always)]
                #[track_caller]
                fn $op(self, rhs: Self) -> Self::Output {
                    Self::new($Op::$op(*self.get(), *rhs.get()))
                }
            }

            impl<T: $Op<Output = T> + Copy> $OpAssign for CheckedScalar<T> {
                #[inline(always)]
                #[track_caller]
                fn $op_assign(&mut self, rhs: Self) {
                    *self = $Op::$op(*self, rhs);
                }
            }
        )+
    };
}

impl_checked_binop!(
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
);

impl<T: Neg<Output = T> + Copy> Neg for CheckedScalar<T> {
    type Output = Self;

    #[inline(always)]
    #[track_caller]
    fn neg(self) -> Self::Output {
        Self::new(-*self.get())
    }
}

impl<T: Zero + Copy> Zero for CheckedScalar<T> {
    #[inline(always)]
    fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline(always)]
    #[track_caller]
    fn is_zero(&self) -> bool {
        self.get().is_zero()
    }
}

impl<T: One + Copy> One for CheckedScalar<T> {
    #[inline(always)]
    fn one() -> Self {
        Self::new(T::one())
    }
}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for CheckedScalar<T> {
    type Epsilon = T::Epsilon;

    #[inline(always)]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline(always)]
    #[track_caller]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(self.get(), other.get(), epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for CheckedScalar<T> {
    #[inline(always)]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline(always)]
    #[track_caller]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(self.get(), other.get(), epsilon, max_relative)
    }
}

impl<T: NumTraits> NumTraits for CheckedScalar<T> {
    type Real = T::Real;

    const IS_INTEGER: bool = T::IS_INTEGER;
    const IS_SIGNED: bool = T::IS_SIGNED;
    const IS_COMPLEX: bool = T::IS_COMPLEX;
    const REQUIRE_INITIALIZATION: bool = true;

    const READ_COST: usize = T::READ_COST;
    const ADD_COST: usize = T::ADD_COST;
    const MUL_COST: usize = T::MUL_COST;

    #[inline(always)]
    fn epsilon() -> Self::Real {
        T::epsilon()
    }

    #[inline(always)]
    fn digits10() -> u32 {
        T::digits10()
    }
}
