use num_traits::Zero;

/// Compile-time description of a numeric scalar type.
///
/// Generic code reads these flags to decide how to treat a scalar without
/// knowing its concrete type.
pub trait NumTraits: Sized {
    /// Real counterpart of the scalar, `Self` for every real type.
    type Real;

    const IS_INTEGER: bool;
    const IS_SIGNED: bool;
    const IS_COMPLEX: bool = false;

    /// Set for scalars that must be constructed before being read and cannot
    /// be assumed to start out as zero.
    const REQUIRE_INITIALIZATION: bool = false;

    const READ_COST: usize = 1;
    const ADD_COST: usize = 1;
    const MUL_COST: usize = 1;

    fn epsilon() -> Self::Real;

    /// Number of decimal digits representable without change.
    fn digits10() -> u32;
}

// floor(bits * log10(2))
const fn integer_digits10(value_bits: u32) -> u32 {
    ((value_bits as u64 * 30103) / 100000) as u32
}

macro_rules! impl_num_traits_integer {
    ($($t:ty => $signed:literal),+ $(,)?) => {
        $(
            impl NumTraits for $t {
                type Real = $t;

                const IS_INTEGER: bool = true;
                const IS_SIGNED: bool = $signed;

                #[inline(always)]
                fn epsilon() -> Self::Real {
                    0
                }

                #[inline(always)]
                fn digits10() -> u32 {
                    integer_digits10(<$t>::BITS - $signed as u32)
                }
            }
        )+
    };
}

macro_rules! impl_num_traits_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl NumTraits for $t {
                type Real = $t;

                const IS_INTEGER: bool = false;
                const IS_SIGNED: bool = true;

                #[inline(always)]
                fn epsilon() -> Self::Real {
                    <$t>::EPSILON
                }

                #[inline(always)]
                fn digits10() -> u32 {
                    <$t>::DIGITS
                }
            }
        )+
    };
}

impl_num_traits_integer!(
    i8 => true, i16 => true, i32 => true, i64 => true, i128 => true, isize => true,
    u8 => false, u16 => false, u32 => false, u64 => false, u128 => false, usize => false,
);

impl_num_traits_float!(f32, f64);

/// Builds a single element for freshly allocated storage.
///
/// Scalars that do not require initialization start out as zero. The others
/// are default-constructed so that a read before the first write stays
/// detectable.
#[inline(always)]
pub fn fresh_element<T>() -> T
where
    T: NumTraits + Default + Zero,
{
    if T::REQUIRE_INITIALIZATION {
        T::default()
    } else {
        T::zero()
    }
}

pub fn fresh_elements<T>(count: usize) -> Vec<T>
where
    T: NumTraits + Default + Zero,
{
    tracing::trace!(
        count,
        require_initialization = T::REQUIRE_INITIALIZATION,
        "constructing fresh elements"
    );

    let mut elements = Vec::with_capacity(count);
    elements.resize_with(count, fresh_element::<T>);
    elements
}
