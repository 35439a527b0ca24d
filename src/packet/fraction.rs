use super::HalfPacket;

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fraction {
    Full,
    Half,
    Quarter,
}

impl Fraction {
    /// Factor by which the full packet's lane count is divided.
    pub const fn divisor(self) -> usize {
        match self {
            Fraction::Full => 1,
            Fraction::Half => 2,
            Fraction::Quarter => 4,
        }
    }
}

/// Compile-time choice between the full, half and quarter packet.
///
/// Implemented only by [`Full`], [`Half`] and [`Quarter`]. The three candidates
/// handed to [`PacketFraction::Select`] may be unrelated types.
pub trait PacketFraction: Sealed {
    const FRACTION: Fraction;

    type Select<F: HalfPacket, H: HalfPacket, Q: HalfPacket>: HalfPacket;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Full;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Half;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quarter;

impl Sealed for Full {}
impl Sealed for Half {}
impl Sealed for Quarter {}

impl PacketFraction for Full {
    const FRACTION: Fraction = Fraction::Full;

    type Select<F: HalfPacket, H: HalfPacket, Q: HalfPacket> = F;
}

impl PacketFraction for Half {
    const FRACTION: Fraction = Fraction::Half;

    type Select<F: HalfPacket, H: HalfPacket, Q: HalfPacket> = H;
}

impl PacketFraction for Quarter {
    const FRACTION: Fraction = Fraction::Quarter;

    type Select<F: HalfPacket, H: HalfPacket, Q: HalfPacket> = Q;
}

#[cfg(test)]
mod test_fraction {
    use super::*;
    use crate::packet::NoPacket;
    use static_assertions::assert_type_eq_all;
    use wide::{f32x4, f64x2, i32x8};

    // branches of different shapes
    assert_type_eq_all!(<Full as PacketFraction>::Select<i32x8, f64x2, NoPacket>, i32x8);
    assert_type_eq_all!(<Half as PacketFraction>::Select<i32x8, f64x2, NoPacket>, f64x2);
    assert_type_eq_all!(<Quarter as PacketFraction>::Select<i32x8, f64x2, NoPacket>, NoPacket);
    assert_type_eq_all!(<Quarter as PacketFraction>::Select<NoPacket, NoPacket, f32x4>, f32x4);

    #[test]
    fn test_fraction_marker_values() {
        assert_eq!(Full::FRACTION, Fraction::Full);
        assert_eq!(Half::FRACTION, Fraction::Half);
        assert_eq!(Quarter::FRACTION, Fraction::Quarter);
    }

    #[test]
    fn test_divisor() {
        assert_eq!(Fraction::Full.divisor(), 1);
        assert_eq!(Fraction::Half.divisor(), 2);
        assert_eq!(Fraction::Quarter.divisor(), 4);
    }
}
