//! Packet registrations for the `wide` register types, the `simba` wrappers and
//! scalar types that have no vector register at all.

use super::{HalfPacket, NoPacket, PacketTraits, UnpacketTraits};
use simba::simd::{WideF32x4, WideF32x8, WideF64x4};
use tt_call::tt_if;
use tt_equal::tt_equal;
use wide::{
    f32x4, f32x8, f64x2, f64x4, i8x16, i16x8, i16x16, i32x4, i32x8, i64x2, i64x4, u8x16, u16x8,
    u32x4, u32x8, u64x2, u64x4,
};

/// Halving `lanes` must give `half_lanes`, unless the packet is its own half or
/// the half is missing.
const fn check_half_lanes(lanes: usize, half_lanes: usize, half_is_self: bool) {
    if half_is_self {
        assert!(half_lanes == lanes, "a packet registered as its own half must keep its lanes");
    } else {
        assert!(
            half_lanes == 0 || half_lanes * 2 == lanes,
            "half packet must have half the lanes"
        );
    }
}

macro_rules! impl_unpacket_traits {
    (@same $packet:ident $half:ident) => {
        tt_if! {
            condition = [{tt_equal}]
            input = [{ $packet $half }]
            true = [{
                true
            }]
            false = [{
                false
            }]
        }
    };
    ($($packet:ident ( $scalar:ty | $lanes:literal ) => $half:ident),+ $(,)?) => {
        $(
            impl HalfPacket for $packet {
                type Half = $half;

                const LANES: usize = $lanes;
            }

            impl UnpacketTraits for $packet {
                type Scalar = $scalar;

                const HALF_IS_SELF: bool = impl_unpacket_traits!(@same $packet $half);
            }

            const _: () = check_half_lanes(
                $lanes,
                <$half as HalfPacket>::LANES,
                <$packet as UnpacketTraits>::HALF_IS_SELF,
            );
        )+
    };
}

macro_rules! impl_packet_traits {
    ($($scalar:ident => $full:ident / $narrow:ident),+ $(,)?) => {
        $(
            impl PacketTraits for $scalar {
                #[cfg(not(feature = "narrow_packets"))]
                type Full = $full;
                #[cfg(feature = "narrow_packets")]
                type Full = $narrow;
            }
        )+
    };
}

// 128 bit registers are the narrowest of their family and are their own half.
impl_unpacket_traits!(
    f32x8 (f32 | 8) => f32x4,
    f32x4 (f32 | 4) => f32x4,
    f64x4 (f64 | 4) => f64x2,
    f64x2 (f64 | 2) => f64x2,
    i32x8 (i32 | 8) => i32x4,
    i32x4 (i32 | 4) => i32x4,
    i64x4 (i64 | 4) => i64x2,
    i64x2 (i64 | 2) => i64x2,
    u32x8 (u32 | 8) => u32x4,
    u32x4 (u32 | 4) => u32x4,
    u64x4 (u64 | 4) => u64x2,
    u64x2 (u64 | 2) => u64x2,
    i16x16 (i16 | 16) => i16x8,
    i16x8 (i16 | 8) => i16x8,
    u16x8 (u16 | 8) => u16x8,
    i8x16 (i8 | 16) => i8x16,
    u8x16 (u8 | 16) => u8x16,
);

// simba only wraps a subset of the registers, anything narrower is missing.
impl_unpacket_traits!(
    WideF32x8 (f32 | 8) => WideF32x4,
    WideF32x4 (f32 | 4) => NoPacket,
    WideF64x4 (f64 | 4) => NoPacket,
);

// No vector register, the scalar is a single lane packet.
impl_unpacket_traits!(
    i128 (i128 | 1) => i128,
    u128 (u128 | 1) => u128,
    isize (isize | 1) => isize,
    usize (usize | 1) => usize,
    bool (bool | 1) => bool,
);

impl_packet_traits!(
    f32 => f32x8 / f32x4,
    f64 => f64x4 / f64x2,
    i32 => i32x8 / i32x4,
    i64 => i64x4 / i64x2,
    u32 => u32x8 / u32x4,
    u64 => u64x4 / u64x2,
    i16 => i16x16 / i16x8,
    u16 => u16x8 / u16x8,
    i8 => i8x16 / i8x16,
    u8 => u8x16 / u8x16,
    i128 => i128 / i128,
    u128 => u128 / u128,
    isize => isize / isize,
    usize => usize / usize,
    bool => bool / bool,
);

#[cfg(test)]
mod test_registry {
    use super::*;
    use crate::packet::{
        Full, Half, PacketConditional, PacketFull, PacketHalf, PacketQuarter, Quarter,
        UnpacketHalf, UnpacketQuarter, UnpacketUnderlying, has_packet,
    };
    use static_assertions::{assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(UnpacketUnderlying<f32x8>, UnpacketUnderlying<WideF32x8>, f32);
    assert_type_eq_all!(UnpacketUnderlying<WideF64x4>, f64);
    assert_type_eq_all!(UnpacketUnderlying<u128>, u128);

    assert_type_eq_all!(UnpacketHalf<f32x8>, f32x4);
    assert_type_eq_all!(UnpacketQuarter<f32x8>, UnpacketHalf<f32x4>, f32x4);
    assert_type_eq_all!(UnpacketHalf<i16x16>, i16x8);

    // missing halves propagate
    assert_type_eq_all!(UnpacketHalf<WideF32x8>, WideF32x4);
    assert_type_eq_all!(UnpacketQuarter<WideF32x8>, NoPacket);
    assert_type_eq_all!(UnpacketHalf<WideF64x4>, NoPacket);
    assert_type_eq_all!(UnpacketQuarter<WideF64x4>, NoPacket);

    assert_type_eq_all!(PacketFull<bool>, PacketHalf<bool>, PacketQuarter<bool>, bool);
    assert_type_eq_all!(PacketConditional<Quarter, usize>, usize);

    assert_not_impl_any!(String: PacketTraits, HalfPacket);
    assert_not_impl_any!(char: PacketTraits);
    assert_not_impl_any!(f32: UnpacketTraits);

    #[cfg(not(feature = "narrow_packets"))]
    mod wide_registers {
        use super::*;

        assert_type_eq_all!(PacketFull<f32>, PacketConditional<Full, f32>, f32x8);
        assert_type_eq_all!(PacketHalf<f32>, PacketConditional<Half, f32>, f32x4);
        assert_type_eq_all!(PacketQuarter<f32>, PacketConditional<Quarter, f32>, f32x4);
        assert_type_eq_all!(PacketFull<f64>, f64x4);
        assert_type_eq_all!(PacketHalf<f64>, f64x2);
        assert_type_eq_all!(PacketFull<i16>, i16x16);
        assert_type_eq_all!(PacketQuarter<i16>, i16x8);
    }

    #[cfg(feature = "narrow_packets")]
    mod narrow_registers {
        use super::*;

        assert_type_eq_all!(PacketFull<f32>, PacketHalf<f32>, PacketQuarter<f32>, f32x4);
        assert_type_eq_all!(PacketFull<f64>, f64x2);
        assert_type_eq_all!(PacketFull<i16>, i16x8);
    }

    #[test]
    fn test_half_is_self() {
        assert!(!<f32x8 as UnpacketTraits>::HALF_IS_SELF);
        assert!(<f32x4 as UnpacketTraits>::HALF_IS_SELF);
        assert!(!<WideF32x4 as UnpacketTraits>::HALF_IS_SELF);
        assert!(<bool as UnpacketTraits>::HALF_IS_SELF);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(<f64x4 as UnpacketTraits>::SIZE, 4);
        assert_eq!(<u8x16 as UnpacketTraits>::SIZE, 16);
        assert_eq!(<i128 as UnpacketTraits>::SIZE, 1);
        assert_eq!(<u8 as PacketTraits>::SIZE, 16);
    }

    #[test]
    fn test_alignment_covers_register() {
        assert!(<f32x4 as UnpacketTraits>::ALIGNMENT >= 16);
        assert!(<f64x2 as UnpacketTraits>::ALIGNMENT >= 16);
        assert_eq!(<u128 as UnpacketTraits>::ALIGNMENT, std::mem::align_of::<u128>());
    }

    #[test]
    fn test_missing_packets() {
        assert!(has_packet::<UnpacketHalf<WideF32x8>>());
        assert!(!has_packet::<UnpacketQuarter<WideF32x8>>());
        assert!(!has_packet::<UnpacketHalf<WideF64x4>>());
    }
}
