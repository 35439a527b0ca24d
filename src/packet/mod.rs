//! Type-level lookups between scalar types and their packet (SIMD vector) types.
//!
//! Kept free of any packet arithmetic so generic code can name "the half packet
//! of `P`" without pulling in the operations on packets.

mod fraction;
mod registry;

pub use fraction::{Fraction, Full, Half, PacketFraction, Quarter};

/// Marker standing in for a packet width that does not exist.
///
/// It is its own half, so asking for the half (or quarter) of a missing packet
/// yields `NoPacket` again instead of failing. It has no underlying scalar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoPacket;

/// Half-width association of a packet.
///
/// Implemented by every registered packet and by [`NoPacket`].
pub trait HalfPacket {
    /// Packet with half the lanes of `Self`, `Self` for the narrowest packet of a
    /// family, or [`NoPacket`].
    type Half: HalfPacket;

    /// Number of scalar lanes, `0` for [`NoPacket`].
    const LANES: usize;
}

impl HalfPacket for NoPacket {
    type Half = NoPacket;

    const LANES: usize = 0;
}

/// Describes a registered packet type.
pub trait UnpacketTraits: HalfPacket + Sized {
    type Scalar;

    const SIZE: usize = <Self as HalfPacket>::LANES;
    const ALIGNMENT: usize = std::mem::align_of::<Self>();

    /// Whether the packet is registered as its own half.
    const HALF_IS_SELF: bool;
}

/// Associates a scalar type with its full-width packet.
pub trait PacketTraits: Sized {
    type Full: UnpacketTraits<Scalar = Self>;

    const SIZE: usize = <Self::Full as HalfPacket>::LANES;
    const VECTORIZABLE: bool = Self::SIZE > 1;
}

/// Underlying scalar type of a packet `P`.
pub type UnpacketUnderlying<P> = <P as UnpacketTraits>::Scalar;

/// Packet of half the size of packet `P`, if available.
pub type UnpacketHalf<P> = <P as HalfPacket>::Half;

/// Packet of a quarter the size of packet `P`, by applying half twice.
pub type UnpacketQuarter<P> = UnpacketHalf<UnpacketHalf<P>>;

/// Full-sized packet for the scalar `S`.
pub type PacketFull<S> = <S as PacketTraits>::Full;

/// Half-sized packet for the scalar `S`, if it exists.
pub type PacketHalf<S> = UnpacketHalf<PacketFull<S>>;

/// Quarter-sized packet for the scalar `S`, by applying half twice.
pub type PacketQuarter<S> = UnpacketHalf<PacketHalf<S>>;

/// Selects the full, half or quarter packet of `S` depending on the fraction marker `C`.
pub type PacketConditional<C, S> =
    <C as PacketFraction>::Select<PacketFull<S>, PacketHalf<S>, PacketQuarter<S>>;

/// Lanes of the packet selected by `C` for scalar `S`, `0` if there is none.
pub const fn packet_lanes<S: PacketTraits, C: PacketFraction>() -> usize {
    <PacketConditional<C, S> as HalfPacket>::LANES
}

/// Whether `P` has at least one lane, `false` for [`NoPacket`].
pub const fn has_packet<P: HalfPacket>() -> bool {
    P::LANES > 0
}
