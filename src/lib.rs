pub mod checked_scalar;
pub mod numeric;
pub mod packet;
pub mod storage;

pub use checked_scalar::CheckedScalar;
pub use numeric::NumTraits;
pub use packet::{
    Fraction, Full, Half, HalfPacket, NoPacket, PacketConditional, PacketFraction, PacketFull,
    PacketHalf, PacketQuarter, PacketTraits, Quarter, UnpacketHalf, UnpacketQuarter,
    UnpacketTraits, UnpacketUnderlying,
};

/// Stack allocation limit used when no build-time override is given.
pub const DEFAULT_STACK_ALLOCATION_LIMIT: usize = 128 * 1024;

/// Upper bound in bytes for inline (stack) storage of a fixed-size buffer.
///
/// Can be overridden at build time through `PACKET_HELPERS_STACK_ALLOCATION_LIMIT`.
/// A limit of `0` disables the check.
pub const STACK_ALLOCATION_LIMIT: usize =
    match option_env!("PACKET_HELPERS_STACK_ALLOCATION_LIMIT") {
        Some(limit) => {
            let parsed = usize::from_str_radix(limit, 10);

            match parsed {
                Ok(parsed) => parsed,
                Err(_) => DEFAULT_STACK_ALLOCATION_LIMIT,
            }
        }
        None => DEFAULT_STACK_ALLOCATION_LIMIT,
    };
