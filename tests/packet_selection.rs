use packet_helpers::packet::{has_packet, packet_lanes};
use packet_helpers::storage::{Const, DenseStorage, Dyn, DynamicStorage, FixedStorage};
use packet_helpers::{
    CheckedScalar, Fraction, Full, Half, HalfPacket, NoPacket, NumTraits, PacketConditional,
    PacketFraction, PacketFull, PacketHalf, PacketQuarter, PacketTraits, Quarter, UnpacketHalf,
    UnpacketQuarter, UnpacketTraits, UnpacketUnderlying,
};
use std::any::TypeId;

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Generic code naming a packet width before knowing the scalar.
fn describe<C, S>() -> (Fraction, usize)
where
    C: PacketFraction,
    S: PacketTraits,
{
    (C::FRACTION, packet_lanes::<S, C>())
}

fn check_selection<S>()
where
    S: PacketTraits + 'static,
{
    assert!(same::<UnpacketUnderlying<PacketFull<S>>, S>());
    assert!(same::<PacketConditional<Full, S>, PacketFull<S>>());
    assert!(same::<PacketConditional<Half, S>, PacketHalf<S>>());
    assert!(same::<PacketConditional<Quarter, S>, PacketQuarter<S>>());
    assert!(same::<PacketQuarter<S>, UnpacketQuarter<PacketFull<S>>>());
    assert!(same::<PacketHalf<S>, UnpacketHalf<PacketFull<S>>>());
}

#[test]
fn test_selection_for_registered_scalars() {
    check_selection::<f32>();
    check_selection::<f64>();
    check_selection::<i8>();
    check_selection::<i16>();
    check_selection::<i32>();
    check_selection::<i64>();
    check_selection::<u8>();
    check_selection::<u16>();
    check_selection::<u32>();
    check_selection::<u64>();
    check_selection::<i128>();
    check_selection::<u128>();
    check_selection::<isize>();
    check_selection::<usize>();
    check_selection::<bool>();
}

#[test]
fn test_describe_fractions() {
    let (fraction, full) = describe::<Full, f64>();
    assert_eq!(fraction, Fraction::Full);
    assert_eq!(full, <f64 as PacketTraits>::SIZE);

    let (fraction, quarter) = describe::<Quarter, u128>();
    assert_eq!(fraction, Fraction::Quarter);
    assert_eq!(quarter, 1);
}

#[test]
fn test_missing_half_propagates() {
    type Wide = simba::simd::WideF64x4;

    assert!(same::<UnpacketHalf<Wide>, NoPacket>());
    assert!(same::<UnpacketQuarter<Wide>, NoPacket>());
    assert_eq!(<UnpacketQuarter<Wide> as HalfPacket>::LANES, 0);
    assert!(!has_packet::<UnpacketHalf<Wide>>());
    assert_eq!(<Wide as UnpacketTraits>::SIZE, 4);
}

#[test]
fn test_checked_scalar_scenarios() {
    let five = CheckedScalar::new(5);
    assert_eq!(*five, 5);

    let mut seven = CheckedScalar::<i32>::default();
    seven.set(7);
    assert_eq!(*seven, 7);

    let three = CheckedScalar::<f64>::cast_from(3i32);
    assert_eq!(*three, 3.0);
}

#[test]
fn test_uninitialized_read_is_fatal() {
    let result = std::panic::catch_unwind(|| {
        let scalar = CheckedScalar::<i32>::default();
        *scalar.get()
    });
    assert!(result.is_err());
}

#[test]
fn test_storage_branches_on_require_initialization() {
    assert!(CheckedScalar::<f32>::REQUIRE_INITIALIZATION);
    assert!(!f32::REQUIRE_INITIALIZATION);

    let plain = DynamicStorage::<f32, Dyn, Dyn>::new(2, 2).unwrap();
    assert!(plain.data().iter().all(|&c| c == 0.0));

    let mut checked = FixedStorage::<CheckedScalar<f32>, 4, Const<2>, Const<2>>::new(2, 2).unwrap();
    assert!(checked.data().iter().all(|c| !c.is_initialized()));

    for (i, coefficient) in checked.data_mut().iter_mut().enumerate() {
        coefficient.set(i as f32);
    }
    let sum = checked
        .data()
        .iter()
        .fold(CheckedScalar::new(0.0f32), |acc, &c| acc + c);
    assert_eq!(*sum, 6.0);
}
