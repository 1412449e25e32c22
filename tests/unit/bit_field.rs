//! Unit tests for bit-field access

use crate::common::{create_mock_driver, read_op, write_op};
use mlx90393::registers::{GAIN, HALL_CONF};
use mlx90393::{BitField, ByteOrder, Error};

#[test]
fn test_round_trip_low_nibble() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0x0000);

    let field = BitField::new(0x00, 0, 4);
    field.write(&mut driver, 0b1011).unwrap();

    assert_eq!(driver.config0().unwrap(), 0x000B);
    assert_eq!(field.read(&mut driver).unwrap(), 0b1011);
}

#[test]
fn test_read_extracts_field_bits() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0x0050);

    assert_eq!(GAIN.read(&mut driver).unwrap(), 5);
    assert_eq!(HALL_CONF.read(&mut driver).unwrap(), 0);
}

#[test]
fn test_write_preserves_bits_outside_mask() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0xFFFF);

    GAIN.write(&mut driver, 0b010).unwrap();

    assert_eq!(bus.get_register(0x00), 0xFFAF);
}

#[test]
fn test_write_back_read_value_is_idempotent() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0xA5C3);

    let field = BitField::new(0x00, 5, 6);
    let value = field.read(&mut driver).unwrap();
    field.write(&mut driver, value).unwrap();

    assert_eq!(field.read(&mut driver).unwrap(), value);
    assert_eq!(bus.get_register(0x00), 0xA5C3);
}

#[test]
fn test_write_only_changes_masked_bits() {
    let (mut driver, bus) = create_mock_driver();
    let field = BitField::new(0x01, 3, 5);
    let original: u16 = 0b1010_0101_1100_0011;
    bus.set_register(0x01, original);

    for value in 0..=field.max_value() {
        field.write(&mut driver, value).unwrap();
        let register = u32::from(bus.get_register(0x01));

        assert_eq!(register & !field.mask(), u32::from(original) & !field.mask());
        assert_eq!((register & field.mask()) >> field.start_bit(), value);
    }
}

#[test]
fn test_read_framing() {
    let (mut driver, bus) = create_mock_driver();

    GAIN.read(&mut driver).unwrap();

    assert_eq!(
        bus.operations(),
        vec![write_op(&[0b0101_0000, 0x00]), read_op(3)]
    );
}

#[test]
fn test_write_framing_is_read_then_write() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x02, 0x1200);

    let field = BitField::new(0x02, 0, 8);
    field.write(&mut driver, 0x34).unwrap();

    assert_eq!(
        bus.operations(),
        vec![
            write_op(&[0b0101_0000, 0x08]),
            read_op(3),
            write_op(&[0b0110_0000, 0x12, 0x34, 0x08]),
            read_op(3),
        ]
    );
}

#[test]
fn test_write_rejects_value_wider_than_field() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0x1234);

    let result = HALL_CONF.write(&mut driver, 0x10);

    assert!(matches!(result, Err(Error::InvalidArgument)));
    assert!(bus.operations().is_empty(), "No bus traffic expected");
    assert_eq!(bus.get_register(0x00), 0x1234);
}

#[test]
fn test_little_endian_field_uses_same_order_both_ways() {
    // Decode and encode share one byte order, so the byte that is not part
    // of the field survives the read-modify-write untouched.
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0x1234);

    let field = BitField::with_layout(0x00, 0, 8, 2, ByteOrder::LittleEndian);
    assert_eq!(field.read(&mut driver).unwrap(), 0x12);

    field.write(&mut driver, 0xAB).unwrap();

    assert_eq!(bus.get_register(0x00), 0xAB34);
    assert_eq!(field.read(&mut driver).unwrap(), 0xAB);
}

#[test]
fn test_interleaved_write_between_read_and_write_is_lost() {
    // The read-modify-write is two bus exchanges with no lock in between.
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0x00, 0x0000);
    bus.clobber_after_next_read(0x00, 0x8000);

    GAIN.write(&mut driver, 3).unwrap();

    assert_eq!(bus.get_register(0x00), 0x0030);
}

#[test]
fn test_generic_field_methods_on_driver() {
    let (mut driver, bus) = create_mock_driver();
    let z_series = BitField::new(0x00, 7, 1);

    driver.write_field(&z_series, 1).unwrap();

    assert_eq!(bus.get_register(0x00), 0x0080);
    assert_eq!(driver.read_field(&z_series).unwrap(), 1);
}
