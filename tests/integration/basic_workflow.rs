//! Integration tests for basic workflow scenarios

use crate::common::mock_interface::MockI2c;
use crate::common::{Operation, create_mock_driver};
use mlx90393::sensors::{xy_sensitivity, z_sensitivity};
use mlx90393::{Gain, HallTable, I2cInterface, Mlx90393, Resolution};

#[test]
fn test_complete_configuration_workflow() {
    let (mut driver, bus) = create_mock_driver();

    // Power-on defaults: hall conf 0xC, gain 5x
    bus.set_register(0x00, 0x000C);

    driver.set_gain(Gain::X2_5).unwrap();
    driver.set_hall_conf(0x00).unwrap();

    assert_eq!(driver.gain().unwrap(), Gain::X2_5);
    assert_eq!(driver.hall_conf().unwrap(), 0x00);
    assert_eq!(driver.config0().unwrap(), 0x0030);

    // Everything needed to pick a conversion factor is now known
    let table = HallTable::from_hall_conf(driver.hall_conf().unwrap()).unwrap();
    let gain = driver.gain().unwrap();
    let xy = xy_sensitivity(Resolution::Res0, table, gain);
    let z = z_sensitivity(Resolution::Res0, table, gain);
    assert!((xy - 0.393).abs() < 1e-6);
    assert!((z - 0.634).abs() < 1e-6);
}

#[test]
fn test_custom_address() {
    let bus = MockI2c::new();
    let mut driver = Mlx90393::new_with_address(bus.clone(), 0x0F);

    assert_eq!(driver.address(), 0x0F);
    driver.config0().unwrap();

    assert!(bus.operations().iter().all(|op| match op {
        Operation::Write { address, .. } | Operation::Read { address, .. } => *address == 0x0F,
    }));
}

#[test]
fn test_from_interface_and_release() {
    let bus = MockI2c::new();
    bus.set_register(0x02, 0x0042);

    let mut driver = Mlx90393::from_interface(I2cInterface::default(bus.clone()));
    assert_eq!(driver.address(), mlx90393::I2C_ADDRESS_DEFAULT);
    assert_eq!(driver.config2().unwrap(), 0x0042);

    let released = driver.release();
    released.set_register(0x02, 0x0043);
    assert_eq!(bus.get_register(0x02), 0x0043);
}

#[test]
fn test_config2_workflow() {
    let (mut driver, bus) = create_mock_driver();

    driver.set_config2(0x0000).unwrap();
    driver.set_config2_bits(0b101).unwrap();
    assert_eq!(driver.config2().unwrap(), 0b101 << 3);

    bus.clear_operations();
    driver.config2_bits().unwrap();
    assert_eq!(bus.operations().len(), 2);
}
