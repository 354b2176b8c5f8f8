use byteorder::ByteOrder;

use eeprom_accessor::config::WordOrder;
use eeprom_accessor::*;

mod tiny {
    use crate::*;

    pub const SIZE: usize = 64;

    pub type Spy = CountingAdapter<MemoryAdapter<SIZE>>;

    pub fn create_eeprom() -> Eeprom<Spy> {
        Eeprom::new(CountingAdapter::new(MemoryAdapter::default()))
    }
}

#[test]
fn test_read_erased() {
    let mut eeprom = tiny::create_eeprom();
    assert_eq!(eeprom.read_byte(0), Ok(config::ERASED_BYTE));
    assert_eq!(eeprom.read_word(0), Ok(0xffff));
    assert_eq!(eeprom.adapter().writes(), 0);
}

#[test]
fn test_write_byte() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.write_byte(7, 0x42).unwrap();

    assert_eq!(eeprom.read_byte(7), Ok(0x42));
    assert_eq!(eeprom.adapter().byte_writes(), 1);
}

#[test]
fn test_write_same_byte_is_elided() {
    let mut memory = [0u8; tiny::SIZE];
    memory[3] = 0x99;
    let mut eeprom = Eeprom::new(CountingAdapter::new(MemoryAdapter::new(memory)));

    eeprom.write_byte(3, 0x99).unwrap();
    assert_eq!(eeprom.adapter().writes(), 0);
    assert_eq!(eeprom.read_byte(3), Ok(0x99));
}

#[test]
fn test_write_byte_twice() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.write_byte(12, 0x01).unwrap();
    eeprom.write_byte(12, 0x01).unwrap();

    assert_eq!(eeprom.adapter().byte_writes(), 1);
    assert_eq!(eeprom.read_byte(12), Ok(0x01));
}

#[test]
fn test_write_byte_every_value() {
    let mut eeprom = tiny::create_eeprom();
    for val in 0..=u8::MAX {
        eeprom.adapter_mut().reset_counters();
        let before = eeprom.read_byte(5).unwrap();
        eeprom.write_byte(5, val).unwrap();

        let expected_writes = if before == val { 0 } else { 1 };
        assert_eq!(eeprom.adapter().byte_writes(), expected_writes);
        assert_eq!(eeprom.read_byte(5), Ok(val));
    }
}

#[test]
fn test_write_byte_leaves_neighbours() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.write_byte(20, 0x00).unwrap();

    assert_eq!(eeprom.read_byte(19), Ok(config::ERASED_BYTE));
    assert_eq!(eeprom.read_byte(21), Ok(config::ERASED_BYTE));
}

#[test]
fn test_write_different_word_is_skipped() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.write_word(0x10, 0x1234).unwrap();

    assert_eq!(eeprom.adapter().word_writes(), 0);
    assert_eq!(eeprom.read_word(0x10), Ok(0xffff));
}

#[test]
fn test_write_equal_word_is_written() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.write_word(0x20, 0xffff).unwrap();

    assert_eq!(eeprom.adapter().word_writes(), 1);
    assert_eq!(eeprom.read_word(0x20), Ok(0xffff));
}

#[test]
fn test_update_word() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.update_word(0x10, 0x1234).unwrap();
    assert_eq!(eeprom.adapter().word_writes(), 1);
    assert_eq!(eeprom.read_word(0x10), Ok(0x1234));

    eeprom.update_word(0x10, 0x1234).unwrap();
    assert_eq!(eeprom.adapter().word_writes(), 1);
}

#[test]
fn test_word_packing() {
    let mut eeprom = tiny::create_eeprom();
    eeprom.update_word(0x10, 0x1234).unwrap();

    let lo = eeprom.read_byte(0x10).unwrap();
    let hi = eeprom.read_byte(0x11).unwrap();
    assert_eq!(WordOrder::read_u16(&[lo, hi]), 0x1234);

    let memory = eeprom.release().release().release();
    #[cfg(not(feature = "big-endian-words"))]
    assert_eq!(memory[0x10..0x12], [0x34u8, 0x12]);
    #[cfg(feature = "big-endian-words")]
    assert_eq!(memory[0x10..0x12], [0x12u8, 0x34]);
}

#[test]
fn test_word_from_bytes() {
    let mut eeprom = tiny::create_eeprom();
    let mut buf = [0u8; 2];
    WordOrder::write_u16(&mut buf, 0xbeef);
    eeprom.write_byte(30, buf[0]).unwrap();
    eeprom.write_byte(31, buf[1]).unwrap();

    assert_eq!(eeprom.read_word(30), Ok(0xbeef));
}

#[test]
fn test_write_word_with_borrowed_memory() {
    let mut memory = [0u8; 8];
    let mut eeprom = Eeprom::new(RefMemoryAdapter::new(&mut memory));

    eeprom.write_word(2, 0x0000).unwrap();
    eeprom.write_word(4, 0xabcd).unwrap();
    eeprom.write_byte(0, 0x5a).unwrap();

    assert_eq!(eeprom.read_word(4), Ok(0x0000));
    eeprom.release();
    assert_eq!(memory[0], 0x5a);
    assert_eq!(memory[1..], [0u8; 7]);
}

#[test]
fn test_adapter_error_propagates() {
    let mut eeprom = tiny::create_eeprom();
    assert_eq!(eeprom.read_byte(tiny::SIZE), Err(()));
    assert_eq!(eeprom.read_word(tiny::SIZE - 1), Err(()));
    assert_eq!(eeprom.write_byte(tiny::SIZE, 0), Err(()));
    assert_eq!(eeprom.write_word(tiny::SIZE - 1, 0), Err(()));
    assert_eq!(eeprom.update_word(tiny::SIZE, 0), Err(()));
    assert_eq!(eeprom.adapter().writes(), 0);
}
