extern crate eeprom_accessor;

use eeprom_accessor::*;
use std::io::*;

const SIZE: usize = 64;

const BOOT_COUNT: Address = 0x00;
const BRIGHTNESS: Address = 0x02;
const SERIAL: Address = 0x10;

fn main() {
    let mut eeprom = Eeprom::new(MemoryAdapter::<SIZE>::default());
    eeprom.update_word(BOOT_COUNT, 1).unwrap();
    eeprom.write_byte(BRIGHTNESS, 0x80).unwrap();
    for (offset, byte) in b"EE-0042".iter().enumerate() {
        eeprom.write_byte(SERIAL + offset, *byte).unwrap();
    }

    stdout().write_all(&eeprom.release().memory).ok();
}
