extern crate eeprom_accessor;

use eeprom_accessor::*;

const SIZE: usize = 32;

#[derive(Debug)]
struct TraceMemoryAdapter {
    pub memory: Vec<u8>,
}

impl TraceMemoryAdapter {
    pub fn new() -> Self {
        Self {
            memory: vec![config::ERASED_BYTE; SIZE],
        }
    }
}

impl EepromAdapter for TraceMemoryAdapter {
    type Error = ();

    fn read_byte(&mut self, addr: usize) -> Result<u8, Self::Error> {
        let byte = *self.memory.get(addr).ok_or(())?;
        println!("\tmem  read: byte\t@{}\t{:#04x}", addr, byte);
        Ok(byte)
    }

    fn read_word(&mut self, addr: usize) -> Result<u16, Self::Error> {
        let bytes = self.memory.get(addr..addr + 2).ok_or(())?;
        let word = u16::from_le_bytes([bytes[0], bytes[1]]);
        println!("\tmem  read: word\t@{}..{}\t{:#06x}", addr, addr + 2, word);
        Ok(word)
    }

    fn write_byte(&mut self, addr: usize, val: u8) -> Result<(), Self::Error> {
        let cell = self.memory.get_mut(addr).ok_or(())?;
        println!("\tmem write: byte\t@{}\t{:#04x}", addr, val);
        *cell = val;
        Ok(())
    }

    fn write_word(&mut self, addr: usize, val: u16) -> Result<(), Self::Error> {
        let cells = self.memory.get_mut(addr..addr + 2).ok_or(())?;
        println!("\tmem write: word\t@{}..{}\t{:#06x}", addr, addr + 2, val);
        cells.copy_from_slice(&val.to_le_bytes());
        Ok(())
    }
}

fn main() {
    let mut eeprom = Eeprom::new(TraceMemoryAdapter::new());

    println!("write_byte(4, 0x2a) twice");
    eeprom.write_byte(4, 0x2a).unwrap();
    eeprom.write_byte(4, 0x2a).unwrap();

    println!("write_word(8, 0x1234) over erased cells");
    eeprom.write_word(8, 0x1234).unwrap();

    println!("update_word(8, 0x1234)");
    eeprom.update_word(8, 0x1234).unwrap();

    println!("write_word(8, 0x1234) over matching cells");
    eeprom.write_word(8, 0x1234).unwrap();
}
