use crate::Address;

pub mod counting;
pub mod ram;

/// Primitive byte and word cycles of the underlying storage device.
pub trait EepromAdapter {
    type Error;

    fn read_byte(&mut self, addr: Address) -> Result<u8, Self::Error>;
    fn read_word(&mut self, addr: Address) -> Result<u16, Self::Error>;
    fn write_byte(&mut self, addr: Address, val: u8) -> Result<(), Self::Error>;
    fn write_word(&mut self, addr: Address, val: u16) -> Result<(), Self::Error>;
}
