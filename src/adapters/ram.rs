use byteorder::ByteOrder;

use crate::adapters::*;
use crate::config::{WordOrder, ERASED_BYTE};

pub struct MemoryAdapter<const SIZE: usize> {
    pub memory: [u8; SIZE],
}

impl<const SIZE: usize> Default for MemoryAdapter<SIZE> {
    fn default() -> Self {
        Self::new([ERASED_BYTE; SIZE])
    }
}

impl<const SIZE: usize> MemoryAdapter<SIZE> {
    pub fn new(memory: [u8; SIZE]) -> Self {
        Self { memory }
    }

    pub fn release(self) -> [u8; SIZE] {
        self.memory
    }
}

impl<const SIZE: usize> EepromAdapter for MemoryAdapter<SIZE> {
    type Error = ();

    fn read_byte(&mut self, addr: Address) -> Result<u8, Self::Error> {
        self.memory.get(addr).copied().ok_or(())
    }

    fn read_word(&mut self, addr: Address) -> Result<u16, Self::Error> {
        word_slice(&self.memory, addr).map(WordOrder::read_u16)
    }

    fn write_byte(&mut self, addr: Address, val: u8) -> Result<(), Self::Error> {
        let cell = self.memory.get_mut(addr).ok_or(())?;
        *cell = val;
        Ok(())
    }

    fn write_word(&mut self, addr: Address, val: u16) -> Result<(), Self::Error> {
        word_slice_mut(&mut self.memory, addr).map(|buf| WordOrder::write_u16(buf, val))
    }
}

pub struct RefMemoryAdapter<'a> {
    pub memory: &'a mut [u8],
}

impl<'a> RefMemoryAdapter<'a> {
    pub fn new(memory: &'a mut [u8]) -> Self {
        Self { memory }
    }

    pub fn release(self) -> &'a mut [u8] {
        self.memory
    }
}

impl<'a> EepromAdapter for RefMemoryAdapter<'a> {
    type Error = ();

    fn read_byte(&mut self, addr: Address) -> Result<u8, Self::Error> {
        self.memory.get(addr).copied().ok_or(())
    }

    fn read_word(&mut self, addr: Address) -> Result<u16, Self::Error> {
        word_slice(self.memory, addr).map(WordOrder::read_u16)
    }

    fn write_byte(&mut self, addr: Address, val: u8) -> Result<(), Self::Error> {
        let cell = self.memory.get_mut(addr).ok_or(())?;
        *cell = val;
        Ok(())
    }

    fn write_word(&mut self, addr: Address, val: u16) -> Result<(), Self::Error> {
        word_slice_mut(self.memory, addr).map(|buf| WordOrder::write_u16(buf, val))
    }
}

fn word_slice(memory: &[u8], addr: Address) -> Result<&[u8], ()> {
    let end = addr.checked_add(2).ok_or(())?;
    memory.get(addr..end).ok_or(())
}

fn word_slice_mut(memory: &mut [u8], addr: Address) -> Result<&mut [u8], ()> {
    let end = addr.checked_add(2).ok_or(())?;
    memory.get_mut(addr..end).ok_or(())
}
