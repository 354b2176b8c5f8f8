use log::trace;

use crate::{Address, EepromAdapter};

/// Byte and word accessor over an EEPROM adapter.
///
/// Writes are preceded by a read of the stored value so that cycles which
/// would not change the cell contents can be skipped. The accessor does not
/// validate addresses: `addr` (and `addr + 1` for words) must lie within
/// the device, otherwise the behavior is whatever the adapter does.
pub struct Eeprom<A: EepromAdapter> {
    adapter: A,
}

impl<A, E> Eeprom<A>
where
    A: EepromAdapter<Error = E>,
{
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn release(self) -> A {
        self.adapter
    }

    pub fn read_byte(&mut self, addr: Address) -> Result<u8, E> {
        self.adapter.read_byte(addr)
    }

    /// Reads the word stored at `addr` and `addr + 1` in the device byte order.
    pub fn read_word(&mut self, addr: Address) -> Result<u16, E> {
        self.adapter.read_word(addr)
    }

    /// Writes `val` at `addr` unless the cell already holds it.
    pub fn write_byte(&mut self, addr: Address, val: u8) -> Result<(), E> {
        if self.adapter.read_byte(addr)? == val {
            trace!("eeprom: byte write @{:#06x} elided", addr);
            return Ok(());
        }
        trace!("eeprom: byte write @{:#06x} <- {:#04x}", addr, val);
        self.adapter.write_byte(addr, val)
    }

    /// Writes `val` at `addr` only when the stored word already equals `val`.
    ///
    /// A word that differs from `val` is left untouched. This is the inverse
    /// of the `write_byte` policy and almost certainly an inverted comparison,
    /// kept as is for layouts that depend on it. Use [`Eeprom::update_word`]
    /// for the skip-if-unchanged policy.
    pub fn write_word(&mut self, addr: Address, val: u16) -> Result<(), E> {
        let stored = self.adapter.read_word(addr)?;
        if stored != val {
            trace!(
                "eeprom: word write @{:#06x} skipped, stored {:#06x} != {:#06x}",
                addr,
                stored,
                val
            );
            return Ok(());
        }
        trace!("eeprom: word write @{:#06x} <- {:#06x}", addr, val);
        self.adapter.write_word(addr, val)
    }

    /// Writes `val` at `addr` unless the stored word already equals it.
    pub fn update_word(&mut self, addr: Address, val: u16) -> Result<(), E> {
        if self.adapter.read_word(addr)? == val {
            trace!("eeprom: word update @{:#06x} elided", addr);
            return Ok(());
        }
        trace!("eeprom: word update @{:#06x} <- {:#06x}", addr, val);
        self.adapter.write_word(addr, val)
    }
}
