use crate::adapters::*;

/// Counts the primitive cycles issued to the wrapped adapter.
///
/// EEPROM cells wear with every write cycle, so the write counters are a
/// direct measure of how much endurance a sequence of operations consumed.
#[derive(Debug, Default)]
pub struct CountingAdapter<A>
where
    A: EepromAdapter,
{
    inner: A,
    reads: usize,
    byte_writes: usize,
    word_writes: usize,
}

impl<A> CountingAdapter<A>
where
    A: EepromAdapter,
{
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            reads: 0,
            byte_writes: 0,
            word_writes: 0,
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn release(self) -> A {
        self.inner
    }

    /// Byte and word reads issued so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn byte_writes(&self) -> usize {
        self.byte_writes
    }

    pub fn word_writes(&self) -> usize {
        self.word_writes
    }

    pub fn writes(&self) -> usize {
        self.byte_writes + self.word_writes
    }

    pub fn reset_counters(&mut self) {
        self.reads = 0;
        self.byte_writes = 0;
        self.word_writes = 0;
    }
}

impl<A> EepromAdapter for CountingAdapter<A>
where
    A: EepromAdapter,
{
    type Error = A::Error;

    fn read_byte(&mut self, addr: Address) -> Result<u8, Self::Error> {
        self.reads += 1;
        self.inner.read_byte(addr)
    }

    fn read_word(&mut self, addr: Address) -> Result<u16, Self::Error> {
        self.reads += 1;
        self.inner.read_word(addr)
    }

    fn write_byte(&mut self, addr: Address, val: u8) -> Result<(), Self::Error> {
        self.byte_writes += 1;
        self.inner.write_byte(addr, val)
    }

    fn write_word(&mut self, addr: Address, val: u16) -> Result<(), Self::Error> {
        self.word_writes += 1;
        self.inner.write_word(addr, val)
    }
}
