/// Value of an erased EEPROM cell.
pub const ERASED_BYTE: u8 = 0xff;

/// Byte order used to pack a word across `addr` and `addr + 1`.
#[cfg(not(feature = "big-endian-words"))]
pub type WordOrder = byteorder::LittleEndian;

#[cfg(feature = "big-endian-words")]
pub type WordOrder = byteorder::BigEndian;
