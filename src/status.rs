//! # Processor Status Register
//!
//! This module defines the `Status` value type: the seven 6502 status flags
//! plus the reserved bit, individually addressable as booleans and jointly
//! convertible to/from the packed NV-BDIZC byte required by PHP, PLP, BRK
//! and RTI.
//!
//! The packed layout is:
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7   | N (Negative) |
//! | 6   | V (Overflow) |
//! | 5   | reserved/unused |
//! | 4   | B (Break) |
//! | 3   | D (Decimal mode) |
//! | 2   | I (Interrupt disable) |
//! | 1   | Z (Zero) |
//! | 0   | C (Carry) |
//!
//! The flags are stored as plain `bool` fields rather than a bitfield so the
//! layout is explicit and portable; packing only happens in `to_byte`.

/// 6502 processor status flags.
///
/// Each flag is an independent boolean. The whole register round-trips
/// through a single packed byte via [`Status::to_byte`] and
/// [`Status::from_byte`].
///
/// # Examples
///
/// ```
/// use core6502::Status;
///
/// let mut status = Status::new();
/// status.carry = true;
/// status.negative = true;
/// assert_eq!(status.to_byte(), 0b1000_0001);
///
/// let restored = Status::from_byte(0b1000_0001);
/// assert_eq!(restored, status);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    /// Carry flag (bit 0): set on unsigned overflow/no-borrow.
    pub carry: bool,

    /// Zero flag (bit 1): set if the result of the last operation was zero.
    pub zero: bool,

    /// Interrupt disable flag (bit 2).
    pub interrupt_disable: bool,

    /// Decimal mode flag (bit 3). Tracked but never alters arithmetic.
    pub decimal: bool,

    /// Break flag (bit 4): set by BRK, cleared by RTI.
    pub break_command: bool,

    /// Reserved bit (bit 5). No architectural meaning; round-trips through
    /// the packed byte so PHP/PLP preserve whatever a program stored there.
    pub unused: bool,

    /// Overflow flag (bit 6): set on signed overflow.
    pub overflow: bool,

    /// Negative flag (bit 7): mirrors bit 7 of the last result.
    pub negative: bool,
}

impl Status {
    /// Creates a status register with every flag (including the reserved
    /// bit) cleared, matching the post-reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs the flags into a single NV-BDIZC byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0u8;
        if self.carry {
            byte |= 0b0000_0001;
        }
        if self.zero {
            byte |= 0b0000_0010;
        }
        if self.interrupt_disable {
            byte |= 0b0000_0100;
        }
        if self.decimal {
            byte |= 0b0000_1000;
        }
        if self.break_command {
            byte |= 0b0001_0000;
        }
        if self.unused {
            byte |= 0b0010_0000;
        }
        if self.overflow {
            byte |= 0b0100_0000;
        }
        if self.negative {
            byte |= 0b1000_0000;
        }
        byte
    }

    /// Unpacks an NV-BDIZC byte into individual flags.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            carry: byte & 0b0000_0001 != 0,
            zero: byte & 0b0000_0010 != 0,
            interrupt_disable: byte & 0b0000_0100 != 0,
            decimal: byte & 0b0000_1000 != 0,
            break_command: byte & 0b0001_0000 != 0,
            unused: byte & 0b0010_0000 != 0,
            overflow: byte & 0b0100_0000 != 0,
            negative: byte & 0b1000_0000 != 0,
        }
    }
}
