//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations, plus `FlatMemory`, the flat 64KB store
//! used by tests and simple machines.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Memory bus trait for CPU byte accesses.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - `reset(&mut self)`: bulk re-initialization, invoked by CPU reset
/// - No error types: the 6502 has no bus-error mechanism
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use core6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or
    /// unmapped, implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Re-initializes the memory contents, called as part of CPU reset.
    ///
    /// The default implementation does nothing, which is appropriate for
    /// ROM-backed or externally managed memories.
    fn reset(&mut self) {}
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM
/// array, zero-initialized. Useful for testing and for machines without a
/// ROM/RAM split.
///
/// A raw binary image can be loaded byte-for-byte starting at address 0
/// with [`FlatMemory::load_image`].
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_pc(0x8000);
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Loads a flat binary image from a file, byte-for-byte starting at
    /// address 0.
    ///
    /// Files larger than 64KB are truncated at the boundary; the rest of
    /// the file is ignored. Returns the number of bytes loaded.
    ///
    /// An unreadable file leaves memory untouched and returns the I/O
    /// error; callers may report it and continue with whatever state they
    /// have (typically all zeros).
    ///
    /// # Errors
    ///
    /// Returns any error from opening or reading the file.
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let mut file = File::open(path)?;
        let mut loaded = 0;
        // read() may return short counts, so loop until EOF or 64KB
        loop {
            let n = file.read(&mut self.data[loaded..])?;
            if n == 0 {
                break;
            }
            loaded += n;
            if loaded == self.data.len() {
                break;
            }
        }
        Ok(loaded)
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn reset(&mut self) {
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        // Write and read back
        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Verify other addresses unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_flat_memory_reset_zero_fills() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0xAA);
        mem.write(0xFFFF, 0xBB);

        mem.reset();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);
    }
}
