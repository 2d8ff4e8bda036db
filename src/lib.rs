//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 CPU emulator designed for modularity and clarity.
//!
//! This crate provides the CPU execution engine for emulating the MOS Technology
//! 6502 processor: the fetch-decode-execute loop, addressing-mode resolution,
//! arithmetic/logic/flag semantics, stack and subroutine/interrupt handling, and
//! per-instruction cycle accounting (including page-crossing and taken-branch
//! penalties).
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory and a CPU
//! let memory = FlatMemory::new();
//! let mut cpu = CPU::new(memory);
//!
//! // Reset puts PC at 0xFFFC and SP at the top of the stack page
//! cpu.reset();
//! assert_eq!(cpu.pc(), 0xFFFC);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! // Load a tiny program: LDA #$42 at 0x8000
//! cpu.memory_mut().write(0x8000, 0xA9);
//! cpu.memory_mut().write(0x8001, 0x42);
//! cpu.set_pc(0x8000);
//!
//! // Run with a 2-cycle budget
//! let consumed = cpu.run_for_cycles(2);
//! assert_eq!(consumed, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Cycle accuracy**: every instruction charges its documented cost, plus the
//!   conditional extras for taken branches and page-boundary crossings
//! - **Table-driven decode**: all opcode metadata lives in a single 256-entry table
//! - **No faults**: addresses and registers wrap modulo their width; unknown
//!   opcodes are reported through the `log` facade and skipped
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the FlatMemory implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration
//! - `status` - Packed status-flag register
//!
//! ## Known limitations
//!
//! - The Decimal flag is tracked (SED/CLD, PHP/PLP) but ADC/SBC always operate
//!   in binary mode.
//! - Hardware IRQ/NMI lines are not modeled; only the software interrupt pair
//!   BRK/RTI is implemented.
//! - JMP indirect performs a plain little-endian word read; the NMOS page-wrap
//!   quirk is not emulated.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;
