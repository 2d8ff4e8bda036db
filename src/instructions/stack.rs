//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack occupies memory 0x0100-0x01FF and grows downward. The
//! stack pointer is an 8-bit offset into that page, wrapping silently on
//! overflow/underflow. The status register moves as a single packed byte.

use crate::status::Status;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Pushes a copy of the accumulator onto the stack. No flags are affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.push_byte(cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the packed NV-BDIZC byte onto the stack as a unit.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.status.to_byte();
    cpu.push_byte(status);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Pops a byte into the accumulator and updates Z and N from it.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pop_byte();
    cpu.a = value;
    cpu.update_zero_and_negative(value);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Pops a byte and replaces the whole status register with it.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let byte = cpu.pop_byte();
    cpu.status = Status::from_byte(byte);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
