//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update the Zero and Negative flags and pay the +1 page-crossing
//! cycle on indexed modes; stores affect no flags and always pay their
//! fixed cost.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.a = value;
    cpu.update_zero_and_negative(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Loads a byte of memory into the X register. Z and N track the loaded
/// value; no other flags are affected.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.x = value;
    cpu.update_zero_and_negative(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Loads a byte of memory into the Y register. Z and N track the loaded
/// value; no other flags are affected.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    cpu.y = value;
    cpu.update_zero_and_negative(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator into memory at the resolved address. No flags
/// are affected, and stores never take the page-crossing penalty.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    cpu.write_byte(addr, cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    cpu.write_byte(addr, cpu.x);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    cpu.write_byte(addr, cpu.y);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
