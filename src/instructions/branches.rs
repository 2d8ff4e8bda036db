//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! - BCC / BCS: on Carry
//! - BEQ / BNE: on Zero
//! - BMI / BPL: on Negative
//! - BVS / BVC: on Overflow
//!
//! All branches use relative addressing with a signed 8-bit offset from
//! the address of the *following* instruction.
//!
//! Cycle timing:
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken within the same page
//! - 4 cycles if taken to a different page
//!
//! No flags are affected.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Shared relative-branch implementation: branches when `condition` holds.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, condition: bool) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    // Signed 8-bit offset at PC+1
    let offset = cpu.read_byte(cpu.pc.wrapping_add(1)) as i8;

    let mut cycles = metadata.base_cycles as u64;
    let pc_after_instruction = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    if condition {
        let target_pc = pc_after_instruction.wrapping_add_signed(offset as i16);

        // +1 for the taken branch, +1 more if it lands on a different page
        cycles += 1;
        if (pc_after_instruction & 0xFF00) != (target_pc & 0xFF00) {
            cycles += 1;
        }

        cpu.pc = target_pc;
    } else {
        cpu.pc = pc_after_instruction;
    }

    cpu.cycles += cycles;
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, !cpu.status.carry);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, cpu.status.carry);
}

/// Executes the BEQ (Branch if Equal / Zero set) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, cpu.status.zero);
}

/// Executes the BNE (Branch if Not Equal / Zero clear) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, !cpu.status.zero);
}

/// Executes the BMI (Branch if Minus / Negative set) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, cpu.status.negative);
}

/// Executes the BPL (Branch if Plus / Negative clear) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, !cpu.status.negative);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, !cpu.status.overflow);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    branch_if(cpu, opcode, cpu.status.overflow);
}
