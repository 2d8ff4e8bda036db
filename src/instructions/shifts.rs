//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left (through carry)
//! - ROR: Rotate Right (through carry)
//!
//! Each has an accumulator form and read-modify-write memory forms. The
//! memory forms never take a page-crossing penalty; the indexed absolute
//! variants bake the extra access into their fixed 7-cycle cost.

use crate::{AddressingMode, MemoryBus, CPU, OPCODE_TABLE};

/// Applies a shift/rotate to the accumulator or to memory depending on the
/// addressing mode, updates Z and N from the result, and charges the fixed
/// cycle cost. The closure returns (result, carry_out).
fn shift_operation<M, F>(cpu: &mut CPU<M>, opcode: u8, operation: F)
where
    M: MemoryBus,
    F: Fn(u8, bool) -> (u8, bool),
{
    let metadata = &OPCODE_TABLE[opcode as usize];
    let carry_in = cpu.status.carry;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry_out) = operation(cpu.a, carry_in);
        cpu.a = result;
        cpu.status.carry = carry_out;
        result
    } else {
        // Read-modify-write on memory
        let (addr, _) = cpu.operand_address(metadata.addressing_mode);
        let value = cpu.read_byte(addr);
        let (result, carry_out) = operation(value, carry_in);
        cpu.write_byte(addr, result);
        cpu.status.carry = carry_out;
        result
    };

    cpu.update_zero_and_negative(result);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Shifts left one bit; bit 0 becomes 0 and the old bit 7 lands in carry.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_operation(cpu, opcode, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts right one bit; bit 7 becomes 0 and the old bit 0 lands in carry.
/// The result's bit 7 is always clear, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_operation(cpu, opcode, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Rotates left through carry: the old carry fills bit 0 and the old bit 7
/// becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_operation(cpu, opcode, |value, carry_in| {
        let result = (value << 1) | u8::from(carry_in);
        (result, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Rotates right through carry: the old carry fills bit 7 and the old bit 0
/// becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    shift_operation(cpu, opcode, |value, carry_in| {
        let result = (value >> 1) | (u8::from(carry_in) << 7);
        (result, value & 0x01 != 0)
    });
}
