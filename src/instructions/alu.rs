//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND / ORA / EOR: Bitwise logic on the accumulator
//! - BIT: Bit test against memory
//! - CMP / CPX / CPY: Register comparisons
//!
//! ADC and SBC share one binary adder; SBC feeds it the one's complement
//! of the operand so the carry flag acts as the inverted borrow. Decimal
//! mode is tracked in the status register but never alters the arithmetic.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Adds `value` plus carry into the accumulator and updates C, Z, N and V.
///
/// Overflow uses the signed rule: both inputs share a sign and the result's
/// sign differs, detected as `(a ^ result) & (value ^ result) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in: u16 = if cpu.status.carry { 1 } else { 0 };

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    // Carry: the 9-bit intermediate overflowed a byte
    cpu.status.carry = result16 > 0xFF;
    cpu.status.overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.update_zero_and_negative(result);

    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Set if bit 7 of the result is set
/// - Overflow (V): Set on signed overflow
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);
    add_with_carry(cpu, value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (borrow) from the
/// accumulator: `A = A - value - (1 - C)`. Implemented by adding the one's
/// complement of the operand, which yields the same flag behavior as ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);
    add_with_carry(cpu, value ^ 0xFF);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the AND (Logical AND) instruction.
///
/// Bitwise AND between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    let result = cpu.a & value;
    cpu.a = result;
    cpu.update_zero_and_negative(result);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Bitwise OR between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    let result = cpu.a | value;
    cpu.a = result;
    cpu.update_zero_and_negative(result);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Bitwise XOR between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);

    let result = cpu.a ^ value;
    cpu.a = result;
    cpu.update_zero_and_negative(result);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests accumulator bits against a memory operand without modifying
/// either.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if (A AND operand) == 0
/// - Negative (N): copied from bit 7 of the *memory operand*
/// - Overflow (V): copied from bit 6 of the *memory operand*
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, _) = cpu.operand_value(metadata.addressing_mode);

    cpu.status.zero = (cpu.a & value) == 0;
    cpu.status.negative = (value & 0x80) != 0;
    cpu.status.overflow = (value & 0x40) != 0;

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Compares a register against the operand: C = (register >= operand),
/// Z = (register == operand), N = bit 7 of the difference. The register
/// itself is unchanged.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.operand_value(metadata.addressing_mode);
    let result = register.wrapping_sub(value);

    cpu.status.carry = register >= value;
    cpu.status.zero = register == value;
    cpu.status.negative = (result & 0x80) != 0;

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed {
        cycles += 1;
    }
    cpu.cycles += cycles;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    compare(cpu, cpu.a, opcode);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    compare(cpu, cpu.x, opcode);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    compare(cpu, cpu.y, opcode);
}
