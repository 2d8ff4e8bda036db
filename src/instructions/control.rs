//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Unconditional jump (absolute and indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return
//! - NOP: No operation
//!
//! BRK is the only interrupt source modeled; hardware IRQ/NMI lines are
//! out of scope. JMP indirect performs a plain little-endian word read at
//! the pointer; the NMOS page-wrap quirk is not emulated.

use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the resolved target. Absolute (0x4C) jumps straight to the
/// operand word; Indirect (0x6C) jumps to the word stored at the operand
/// address. No flags or stack involvement.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (target, _) = cpu.operand_address(metadata.addressing_mode);
    cpu.pc = target;

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes (address of the next instruction - 1) as a word, then jumps to
/// the operand address. RTS adds the 1 back, so a JSR/RTS pair resumes at
/// (JSR address + 3).
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.read_word(cpu.pc.wrapping_add(1));
    let return_address = cpu.pc.wrapping_add(2); // next instruction - 1
    cpu.push_word(return_address);
    cpu.pc = target;

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return word pushed by JSR and resumes at that address + 1.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let return_address = cpu.pop_word();
    cpu.pc = return_address.wrapping_add(1);

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Pushes (BRK address + 2) as a word, high byte first
/// 2. Pushes the packed status byte as it stood before the interrupt
/// 3. Sets the Break and Interrupt-disable flags
/// 4. Loads PC from the interrupt vector at 0xFFFE/0xFFFF (little-endian)
///
/// 7 cycles, fixed.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    // BRK occupies one byte but leaves a padding byte in the stream, so
    // the pushed return address skips it
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_word(return_address);

    // The stacked byte is the pre-BRK flag image
    let status = cpu.status.to_byte();
    cpu.push_byte(status);

    cpu.status.break_command = true;
    cpu.status.interrupt_disable = true;

    cpu.pc = cpu.read_word(IRQ_VECTOR);

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Inverse of BRK: pops the flag byte (clearing Break and the reserved
/// bit in the restored value), then pops PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let byte = cpu.pop_byte();
    let mut status = crate::Status::from_byte(byte);
    status.break_command = false;
    status.unused = false;
    cpu.status = status;

    cpu.pc = cpu.pop_word();

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}
