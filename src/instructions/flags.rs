//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor
//! status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt disable
//! - CLD / SED: Decimal mode
//! - CLV: Overflow (clear only; there is no "set overflow" instruction)
//!
//! All use implied addressing and execute in 2 cycles. Note that the
//! Decimal flag is tracked but never alters ADC/SBC arithmetic in this
//! implementation.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Sets or clears one flag and charges the fixed 2-cycle cost.
fn set_flag<M: MemoryBus, F>(cpu: &mut CPU<M>, opcode: u8, apply: F)
where
    F: Fn(&mut CPU<M>),
{
    let metadata = &OPCODE_TABLE[opcode as usize];

    apply(cpu);

    cpu.cycles += metadata.base_cycles as u64;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.carry = false);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.carry = true);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.interrupt_disable = false);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.interrupt_disable = true);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.decimal = false);
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.decimal = true);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    set_flag(cpu, opcode, |cpu| cpu.status.overflow = false);
}
