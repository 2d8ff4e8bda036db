//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: the packed [`Status`] register
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//!
//! Execution never faults: addresses wrap within the 64KB ring, the stack
//! pointer wraps within its page, and unknown opcodes are reported through
//! the `log` facade and skipped as one-cycle no-ops.

use crate::instructions;
use crate::status::Status;
use crate::{AddressingMode, MemoryBus};

/// Program counter value established by reset. Callers that keep a program
/// elsewhere set PC explicitly; the reset vector is not chased.
pub const RESET_PC: u16 = 0xFFFC;

/// Stack pointer value established by reset (top of the stack page).
pub const RESET_SP: u8 = 0xFF;

/// Base address of the single hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the IRQ/BRK vector low byte; the high byte is at +1.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, and cycle counter. It is generic over
/// the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset();
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (STACK_BASE + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// Registers start in the reset state (PC = 0xFFFC, SP = 0xFF, all
    /// flags and registers clear) but memory is left untouched; call
    /// [`CPU::reset`] for the full reset contract including memory
    /// re-initialization.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: RESET_PC,
            sp: RESET_SP,
            status: Status::new(),
            cycles: 0,
            memory,
        }
    }

    /// Resets the CPU and its memory to the power-on state.
    ///
    /// - PC = 0xFFFC, SP = 0xFF
    /// - A, X, Y and every status flag cleared
    /// - Cycle counter zeroed
    /// - Memory re-initialized via [`MemoryBus::reset`] (zero-fill for
    ///   `FlatMemory`)
    ///
    /// The reset vector at 0xFFFC/0xFFFD is *not* dereferenced; callers
    /// whose program entry differs must set PC explicitly.
    pub fn reset(&mut self) {
        self.pc = RESET_PC;
        self.sp = RESET_SP;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.status = Status::new();
        self.cycles = 0;
        self.memory.reset();
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC
    /// 2. Look up the instruction in the opcode table
    /// 3. Dispatch to the instruction handler, which consumes its
    ///    documented cycle cost (plus page-crossing/branch extras) and
    ///    advances PC
    ///
    /// An undocumented opcode is reported via `log::warn!`, charged the
    /// one-cycle opcode fetch, and skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0x8000, 0xEA); // NOP
    /// cpu.set_pc(0x8000);
    ///
    /// cpu.step();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) {
        let opcode = self.memory.read(self.pc);
        instructions::dispatch(self, opcode);
    }

    /// Runs the CPU for at least the given number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted and
    /// returns the actual number of cycles consumed. The budget is a
    /// minimum work unit, not a hard deadline: an instruction begun inside
    /// the budget always completes, so the return value may exceed the
    /// budget by up to one instruction's cost.
    ///
    /// A program that loops forever will not self-terminate; the caller
    /// bounds execution solely through the budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// for addr in 0x8000..0x8010 {
    ///     cpu.memory_mut().write(addr, 0xEA); // NOP, 2 cycles each
    /// }
    /// cpu.set_pc(0x8000);
    ///
    /// let consumed = cpu.run_for_cycles(7);
    /// assert_eq!(consumed, 8); // fourth NOP completes past the budget
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step();
        }

        self.cycles - start_cycles
    }

    /// Logs a register and flag dump at debug level.
    ///
    /// Informational only; the output format is not part of the
    /// functional contract.
    pub fn debug_report(&self) {
        log::debug!(
            "PC: {:04X}, SP: {:02X}, A: {:02X}, X: {:02X}, Y: {:02X}, cycles: {}",
            self.pc,
            self.sp,
            self.a,
            self.x,
            self.y,
            self.cycles
        );
        log::debug!(
            "C: {}, Z: {}, I: {}, D: {}, B: {}, V: {}, N: {}",
            u8::from(self.status.carry),
            u8::from(self.status.zero),
            u8::from(self.status.interrupt_disable),
            u8::from(self.status.decimal),
            u8::from(self.status.break_command),
            u8::from(self.status.overflow),
            u8::from(self.status.negative)
        );
    }

    // ========== Memory Access Primitives ==========

    /// Reads a byte at an explicit address; PC untouched.
    pub(crate) fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Reads a little-endian word at an explicit address. The second byte
    /// comes from addr+1, wrapping within the 64KB ring.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory.read(addr) as u16;
        let high = self.memory.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes a byte at an explicit address.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Writes a little-endian word at an explicit address, wrapping within
    /// the 64KB ring.
    #[allow(dead_code)]
    pub(crate) fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write(addr, (value & 0xFF) as u8);
        self.memory.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Reads a little-endian word from a zero-page pointer, wrapping the
    /// high-byte read within page 0.
    fn read_zero_page_word(&self, zp_addr: u8) -> u16 {
        let low = self.memory.read(zp_addr as u16) as u16;
        let high = self.memory.read(zp_addr.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    // ========== Addressing-Mode Resolution ==========

    /// Resolves the effective address for the given addressing mode,
    /// reading operand bytes relative to the current PC (which still points
    /// at the opcode). Returns the address and whether the index addition
    /// crossed a 256-byte page boundary.
    ///
    /// Handlers charge the +1 page-crossing cycle only on read-class
    /// instructions; stores always pay the fixed cost.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Immediate => (self.pc.wrapping_add(1), false),
            AddressingMode::ZeroPage => {
                let addr = self.memory.read(self.pc.wrapping_add(1));
                (addr as u16, false)
            }
            AddressingMode::ZeroPageX => {
                // Wraps mod 256: the effective address stays in page 0
                let base = self.memory.read(self.pc.wrapping_add(1));
                (base.wrapping_add(self.x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.memory.read(self.pc.wrapping_add(1));
                (base.wrapping_add(self.y) as u16, false)
            }
            AddressingMode::Absolute => (self.read_word(self.pc.wrapping_add(1)), false),
            AddressingMode::AbsoluteX => {
                let base = self.read_word(self.pc.wrapping_add(1));
                let addr = base.wrapping_add(self.x as u16);
                (addr, Self::page_crossed(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_word(self.pc.wrapping_add(1));
                let addr = base.wrapping_add(self.y as u16);
                (addr, Self::page_crossed(base, addr))
            }
            AddressingMode::Indirect => {
                let ptr = self.read_word(self.pc.wrapping_add(1));
                (self.read_word(ptr), false)
            }
            AddressingMode::IndirectX => {
                // Operand + X names a page-0 pointer, zero-page wrapped
                let zp = self
                    .memory
                    .read(self.pc.wrapping_add(1))
                    .wrapping_add(self.x);
                (self.read_zero_page_word(zp), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(self.pc.wrapping_add(1));
                let base = self.read_zero_page_word(zp);
                let addr = base.wrapping_add(self.y as u16);
                (addr, Self::page_crossed(base, addr))
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative => {
                // These modes have no effective address; handlers deal with
                // them directly and never ask for one.
                (0, false)
            }
        }
    }

    /// Resolves the addressing mode and reads the operand byte.
    /// Returns the value and the page-crossing indicator.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> (u8, bool) {
        let (addr, page_crossed) = self.operand_address(mode);
        (self.memory.read(addr), page_crossed)
    }

    /// A page boundary is crossed when the index addition changes the high
    /// byte of the address.
    fn page_crossed(base: u16, addr: u16) -> bool {
        (base & 0xFF00) != (addr & 0xFF00)
    }

    // ========== Stack Primitives ==========

    /// Pushes a byte onto the stack: write at STACK_BASE | SP, then
    /// decrement SP. SP wraps silently within the stack page.
    pub fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE | (self.sp as u16), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte from the stack: increment SP, then read at
    /// STACK_BASE | SP.
    pub fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | (self.sp as u16))
    }

    /// Pushes a word onto the stack, high byte first, so a later
    /// `pop_word` reconstructs it little-endian.
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pops a word from the stack (low byte first).
    pub fn pop_word(&mut self) -> u16 {
        let low = self.pop_byte() as u16;
        let high = self.pop_byte() as u16;
        (high << 8) | low
    }

    // ========== Flag Helpers ==========

    /// Sets Zero from `value == 0` and Negative from bit 7 of `value`.
    pub(crate) fn update_zero_and_negative(&mut self, value: u8) {
        self.status.zero = value == 0;
        self.status.negative = (value & 0x80) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is 0x0100 + SP. The stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed NV-BDIZC byte.
    pub fn status(&self) -> u8 {
        self.status.to_byte()
    }

    /// Returns the total number of CPU cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register from a packed NV-BDIZC byte.
    pub fn set_status(&mut self, byte: u8) {
        self.status = Status::from_byte(byte);
    }

    // ========== Status Flag Accessors ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.negative = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.overflow = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.break_command = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.decimal = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.interrupt_disable = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.zero = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.carry = value;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
