//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502. Each mode is a
//! rule for turning the bytes that follow an opcode (plus, for indexed
//! modes, the X or Y register) into an effective address.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it computes the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator register (ASL A, LSR A).
    Accumulator,

    /// 8-bit constant embedded in the instruction (LDA #$10).
    Immediate,

    /// 8-bit address confined to page 0 (LDA $80 reads 0x0080).
    ZeroPage,

    /// Zero page address plus X, wrapping mod 256 so the result stays in
    /// page 0 (LDA $80,X).
    ZeroPageX,

    /// Zero page address plus Y, wrapping mod 256 (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit offset relative to the following instruction; used only
    /// by the branch instructions.
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address plus X (LDA $1234,X). Crossing a 256-byte page costs
    /// +1 cycle on read-class instructions.
    AbsoluteX,

    /// 16-bit address plus Y (LDA $1234,Y). Same page-crossing penalty as
    /// AbsoluteX.
    AbsoluteY,

    /// The word stored at the operand address is the target (JMP ($1234)).
    /// Only used by JMP.
    Indirect,

    /// Indexed indirect: the operand byte plus X (zero-page wrapped) names a
    /// page-0 pointer; the word there is the address (LDA ($40,X)).
    IndirectX,

    /// Indirect indexed: the operand byte names a page-0 pointer; the stored
    /// word plus Y is the address (LDA ($40),Y). Crossing a page costs +1
    /// cycle on read-class instructions.
    IndirectY,
}
