//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for 6502 instruction decode.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked `Mnemonic::Illegal`
//!
//! Each entry records the mnemonic, addressing mode, base cycle cost
//! (excluding page-crossing and branch penalties, which are charged
//! dynamically) and the instruction size in bytes. Conformance to the
//! published 6502 table is the binary-compatibility contract with any
//! assembler targeting this engine.

use crate::addressing::AddressingMode;

/// Instruction mnemonic.
///
/// One variant per documented 6502 instruction, plus [`Mnemonic::Illegal`]
/// for the 105 undocumented opcodes. Dispatch in the execution loop is an
/// exhaustive match over this enum, so no opcode falls through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Undocumented opcode with no handler.
    Illegal,
}

impl Mnemonic {
    /// Returns the conventional three-letter assembly name, or `"???"` for
    /// undocumented opcodes.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Illegal => "???",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page-crossing and branch penalties).
    ///
    /// Illegal opcodes charge 1 cycle: the opcode fetch of the no-op they
    /// decay into.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,
}

/// Table-row constructor, keeps the 256-entry literal readable.
const fn op(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes,
    }
}

/// Row for an undocumented opcode: reported and skipped at 1 cycle.
const fn il() -> OpcodeMetadata {
    op(Mnemonic::Illegal, AddressingMode::Implicit, 1, 1)
}

use AddressingMode::*;
use Mnemonic::*;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Documented entries carry the official mnemonic, addressing mode, cycle
/// cost and size; undocumented entries are `Mnemonic::Illegal`.
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00 - 0x0F
    op(Brk, Implicit, 7, 1),    op(Ora, IndirectX, 6, 2),   il(),                       il(),
    il(),                       op(Ora, ZeroPage, 3, 2),    op(Asl, ZeroPage, 5, 2),    il(),
    op(Php, Implicit, 3, 1),    op(Ora, Immediate, 2, 2),   op(Asl, Accumulator, 2, 1), il(),
    il(),                       op(Ora, Absolute, 4, 3),    op(Asl, Absolute, 6, 3),    il(),
    // 0x10 - 0x1F
    op(Bpl, Relative, 2, 2),    op(Ora, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(Ora, ZeroPageX, 4, 2),   op(Asl, ZeroPageX, 6, 2),   il(),
    op(Clc, Implicit, 2, 1),    op(Ora, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(Ora, AbsoluteX, 4, 3),   op(Asl, AbsoluteX, 7, 3),   il(),
    // 0x20 - 0x2F
    op(Jsr, Absolute, 6, 3),    op(And, IndirectX, 6, 2),   il(),                       il(),
    op(Bit, ZeroPage, 3, 2),    op(And, ZeroPage, 3, 2),    op(Rol, ZeroPage, 5, 2),    il(),
    op(Plp, Implicit, 4, 1),    op(And, Immediate, 2, 2),   op(Rol, Accumulator, 2, 1), il(),
    op(Bit, Absolute, 4, 3),    op(And, Absolute, 4, 3),    op(Rol, Absolute, 6, 3),    il(),
    // 0x30 - 0x3F
    op(Bmi, Relative, 2, 2),    op(And, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(And, ZeroPageX, 4, 2),   op(Rol, ZeroPageX, 6, 2),   il(),
    op(Sec, Implicit, 2, 1),    op(And, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(And, AbsoluteX, 4, 3),   op(Rol, AbsoluteX, 7, 3),   il(),
    // 0x40 - 0x4F
    op(Rti, Implicit, 6, 1),    op(Eor, IndirectX, 6, 2),   il(),                       il(),
    il(),                       op(Eor, ZeroPage, 3, 2),    op(Lsr, ZeroPage, 5, 2),    il(),
    op(Pha, Implicit, 3, 1),    op(Eor, Immediate, 2, 2),   op(Lsr, Accumulator, 2, 1), il(),
    op(Jmp, Absolute, 3, 3),    op(Eor, Absolute, 4, 3),    op(Lsr, Absolute, 6, 3),    il(),
    // 0x50 - 0x5F
    op(Bvc, Relative, 2, 2),    op(Eor, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(Eor, ZeroPageX, 4, 2),   op(Lsr, ZeroPageX, 6, 2),   il(),
    op(Cli, Implicit, 2, 1),    op(Eor, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(Eor, AbsoluteX, 4, 3),   op(Lsr, AbsoluteX, 7, 3),   il(),
    // 0x60 - 0x6F
    op(Rts, Implicit, 6, 1),    op(Adc, IndirectX, 6, 2),   il(),                       il(),
    il(),                       op(Adc, ZeroPage, 3, 2),    op(Ror, ZeroPage, 5, 2),    il(),
    op(Pla, Implicit, 4, 1),    op(Adc, Immediate, 2, 2),   op(Ror, Accumulator, 2, 1), il(),
    op(Jmp, Indirect, 5, 3),    op(Adc, Absolute, 4, 3),    op(Ror, Absolute, 6, 3),    il(),
    // 0x70 - 0x7F
    op(Bvs, Relative, 2, 2),    op(Adc, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(Adc, ZeroPageX, 4, 2),   op(Ror, ZeroPageX, 6, 2),   il(),
    op(Sei, Implicit, 2, 1),    op(Adc, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(Adc, AbsoluteX, 4, 3),   op(Ror, AbsoluteX, 7, 3),   il(),
    // 0x80 - 0x8F
    il(),                       op(Sta, IndirectX, 6, 2),   il(),                       il(),
    op(Sty, ZeroPage, 3, 2),    op(Sta, ZeroPage, 3, 2),    op(Stx, ZeroPage, 3, 2),    il(),
    op(Dey, Implicit, 2, 1),    il(),                       op(Txa, Implicit, 2, 1),    il(),
    op(Sty, Absolute, 4, 3),    op(Sta, Absolute, 4, 3),    op(Stx, Absolute, 4, 3),    il(),
    // 0x90 - 0x9F
    op(Bcc, Relative, 2, 2),    op(Sta, IndirectY, 6, 2),   il(),                       il(),
    op(Sty, ZeroPageX, 4, 2),   op(Sta, ZeroPageX, 4, 2),   op(Stx, ZeroPageY, 4, 2),   il(),
    op(Tya, Implicit, 2, 1),    op(Sta, AbsoluteY, 5, 3),   op(Txs, Implicit, 2, 1),    il(),
    il(),                       op(Sta, AbsoluteX, 5, 3),   il(),                       il(),
    // 0xA0 - 0xAF
    op(Ldy, Immediate, 2, 2),   op(Lda, IndirectX, 6, 2),   op(Ldx, Immediate, 2, 2),   il(),
    op(Ldy, ZeroPage, 3, 2),    op(Lda, ZeroPage, 3, 2),    op(Ldx, ZeroPage, 3, 2),    il(),
    op(Tay, Implicit, 2, 1),    op(Lda, Immediate, 2, 2),   op(Tax, Implicit, 2, 1),    il(),
    op(Ldy, Absolute, 4, 3),    op(Lda, Absolute, 4, 3),    op(Ldx, Absolute, 4, 3),    il(),
    // 0xB0 - 0xBF
    op(Bcs, Relative, 2, 2),    op(Lda, IndirectY, 5, 2),   il(),                       il(),
    op(Ldy, ZeroPageX, 4, 2),   op(Lda, ZeroPageX, 4, 2),   op(Ldx, ZeroPageY, 4, 2),   il(),
    op(Clv, Implicit, 2, 1),    op(Lda, AbsoluteY, 4, 3),   op(Tsx, Implicit, 2, 1),    il(),
    op(Ldy, AbsoluteX, 4, 3),   op(Lda, AbsoluteX, 4, 3),   op(Ldx, AbsoluteY, 4, 3),   il(),
    // 0xC0 - 0xCF
    op(Cpy, Immediate, 2, 2),   op(Cmp, IndirectX, 6, 2),   il(),                       il(),
    op(Cpy, ZeroPage, 3, 2),    op(Cmp, ZeroPage, 3, 2),    op(Dec, ZeroPage, 5, 2),    il(),
    op(Iny, Implicit, 2, 1),    op(Cmp, Immediate, 2, 2),   op(Dex, Implicit, 2, 1),    il(),
    op(Cpy, Absolute, 4, 3),    op(Cmp, Absolute, 4, 3),    op(Dec, Absolute, 6, 3),    il(),
    // 0xD0 - 0xDF
    op(Bne, Relative, 2, 2),    op(Cmp, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(Cmp, ZeroPageX, 4, 2),   op(Dec, ZeroPageX, 6, 2),   il(),
    op(Cld, Implicit, 2, 1),    op(Cmp, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(Cmp, AbsoluteX, 4, 3),   op(Dec, AbsoluteX, 7, 3),   il(),
    // 0xE0 - 0xEF
    op(Cpx, Immediate, 2, 2),   op(Sbc, IndirectX, 6, 2),   il(),                       il(),
    op(Cpx, ZeroPage, 3, 2),    op(Sbc, ZeroPage, 3, 2),    op(Inc, ZeroPage, 5, 2),    il(),
    op(Inx, Implicit, 2, 1),    op(Sbc, Immediate, 2, 2),   op(Nop, Implicit, 2, 1),    il(),
    op(Cpx, Absolute, 4, 3),    op(Sbc, Absolute, 4, 3),    op(Inc, Absolute, 6, 3),    il(),
    // 0xF0 - 0xFF
    op(Beq, Relative, 2, 2),    op(Sbc, IndirectY, 5, 2),   il(),                       il(),
    il(),                       op(Sbc, ZeroPageX, 4, 2),   op(Inc, ZeroPageX, 6, 2),   il(),
    op(Sed, Implicit, 2, 1),    op(Sbc, AbsoluteY, 4, 3),   il(),                       il(),
    il(),                       op(Sbc, AbsoluteX, 4, 3),   op(Inc, AbsoluteX, 7, 3),   il(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE
            .iter()
            .filter(|m| m.mnemonic != Mnemonic::Illegal)
            .count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_spot_check_entries() {
        assert_eq!(OPCODE_TABLE[0x00].mnemonic, Mnemonic::Brk);
        assert_eq!(OPCODE_TABLE[0x00].base_cycles, 7);

        assert_eq!(OPCODE_TABLE[0xA9].mnemonic, Mnemonic::Lda);
        assert_eq!(OPCODE_TABLE[0xA9].addressing_mode, AddressingMode::Immediate);

        assert_eq!(OPCODE_TABLE[0x6C].mnemonic, Mnemonic::Jmp);
        assert_eq!(OPCODE_TABLE[0x6C].addressing_mode, AddressingMode::Indirect);
        assert_eq!(OPCODE_TABLE[0x6C].base_cycles, 5);

        assert_eq!(OPCODE_TABLE[0x91].mnemonic, Mnemonic::Sta);
        assert_eq!(OPCODE_TABLE[0x91].base_cycles, 6); // stores take no page penalty

        assert_eq!(OPCODE_TABLE[0xEA].mnemonic, Mnemonic::Nop);
    }

    #[test]
    fn test_sizes_match_addressing_modes() {
        for metadata in OPCODE_TABLE.iter() {
            if metadata.mnemonic == Mnemonic::Illegal {
                continue;
            }
            let expected = match metadata.addressing_mode {
                AddressingMode::Implicit | AddressingMode::Accumulator => 1,
                AddressingMode::Immediate
                | AddressingMode::ZeroPage
                | AddressingMode::ZeroPageX
                | AddressingMode::ZeroPageY
                | AddressingMode::Relative
                | AddressingMode::IndirectX
                | AddressingMode::IndirectY => 2,
                AddressingMode::Absolute
                | AddressingMode::AbsoluteX
                | AddressingMode::AbsoluteY
                | AddressingMode::Indirect => 3,
            };
            assert_eq!(metadata.size_bytes, expected, "{}", metadata.mnemonic);
        }
    }
}
