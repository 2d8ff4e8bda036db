//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 151 documented 6502
//! instructions, organized by category. Each instruction is implemented as
//! a standalone function that takes a mutable reference to the CPU and the
//! opcode byte.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Mnemonic, CPU, OPCODE_TABLE};

/// Decodes the opcode through `OPCODE_TABLE` and dispatches to its handler.
///
/// Every mnemonic is an explicit arm; undocumented opcodes land in the
/// `Illegal` arm, which reports them through the `log` facade and decays
/// into a one-cycle no-op so execution keeps moving.
pub(crate) fn dispatch<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    match metadata.mnemonic {
        Mnemonic::Lda => load_store::execute_lda(cpu, opcode),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, opcode),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, opcode),
        Mnemonic::Sta => load_store::execute_sta(cpu, opcode),
        Mnemonic::Stx => load_store::execute_stx(cpu, opcode),
        Mnemonic::Sty => load_store::execute_sty(cpu, opcode),

        Mnemonic::Adc => alu::execute_adc(cpu, opcode),
        Mnemonic::Sbc => alu::execute_sbc(cpu, opcode),
        Mnemonic::And => alu::execute_and(cpu, opcode),
        Mnemonic::Ora => alu::execute_ora(cpu, opcode),
        Mnemonic::Eor => alu::execute_eor(cpu, opcode),
        Mnemonic::Bit => alu::execute_bit(cpu, opcode),
        Mnemonic::Cmp => alu::execute_cmp(cpu, opcode),
        Mnemonic::Cpx => alu::execute_cpx(cpu, opcode),
        Mnemonic::Cpy => alu::execute_cpy(cpu, opcode),

        Mnemonic::Asl => shifts::execute_asl(cpu, opcode),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, opcode),
        Mnemonic::Rol => shifts::execute_rol(cpu, opcode),
        Mnemonic::Ror => shifts::execute_ror(cpu, opcode),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, opcode),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, opcode),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, opcode),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, opcode),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, opcode),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, opcode),

        Mnemonic::Bcc => branches::execute_bcc(cpu, opcode),
        Mnemonic::Bcs => branches::execute_bcs(cpu, opcode),
        Mnemonic::Beq => branches::execute_beq(cpu, opcode),
        Mnemonic::Bne => branches::execute_bne(cpu, opcode),
        Mnemonic::Bmi => branches::execute_bmi(cpu, opcode),
        Mnemonic::Bpl => branches::execute_bpl(cpu, opcode),
        Mnemonic::Bvc => branches::execute_bvc(cpu, opcode),
        Mnemonic::Bvs => branches::execute_bvs(cpu, opcode),

        Mnemonic::Pha => stack::execute_pha(cpu, opcode),
        Mnemonic::Php => stack::execute_php(cpu, opcode),
        Mnemonic::Pla => stack::execute_pla(cpu, opcode),
        Mnemonic::Plp => stack::execute_plp(cpu, opcode),

        Mnemonic::Tax => transfer::execute_tax(cpu, opcode),
        Mnemonic::Tay => transfer::execute_tay(cpu, opcode),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, opcode),
        Mnemonic::Txa => transfer::execute_txa(cpu, opcode),
        Mnemonic::Txs => transfer::execute_txs(cpu, opcode),
        Mnemonic::Tya => transfer::execute_tya(cpu, opcode),

        Mnemonic::Clc => flags::execute_clc(cpu, opcode),
        Mnemonic::Cld => flags::execute_cld(cpu, opcode),
        Mnemonic::Cli => flags::execute_cli(cpu, opcode),
        Mnemonic::Clv => flags::execute_clv(cpu, opcode),
        Mnemonic::Sec => flags::execute_sec(cpu, opcode),
        Mnemonic::Sed => flags::execute_sed(cpu, opcode),
        Mnemonic::Sei => flags::execute_sei(cpu, opcode),

        Mnemonic::Jmp => control::execute_jmp(cpu, opcode),
        Mnemonic::Jsr => control::execute_jsr(cpu, opcode),
        Mnemonic::Rts => control::execute_rts(cpu, opcode),
        Mnemonic::Brk => control::execute_brk(cpu, opcode),
        Mnemonic::Rti => control::execute_rti(cpu, opcode),
        Mnemonic::Nop => control::execute_nop(cpu, opcode),

        Mnemonic::Illegal => {
            log::warn!(
                "unimplemented opcode 0x{:02X} at PC 0x{:04X}, treating as NOP",
                opcode,
                cpu.pc
            );
            // Charge only the opcode fetch and keep going
            cpu.cycles += metadata.base_cycles as u64;
            cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
        }
    }
}
