//! # 6502 Instruction Implementations
//!
//! Semantic routines for all 56 documented mnemonics, organized by
//! category, plus the dispatch match that routes an opcode's
//! [`Handler`](crate::opcodes::Handler) tag to its routine.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS (one routine)
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **flags**: CLC, CLD, CLI, CLV, SEC, SED, SEI
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR (memory and accumulator forms)
//! - **stack**: PHA, PHP, PLA, PLP
//! - **transfer**: TAX, TAY, TSX, TXA, TXS, TYA
//!
//! Every routine charges its own base cycle cost; operand resolution
//! charges the addressing-mode cost separately.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::cpu::Cpu;
use crate::memory::Bus;
use crate::opcodes::{Handler, OPCODE_TABLE};
use crate::StepError;

/// Executes the instruction for `opcode`. PC has already been advanced
/// past the opcode byte.
///
/// An undocumented opcode rewinds PC onto the offending byte and fails;
/// everything else is infallible.
pub(crate) fn dispatch<B: Bus>(cpu: &mut Cpu<B>, opcode: u8) -> Result<(), StepError> {
    let entry = &OPCODE_TABLE[opcode as usize];
    let mode = entry.mode;

    match entry.handler {
        Handler::Invalid => {
            cpu.pc = cpu.pc.wrapping_sub(1);
            return Err(StepError::UndocumentedOpcode(opcode));
        }

        Handler::Ora => alu::ora(cpu, mode),
        Handler::And => alu::and(cpu, mode),
        Handler::Eor => alu::eor(cpu, mode),
        Handler::Adc => alu::adc(cpu, mode),
        Handler::Sbc => alu::sbc(cpu, mode),
        Handler::Cmp => alu::cmp(cpu, mode),
        Handler::Cpx => alu::cpx(cpu, mode),
        Handler::Cpy => alu::cpy(cpu, mode),
        Handler::Bit => alu::bit(cpu, mode),

        Handler::Lda => load_store::lda(cpu, mode),
        Handler::Ldx => load_store::ldx(cpu, mode),
        Handler::Ldy => load_store::ldy(cpu, mode),
        Handler::Sta => load_store::sta(cpu, mode),
        Handler::Stx => load_store::stx(cpu, mode),
        Handler::Sty => load_store::sty(cpu, mode),

        Handler::AslMem => shifts::asl_mem(cpu, mode),
        Handler::LsrMem => shifts::lsr_mem(cpu, mode),
        Handler::RolMem => shifts::rol_mem(cpu, mode),
        Handler::RorMem => shifts::ror_mem(cpu, mode),
        Handler::AslAcc => shifts::asl_acc(cpu),
        Handler::LsrAcc => shifts::lsr_acc(cpu),
        Handler::RolAcc => shifts::rol_acc(cpu),
        Handler::RorAcc => shifts::ror_acc(cpu),

        Handler::IncMem => inc_dec::inc(cpu, mode),
        Handler::DecMem => inc_dec::dec(cpu, mode),
        Handler::Inx => inc_dec::inx(cpu),
        Handler::Iny => inc_dec::iny(cpu),
        Handler::Dex => inc_dec::dex(cpu),
        Handler::Dey => inc_dec::dey(cpu),

        Handler::Branch => branches::branch(cpu, opcode),

        Handler::JmpAbs => control::jmp_abs(cpu),
        Handler::JmpInd => control::jmp_ind(cpu),
        Handler::Jsr => control::jsr(cpu),
        Handler::Rts => control::rts(cpu),
        Handler::Rti => control::rti(cpu),
        Handler::Brk => control::brk(cpu),
        Handler::Nop => control::nop(cpu),

        Handler::Pha => stack::pha(cpu),
        Handler::Php => stack::php(cpu),
        Handler::Pla => stack::pla(cpu),
        Handler::Plp => stack::plp(cpu),

        Handler::Clc => flags::clc(cpu),
        Handler::Cld => flags::cld(cpu),
        Handler::Cli => flags::cli(cpu),
        Handler::Clv => flags::clv(cpu),
        Handler::Sec => flags::sec(cpu),
        Handler::Sed => flags::sed(cpu),
        Handler::Sei => flags::sei(cpu),

        Handler::Tax => transfer::tax(cpu),
        Handler::Tay => transfer::tay(cpu),
        Handler::Tsx => transfer::tsx(cpu),
        Handler::Txa => transfer::txa(cpu),
        Handler::Txs => transfer::txs(cpu),
        Handler::Tya => transfer::tya(cpu),
    }

    Ok(())
}
