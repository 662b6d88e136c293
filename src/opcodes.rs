//! # Opcode Table
//!
//! The complete 256-entry opcode table, the single source of truth shared
//! by the execution path, the disassembler and the assembler.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. Every
//! undocumented slot carries an empty mnemonic, [`AddrMode::Invalid`] and
//! [`Handler::Invalid`], and traps at execute time.

use crate::addressing::AddrMode;
use crate::addressing::AddrMode::*;
use self::Handler as H;

/// Semantic routine tag for an opcode.
///
/// The original hardware documentation groups several encodings under one
/// mnemonic; the tag picks the concrete routine (memory shifts and
/// accumulator shifts are distinct, all eight conditional branches share
/// one routine that decodes the condition from the opcode bits). Dispatch
/// is a single match in the step loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Invalid,
    Ora,
    And,
    Eor,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Bit,
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    AslMem,
    LsrMem,
    RolMem,
    RorMem,
    AslAcc,
    LsrAcc,
    RolAcc,
    RorAcc,
    IncMem,
    DecMem,
    Inx,
    Iny,
    Dex,
    Dey,
    Branch,
    JmpAbs,
    JmpInd,
    Jsr,
    Rts,
    Rti,
    Brk,
    Nop,
    Pha,
    Php,
    Pla,
    Plp,
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use sim6502::{AddrMode, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.mode, AddrMode::Immediate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Three-letter instruction name, or `""` for undocumented slots.
    pub mnemonic: &'static str,

    /// How operand bytes are interpreted.
    pub mode: AddrMode,

    /// Which semantic routine executes this opcode.
    pub handler: Handler,
}

const fn op(mnemonic: &'static str, mode: AddrMode, handler: Handler) -> Opcode {
    Opcode {
        mnemonic,
        mode,
        handler,
    }
}

const INVALID: Opcode = op("", Invalid, H::Invalid);

/// The full instruction set, indexed by opcode byte.
pub const OPCODE_TABLE: [Opcode; 256] = [
    op("BRK", Implied, H::Brk),       // 00
    op("ORA", IndirectX, H::Ora),     // 01
    INVALID,                          // 02
    INVALID,                          // 03
    INVALID,                          // 04
    op("ORA", ZeroPage, H::Ora),      // 05
    op("ASL", ZeroPage, H::AslMem),   // 06
    INVALID,                          // 07
    op("PHP", Implied, H::Php),       // 08
    op("ORA", Immediate, H::Ora),     // 09
    op("ASL", Accumulator, H::AslAcc), // 0A
    INVALID,                          // 0B
    INVALID,                          // 0C
    op("ORA", Absolute, H::Ora),      // 0D
    op("ASL", Absolute, H::AslMem),   // 0E
    INVALID,                          // 0F
    op("BPL", Relative, H::Branch),   // 10
    op("ORA", IndirectY, H::Ora),     // 11
    INVALID,                          // 12
    INVALID,                          // 13
    INVALID,                          // 14
    op("ORA", ZeroPageX, H::Ora),     // 15
    op("ASL", ZeroPageX, H::AslMem),  // 16
    INVALID,                          // 17
    op("CLC", Implied, H::Clc),       // 18
    op("ORA", AbsoluteY, H::Ora),     // 19
    INVALID,                          // 1A
    INVALID,                          // 1B
    INVALID,                          // 1C
    op("ORA", AbsoluteX, H::Ora),     // 1D
    op("ASL", AbsoluteX, H::AslMem),  // 1E
    INVALID,                          // 1F
    op("JSR", Absolute, H::Jsr),      // 20
    op("AND", IndirectX, H::And),     // 21
    INVALID,                          // 22
    INVALID,                          // 23
    op("BIT", ZeroPage, H::Bit),      // 24
    op("AND", ZeroPage, H::And),      // 25
    op("ROL", ZeroPage, H::RolMem),   // 26
    INVALID,                          // 27
    op("PLP", Implied, H::Plp),       // 28
    op("AND", Immediate, H::And),     // 29
    op("ROL", Accumulator, H::RolAcc), // 2A
    INVALID,                          // 2B
    op("BIT", Absolute, H::Bit),      // 2C
    op("AND", Absolute, H::And),      // 2D
    op("ROL", Absolute, H::RolMem),   // 2E
    INVALID,                          // 2F
    op("BMI", Relative, H::Branch),   // 30
    op("AND", IndirectY, H::And),     // 31
    INVALID,                          // 32
    INVALID,                          // 33
    INVALID,                          // 34
    op("AND", ZeroPageX, H::And),     // 35
    op("ROL", ZeroPageX, H::RolMem),  // 36
    INVALID,                          // 37
    op("SEC", Implied, H::Sec),       // 38
    op("AND", AbsoluteY, H::And),     // 39
    INVALID,                          // 3A
    INVALID,                          // 3B
    INVALID,                          // 3C
    op("AND", AbsoluteX, H::And),     // 3D
    op("ROL", AbsoluteX, H::RolMem),  // 3E
    INVALID,                          // 3F
    op("RTI", Implied, H::Rti),       // 40
    op("EOR", IndirectX, H::Eor),     // 41
    INVALID,                          // 42
    INVALID,                          // 43
    INVALID,                          // 44
    op("EOR", ZeroPage, H::Eor),      // 45
    op("LSR", ZeroPage, H::LsrMem),   // 46
    INVALID,                          // 47
    op("PHA", Implied, H::Pha),       // 48
    op("EOR", Immediate, H::Eor),     // 49
    op("LSR", Accumulator, H::LsrAcc), // 4A
    INVALID,                          // 4B
    op("JMP", Absolute, H::JmpAbs),   // 4C
    op("EOR", Absolute, H::Eor),      // 4D
    op("LSR", Absolute, H::LsrMem),   // 4E
    INVALID,                          // 4F
    op("BVC", Relative, H::Branch),   // 50
    op("EOR", IndirectY, H::Eor),     // 51
    INVALID,                          // 52
    INVALID,                          // 53
    INVALID,                          // 54
    op("EOR", ZeroPageX, H::Eor),     // 55
    op("LSR", ZeroPageX, H::LsrMem),  // 56
    INVALID,                          // 57
    op("CLI", Implied, H::Cli),       // 58
    op("EOR", AbsoluteY, H::Eor),     // 59
    INVALID,                          // 5A
    INVALID,                          // 5B
    INVALID,                          // 5C
    op("EOR", AbsoluteX, H::Eor),     // 5D
    op("LSR", AbsoluteX, H::LsrMem),  // 5E
    INVALID,                          // 5F
    op("RTS", Implied, H::Rts),       // 60
    op("ADC", IndirectX, H::Adc),     // 61
    INVALID,                          // 62
    INVALID,                          // 63
    INVALID,                          // 64
    op("ADC", ZeroPage, H::Adc),      // 65
    op("ROR", ZeroPage, H::RorMem),   // 66
    INVALID,                          // 67
    op("PLA", Implied, H::Pla),       // 68
    op("ADC", Immediate, H::Adc),     // 69
    op("ROR", Accumulator, H::RorAcc), // 6A
    INVALID,                          // 6B
    op("JMP", Indirect, H::JmpInd),   // 6C
    op("ADC", Absolute, H::Adc),      // 6D
    op("ROR", Absolute, H::RorMem),   // 6E
    INVALID,                          // 6F
    op("BVS", Relative, H::Branch),   // 70
    op("ADC", IndirectY, H::Adc),     // 71
    INVALID,                          // 72
    INVALID,                          // 73
    INVALID,                          // 74
    op("ADC", ZeroPageX, H::Adc),     // 75
    op("ROR", ZeroPageX, H::RorMem),  // 76
    INVALID,                          // 77
    op("SEI", Implied, H::Sei),       // 78
    op("ADC", AbsoluteY, H::Adc),     // 79
    INVALID,                          // 7A
    INVALID,                          // 7B
    INVALID,                          // 7C
    op("ADC", AbsoluteX, H::Adc),     // 7D
    op("ROR", AbsoluteX, H::RorMem),  // 7E
    INVALID,                          // 7F
    INVALID,                          // 80
    op("STA", IndirectX, H::Sta),     // 81
    INVALID,                          // 82
    INVALID,                          // 83
    op("STY", ZeroPage, H::Sty),      // 84
    op("STA", ZeroPage, H::Sta),      // 85
    op("STX", ZeroPage, H::Stx),      // 86
    INVALID,                          // 87
    op("DEY", Implied, H::Dey),       // 88
    INVALID,                          // 89
    op("TXA", Implied, H::Txa),       // 8A
    INVALID,                          // 8B
    op("STY", Absolute, H::Sty),      // 8C
    op("STA", Absolute, H::Sta),      // 8D
    op("STX", Absolute, H::Stx),      // 8E
    INVALID,                          // 8F
    op("BCC", Relative, H::Branch),   // 90
    op("STA", IndirectY, H::Sta),     // 91
    INVALID,                          // 92
    INVALID,                          // 93
    op("STY", ZeroPageX, H::Sty),     // 94
    op("STA", ZeroPageX, H::Sta),     // 95
    op("STX", ZeroPageY, H::Stx),     // 96
    INVALID,                          // 97
    op("TYA", Implied, H::Tya),       // 98
    op("STA", AbsoluteY, H::Sta),     // 99
    op("TXS", Implied, H::Txs),       // 9A
    INVALID,                          // 9B
    INVALID,                          // 9C
    op("STA", AbsoluteX, H::Sta),     // 9D
    INVALID,                          // 9E
    INVALID,                          // 9F
    op("LDY", Immediate, H::Ldy),     // A0
    op("LDA", IndirectX, H::Lda),     // A1
    op("LDX", Immediate, H::Ldx),     // A2
    INVALID,                          // A3
    op("LDY", ZeroPage, H::Ldy),      // A4
    op("LDA", ZeroPage, H::Lda),      // A5
    op("LDX", ZeroPage, H::Ldx),      // A6
    INVALID,                          // A7
    op("TAY", Implied, H::Tay),       // A8
    op("LDA", Immediate, H::Lda),     // A9
    op("TAX", Implied, H::Tax),       // AA
    INVALID,                          // AB
    op("LDY", Absolute, H::Ldy),      // AC
    op("LDA", Absolute, H::Lda),      // AD
    op("LDX", Absolute, H::Ldx),      // AE
    INVALID,                          // AF
    op("BCS", Relative, H::Branch),   // B0
    op("LDA", IndirectY, H::Lda),     // B1
    INVALID,                          // B2
    INVALID,                          // B3
    op("LDY", ZeroPageX, H::Ldy),     // B4
    op("LDA", ZeroPageX, H::Lda),     // B5
    op("LDX", ZeroPageY, H::Ldx),     // B6
    INVALID,                          // B7
    op("CLV", Implied, H::Clv),       // B8
    op("LDA", AbsoluteY, H::Lda),     // B9
    op("TSX", Implied, H::Tsx),       // BA
    INVALID,                          // BB
    op("LDY", AbsoluteX, H::Ldy),     // BC
    op("LDA", AbsoluteX, H::Lda),     // BD
    op("LDX", AbsoluteY, H::Ldx),     // BE
    INVALID,                          // BF
    op("CPY", Immediate, H::Cpy),     // C0
    op("CMP", IndirectX, H::Cmp),     // C1
    INVALID,                          // C2
    INVALID,                          // C3
    op("CPY", ZeroPage, H::Cpy),      // C4
    op("CMP", ZeroPage, H::Cmp),      // C5
    op("DEC", ZeroPage, H::DecMem),   // C6
    INVALID,                          // C7
    op("INY", Implied, H::Iny),       // C8
    op("CMP", Immediate, H::Cmp),     // C9
    op("DEX", Implied, H::Dex),       // CA
    INVALID,                          // CB
    op("CPY", Absolute, H::Cpy),      // CC
    op("CMP", Absolute, H::Cmp),      // CD
    op("DEC", Absolute, H::DecMem),   // CE
    INVALID,                          // CF
    op("BNE", Relative, H::Branch),   // D0
    op("CMP", IndirectY, H::Cmp),     // D1
    INVALID,                          // D2
    INVALID,                          // D3
    INVALID,                          // D4
    op("CMP", ZeroPageX, H::Cmp),     // D5
    op("DEC", ZeroPageX, H::DecMem),  // D6
    INVALID,                          // D7
    op("CLD", Implied, H::Cld),       // D8
    op("CMP", AbsoluteY, H::Cmp),     // D9
    INVALID,                          // DA
    INVALID,                          // DB
    INVALID,                          // DC
    op("CMP", AbsoluteX, H::Cmp),     // DD
    op("DEC", AbsoluteX, H::DecMem),  // DE
    INVALID,                          // DF
    op("CPX", Immediate, H::Cpx),     // E0
    op("SBC", IndirectX, H::Sbc),     // E1
    INVALID,                          // E2
    INVALID,                          // E3
    op("CPX", ZeroPage, H::Cpx),      // E4
    op("SBC", ZeroPage, H::Sbc),      // E5
    op("INC", ZeroPage, H::IncMem),   // E6
    INVALID,                          // E7
    op("INX", Implied, H::Inx),       // E8
    op("SBC", Immediate, H::Sbc),     // E9
    op("NOP", Implied, H::Nop),       // EA
    INVALID,                          // EB
    op("CPX", Absolute, H::Cpx),      // EC
    op("SBC", Absolute, H::Sbc),      // ED
    op("INC", Absolute, H::IncMem),   // EE
    INVALID,                          // EF
    op("BEQ", Relative, H::Branch),   // F0
    op("SBC", IndirectY, H::Sbc),     // F1
    INVALID,                          // F2
    INVALID,                          // F3
    INVALID,                          // F4
    op("SBC", ZeroPageX, H::Sbc),     // F5
    op("INC", ZeroPageX, H::IncMem),  // F6
    INVALID,                          // F7
    op("SED", Implied, H::Sed),       // F8
    op("SBC", AbsoluteY, H::Sbc),     // F9
    INVALID,                          // FA
    INVALID,                          // FB
    INVALID,                          // FC
    op("SBC", AbsoluteX, H::Sbc),     // FD
    op("INC", AbsoluteX, H::IncMem),  // FE
    INVALID,                          // FF
];

/// Finds the first opcode whose mnemonic and mode both match.
///
/// The assembler uses this to turn a parsed (mnemonic, mode) pair back
/// into an encoding.
pub fn find_opcode(mnemonic: &str, mode: AddrMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .position(|entry| entry.mnemonic == mnemonic && entry.mode == mode)
        .map(|index| index as u8)
}
