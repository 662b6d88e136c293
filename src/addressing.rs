//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502, plus an
//! `Invalid` marker used by the undocumented slots of the opcode table.
//! The mode determines how operand bytes are interpreted, how many of them
//! there are, and how the effective address is calculated.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator (and Invalid slots)
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX,
///   IndirectY, Relative
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Marker for undocumented opcode slots; execution traps.
    Invalid,

    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 16-bit address indexed by X; +1 cycle on page cross.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y; +1 cycle on page cross.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// Zero-page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// 8-bit address in the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Indexed indirect: (zp + X) names a zero-page pointer, wrapping
    /// within the zero page, which is dereferenced.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: zp names a zero-page pointer whose value is
    /// indexed by Y; +1 cycle on page cross.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Indirect jump through a 16-bit pointer; JMP only. Carries the NMOS
    /// page-wrap bug on pointers ending in $FF.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Signed 8-bit branch offset relative to the next instruction.
    ///
    /// Example: BEQ $1010
    Relative,
}

impl AddrMode {
    /// Total instruction length for this mode, opcode byte included.
    ///
    /// This is the "footprint" the breakpoint range query spans and the
    /// distance the disassembler advances between lines.
    pub fn instruction_len(self) -> u16 {
        match self {
            AddrMode::Invalid | AddrMode::Implied | AddrMode::Accumulator => 1,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::ZeroPageX
            | AddrMode::ZeroPageY
            | AddrMode::IndirectX
            | AddrMode::IndirectY
            | AddrMode::Relative => 2,
            AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => {
                3
            }
        }
    }
}
