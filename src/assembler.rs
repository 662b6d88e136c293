//! # Single-Line Assembler
//!
//! Turns one line of assembly source into machine code, the inverse of the
//! disassembler. This is the debugger's in-place patching tool: the host
//! feeds it the line typed over a disassembly row and writes the returned
//! bytes at that address.
//!
//! ## Addressing-mode inference
//!
//! The operand's shape selects a tentative mode; a bare hex number is
//! tentatively Absolute. Because many instructions have both absolute and
//! zero-page encodings, a short literal (two digits or fewer) is narrowed
//! to the zero-page form first with the absolute form kept as a fallback,
//! and a long literal with a small value falls back the other way. Branch
//! mnemonics only encode as Relative, so a failed Absolute/ZeroPage lookup
//! retries Relative with the value as the branch target.
//!
//! All errors are ordinary `Err` values; a half-typed line must never
//! panic the debugger.

use crate::addressing::AddrMode;
use crate::opcodes::find_opcode;

/// Reasons a source line fails to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AsmError {
    /// The line holds no mnemonic.
    #[error("empty source line")]
    EmptyLine,

    /// The operand text matches no addressing-mode shape.
    #[error("unrecognized operand")]
    BadOperand,

    /// The operand value does not fit the addressing mode.
    #[error("operand value out of range")]
    ValueOutOfRange,

    /// No documented opcode pairs this mnemonic with this mode.
    #[error("no encoding for mnemonic and addressing mode")]
    NoSuchEncoding,

    /// A branch target further than -128..+127 bytes away.
    #[error("branch target out of range")]
    BranchOutOfRange,
}

/// Assembles one source line at address `pc`.
///
/// `pc` matters only for branches, whose encoded offset is relative to
/// `pc + 2`.
///
/// # Examples
///
/// ```
/// use sim6502::assemble;
///
/// // Short literals narrow to the zero-page encoding
/// assert_eq!(assemble(0x0000, "LDA $05").unwrap(), vec![0xA5, 0x05]);
/// assert_eq!(assemble(0x0000, "LDA $0005").unwrap(), vec![0xAD, 0x05, 0x00]);
///
/// // Branch offsets are computed from the instruction address
/// assert_eq!(assemble(0x1000, "BEQ $1010").unwrap(), vec![0xF0, 0x0E]);
/// assert!(assemble(0x1000, "BEQ $1100").is_err());
/// ```
pub fn assemble(pc: u16, line: &str) -> Result<Vec<u8>, AsmError> {
    // Isolate the mnemonic
    let line = line.trim_start();
    let split = line.find(char::is_whitespace).unwrap_or(line.len());
    let (mnemonic, operand) = line.split_at(split);
    if mnemonic.is_empty() {
        return Err(AsmError::EmptyLine);
    }
    let mnemonic = mnemonic.to_ascii_uppercase();

    // The operand grammar is whitespace-blind and case-blind
    let operand: String = operand
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    let (mut mode, digits) = parse_operand(&operand).ok_or(AsmError::BadOperand)?;
    let value = parse_value(mode, digits)?;

    // Narrow absolute forms toward zero page. A two-digit literal means
    // zero page first with absolute as fallback; a longer literal that
    // still fits a byte keeps absolute first with zero page as fallback.
    let mut alt_mode = None;
    for (abs, zp) in [
        (AddrMode::AbsoluteX, AddrMode::ZeroPageX),
        (AddrMode::AbsoluteY, AddrMode::ZeroPageY),
        (AddrMode::Absolute, AddrMode::ZeroPage),
    ] {
        if mode == abs {
            if digits.len() <= 2 {
                mode = zp;
                alt_mode = Some(abs);
            } else if value < 0x100 {
                alt_mode = Some(zp);
            }
        }
    }

    // Look up the encoding, trying the fallback mode and then Relative
    // for branch mnemonics written with a plain address operand
    let mut chosen = find_opcode(&mnemonic, mode).map(|op| (op, mode));
    if chosen.is_none() {
        if let Some(alt) = alt_mode {
            chosen = find_opcode(&mnemonic, alt).map(|op| (op, alt));
        }
    }
    if chosen.is_none() && matches!(mode, AddrMode::Absolute | AddrMode::ZeroPage) {
        chosen = find_opcode(&mnemonic, AddrMode::Relative).map(|op| (op, AddrMode::Relative));
    }
    let (opcode, mode) = chosen.ok_or(AsmError::NoSuchEncoding)?;

    let mut bytes = vec![opcode];
    match mode {
        AddrMode::Implied | AddrMode::Accumulator => {}

        AddrMode::Immediate
        | AddrMode::ZeroPage
        | AddrMode::ZeroPageX
        | AddrMode::ZeroPageY
        | AddrMode::IndirectX
        | AddrMode::IndirectY => bytes.push(value as u8),

        AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => {
            bytes.push(value as u8);
            bytes.push((value >> 8) as u8);
        }

        AddrMode::Relative => {
            let offset = value as i32 - (pc as i32 + 2);
            if !(-128..=127).contains(&offset) {
                return Err(AsmError::BranchOutOfRange);
            }
            bytes.push(offset as u8);
        }

        AddrMode::Invalid => return Err(AsmError::BadOperand),
    }

    Ok(bytes)
}

/// Classifies the operand's shape and extracts its hex digits.
///
/// The operand arrives already stripped of whitespace and uppercased.
/// Returns `None` when no shape matches.
fn parse_operand(operand: &str) -> Option<(AddrMode, &str)> {
    if operand.is_empty() {
        return Some((AddrMode::Implied, ""));
    }
    if operand == "A" {
        return Some((AddrMode::Accumulator, ""));
    }

    if let Some(rest) = operand.strip_prefix('#') {
        return hex_digits(rest).map(|d| (AddrMode::Immediate, d));
    }

    if let Some(inner) = operand.strip_prefix('(') {
        if let Some(body) = inner.strip_suffix(",X)") {
            return hex_digits(body).map(|d| (AddrMode::IndirectX, d));
        }
        if let Some(body) = inner.strip_suffix("),Y") {
            return hex_digits(body).map(|d| (AddrMode::IndirectY, d));
        }
        if let Some(body) = inner.strip_suffix(')') {
            return hex_digits(body).map(|d| (AddrMode::Indirect, d));
        }
        return None;
    }

    if let Some(body) = operand.strip_suffix(",X") {
        return hex_digits(body).map(|d| (AddrMode::AbsoluteX, d));
    }
    if let Some(body) = operand.strip_suffix(",Y") {
        return hex_digits(body).map(|d| (AddrMode::AbsoluteY, d));
    }
    hex_digits(operand).map(|d| (AddrMode::Absolute, d))
}

/// Accepts `$1234` or `1234`, returning the digit run.
fn hex_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix('$').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

/// Parses the digits and checks them against the mode's value range.
fn parse_value(mode: AddrMode, digits: &str) -> Result<u32, AsmError> {
    if digits.is_empty() {
        return Ok(0);
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| AsmError::ValueOutOfRange)?;
    let limit = match mode {
        AddrMode::Immediate | AddrMode::IndirectX | AddrMode::IndirectY => 0xFF,
        _ => 0xFFFF,
    };
    if value > limit {
        return Err(AsmError::ValueOutOfRange);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_and_operand_are_case_and_space_blind() {
        assert_eq!(assemble(0, "  lda  #$0f ").unwrap(), vec![0xA9, 0x0F]);
        assert_eq!(assemble(0, "LDA ( $40 , X )").unwrap(), vec![0xA1, 0x40]);
    }

    #[test]
    fn test_dollar_sign_optional() {
        assert_eq!(assemble(0, "LDA #42").unwrap(), vec![0xA9, 0x42]);
        assert_eq!(assemble(0, "JMP 1234").unwrap(), vec![0x4C, 0x34, 0x12]);
    }

    #[test]
    fn test_empty_line_fails() {
        assert_eq!(assemble(0, ""), Err(AsmError::EmptyLine));
        assert_eq!(assemble(0, "   "), Err(AsmError::EmptyLine));
    }

    #[test]
    fn test_unknown_mnemonic_fails() {
        assert_eq!(assemble(0, "XYZ #$01"), Err(AsmError::NoSuchEncoding));
    }

    #[test]
    fn test_garbage_operand_fails() {
        assert_eq!(assemble(0, "LDA #$GG"), Err(AsmError::BadOperand));
        assert_eq!(assemble(0, "LDA ($40,Y)"), Err(AsmError::BadOperand));
        assert_eq!(assemble(0, "LDA $"), Err(AsmError::BadOperand));
    }

    #[test]
    fn test_immediate_range() {
        assert_eq!(assemble(0, "LDA #$FF").unwrap(), vec![0xA9, 0xFF]);
        assert_eq!(assemble(0, "LDA #$100"), Err(AsmError::ValueOutOfRange));
    }

    #[test]
    fn test_indirect_pointer_range() {
        assert_eq!(assemble(0, "LDA ($FF),Y").unwrap(), vec![0xB1, 0xFF]);
        assert_eq!(assemble(0, "LDA ($100),Y"), Err(AsmError::ValueOutOfRange));
    }

    #[test]
    fn test_absolute_range() {
        assert_eq!(
            assemble(0, "LDA $FFFF").unwrap(),
            vec![0xAD, 0xFF, 0xFF]
        );
        assert_eq!(assemble(0, "LDA $10000"), Err(AsmError::ValueOutOfRange));
    }

    #[test]
    fn test_zero_page_narrowing() {
        // Two digits: zero-page form wins
        assert_eq!(assemble(0, "LDA $05").unwrap(), vec![0xA5, 0x05]);
        assert_eq!(assemble(0, "LDA $05,X").unwrap(), vec![0xB5, 0x05]);
        assert_eq!(assemble(0, "LDX $05,Y").unwrap(), vec![0xB6, 0x05]);

        // Four digits: absolute form wins even for small values
        assert_eq!(assemble(0, "LDA $0005").unwrap(), vec![0xAD, 0x05, 0x00]);
    }

    #[test]
    fn test_narrowing_falls_back_to_absolute() {
        // JSR has no zero-page encoding, so a short literal still
        // assembles absolute
        assert_eq!(assemble(0, "JSR $40").unwrap(), vec![0x20, 0x40, 0x00]);
    }

    #[test]
    fn test_narrowing_falls_back_to_zero_page() {
        // STX $0005,Y: absolute-Y does not exist for STX but the value
        // fits the zero-page form
        assert_eq!(assemble(0, "STX $0005,Y").unwrap(), vec![0x96, 0x05]);
    }

    #[test]
    fn test_branch_relative_fallback() {
        assert_eq!(assemble(0x1000, "BEQ $1010").unwrap(), vec![0xF0, 0x0E]);
        // Short target literal goes through the zero-page tentative mode
        assert_eq!(assemble(0x0000, "BNE $10").unwrap(), vec![0xD0, 0x0E]);
    }

    #[test]
    fn test_branch_backward() {
        // Branch to self: offset -2
        assert_eq!(assemble(0x1000, "BNE $1000").unwrap(), vec![0xD0, 0xFE]);
        // Maximum backward reach
        assert_eq!(assemble(0x1000, "BNE $0F82").unwrap(), vec![0xD0, 0x80]);
    }

    #[test]
    fn test_branch_out_of_range() {
        assert_eq!(assemble(0x1000, "BEQ $1100"), Err(AsmError::BranchOutOfRange));
        assert_eq!(assemble(0x1000, "BEQ $0F81"), Err(AsmError::BranchOutOfRange));
    }

    #[test]
    fn test_implied_and_accumulator() {
        assert_eq!(assemble(0, "NOP").unwrap(), vec![0xEA]);
        assert_eq!(assemble(0, "RTS").unwrap(), vec![0x60]);
        assert_eq!(assemble(0, "ASL A").unwrap(), vec![0x0A]);
        assert_eq!(assemble(0, "lsr a").unwrap(), vec![0x4A]);
    }

    #[test]
    fn test_indirect_jump() {
        assert_eq!(
            assemble(0, "JMP ($FFFC)").unwrap(),
            vec![0x6C, 0xFC, 0xFF]
        );
    }

    #[test]
    fn test_mnemonic_without_needed_operand_fails() {
        assert_eq!(assemble(0, "NOP $12"), Err(AsmError::NoSuchEncoding));
        assert_eq!(assemble(0, "LDA"), Err(AsmError::NoSuchEncoding));
    }
}
