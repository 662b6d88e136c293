//! # Disassembler
//!
//! Converts machine code back into assembly text, one instruction at a
//! time. Disassembly is a pure function of (bus, address): it only ever
//! `peek`s and never mutates CPU state, so a debugger can render any part
//! of memory without disturbing memory-mapped devices.
//!
//! Operand renderings match what the assembler parses, so
//! `assemble(pc, disassemble(bus, pc).text)` reproduces the original bytes
//! for every documented opcode.

use crate::addressing::AddrMode;
use crate::memory::Bus;
use crate::opcodes::OPCODE_TABLE;

/// One disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disasm {
    /// Assembly text, e.g. `"LDA #$42"` or `"??? $02"` for an
    /// undocumented opcode.
    pub text: String,

    /// Instruction length in bytes (1-3); the next instruction starts at
    /// `addr + len`.
    pub len: u16,
}

/// Disassembles the instruction at `addr`.
///
/// Undocumented opcodes render as `??? $xx` with length 1 so a listing
/// can always make progress.
///
/// # Examples
///
/// ```
/// use sim6502::{disassemble, Bus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1000, 0x8D); // STA $1234
/// mem.write(0x1001, 0x34);
/// mem.write(0x1002, 0x12);
///
/// let line = disassemble(&mem, 0x1000);
/// assert_eq!(line.text, "STA $1234");
/// assert_eq!(line.len, 3);
/// ```
pub fn disassemble<B: Bus>(bus: &B, addr: u16) -> Disasm {
    let opcode = bus.peek(addr);
    let entry = &OPCODE_TABLE[opcode as usize];
    let b1 = bus.peek(addr.wrapping_add(1));
    let b2 = bus.peek(addr.wrapping_add(2));

    let operand = match entry.mode {
        AddrMode::Invalid => {
            return Disasm {
                text: format!("??? ${:02X}", opcode),
                len: 1,
            };
        }
        AddrMode::Implied => String::new(),
        AddrMode::Accumulator => " A".to_string(),
        AddrMode::Immediate => format!(" #${:02X}", b1),
        AddrMode::ZeroPage => format!(" ${:02X}", b1),
        AddrMode::ZeroPageX => format!(" ${:02X},X", b1),
        AddrMode::ZeroPageY => format!(" ${:02X},Y", b1),
        AddrMode::Absolute => format!(" ${:02X}{:02X}", b2, b1),
        AddrMode::AbsoluteX => format!(" ${:02X}{:02X},X", b2, b1),
        AddrMode::AbsoluteY => format!(" ${:02X}{:02X},Y", b2, b1),
        AddrMode::Indirect => format!(" (${:02X}{:02X})", b2, b1),
        AddrMode::IndirectX => format!(" (${:02X},X)", b1),
        AddrMode::IndirectY => format!(" (${:02X}),Y", b1),
        AddrMode::Relative => {
            // Branch targets render resolved, not as raw offsets
            let target = addr.wrapping_add(2).wrapping_add(b1 as i8 as u16);
            format!(" ${:04X}", target)
        }
    };

    Disasm {
        text: format!("{}{}", entry.mnemonic, operand),
        len: entry.mode.instruction_len(),
    }
}

/// Disassembles `count` consecutive instructions starting at `addr`.
///
/// Returns each instruction's address with its text; a disassembly-list
/// view renders these directly. The address walk wraps at the top of the
/// address space.
pub fn disassemble_range<B: Bus>(bus: &B, addr: u16, count: usize) -> Vec<(u16, Disasm)> {
    let mut lines = Vec::with_capacity(count);
    let mut addr = addr;
    for _ in 0..count {
        let line = disassemble(bus, addr);
        let len = line.len;
        lines.push((addr, line));
        addr = addr.wrapping_add(len);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn mem_with(bytes: &[u8]) -> FlatMemory {
        let mut mem = FlatMemory::new();
        for (i, &b) in bytes.iter().enumerate() {
            mem.write(0x1000 + i as u16, b);
        }
        mem
    }

    #[test]
    fn test_implied() {
        let mem = mem_with(&[0xEA]);
        let line = disassemble(&mem, 0x1000);
        assert_eq!(line.text, "NOP");
        assert_eq!(line.len, 1);
    }

    #[test]
    fn test_accumulator() {
        let mem = mem_with(&[0x0A]);
        assert_eq!(disassemble(&mem, 0x1000).text, "ASL A");
    }

    #[test]
    fn test_immediate() {
        let mem = mem_with(&[0xA9, 0x42]);
        let line = disassemble(&mem, 0x1000);
        assert_eq!(line.text, "LDA #$42");
        assert_eq!(line.len, 2);
    }

    #[test]
    fn test_zero_page_variants() {
        assert_eq!(disassemble(&mem_with(&[0xA5, 0x80]), 0x1000).text, "LDA $80");
        assert_eq!(
            disassemble(&mem_with(&[0xB5, 0x80]), 0x1000).text,
            "LDA $80,X"
        );
        assert_eq!(
            disassemble(&mem_with(&[0xB6, 0x80]), 0x1000).text,
            "LDX $80,Y"
        );
    }

    #[test]
    fn test_absolute_variants() {
        assert_eq!(
            disassemble(&mem_with(&[0xAD, 0x34, 0x12]), 0x1000).text,
            "LDA $1234"
        );
        assert_eq!(
            disassemble(&mem_with(&[0xBD, 0x34, 0x12]), 0x1000).text,
            "LDA $1234,X"
        );
        assert_eq!(
            disassemble(&mem_with(&[0xB9, 0x34, 0x12]), 0x1000).text,
            "LDA $1234,Y"
        );
    }

    #[test]
    fn test_indirect_variants() {
        assert_eq!(
            disassemble(&mem_with(&[0x6C, 0xFC, 0xFF]), 0x1000).text,
            "JMP ($FFFC)"
        );
        assert_eq!(
            disassemble(&mem_with(&[0xA1, 0x40]), 0x1000).text,
            "LDA ($40,X)"
        );
        assert_eq!(
            disassemble(&mem_with(&[0xB1, 0x40]), 0x1000).text,
            "LDA ($40),Y"
        );
    }

    #[test]
    fn test_relative_forward_and_backward() {
        // BEQ +0x0E from 0x1000: target 0x1010
        let mem = mem_with(&[0xF0, 0x0E]);
        assert_eq!(disassemble(&mem, 0x1000).text, "BEQ $1010");

        // BNE -2 from 0x1000: target 0x1000 (branch to self)
        let mem = mem_with(&[0xD0, 0xFE]);
        assert_eq!(disassemble(&mem, 0x1000).text, "BNE $1000");
    }

    #[test]
    fn test_invalid_opcode() {
        let mem = mem_with(&[0x02]);
        let line = disassemble(&mem, 0x1000);
        assert_eq!(line.text, "??? $02");
        assert_eq!(line.len, 1);
    }

    #[test]
    fn test_range_walks_instruction_lengths() {
        let mem = mem_with(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEA]);
        let lines = disassemble_range(&mem, 0x1000, 3);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, 0x1000);
        assert_eq!(lines[0].1.text, "LDA #$01");
        assert_eq!(lines[1].0, 0x1002);
        assert_eq!(lines[1].1.text, "STA $0200");
        assert_eq!(lines[2].0, 0x1005);
        assert_eq!(lines[2].1.text, "NOP");
    }

    #[test]
    fn test_never_mutates_memory() {
        let mem = mem_with(&[0xA9, 0x42]);
        let before: Vec<u8> = (0..16).map(|i| mem.read(0x1000 + i)).collect();
        let _ = disassemble(&mem, 0x1000);
        let after: Vec<u8> = (0..16).map(|i| mem.read(0x1000 + i)).collect();
        assert_eq!(before, after);
    }
}
