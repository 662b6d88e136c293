//! Round-trip tests between the disassembler and the assembler: for every
//! documented opcode, disassembling an encoding and reassembling the text
//! at the same address reproduces the original bytes.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use sim6502::{assemble, disassemble, Bus, FlatMemory, OPCODE_TABLE};

/// Mid-range address so branch offsets can never wrap the address space.
const PC: u16 = 0x4000;

fn encoding(opcode: u8, lo: u8, hi: u8) -> Vec<u8> {
    let len = OPCODE_TABLE[opcode as usize].mode.instruction_len();
    match len {
        1 => vec![opcode],
        2 => vec![opcode, lo],
        _ => vec![opcode, lo, hi],
    }
}

fn roundtrip(bytes: &[u8]) -> Result<Vec<u8>, String> {
    let mut mem = FlatMemory::new();
    for (i, &b) in bytes.iter().enumerate() {
        mem.write(PC + i as u16, b);
    }
    let line = disassemble(&mem, PC);
    if line.len as usize != bytes.len() {
        return Err(format!("length mismatch for {:02X?}: {}", bytes, line.len));
    }
    assemble(PC, &line.text).map_err(|e| format!("{:02X?} -> {:?} -> {}", bytes, line.text, e))
}

#[test]
fn test_every_documented_opcode_round_trips() {
    for opcode in 0u16..256 {
        let opcode = opcode as u8;
        if OPCODE_TABLE[opcode as usize].mnemonic.is_empty() {
            continue;
        }
        let bytes = encoding(opcode, 0x42, 0x12);
        let reassembled = roundtrip(&bytes).unwrap();
        assert_eq!(reassembled, bytes, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_zero_page_form_stays_zero_page() {
    // LDA $05 disassembles with a two-digit literal, which must narrow
    // back to the zero-page encoding rather than widening to absolute
    let reassembled = roundtrip(&[0xA5, 0x05]).unwrap();
    assert_eq!(reassembled, vec![0xA5, 0x05]);
}

#[test]
fn test_absolute_form_stays_absolute() {
    // LDA $0005 disassembles with a four-digit literal and must keep the
    // absolute encoding even though the value fits a byte
    let reassembled = roundtrip(&[0xAD, 0x05, 0x00]).unwrap();
    assert_eq!(reassembled, vec![0xAD, 0x05, 0x00]);
}

#[test]
fn test_undocumented_opcode_does_not_assemble() {
    let mut mem = FlatMemory::new();
    mem.write(PC, 0x02);
    let line = disassemble(&mem, PC);
    assert_eq!(line.text, "??? $02");
    assert!(assemble(PC, &line.text).is_err());
}

proptest! {
    /// Round-trip equality holds for random operand bytes, branches and
    /// edge values included.
    #[test]
    fn prop_roundtrip_any_operands(
        opcode in (0u8..=255u8).prop_filter("documented", |op| {
            !OPCODE_TABLE[*op as usize].mnemonic.is_empty()
        }),
        lo in any::<u8>(),
        hi in any::<u8>(),
    ) {
        let bytes = encoding(opcode, lo, hi);
        let reassembled = roundtrip(&bytes).map_err(TestCaseError::fail)?;
        prop_assert_eq!(reassembled, bytes);
    }

    /// Assembling the disassembly of two consecutive instructions keeps
    /// them independent: each line reassembles at its own address.
    #[test]
    fn prop_roundtrip_instruction_sequence(
        first in prop::sample::select(
            OPCODE_TABLE
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.mnemonic.is_empty())
                .map(|(i, _)| i as u8)
                .collect::<Vec<u8>>()
        ),
        second in prop::sample::select(
            OPCODE_TABLE
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.mnemonic.is_empty())
                .map(|(i, _)| i as u8)
                .collect::<Vec<u8>>()
        ),
        operands in any::<[u8; 4]>(),
    ) {
        let mut bytes = encoding(first, operands[0], operands[1]);
        let first_len = bytes.len() as u16;
        bytes.extend(encoding(second, operands[2], operands[3]));

        let mut mem = FlatMemory::new();
        for (i, &b) in bytes.iter().enumerate() {
            mem.write(PC + i as u16, b);
        }

        let line1 = disassemble(&mem, PC);
        let line2 = disassemble(&mem, PC + first_len);
        prop_assert_eq!(line1.len, first_len);

        let out1 = assemble(PC, &line1.text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let out2 = assemble(PC + first_len, &line2.text)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(&out1[..], &bytes[..first_len as usize]);
        prop_assert_eq!(&out2[..], &bytes[first_len as usize..]);
    }
}
