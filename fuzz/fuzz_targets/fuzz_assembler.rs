//! Fuzz target for the single-line assembler.
//!
//! Arbitrary text must never panic the assembler, and anything it accepts
//! must be a well-formed 1-3 byte encoding whose opcode is documented.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{assemble, OPCODE_TABLE};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    pc: u16,
    line: String,
}

fuzz_target!(|input: FuzzInput| {
    if let Ok(bytes) = assemble(input.pc, &input.line) {
        assert!((1..=3).contains(&bytes.len()));

        let entry = &OPCODE_TABLE[bytes[0] as usize];
        assert!(!entry.mnemonic.is_empty());
        assert_eq!(entry.mode.instruction_len() as usize, bytes.len());
    }
});
