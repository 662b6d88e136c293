//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory contents to `disassemble_range` and checks the
//! walk invariants: declared lengths are 1-3, consecutive addresses
//! advance by exactly the declared length, and memory is never mutated.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{disassemble_range, Bus, FlatMemory};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start: u16,
    count: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 65536 {
        return;
    }

    let mut mem = FlatMemory::new();
    for (i, &b) in input.bytes.iter().enumerate() {
        mem.write(input.start.wrapping_add(i as u16), b);
    }

    let lines = disassemble_range(&mem, input.start, input.count as usize);
    assert_eq!(lines.len(), input.count as usize);

    let mut expected = input.start;
    for (addr, line) in &lines {
        assert_eq!(*addr, expected);
        assert!((1..=3).contains(&line.len));
        assert!(!line.text.is_empty());
        expected = expected.wrapping_add(line.len);
    }
});
