//! Fuzz target for the execution path.
//!
//! Runs a bounded number of steps over arbitrary memory from an arbitrary
//! register state. Execution must never panic, the only error is the
//! undocumented-opcode trap (which must leave PC on the offending byte),
//! and the unused status bit must hold after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{Bus, Cpu, FlatMemory, Status, StepError};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    s: u8,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 65536 {
        return;
    }

    let mut mem = FlatMemory::new();
    for (i, &b) in input.bytes.iter().enumerate() {
        mem.write(i as u16, b);
    }

    let mut cpu = Cpu::new(mem);
    cpu.set_pc(input.pc);
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_s(input.s);

    for _ in 0..input.steps.min(64) {
        let pc_before = cpu.pc();
        match cpu.step() {
            Ok(()) => {
                assert!(cpu.status().contains(Status::U));
            }
            Err(StepError::UndocumentedOpcode(opcode)) => {
                assert_eq!(cpu.pc(), pc_before);
                assert_eq!(cpu.bus().peek(pc_before), opcode);
                break;
            }
        }
    }
});
