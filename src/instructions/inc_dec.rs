//! # Increment and Decrement Instructions
//!
//! INC/DEC on memory (read-modify-write) and INX/INY/DEX/DEY on the index
//! registers. All set N,Z from the result; none touch C or V.

use crate::addressing::AddrMode;
use crate::cpu::Cpu;
use crate::memory::Bus;

/// INC: M += 1.
pub(crate) fn inc<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.bus.read(addr).wrapping_add(1);
    cpu.bus.write(addr, result);
    cpu.p.set_nz(result);
    cpu.cycles += 4;
}

/// DEC: M -= 1.
pub(crate) fn dec<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.bus.read(addr).wrapping_sub(1);
    cpu.bus.write(addr, result);
    cpu.p.set_nz(result);
    cpu.cycles += 4;
}

/// INX: X += 1.
pub(crate) fn inx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_nz(cpu.x);
    cpu.cycles += 2;
}

/// INY: Y += 1.
pub(crate) fn iny<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_nz(cpu.y);
    cpu.cycles += 2;
}

/// DEX: X -= 1.
pub(crate) fn dex<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_nz(cpu.x);
    cpu.cycles += 2;
}

/// DEY: Y -= 1.
pub(crate) fn dey<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_nz(cpu.y);
    cpu.cycles += 2;
}
