//! # Load and Store Instructions
//!
//! LDA, LDX, LDY, STA, STX, STY. Loads set N,Z from the loaded value;
//! stores touch no flags.

use crate::addressing::AddrMode;
use crate::cpu::Cpu;
use crate::memory::Bus;

/// LDA: A = M; sets N,Z.
pub(crate) fn lda<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.a = cpu.bus.read(addr);
    cpu.p.set_nz(cpu.a);
    cpu.cycles += 2;
}

/// LDX: X = M; sets N,Z.
pub(crate) fn ldx<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.x = cpu.bus.read(addr);
    cpu.p.set_nz(cpu.x);
    cpu.cycles += 2;
}

/// LDY: Y = M; sets N,Z.
pub(crate) fn ldy<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.y = cpu.bus.read(addr);
    cpu.p.set_nz(cpu.y);
    cpu.cycles += 2;
}

/// STA: M = A.
pub(crate) fn sta<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.bus.write(addr, cpu.a);
    cpu.cycles += 2;
}

/// STX: M = X.
pub(crate) fn stx<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.bus.write(addr, cpu.x);
    cpu.cycles += 2;
}

/// STY: M = Y.
pub(crate) fn sty<B: Bus>(cpu: &mut Cpu<B>, mode: AddrMode) {
    let addr = cpu.operand_address(mode);
    cpu.bus.write(addr, cpu.y);
    cpu.cycles += 2;
}
