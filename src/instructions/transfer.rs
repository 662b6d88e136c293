//! # Register Transfer Instructions
//!
//! TAX, TAY, TSX, TXA, TXS, TYA. All set N,Z from the destination except
//! TXS, which transfers into S without touching flags.

use crate::cpu::Cpu;
use crate::memory::Bus;

/// TAX: X = A; sets N,Z.
pub(crate) fn tax<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.a;
    cpu.p.set_nz(cpu.x);
    cpu.cycles += 2;
}

/// TAY: Y = A; sets N,Z.
pub(crate) fn tay<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.a;
    cpu.p.set_nz(cpu.y);
    cpu.cycles += 2;
}

/// TSX: X = S; sets N,Z.
pub(crate) fn tsx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.s;
    cpu.p.set_nz(cpu.x);
    cpu.cycles += 2;
}

/// TXA: A = X; sets N,Z.
pub(crate) fn txa<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.x;
    cpu.p.set_nz(cpu.a);
    cpu.cycles += 2;
}

/// TXS: S = X; no flags.
pub(crate) fn txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.s = cpu.x;
    cpu.cycles += 2;
}

/// TYA: A = Y; sets N,Z.
pub(crate) fn tya<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.y;
    cpu.p.set_nz(cpu.a);
    cpu.cycles += 2;
}
