//! # Processor Status Register
//!
//! The 6502 packs its seven status flags into one byte alongside a
//! permanently-set unused bit. This module keeps the packed representation
//! because the debugger-facing interfaces (FLAGS register strings, pushed
//! status bytes, branch condition decode) all operate on raw bits.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status register (the P register).
    ///
    /// Bit layout, high to low: `NV-BDIZC`. Bit 5 (`U`) has no hardware
    /// function but reads as 1; every path that rebuilds P from a byte
    /// (PLP, RTI, FLAGS register writes) forces it back on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Negative: bit 7 of the last result.
        const N = 0x80;
        /// Overflow: signed overflow out of bit 6.
        const V = 0x40;
        /// Unused, always set.
        const U = 0x20;
        /// Break: distinguishes BRK-pushed status from IRQ-pushed status.
        const B = 0x10;
        /// Decimal: ADC/SBC operate on packed BCD digits.
        const D = 0x08;
        /// Interrupt disable.
        const I = 0x04;
        /// Zero: the last result was zero.
        const Z = 0x02;
        /// Carry.
        const C = 0x01;
    }
}

/// Flag letters in display order, `-` standing in for the unused bit.
const LETTERS: &[u8; 8] = b"NV-BDIZC";

impl Status {
    /// Creates the power-on value: all flags clear, unused bit set.
    pub fn power_on() -> Self {
        Status::U
    }

    /// Sets N from bit 7 of `result` and Z from `result == 0`.
    pub fn set_nz(&mut self, result: u8) {
        self.set(Status::N, result & 0x80 != 0);
        self.set(Status::Z, result == 0);
    }

    /// The carry flag as a 0/1 addend.
    pub fn carry_bit(&self) -> u8 {
        if self.contains(Status::C) {
            1
        } else {
            0
        }
    }

    /// Renders the register as a 7-character `NV-BDIZC` string.
    ///
    /// Set flags show their letter, clear flags show `-`. The third
    /// position (the unused bit) is always `-`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::Status;
    ///
    /// let p = Status::N | Status::Z | Status::C;
    /// assert_eq!(p.letters(), "N-----ZC");
    /// ```
    pub fn letters(&self) -> String {
        LETTERS
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let bit = 0x80 >> i;
                if bit != Status::U.bits() && self.bits() & bit != 0 {
                    letter as char
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Parses a flag string of `NV-BDIZC` letters, case-insensitively.
    ///
    /// `-` characters are skipped; any other letter must name a flag.
    /// Returns `None` on an unknown character. The unused bit is set in
    /// the result regardless of input.
    ///
    /// ```
    /// use sim6502::Status;
    ///
    /// assert_eq!(Status::from_letters("nzc"), Some(Status::U | Status::N | Status::Z | Status::C));
    /// assert_eq!(Status::from_letters("Q"), None);
    /// ```
    pub fn from_letters(text: &str) -> Option<Self> {
        let mut bits = Status::U.bits();
        for ch in text.chars() {
            if ch == '-' {
                continue;
            }
            let upper = ch.to_ascii_uppercase() as u8;
            let pos = LETTERS.iter().position(|&l| l == upper)?;
            bits |= 0x80 >> pos;
        }
        Some(Status::from_bits_truncate(bits))
    }
}
