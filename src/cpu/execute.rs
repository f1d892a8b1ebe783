/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so every entry point (memory
fetch loop, pre-fetched buffer) and every family handler in `dispatch`
shares a single implementation.

Scope (crate-visible)
---------------------
Flag helpers:
    set_flag, get_flag

Stack helpers:
    push, pull, push_word, pull_word
    php, plp, pha, pla

Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs

Logical / bit:
    and/ora/eor/bit

Arithmetic:
    adc/sbc (binary or packed BCD depending on DECIMAL), compare

Increment / decrement:
    inx/iny/dex/dey, inc_value/dec_value

Shifts / rotates:
    asl/lsr/rol/ror as value transforms, applied through `shift_acc` or
    `rmw_memory`

Flag Rules
==========
- Every accumulator write goes through `CpuRegs::set_a`, which recomputes
  ZERO / NEGATIVE. Helpers that write A do not touch Z/N again.
- Shifts and rotates only set CARRY themselves. The accumulator forms pick
  up Z/N from the A write; the memory forms leave Z/N alone.
- Compare uses the sign of the wide difference (see `compare`).
*/

use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, NEGATIVE, OVERFLOW, STACK_BASE, ZERO};
use crate::memory::AddressSpace;

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

/// Store at `$0100 + SP`, then decrement SP (wrapping).
#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, mem: &mut AddressSpace, v: u8) {
    let sp = cpu.sp();
    mem.write(STACK_BASE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

/// Increment SP (wrapping), then load from `$0100 + SP`.
#[inline]
pub(crate) fn pull<C: CpuRegs>(cpu: &mut C, mem: &AddressSpace) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    mem.read(STACK_BASE | sp as u16)
}

/// High byte first, so the low byte ends up at the lower stack address.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, mem: &mut AddressSpace, v: u16) {
    push(cpu, mem, (v >> 8) as u8);
    push(cpu, mem, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pull_word<C: CpuRegs>(cpu: &mut C, mem: &AddressSpace) -> u16 {
    let lo = pull(cpu, mem) as u16;
    let hi = pull(cpu, mem) as u16;
    (hi << 8) | lo
}

/// Push P exactly as held (BREAK and bit 5 are not forced).
#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, mem: &mut AddressSpace) {
    let p = cpu.status();
    push(cpu, mem, p);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, mem: &AddressSpace) {
    let v = pull(cpu, mem);
    cpu.set_status(v);
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, mem: &mut AddressSpace) {
    // Avoid simultaneous immutable + mutable borrow of cpu in one expression.
    let a = cpu.a();
    push(cpu, mem, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, mem: &AddressSpace) {
    let val = pull(cpu, mem);
    cpu.set_a(val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

/// Re-assigns A to itself first so Z/N reflect the value being copied.
#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    cpu.set_a(a);
    cpu.set_x(a);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    cpu.set_a(a);
    cpu.set_y(a);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.x());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.y());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let sp = cpu.sp();
    cpu.set_x(sp);
    cpu.update_zn(sp);
}

#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() & v);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() | v);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() ^ v);
}

/// ZERO is only ever set here; a non-zero mask leaves it as it was.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    if cpu.a() & v == 0 {
        set_flag(cpu, ZERO, true);
    }
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    cpu.set_y(v);
    cpu.update_zn(v);
}

/// Memory INC transform: +1 wrapping, Z/N from the result.
#[inline]
pub(crate) fn inc_value<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    let r = old.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec_value<C: CpuRegs>(cpu: &mut C, old: u8) -> u8 {
    let r = old.wrapping_sub(1);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Shifts / Rotates (value transforms; CARRY only)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let wide = (v as u16) << 1;
    cpu.update_carry(wide > 0xFF);
    wide as u8
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry((v & 0x01) != 0);
    v >> 1
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit();
    cpu.update_carry((v & 0x80) != 0);
    (v << 1) | carry_in
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.carry_bit() << 7;
    cpu.update_carry((v & 0x01) != 0);
    (v >> 1) | carry_in
}

/// Apply a shift transform to the accumulator (Z/N via the A write).
#[inline]
pub(crate) fn shift_acc<C: CpuRegs, F>(cpu: &mut C, transform: F)
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let v = cpu.a();
    let r = transform(cpu, v);
    cpu.set_a(r);
}

/// Read `addr`, transform, write back. Returns the stored value.
pub(crate) fn rmw_memory<C: CpuRegs, F>(
    cpu: &mut C,
    mem: &mut AddressSpace,
    addr: u16,
    transform: F,
) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = mem.read(addr);
    let newv = transform(cpu, old);
    mem.write(addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
fn bcd_to_bin(v: u8) -> u8 {
    (v >> 4) * 10 + (v & 0x0F)
}

/// `v` must be below 100.
#[inline]
fn bin_to_bcd(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    if get_flag(cpu, DECIMAL) {
        adc_decimal(cpu, v);
    } else {
        adc_binary(cpu, v);
    }
}

/// `A - M - C`. CARRY is set when the subtraction borrows (`M + C > A`).
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    if get_flag(cpu, DECIMAL) {
        sbc_decimal(cpu, v);
    } else {
        sbc_binary(cpu, v);
    }
}

fn adc_binary<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let sum16 = a as u16 + v as u16 + cpu.carry_bit() as u16;
    let result = sum16 as u8;

    cpu.update_carry(sum16 > 0xFF);
    cpu.update_overflow(((a ^ result) & (v ^ result) & 0x80) != 0);
    cpu.set_a(result);
}

/// Operands are read as packed BCD; CARRY and OVERFLOW come from the binary
/// sum of the decoded digits, before it is re-encoded.
fn adc_decimal<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = bcd_to_bin(cpu.a());
    let b = bcd_to_bin(v);
    let sum = a as u16 + b as u16 + cpu.carry_bit() as u16;
    let r = sum as u8;

    cpu.update_carry(sum > 99);
    cpu.update_overflow(((a ^ r) & (b ^ r) & 0x80) != 0);
    cpu.set_a(bin_to_bcd((sum % 100) as u8));
}

fn sbc_binary<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let c = cpu.carry_bit();
    let result = a.wrapping_sub(v).wrapping_sub(c);

    cpu.update_carry(v as u16 + c as u16 > a as u16);
    cpu.update_overflow(((a ^ result) & (v ^ result) & 0x80) != 0);
    cpu.set_a(result);
}

/// Same borrow rule as the binary path, applied to the decoded digits.
fn sbc_decimal<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = bcd_to_bin(cpu.a());
    let b = bcd_to_bin(v);
    let c = cpu.carry_bit();
    let diff = a as i16 - b as i16 - c as i16;
    let r = diff as u8;

    cpu.update_carry(b as u16 + c as u16 > a as u16);
    cpu.update_overflow(((a ^ r) & (b ^ r) & 0x80) != 0);
    cpu.set_a(bin_to_bcd(diff.rem_euclid(100) as u8));
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// `reg - v` as a signed difference:
/// negative => C=0 N=1 Z=0, zero => C=0 N=0 Z=1, positive => C=1 N=0 Z=0.
#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    let r = reg as i16 - v as i16;
    set_flag(cpu, CARRY, r > 0);
    set_flag(cpu, NEGATIVE, r < 0);
    set_flag(cpu, ZERO, r == 0);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
