//! Tests for the increment and decrement instructions
//! (INC, DEC, INX, INY, DEX, DEY).
//!
//! Covers wraparound at the byte boundaries, Z/N updates, and the fixed
//! cost of the memory read-modify-write forms.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a CPU with the program origin at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

// ========== INC / DEC Memory Tests ==========

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();

    // INC $10
    cpu.memory_mut().write(0x8000, 0xE6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x41);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();

    // INC $10 with value 0xFF
    cpu.memory_mut().write(0x8000, 0xE6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xFF);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inc_absolute_x_fixed_cost() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);

    // INC $20FF,X -> 0x2100; RMW pays 7 regardless of crossing
    cpu.memory_mut().write(0x8000, 0xFE);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x7F);

    cpu.step();

    assert_eq!(cpu.memory().read(0x2100), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_dec_zero_page() {
    let mut cpu = setup_cpu();

    // DEC $10
    cpu.memory_mut().write(0x8000, 0xC6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu();

    // DEC $10 with value 0x00
    cpu.memory_mut().write(0x8000, 0xC6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x00);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.flag_n());
}

// ========== Register Increment / Decrement Tests ==========

#[test]
fn test_inx_basic() {
    let mut cpu = setup_cpu();

    // INX
    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0x41);

    cpu.step();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_inx_wraps_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE8);
    cpu.set_x(0xFF);

    cpu.step();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_iny_sets_negative() {
    let mut cpu = setup_cpu();

    // INY
    cpu.memory_mut().write(0x8000, 0xC8);
    cpu.set_y(0x7F);

    cpu.step();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_wraps_to_ff() {
    let mut cpu = setup_cpu();

    // DEX
    cpu.memory_mut().write(0x8000, 0xCA);
    cpu.set_x(0x00);

    cpu.step();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();

    // DEY
    cpu.memory_mut().write(0x8000, 0x88);
    cpu.set_y(0x01);

    cpu.step();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}
