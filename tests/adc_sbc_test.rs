//! Tests for the ADC (Add with Carry) and SBC (Subtract with Carry)
//! instructions.
//!
//! Tests cover:
//! - Carry in/out behavior
//! - Signed overflow detection in both directions
//! - Zero and negative flag updates
//! - SBC as addition of the one's complement (carry as inverted borrow)
//! - Page-crossing cycle penalties on indexed modes

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a CPU with the program origin at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    // ADC #$07
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x07);

    cpu.set_a(0x42);

    cpu.step();

    assert_eq!(cpu.a(), 0x49);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();

    // ADC #$05
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x16); // 0x10 + 0x05 + 1
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu();

    // ADC #$FF
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x00); // 0x01 + 0xFF = 0x100
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v()); // 1 + (-1) = 0, no signed overflow
}

#[test]
fn test_adc_overflow_positive_to_negative() {
    let mut cpu = setup_cpu();

    // 0x50 (+80) + 0x50 (+80) = 0xA0 (-96 signed): overflow
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x50);

    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative_to_positive() {
    let mut cpu = setup_cpu();

    // 0x90 (-112) + 0x90 (-112) = 0x120 -> 0x20 (+32): overflow and carry
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x90);

    cpu.set_a(0x90);

    cpu.step();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();

    // 0x50 (+80) + 0xD0 (-48) = 0x120 -> 0x20: no signed overflow
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xD0);

    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0x20);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_absolute_x_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);

    // ADC $20FF,X -> 0x2100
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x02);

    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cpu.cycles(), 5); // 4 + 1
}

// ========== SBC Tests ==========

#[test]
fn test_sbc_basic_no_borrow() {
    let mut cpu = setup_cpu();

    // SBC #$03 with carry set (no borrow pending)
    cpu.memory_mut().write(0x8000, 0xE9);
    cpu.memory_mut().write(0x8001, 0x03);

    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x0D);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_sbc_with_borrow_pending() {
    let mut cpu = setup_cpu();

    // SBC #$03 with carry clear: subtract one extra
    cpu.memory_mut().write(0x8000, 0xE9);
    cpu.memory_mut().write(0x8001, 0x03);

    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x0C); // 0x10 - 0x03 - 1
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_clears_carry() {
    let mut cpu = setup_cpu();

    // 0x05 - 0x10 wraps; carry clears to signal the borrow
    cpu.memory_mut().write(0x8000, 0xE9);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.set_a(0x05);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0xF5);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_result_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xE9);
    cpu.memory_mut().write(0x8001, 0x42);

    cpu.set_a(0x42);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();

    // 0x80 (-128) - 0x01 (+1) = 0x7F (+127): signed overflow
    cpu.memory_mut().write(0x8000, 0xE9);
    cpu.memory_mut().write(0x8001, 0x01);

    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_zero_page() {
    let mut cpu = setup_cpu();

    // SBC $20
    cpu.memory_mut().write(0x8000, 0xE5);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x01);

    cpu.set_a(0x03);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x02);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sbc_indirect_y_page_cross_penalty() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x02);

    // SBC ($40),Y -> base 0x30FF + 2 = 0x3101, crosses
    cpu.memory_mut().write(0x8000, 0xF1);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x30);
    cpu.memory_mut().write(0x3101, 0x01);

    cpu.set_a(0x05);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x04);
    assert_eq!(cpu.cycles(), 6); // 5 + 1
}
