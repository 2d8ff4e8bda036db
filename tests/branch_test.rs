//! Tests for the conditional branch instructions
//! (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS).
//!
//! Covers taken and not-taken paths, forward and backward offsets, and the
//! cycle timing: 2 not taken, 3 taken same-page, 4 taken cross-page.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a CPU with the program origin at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

// ========== Not-Taken Tests ==========

#[test]
fn test_beq_not_taken() {
    let mut cpu = setup_cpu();

    // BEQ +$10 with Z clear
    cpu.memory_mut().write(0x8000, 0xF0);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8002); // falls through
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_bcs_not_taken() {
    let mut cpu = setup_cpu();

    // BCS +$05 with C clear
    cpu.memory_mut().write(0x8000, 0xB0);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

// ========== Taken, Same Page ==========

#[test]
fn test_beq_taken_forward() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(true);

    // BEQ +$10: target = 0x8002 + 0x10 = 0x8012
    cpu.memory_mut().write(0x8000, 0xF0);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8012);
    assert_eq!(cpu.cycles(), 3); // 2 + 1 taken
}

#[test]
fn test_bne_taken_backward() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x8010);

    // BNE -$10 (0xF0): target = 0x8012 - 0x10 = 0x8002
    cpu.memory_mut().write(0x8010, 0xD0);
    cpu.memory_mut().write(0x8011, 0xF0);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bcc_taken() {
    let mut cpu = setup_cpu();

    // BCC +$02 with C clear
    cpu.memory_mut().write(0x8000, 0x90);
    cpu.memory_mut().write(0x8001, 0x02);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bmi_taken_when_negative() {
    let mut cpu = setup_cpu();
    cpu.set_flag_n(true);

    // BMI +$04
    cpu.memory_mut().write(0x8000, 0x30);
    cpu.memory_mut().write(0x8001, 0x04);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8006);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bpl_taken_when_positive() {
    let mut cpu = setup_cpu();

    // BPL +$04 with N clear
    cpu.memory_mut().write(0x8000, 0x10);
    cpu.memory_mut().write(0x8001, 0x04);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8006);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bvs_taken_when_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_flag_v(true);

    // BVS +$02
    cpu.memory_mut().write(0x8000, 0x70);
    cpu.memory_mut().write(0x8001, 0x02);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bvc_taken_when_no_overflow() {
    let mut cpu = setup_cpu();

    // BVC +$02 with V clear
    cpu.memory_mut().write(0x8000, 0x50);
    cpu.memory_mut().write(0x8001, 0x02);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.cycles(), 3);
}

// ========== Taken, Cross Page ==========

#[test]
fn test_branch_taken_cross_page_forward() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x80F0);
    cpu.set_flag_z(true);

    // BEQ +$20: base 0x80F2, target 0x8112 on the next page
    cpu.memory_mut().write(0x80F0, 0xF0);
    cpu.memory_mut().write(0x80F1, 0x20);

    cpu.step();

    assert_eq!(cpu.pc(), 0x8112);
    assert_eq!(cpu.cycles(), 4); // 2 + 1 taken + 1 page change
}

#[test]
fn test_branch_taken_cross_page_backward() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x8000);
    cpu.set_flag_c(true);

    // BCS -$10: base 0x8002, target 0x7FF2 on the previous page
    cpu.memory_mut().write(0x8000, 0xB0);
    cpu.memory_mut().write(0x8001, 0xF0);

    cpu.step();

    assert_eq!(cpu.pc(), 0x7FF2);
    assert_eq!(cpu.cycles(), 4);
}

// ========== Flag Preservation ==========

#[test]
fn test_branch_preserves_flags() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1100_0011);

    // BNE not taken (Z is set in that mask)
    cpu.memory_mut().write(0x8000, 0xD0);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.step();

    assert_eq!(cpu.status(), 0b1100_0011);
}
