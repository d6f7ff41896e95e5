use super::*;
use crate::ls8::arch::*;
use crate::ls8::errors::Ls8Error;
use crate::ls8::exec::run;
use crate::ls8::memory::Bus;
use crate::ls8::program::load_bytes;
use crate::ls8::program::loader::parse_program;

fn boot(code: &[u8]) -> (Cpu, Ram) {
    let mut mem = Ram::new();
    load_bytes(&mut mem, 0, code).expect("load");
    (Cpu::default(), mem)
}

fn run_bytes(code: &[u8]) -> (Cpu, Ram, Result<usize, Ls8Error>, String) {
    let (mut cpu, mut mem) = boot(code);
    let mut out = Vec::new();
    let res = run(&mut cpu, &mut mem, &mut out);
    (cpu, mem, res, String::from_utf8(out).expect("utf8"))
}

#[test]
fn mult_program_prints_72() {
    let src = "\
# mult.ls8
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";
    let code = parse_program(src).expect("parse");
    let (cpu, _, res, out) = run_bytes(&code);
    assert_eq!(res.expect("run"), 4);
    assert_eq!(out, "72\n");
    assert_eq!(cpu.reg[1], 9);
}

#[test]
fn ldi_prn_echoes_any_byte_in_any_register() {
    for reg in 0..8u8 {
        for v in [0u8, 1, 42, 127, 128, 255] {
            let (_, _, res, out) = run_bytes(&[OPC_LDI, reg, v, OPC_PRN, reg, OPC_HLT]);
            res.expect("run");
            assert_eq!(out, format!("{v}\n"), "R{reg} = {v}");
        }
    }
}

#[test]
fn push_pop_round_trip() {
    let (cpu, mem, res, _) = run_bytes(&[OPC_LDI, 0, 42, OPC_PUSH, 0, OPC_POP, 1, OPC_HLT]);
    res.expect("run");
    assert_eq!(cpu.reg[1], 42);
    assert_eq!(cpu.sp(), 0xF4);
    assert_eq!(mem.load8(0xF3).unwrap(), 42);
}

#[test]
fn stack_is_lifo() {
    let code = [
        OPC_LDI, 0, 1, OPC_LDI, 1, 2, OPC_LDI, 2, 3,
        OPC_PUSH, 0, OPC_PUSH, 1, OPC_PUSH, 2,
        OPC_POP, 3, OPC_POP, 4, OPC_POP, 5,
        OPC_PRN, 3, OPC_PRN, 4, OPC_PRN, 5,
        OPC_HLT,
    ];
    let (cpu, _, res, out) = run_bytes(&code);
    res.expect("run");
    assert_eq!(out, "3\n2\n1\n");
    assert_eq!(cpu.sp(), 0xF4);
}

#[test]
fn jeq_acts_on_flag_from_last_cmp() {
    let code = [
        OPC_LDI, 0, 1,   // 0
        OPC_LDI, 1, 1,   // 3
        OPC_CMP, 0, 1,   // 6
        OPC_LDI, 1, 2,   // 9  registers differ now, flag stays
        OPC_LDI, 2, 20,  // 12
        OPC_JEQ, 2,      // 15
        OPC_PRN, 0,      // 17
        OPC_HLT,         // 19
        OPC_LDI, 3, 99,  // 20
        OPC_PRN, 3,      // 23
        OPC_HLT,         // 25
    ];
    let (_, _, res, out) = run_bytes(&code);
    res.expect("run");
    assert_eq!(out, "99\n");
}

#[test]
fn unequal_cmp_does_not_clear_flag() {
    let code = [
        OPC_LDI, 0, 1,   // 0
        OPC_LDI, 1, 1,   // 3
        OPC_CMP, 0, 1,   // 6  equal
        OPC_LDI, 1, 2,   // 9
        OPC_CMP, 0, 1,   // 12 unequal
        OPC_LDI, 2, 22,  // 15
        OPC_JEQ, 2,      // 18
        OPC_HLT,         // 20
        OPC_HLT,         // 21
        OPC_PRN, 1,      // 22
        OPC_HLT,
    ];
    let (cpu, _, res, out) = run_bytes(&code);
    res.expect("run");
    assert!(cpu.equal());
    assert_eq!(out, "2\n");
}

#[test]
fn jne_loop_until_equal() {
    let code = [
        OPC_LDI, 0, 1,   // 0
        OPC_LDI, 1, 2,   // 3
        OPC_LDI, 3, 16,  // 6
        OPC_LDI, 2, 12,  // 9
        OPC_MUL, 0, 1,   // 12 loop:
        OPC_PRN, 0,      // 15
        OPC_CMP, 0, 3,   // 17
        OPC_JNE, 2,      // 20
        OPC_HLT,         // 22
    ];
    let (_, _, res, out) = run_bytes(&code);
    assert_eq!(res.expect("run"), 4 + 4 * 4);
    assert_eq!(out, "2\n4\n8\n16\n");
}

#[test]
fn pra_prints_text() {
    let code = [
        OPC_LDI, 0, b'h', OPC_PRA, 0,
        OPC_LDI, 0, b'i', OPC_PRA, 0,
        OPC_LDI, 0, b'\n', OPC_PRA, 0,
        OPC_HLT,
    ];
    let (_, _, res, out) = run_bytes(&code);
    res.expect("run");
    assert_eq!(out, "hi\n");
}

#[test]
fn unknown_opcode_stops_run_keeping_state() {
    let (cpu, _, res, out) = run_bytes(&[OPC_LDI, 0, 5, OPC_PRN, 0, 0b1111_1111, OPC_HLT]);
    let err = res.unwrap_err();
    assert_eq!(err.to_string(), "Instruction unknown 255");
    assert_eq!(out, "5\n");
    assert_eq!(cpu.reg[0], 5);
    assert_eq!(cpu.pc, 5);
}

#[test]
fn handler_failure_is_not_reported_as_unknown() {
    let (_, _, res, _) = run_bytes(&[OPC_LDI, 8, 1, OPC_HLT]);
    assert!(matches!(res, Err(Ls8Error::InvalidRegister(8))));
}

#[test]
fn running_off_the_end_of_memory_is_a_bus_error() {
    // JMP to 0xFF where the only byte left is an LDI with no room for operands
    let mut code = vec![OPC_LDI, 0, 0xFF, OPC_JMP, 0];
    code.resize(256, 0);
    code[0xFF] = OPC_LDI;
    let (_, _, res, _) = run_bytes(&code);
    assert!(matches!(res, Err(Ls8Error::Bus { addr: 0x100 })));
}

fn run_program_text(src: &str) -> String {
    let code = parse_program(src).expect("parse");
    let (_, _, res, out) = run_bytes(&code);
    res.expect("run");
    out
}

#[test]
fn bundled_programs() {
    assert_eq!(run_program_text(include_str!("../../programs/mult.ls8")), "72\n");
    assert_eq!(run_program_text(include_str!("../../programs/stack.ls8")), "2\n1\n");
    assert_eq!(run_program_text(include_str!("../../programs/sctest.ls8")), "1\n4\n");
}
