// ls8/exec.rs
use std::io::Write;

use tracing::{debug, info};

use crate::ls8::{
    alu::{alu, AluOp},
    arch::{operand_count, OPC_HLT},
    decoder::{decode, disasm},
    errors::Ls8Error,
    instruction::Instruction,
    memory::Bus,
    registers::Cpu,
    trace::CpuState,
};

/// One fetch/decode/execute cycle. Returns `Ok(false)` once HLT is fetched.
///
/// The two bytes after the opcode are always fetched; a byte past the end
/// of memory is only an error when the opcode actually consumes it.
pub fn step<B: Bus>(cpu: &mut Cpu, mem: &mut B) -> Result<bool, Ls8Error> {
    let pc = cpu.pc;
    let ir = mem.load8(pc)?;
    let a = mem.peek(pc + 1);
    let b = mem.peek(pc + 2);

    if ir == OPC_HLT {
        return Ok(false);
    }

    let instr = decode(ir, a.unwrap_or(0), b.unwrap_or(0))?;
    for (i, op) in [a, b].iter().enumerate().take(operand_count(ir) as usize) {
        if op.is_none() {
            return Err(Ls8Error::Bus { addr: pc + 1 + i });
        }
    }
    let (a, b) = (a.unwrap_or(0), b.unwrap_or(0));
    debug!(pc, "{}", disasm(ir, a, b));
    execute(cpu, mem, instr)?;
    Ok(true)
}

/// Runs a decoded instruction. Every handler owns its PC update.
fn execute<B: Bus>(cpu: &mut Cpu, mem: &mut B, instr: Instruction) -> Result<(), Ls8Error> {
    let next = cpu.pc + instr.width();
    match instr {
        Instruction::Ldi { reg, imm } => {
            cpu.write(reg, imm)?;
            cpu.pc = next;
        }
        Instruction::Prn { reg } => {
            let v = cpu.read(reg)?;
            writeln!(cpu.stdout, "{v}")?;
            cpu.pc = next;
        }
        Instruction::Pra { reg } => {
            let c = char::from(cpu.read(reg)?);
            write!(cpu.stdout, "{c}")?;
            cpu.pc = next;
        }
        Instruction::Mul { ra, rb } => {
            if let Some(v) = alu(cpu, AluOp::Mul, ra, rb)? {
                cpu.write(ra, v)?;
            }
            cpu.pc = next;
        }
        Instruction::Cmp { ra, rb } => {
            alu(cpu, AluOp::Cmp, ra, rb)?;
            cpu.pc = next;
        }

        // stack grows down: pre-decrement on push, post-increment on pop
        Instruction::Push { reg } => {
            let sp = cpu.sp().wrapping_sub(1);
            cpu.set_sp(sp);
            let v = cpu.read(reg)?;
            mem.store8(sp as usize, v)?;
            cpu.pc = next;
        }
        Instruction::Pop { reg } => {
            let v = mem.load8(cpu.sp() as usize)?;
            cpu.write(reg, v)?;
            cpu.set_sp(cpu.sp().wrapping_add(1));
            cpu.pc = next;
        }

        Instruction::Jmp { reg } => cpu.pc = cpu.read(reg)? as usize,
        // target register is checked whether or not the jump is taken
        Instruction::Jeq { reg } => {
            let target = cpu.read(reg)? as usize;
            cpu.pc = if cpu.equal() { target } else { next };
        }
        Instruction::Jne { reg } => {
            let target = cpu.read(reg)? as usize;
            cpu.pc = if !cpu.equal() { target } else { next };
        }

        // halting is decided by `step` before dispatch
        Instruction::Hlt => {}
    }
    Ok(())
}

/// Steps until HLT, flushing printed output to `out` after every cycle.
/// Returns the number of instructions executed before the halt.
pub fn run<B: Bus, W: Write>(cpu: &mut Cpu, mem: &mut B, out: &mut W) -> Result<usize, Ls8Error> {
    drive(cpu, mem, out, None)
}

/// Like [`run`], writing a tracer line to `trace` before every cycle.
pub fn run_traced<B: Bus, W: Write, T: Write>(
    cpu: &mut Cpu,
    mem: &mut B,
    out: &mut W,
    trace: &mut T,
) -> Result<usize, Ls8Error> {
    drive(cpu, mem, out, Some(trace))
}

fn drive<B: Bus, W: Write>(
    cpu: &mut Cpu,
    mem: &mut B,
    out: &mut W,
    mut trace: Option<&mut dyn Write>,
) -> Result<usize, Ls8Error> {
    let mut steps = 0;
    loop {
        if let Some(t) = trace.as_mut() {
            writeln!(t, "{}", CpuState::capture(cpu, mem))?;
        }
        let running = step(cpu, mem);
        // whatever was printed before a fault still reaches the user
        out.write_all(&cpu.take_stdout())?;
        match running {
            Ok(true) => steps += 1,
            Ok(false) => break,
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        }
    }
    out.flush()?;
    info!(steps, "halted");
    Ok(steps)
}
