//! Instruction handlers for the primary dispatch table.
//!
//! Handlers share one signature so the table can hold plain function
//! pointers. Families that span a block of opcodes (LD r,r', the ALU
//! rows, conditional branches, RST, PUSH/POP) decode the register or
//! condition index from the opcode the fetch stage latched on the CPU.

pub(super) mod arith;
pub(super) mod control;
pub(super) mod incdec;
pub(super) mod ld;
pub(super) mod stack;
pub(super) mod system;
