//! Primary opcode dispatch table and cycle costs.
//!
//! Entries carry the mnemonic, the total instruction length in bytes
//! (opcode plus operands) and the handler. Invalid opcodes have no
//! handler and length 0; decoding one locks the CPU.
//!
//! `CYCLES` holds per-opcode costs at half scale; `Cpu::step` doubles
//! them when charging the frame budget. CB-prefixed instructions are
//! charged from the 0xCB entry, and a handful of conditional branches
//! carry a cost of 0 here. Changing either shifts the frame pacing, so
//! the values stay as they are.

use super::exec::{arith, control, incdec, ld, stack, system};
use super::{Bus, Cpu};

pub type Handler = fn(&mut Cpu, &mut dyn Bus);

/// One primary-table entry.
pub struct Instr {
    pub mnemonic: &'static str,
    /// Total length in bytes, operands included. 0 marks an invalid
    /// opcode and is treated as 1 by the fetch stage.
    pub length: u8,
    pub handler: Option<Handler>,
}

const fn op(mnemonic: &'static str, length: u8, handler: Handler) -> Instr {
    Instr {
        mnemonic,
        length,
        handler: Some(handler),
    }
}

const fn unknown() -> Instr {
    Instr {
        mnemonic: "UNKNOWN",
        length: 0,
        handler: None,
    }
}

#[rustfmt::skip]
pub static OPCODES: [Instr; 256] = [
    op("NOP", 1, system::nop),                 // 0x00
    op("LD BC,d16", 3, ld::ld_rr_d16),         // 0x01
    op("LD (BC),A", 1, ld::ld_rrp_a),          // 0x02
    op("INC BC", 1, incdec::inc_rr),           // 0x03
    op("INC B", 1, incdec::inc_r),             // 0x04
    op("DEC B", 1, incdec::dec_r),             // 0x05
    op("LD B,d8", 2, ld::ld_r_d8),             // 0x06
    op("RLCA", 1, arith::rlca),                // 0x07
    op("LD (a16),SP", 3, ld::ld_a16_sp),       // 0x08
    op("ADD HL,BC", 1, arith::add_hl_rr),      // 0x09
    op("LD A,(BC)", 1, ld::ld_a_rrp),          // 0x0A
    op("DEC BC", 1, incdec::dec_rr),           // 0x0B
    op("INC C", 1, incdec::inc_r),             // 0x0C
    op("DEC C", 1, incdec::dec_r),             // 0x0D
    op("LD C,d8", 2, ld::ld_r_d8),             // 0x0E
    op("RRCA", 1, arith::rrca),                // 0x0F
    op("STOP", 2, system::stop),               // 0x10
    op("LD DE,d16", 3, ld::ld_rr_d16),         // 0x11
    op("LD (DE),A", 1, ld::ld_rrp_a),          // 0x12
    op("INC DE", 1, incdec::inc_rr),           // 0x13
    op("INC D", 1, incdec::inc_r),             // 0x14
    op("DEC D", 1, incdec::dec_r),             // 0x15
    op("LD D,d8", 2, ld::ld_r_d8),             // 0x16
    op("RLA", 1, arith::rla),                  // 0x17
    op("JR r8", 2, control::jr_r8),            // 0x18
    op("ADD HL,DE", 1, arith::add_hl_rr),      // 0x19
    op("LD A,(DE)", 1, ld::ld_a_rrp),          // 0x1A
    op("DEC DE", 1, incdec::dec_rr),           // 0x1B
    op("INC E", 1, incdec::inc_r),             // 0x1C
    op("DEC E", 1, incdec::dec_r),             // 0x1D
    op("LD E,d8", 2, ld::ld_r_d8),             // 0x1E
    op("RRA", 1, arith::rra),                  // 0x1F
    op("JR NZ,r8", 2, control::jr_cc_r8),      // 0x20
    op("LD HL,d16", 3, ld::ld_rr_d16),         // 0x21
    op("LD (HL+),A", 1, ld::ld_rrp_a),         // 0x22
    op("INC HL", 1, incdec::inc_rr),           // 0x23
    op("INC H", 1, incdec::inc_r),             // 0x24
    op("DEC H", 1, incdec::dec_r),             // 0x25
    op("LD H,d8", 2, ld::ld_r_d8),             // 0x26
    op("DAA", 1, system::daa),                 // 0x27
    op("JR Z,r8", 2, control::jr_cc_r8),       // 0x28
    op("ADD HL,HL", 1, arith::add_hl_rr),      // 0x29
    op("LD A,(HL+)", 1, ld::ld_a_rrp),         // 0x2A
    op("DEC HL", 1, incdec::dec_rr),           // 0x2B
    op("INC L", 1, incdec::inc_r),             // 0x2C
    op("DEC L", 1, incdec::dec_r),             // 0x2D
    op("LD L,d8", 2, ld::ld_r_d8),             // 0x2E
    op("CPL", 1, system::cpl),                 // 0x2F
    op("JR NC,r8", 2, control::jr_cc_r8),      // 0x30
    op("LD SP,d16", 3, ld::ld_rr_d16),         // 0x31
    op("LD (HL-),A", 1, ld::ld_rrp_a),         // 0x32
    op("INC SP", 1, incdec::inc_rr),           // 0x33
    op("INC (HL)", 1, incdec::inc_r),          // 0x34
    op("DEC (HL)", 1, incdec::dec_r),          // 0x35
    op("LD (HL),d8", 2, ld::ld_r_d8),          // 0x36
    op("SCF", 1, system::scf),                 // 0x37
    op("JR C,r8", 2, control::jr_cc_r8),       // 0x38
    op("ADD HL,SP", 1, arith::add_hl_rr),      // 0x39
    op("LD A,(HL-)", 1, ld::ld_a_rrp),         // 0x3A
    op("DEC SP", 1, incdec::dec_rr),           // 0x3B
    op("INC A", 1, incdec::inc_r),             // 0x3C
    op("DEC A", 1, incdec::dec_r),             // 0x3D
    op("LD A,d8", 2, ld::ld_r_d8),             // 0x3E
    op("CCF", 1, system::ccf),                 // 0x3F
    op("LD B,B", 1, ld::ld_r_r),               // 0x40
    op("LD B,C", 1, ld::ld_r_r),               // 0x41
    op("LD B,D", 1, ld::ld_r_r),               // 0x42
    op("LD B,E", 1, ld::ld_r_r),               // 0x43
    op("LD B,H", 1, ld::ld_r_r),               // 0x44
    op("LD B,L", 1, ld::ld_r_r),               // 0x45
    op("LD B,(HL)", 1, ld::ld_r_r),            // 0x46
    op("LD B,A", 1, ld::ld_r_r),               // 0x47
    op("LD C,B", 1, ld::ld_r_r),               // 0x48
    op("LD C,C", 1, ld::ld_r_r),               // 0x49
    op("LD C,D", 1, ld::ld_r_r),               // 0x4A
    op("LD C,E", 1, ld::ld_r_r),               // 0x4B
    op("LD C,H", 1, ld::ld_r_r),               // 0x4C
    op("LD C,L", 1, ld::ld_r_r),               // 0x4D
    op("LD C,(HL)", 1, ld::ld_r_r),            // 0x4E
    op("LD C,A", 1, ld::ld_r_r),               // 0x4F
    op("LD D,B", 1, ld::ld_r_r),               // 0x50
    op("LD D,C", 1, ld::ld_r_r),               // 0x51
    op("LD D,D", 1, ld::ld_r_r),               // 0x52
    op("LD D,E", 1, ld::ld_r_r),               // 0x53
    op("LD D,H", 1, ld::ld_r_r),               // 0x54
    op("LD D,L", 1, ld::ld_r_r),               // 0x55
    op("LD D,(HL)", 1, ld::ld_r_r),            // 0x56
    op("LD D,A", 1, ld::ld_r_r),               // 0x57
    op("LD E,B", 1, ld::ld_r_r),               // 0x58
    op("LD E,C", 1, ld::ld_r_r),               // 0x59
    op("LD E,D", 1, ld::ld_r_r),               // 0x5A
    op("LD E,E", 1, ld::ld_r_r),               // 0x5B
    op("LD E,H", 1, ld::ld_r_r),               // 0x5C
    op("LD E,L", 1, ld::ld_r_r),               // 0x5D
    op("LD E,(HL)", 1, ld::ld_r_r),            // 0x5E
    op("LD E,A", 1, ld::ld_r_r),               // 0x5F
    op("LD H,B", 1, ld::ld_r_r),               // 0x60
    op("LD H,C", 1, ld::ld_r_r),               // 0x61
    op("LD H,D", 1, ld::ld_r_r),               // 0x62
    op("LD H,E", 1, ld::ld_r_r),               // 0x63
    op("LD H,H", 1, ld::ld_r_r),               // 0x64
    op("LD H,L", 1, ld::ld_r_r),               // 0x65
    op("LD H,(HL)", 1, ld::ld_r_r),            // 0x66
    op("LD H,A", 1, ld::ld_r_r),               // 0x67
    op("LD L,B", 1, ld::ld_r_r),               // 0x68
    op("LD L,C", 1, ld::ld_r_r),               // 0x69
    op("LD L,D", 1, ld::ld_r_r),               // 0x6A
    op("LD L,E", 1, ld::ld_r_r),               // 0x6B
    op("LD L,H", 1, ld::ld_r_r),               // 0x6C
    op("LD L,L", 1, ld::ld_r_r),               // 0x6D
    op("LD L,(HL)", 1, ld::ld_r_r),            // 0x6E
    op("LD L,A", 1, ld::ld_r_r),               // 0x6F
    op("LD (HL),B", 1, ld::ld_r_r),            // 0x70
    op("LD (HL),C", 1, ld::ld_r_r),            // 0x71
    op("LD (HL),D", 1, ld::ld_r_r),            // 0x72
    op("LD (HL),E", 1, ld::ld_r_r),            // 0x73
    op("LD (HL),H", 1, ld::ld_r_r),            // 0x74
    op("LD (HL),L", 1, ld::ld_r_r),            // 0x75
    op("HALT", 1, system::halt),               // 0x76
    op("LD (HL),A", 1, ld::ld_r_r),            // 0x77
    op("LD A,B", 1, ld::ld_r_r),               // 0x78
    op("LD A,C", 1, ld::ld_r_r),               // 0x79
    op("LD A,D", 1, ld::ld_r_r),               // 0x7A
    op("LD A,E", 1, ld::ld_r_r),               // 0x7B
    op("LD A,H", 1, ld::ld_r_r),               // 0x7C
    op("LD A,L", 1, ld::ld_r_r),               // 0x7D
    op("LD A,(HL)", 1, ld::ld_r_r),            // 0x7E
    op("LD A,A", 1, ld::ld_r_r),               // 0x7F
    op("ADD A,B", 1, arith::add_a_r),          // 0x80
    op("ADD A,C", 1, arith::add_a_r),          // 0x81
    op("ADD A,D", 1, arith::add_a_r),          // 0x82
    op("ADD A,E", 1, arith::add_a_r),          // 0x83
    op("ADD A,H", 1, arith::add_a_r),          // 0x84
    op("ADD A,L", 1, arith::add_a_r),          // 0x85
    op("ADD A,(HL)", 1, arith::add_a_r),       // 0x86
    op("ADD A,A", 1, arith::add_a_r),          // 0x87
    op("ADC A,B", 1, arith::adc_a_r),          // 0x88
    op("ADC A,C", 1, arith::adc_a_r),          // 0x89
    op("ADC A,D", 1, arith::adc_a_r),          // 0x8A
    op("ADC A,E", 1, arith::adc_a_r),          // 0x8B
    op("ADC A,H", 1, arith::adc_a_r),          // 0x8C
    op("ADC A,L", 1, arith::adc_a_r),          // 0x8D
    op("ADC A,(HL)", 1, arith::adc_a_r),       // 0x8E
    op("ADC A,A", 1, arith::adc_a_r),          // 0x8F
    op("SUB B", 1, arith::sub_r),              // 0x90
    op("SUB C", 1, arith::sub_r),              // 0x91
    op("SUB D", 1, arith::sub_r),              // 0x92
    op("SUB E", 1, arith::sub_r),              // 0x93
    op("SUB H", 1, arith::sub_r),              // 0x94
    op("SUB L", 1, arith::sub_r),              // 0x95
    op("SUB (HL)", 1, arith::sub_r),           // 0x96
    op("SUB A", 1, arith::sub_r),              // 0x97
    op("SBC A,B", 1, arith::sbc_a_r),          // 0x98
    op("SBC A,C", 1, arith::sbc_a_r),          // 0x99
    op("SBC A,D", 1, arith::sbc_a_r),          // 0x9A
    op("SBC A,E", 1, arith::sbc_a_r),          // 0x9B
    op("SBC A,H", 1, arith::sbc_a_r),          // 0x9C
    op("SBC A,L", 1, arith::sbc_a_r),          // 0x9D
    op("SBC A,(HL)", 1, arith::sbc_a_r),       // 0x9E
    op("SBC A,A", 1, arith::sbc_a_r),          // 0x9F
    op("AND B", 1, arith::and_r),              // 0xA0
    op("AND C", 1, arith::and_r),              // 0xA1
    op("AND D", 1, arith::and_r),              // 0xA2
    op("AND E", 1, arith::and_r),              // 0xA3
    op("AND H", 1, arith::and_r),              // 0xA4
    op("AND L", 1, arith::and_r),              // 0xA5
    op("AND (HL)", 1, arith::and_r),           // 0xA6
    op("AND A", 1, arith::and_r),              // 0xA7
    op("XOR B", 1, arith::xor_r),              // 0xA8
    op("XOR C", 1, arith::xor_r),              // 0xA9
    op("XOR D", 1, arith::xor_r),              // 0xAA
    op("XOR E", 1, arith::xor_r),              // 0xAB
    op("XOR H", 1, arith::xor_r),              // 0xAC
    op("XOR L", 1, arith::xor_r),              // 0xAD
    op("XOR (HL)", 1, arith::xor_r),           // 0xAE
    op("XOR A", 1, arith::xor_r),              // 0xAF
    op("OR B", 1, arith::or_r),                // 0xB0
    op("OR C", 1, arith::or_r),                // 0xB1
    op("OR D", 1, arith::or_r),                // 0xB2
    op("OR E", 1, arith::or_r),                // 0xB3
    op("OR H", 1, arith::or_r),                // 0xB4
    op("OR L", 1, arith::or_r),                // 0xB5
    op("OR (HL)", 1, arith::or_r),             // 0xB6
    op("OR A", 1, arith::or_r),                // 0xB7
    op("CP B", 1, arith::cp_r),                // 0xB8
    op("CP C", 1, arith::cp_r),                // 0xB9
    op("CP D", 1, arith::cp_r),                // 0xBA
    op("CP E", 1, arith::cp_r),                // 0xBB
    op("CP H", 1, arith::cp_r),                // 0xBC
    op("CP L", 1, arith::cp_r),                // 0xBD
    op("CP (HL)", 1, arith::cp_r),             // 0xBE
    op("CP A", 1, arith::cp_r),                // 0xBF
    op("RET NZ", 1, control::ret_cc),          // 0xC0
    op("POP BC", 1, stack::pop_rr),            // 0xC1
    op("JP NZ,a16", 3, control::jp_cc_a16),    // 0xC2
    op("JP a16", 3, control::jp_a16),          // 0xC3
    op("CALL NZ,a16", 3, control::call_cc_a16),// 0xC4
    op("PUSH BC", 1, stack::push_rr),          // 0xC5
    op("ADD A,d8", 2, arith::add_a_d8),        // 0xC6
    op("RST 00H", 1, control::rst),            // 0xC7
    op("RET Z", 1, control::ret_cc),           // 0xC8
    op("RET", 1, control::ret),                // 0xC9
    op("JP Z,a16", 3, control::jp_cc_a16),     // 0xCA
    op("PREFIX CB", 2, system::prefix_cb),     // 0xCB
    op("CALL Z,a16", 3, control::call_cc_a16), // 0xCC
    op("CALL a16", 3, control::call_a16),      // 0xCD
    op("ADC A,d8", 2, arith::adc_a_d8),        // 0xCE
    op("RST 08H", 1, control::rst),            // 0xCF
    op("RET NC", 1, control::ret_cc),          // 0xD0
    op("POP DE", 1, stack::pop_rr),            // 0xD1
    op("JP NC,a16", 3, control::jp_cc_a16),    // 0xD2
    unknown(),                                 // 0xD3
    op("CALL NC,a16", 3, control::call_cc_a16),// 0xD4
    op("PUSH DE", 1, stack::push_rr),          // 0xD5
    op("SUB d8", 2, arith::sub_d8),            // 0xD6
    op("RST 10H", 1, control::rst),            // 0xD7
    op("RET C", 1, control::ret_cc),           // 0xD8
    op("RETI", 1, control::reti),              // 0xD9
    op("JP C,a16", 3, control::jp_cc_a16),     // 0xDA
    unknown(),                                 // 0xDB
    op("CALL C,a16", 3, control::call_cc_a16), // 0xDC
    unknown(),                                 // 0xDD
    op("SBC A,d8", 2, arith::sbc_a_d8),        // 0xDE
    op("RST 18H", 1, control::rst),            // 0xDF
    op("LDH (a8),A", 2, ld::ldh_a8_a),         // 0xE0
    op("POP HL", 1, stack::pop_rr),            // 0xE1
    op("LD (C),A", 1, ld::ld_cp_a),            // 0xE2
    unknown(),                                 // 0xE3
    unknown(),                                 // 0xE4
    op("PUSH HL", 1, stack::push_rr),          // 0xE5
    op("AND d8", 2, arith::and_d8),            // 0xE6
    op("RST 20H", 1, control::rst),            // 0xE7
    op("ADD SP,r8", 2, arith::add_sp_r8),      // 0xE8
    op("JP (HL)", 1, control::jp_hl),          // 0xE9
    op("LD (a16),A", 3, ld::ld_a16_a),         // 0xEA
    unknown(),                                 // 0xEB
    unknown(),                                 // 0xEC
    unknown(),                                 // 0xED
    op("XOR d8", 2, arith::xor_d8),            // 0xEE
    op("RST 28H", 1, control::rst),            // 0xEF
    op("LDH A,(a8)", 2, ld::ldh_a_a8),         // 0xF0
    op("POP AF", 1, stack::pop_rr),            // 0xF1
    op("LD A,(C)", 1, ld::ld_a_cp),            // 0xF2
    op("DI", 1, system::di),                   // 0xF3
    unknown(),                                 // 0xF4
    op("PUSH AF", 1, stack::push_rr),          // 0xF5
    op("OR d8", 2, arith::or_d8),              // 0xF6
    op("RST 30H", 1, control::rst),            // 0xF7
    op("LD HL,SP+r8", 2, ld::ld_hl_sp_r8),     // 0xF8
    op("LD SP,HL", 1, ld::ld_sp_hl),           // 0xF9
    op("LD A,(a16)", 3, ld::ld_a_a16),         // 0xFA
    op("EI", 1, system::ei),                   // 0xFB
    unknown(),                                 // 0xFC
    unknown(),                                 // 0xFD
    op("CP d8", 2, arith::cp_d8),              // 0xFE
    op("RST 38H", 1, control::rst),            // 0xFF
];

/// Per-opcode cycle cost at half scale.
#[rustfmt::skip]
pub static CYCLES: [u8; 256] = [
    4, 6, 4, 4, 2, 2, 4, 4, 10, 4, 4, 4, 2, 2, 4, 4, // 0x0_
    2, 6, 4, 4, 2, 2, 4, 4,  4, 4, 4, 4, 2, 2, 4, 4, // 0x1_
    0, 6, 4, 4, 2, 2, 4, 2,  0, 4, 4, 4, 2, 2, 4, 2, // 0x2_
    4, 6, 4, 4, 6, 6, 6, 2,  0, 4, 4, 4, 2, 2, 4, 2, // 0x3_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0x4_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0x5_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0x6_
    4, 4, 4, 4, 4, 4, 2, 4,  2, 2, 2, 2, 2, 2, 4, 2, // 0x7_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0x8_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0x9_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0xA_
    2, 2, 2, 2, 2, 2, 4, 2,  2, 2, 2, 2, 2, 2, 4, 2, // 0xB_
    0, 6, 0, 6, 0, 8, 4, 8,  0, 2, 0, 0, 0, 6, 4, 8, // 0xC_
    0, 6, 0, 0, 0, 8, 4, 8,  0, 8, 0, 0, 0, 0, 4, 8, // 0xD_
    6, 6, 4, 0, 0, 8, 4, 8,  8, 2, 8, 0, 0, 0, 4, 8, // 0xE_
    6, 6, 4, 2, 0, 8, 4, 8,  6, 4, 8, 2, 0, 0, 4, 8, // 0xF_
];
