// 256-entry opcode dispatch table for the 6502 (2A03) instruction set.
//
// Only the documented opcode set is named; every other slot in the table
// decodes as a one-byte NOP stub (see `execute.rs`'s catch-all dispatch arm),
// per the "unofficial opcodes are optional" scope decision.

use crate::cpu::addressing::AddressingMode;

/// Static metadata for one opcode: its mnemonic, addressing mode, instruction
/// length in bytes, base cycle count, and whether a crossed page adds a cycle.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    pub page_cycle: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
    }
}

const NOP_STUB: OpcodeInfo = op("NOP", AddressingMode::Implied, 1, 2, false);

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACC, Immediate as IMM,
    Implied as IMP, Indirect as IND, IndexedIndirect as IZX, IndirectIndexed as IZY,
    Relative as REL, ZeroPage as ZPG, ZeroPageX as ZPX, ZeroPageY as ZPY,
};

pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00
    op("BRK", IMP, 1, 7, false),
    op("ORA", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ORA", ZPG, 2, 3, false),
    op("ASL", ZPG, 2, 5, false),
    NOP_STUB,
    op("PHP", IMP, 1, 3, false),
    op("ORA", IMM, 2, 2, false),
    op("ASL", ACC, 1, 2, false),
    NOP_STUB,
    NOP_STUB,
    op("ORA", ABS, 3, 4, false),
    op("ASL", ABS, 3, 6, false),
    NOP_STUB,
    // 0x10
    op("BPL", REL, 2, 2, false),
    op("ORA", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ORA", ZPX, 2, 4, false),
    op("ASL", ZPX, 2, 6, false),
    NOP_STUB,
    op("CLC", IMP, 1, 2, false),
    op("ORA", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ORA", ABX, 3, 4, true),
    op("ASL", ABX, 3, 7, false),
    NOP_STUB,
    // 0x20
    op("JSR", ABS, 3, 6, false),
    op("AND", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    op("BIT", ZPG, 2, 3, false),
    op("AND", ZPG, 2, 3, false),
    op("ROL", ZPG, 2, 5, false),
    NOP_STUB,
    op("PLP", IMP, 1, 4, false),
    op("AND", IMM, 2, 2, false),
    op("ROL", ACC, 1, 2, false),
    NOP_STUB,
    op("BIT", ABS, 3, 4, false),
    op("AND", ABS, 3, 4, false),
    op("ROL", ABS, 3, 6, false),
    NOP_STUB,
    // 0x30
    op("BMI", REL, 2, 2, false),
    op("AND", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("AND", ZPX, 2, 4, false),
    op("ROL", ZPX, 2, 6, false),
    NOP_STUB,
    op("SEC", IMP, 1, 2, false),
    op("AND", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("AND", ABX, 3, 4, true),
    op("ROL", ABX, 3, 7, false),
    NOP_STUB,
    // 0x40
    op("RTI", IMP, 1, 6, false),
    op("EOR", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("EOR", ZPG, 2, 3, false),
    op("LSR", ZPG, 2, 5, false),
    NOP_STUB,
    op("PHA", IMP, 1, 3, false),
    op("EOR", IMM, 2, 2, false),
    op("LSR", ACC, 1, 2, false),
    NOP_STUB,
    op("JMP", ABS, 3, 3, false),
    op("EOR", ABS, 3, 4, false),
    op("LSR", ABS, 3, 6, false),
    NOP_STUB,
    // 0x50
    op("BVC", REL, 2, 2, false),
    op("EOR", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("EOR", ZPX, 2, 4, false),
    op("LSR", ZPX, 2, 6, false),
    NOP_STUB,
    op("CLI", IMP, 1, 2, false),
    op("EOR", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("EOR", ABX, 3, 4, true),
    op("LSR", ABX, 3, 7, false),
    NOP_STUB,
    // 0x60
    op("RTS", IMP, 1, 6, false),
    op("ADC", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ADC", ZPG, 2, 3, false),
    op("ROR", ZPG, 2, 5, false),
    NOP_STUB,
    op("PLA", IMP, 1, 4, false),
    op("ADC", IMM, 2, 2, false),
    op("ROR", ACC, 1, 2, false),
    NOP_STUB,
    op("JMP", IND, 3, 5, false),
    op("ADC", ABS, 3, 4, false),
    op("ROR", ABS, 3, 6, false),
    NOP_STUB,
    // 0x70
    op("BVS", REL, 2, 2, false),
    op("ADC", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ADC", ZPX, 2, 4, false),
    op("ROR", ZPX, 2, 6, false),
    NOP_STUB,
    op("SEI", IMP, 1, 2, false),
    op("ADC", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("ADC", ABX, 3, 4, true),
    op("ROR", ABX, 3, 7, false),
    NOP_STUB,
    // 0x80
    NOP_STUB,
    op("STA", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    op("STY", ZPG, 2, 3, false),
    op("STA", ZPG, 2, 3, false),
    op("STX", ZPG, 2, 3, false),
    NOP_STUB,
    op("DEY", IMP, 1, 2, false),
    NOP_STUB,
    op("TXA", IMP, 1, 2, false),
    NOP_STUB,
    op("STY", ABS, 3, 4, false),
    op("STA", ABS, 3, 4, false),
    op("STX", ABS, 3, 4, false),
    NOP_STUB,
    // 0x90
    op("BCC", REL, 2, 2, false),
    op("STA", IZY, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    op("STY", ZPX, 2, 4, false),
    op("STA", ZPX, 2, 4, false),
    op("STX", ZPY, 2, 4, false),
    NOP_STUB,
    op("TYA", IMP, 1, 2, false),
    op("STA", ABY, 3, 5, false),
    op("TXS", IMP, 1, 2, false),
    NOP_STUB,
    NOP_STUB,
    op("STA", ABX, 3, 5, false),
    NOP_STUB,
    NOP_STUB,
    // 0xA0
    op("LDY", IMM, 2, 2, false),
    op("LDA", IZX, 2, 6, false),
    op("LDX", IMM, 2, 2, false),
    NOP_STUB,
    op("LDY", ZPG, 2, 3, false),
    op("LDA", ZPG, 2, 3, false),
    op("LDX", ZPG, 2, 3, false),
    NOP_STUB,
    op("TAY", IMP, 1, 2, false),
    op("LDA", IMM, 2, 2, false),
    op("TAX", IMP, 1, 2, false),
    NOP_STUB,
    op("LDY", ABS, 3, 4, false),
    op("LDA", ABS, 3, 4, false),
    op("LDX", ABS, 3, 4, false),
    NOP_STUB,
    // 0xB0
    op("BCS", REL, 2, 2, false),
    op("LDA", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    op("LDY", ZPX, 2, 4, false),
    op("LDA", ZPX, 2, 4, false),
    op("LDX", ZPY, 2, 4, false),
    NOP_STUB,
    op("CLV", IMP, 1, 2, false),
    op("LDA", ABY, 3, 4, true),
    op("TSX", IMP, 1, 2, false),
    NOP_STUB,
    op("LDY", ABX, 3, 4, true),
    op("LDA", ABX, 3, 4, true),
    op("LDX", ABY, 3, 4, true),
    NOP_STUB,
    // 0xC0
    op("CPY", IMM, 2, 2, false),
    op("CMP", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    op("CPY", ZPG, 2, 3, false),
    op("CMP", ZPG, 2, 3, false),
    op("DEC", ZPG, 2, 5, false),
    NOP_STUB,
    op("INY", IMP, 1, 2, false),
    op("CMP", IMM, 2, 2, false),
    op("DEX", IMP, 1, 2, false),
    NOP_STUB,
    op("CPY", ABS, 3, 4, false),
    op("CMP", ABS, 3, 4, false),
    op("DEC", ABS, 3, 6, false),
    NOP_STUB,
    // 0xD0
    op("BNE", REL, 2, 2, false),
    op("CMP", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("CMP", ZPX, 2, 4, false),
    op("DEC", ZPX, 2, 6, false),
    NOP_STUB,
    op("CLD", IMP, 1, 2, false),
    op("CMP", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("CMP", ABX, 3, 4, true),
    op("DEC", ABX, 3, 7, false),
    NOP_STUB,
    // 0xE0
    op("CPX", IMM, 2, 2, false),
    op("SBC", IZX, 2, 6, false),
    NOP_STUB,
    NOP_STUB,
    op("CPX", ZPG, 2, 3, false),
    op("SBC", ZPG, 2, 3, false),
    op("INC", ZPG, 2, 5, false),
    NOP_STUB,
    op("INX", IMP, 1, 2, false),
    op("SBC", IMM, 2, 2, false),
    op("NOP", IMP, 1, 2, false),
    NOP_STUB,
    op("CPX", ABS, 3, 4, false),
    op("SBC", ABS, 3, 4, false),
    op("INC", ABS, 3, 6, false),
    NOP_STUB,
    // 0xF0
    op("BEQ", REL, 2, 2, false),
    op("SBC", IZY, 2, 5, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("SBC", ZPX, 2, 4, false),
    op("INC", ZPX, 2, 6, false),
    NOP_STUB,
    op("SED", IMP, 1, 2, false),
    op("SBC", ABY, 3, 4, true),
    NOP_STUB,
    NOP_STUB,
    NOP_STUB,
    op("SBC", ABX, 3, 4, true),
    op("INC", ABX, 3, 7, false),
    NOP_STUB,
];
