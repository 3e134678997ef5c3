//! Decode matrix A: product terms and output wiring.
//!
//! Return from trap is split: `RTI` polls the priority matrix on its final
//! cycle while `RTT` reloads the PSW without polling.

use crate::term::Term;

/// Number of product terms in decode matrix A.
pub const TERM_COUNT: usize = 217;

/// Product terms in row order.
///
/// Each pattern is `ir[15:0]` followed by `mr[14:12] mr[11:7] mr[6:0]`.
pub static TERMS: [Term; TERM_COUNT] = [
    // 0: fetch: read opcode at PC
    Term::pattern("x xxx xxx xxx xxx xxx", "11x xxxxx 0000000"),
    // 1: fetch: wait-mode entry
    Term::pattern("x xxx xxx xxx xxx xxx", "101 xxxxx 0000000"),
    // 2: fetch: vector service
    Term::pattern("x xxx xxx xxx xxx xxx", "0xx xxxxx 0000000"),
    // 3: wait: idle loop
    Term::pattern("x xxx xxx xxx xxx xxx", "1xx xxxxx 0001001"),
    // 4: wait: interrupt accepted
    Term::pattern("x xxx xxx xxx xxx xxx", "0xx xxxxx 0001001"),
    // 5: trap: predecrement SP for PSW
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001010"),
    // 6: trap: stage PSW
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001011"),
    // 7: trap: push PSW, predecrement SP
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001100"),
    // 8: trap: address PC slot
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001101"),
    // 9: trap: stage PC
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001110"),
    // 10: trap: push PC
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0001111"),
    // 11: trap: read new PC from vector
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0011011"),
    // 12: trap: load PC, read new PSW
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0011100"),
    // 13: trap: load PSW
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0011101"),
    // 14: trap request: sample priority matrix
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1001011"),
    // 15: decode: double operand
    Term::pattern("x 001 xxx xxx xxx xxx", "xxx xxxxx 1111110"),
    // 16: decode: double operand
    Term::pattern("x 01x xxx xxx xxx xxx", "xxx xxxxx 1111110"),
    // 17: decode: double operand
    Term::pattern("x 10x xxx xxx xxx xxx", "xxx xxxxx 1111110"),
    // 18: decode: double operand
    Term::pattern("x 110 xxx xxx xxx xxx", "xxx xxxxx 1111110"),
    // 19: decode: CLR..TST
    Term::pattern("x 000 101 xxx xxx xxx", "xxx xxxxx 1111110"),
    // 20: decode: ROR..ASL
    Term::pattern("x 000 110 0xx xxx xxx", "xxx xxxxx 1111110"),
    // 21: decode: SWAB
    Term::pattern("0 000 000 011 xxx xxx", "xxx xxxxx 1111110"),
    // 22: decode: SXT
    Term::pattern("0 000 110 111 xxx xxx", "xxx xxxxx 1111110"),
    // 23: decode: XOR
    Term::pattern("0 111 100 xxx xxx xxx", "xxx xxxxx 1111110"),
    // 24: decode: JMP
    Term::pattern("0 000 000 001 xxx xxx", "xxx xxxxx 1111110"),
    // 25: decode: JSR
    Term::pattern("0 000 100 xxx xxx xxx", "xxx xxxxx 1111110"),
    // 26: decode: MTPS
    Term::pattern("1 000 110 100 xxx xxx", "xxx xxxxx 1111110"),
    // 27: decode: MFPS
    Term::pattern("1 000 110 111 xxx xxx", "xxx xxxxx 1111110"),
    // 28: decode: BR
    Term::pattern("0 000 000 1xx xxx xxx", "xxx xxxxx 1111110"),
    // 29: decode: BNE taken
    Term::pattern("0 000 001 0xx xxx xxx", "xxx xx0xx 1111110"),
    // 30: decode: BNE not taken
    Term::pattern("0 000 001 0xx xxx xxx", "xxx xx1xx 1111110"),
    // 31: decode: BEQ taken
    Term::pattern("0 000 001 1xx xxx xxx", "xxx xx1xx 1111110"),
    // 32: decode: BEQ not taken
    Term::pattern("0 000 001 1xx xxx xxx", "xxx xx0xx 1111110"),
    // 33: decode: BGE taken
    Term::pattern("0 000 010 0xx xxx xxx", "xxx x0x0x 1111110"),
    // 34: decode: BGE taken
    Term::pattern("0 000 010 0xx xxx xxx", "xxx x1x1x 1111110"),
    // 35: decode: BGE not taken
    Term::pattern("0 000 010 0xx xxx xxx", "xxx x0x1x 1111110"),
    // 36: decode: BGE not taken
    Term::pattern("0 000 010 0xx xxx xxx", "xxx x1x0x 1111110"),
    // 37: decode: BLT taken
    Term::pattern("0 000 010 1xx xxx xxx", "xxx x0x1x 1111110"),
    // 38: decode: BLT taken
    Term::pattern("0 000 010 1xx xxx xxx", "xxx x1x0x 1111110"),
    // 39: decode: BLT not taken
    Term::pattern("0 000 010 1xx xxx xxx", "xxx x0x0x 1111110"),
    // 40: decode: BLT not taken
    Term::pattern("0 000 010 1xx xxx xxx", "xxx x1x1x 1111110"),
    // 41: decode: BGT taken
    Term::pattern("0 000 011 0xx xxx xxx", "xxx x000x 1111110"),
    // 42: decode: BGT taken
    Term::pattern("0 000 011 0xx xxx xxx", "xxx x101x 1111110"),
    // 43: decode: BGT not taken
    Term::pattern("0 000 011 0xx xxx xxx", "xxx xx1xx 1111110"),
    // 44: decode: BGT not taken
    Term::pattern("0 000 011 0xx xxx xxx", "xxx x0x1x 1111110"),
    // 45: decode: BGT not taken
    Term::pattern("0 000 011 0xx xxx xxx", "xxx x1x0x 1111110"),
    // 46: decode: BLE taken
    Term::pattern("0 000 011 1xx xxx xxx", "xxx xx1xx 1111110"),
    // 47: decode: BLE taken
    Term::pattern("0 000 011 1xx xxx xxx", "xxx x0x1x 1111110"),
    // 48: decode: BLE taken
    Term::pattern("0 000 011 1xx xxx xxx", "xxx x1x0x 1111110"),
    // 49: decode: BLE not taken
    Term::pattern("0 000 011 1xx xxx xxx", "xxx x000x 1111110"),
    // 50: decode: BLE not taken
    Term::pattern("0 000 011 1xx xxx xxx", "xxx x101x 1111110"),
    // 51: decode: BPL taken
    Term::pattern("1 000 000 0xx xxx xxx", "xxx x0xxx 1111110"),
    // 52: decode: BPL not taken
    Term::pattern("1 000 000 0xx xxx xxx", "xxx x1xxx 1111110"),
    // 53: decode: BMI taken
    Term::pattern("1 000 000 1xx xxx xxx", "xxx x1xxx 1111110"),
    // 54: decode: BMI not taken
    Term::pattern("1 000 000 1xx xxx xxx", "xxx x0xxx 1111110"),
    // 55: decode: BHI taken
    Term::pattern("1 000 001 0xx xxx xxx", "xxx xx0x0 1111110"),
    // 56: decode: BHI not taken
    Term::pattern("1 000 001 0xx xxx xxx", "xxx xxxx1 1111110"),
    // 57: decode: BHI not taken
    Term::pattern("1 000 001 0xx xxx xxx", "xxx xx1xx 1111110"),
    // 58: decode: BLOS taken
    Term::pattern("1 000 001 1xx xxx xxx", "xxx xxxx1 1111110"),
    // 59: decode: BLOS taken
    Term::pattern("1 000 001 1xx xxx xxx", "xxx xx1xx 1111110"),
    // 60: decode: BLOS not taken
    Term::pattern("1 000 001 1xx xxx xxx", "xxx xx0x0 1111110"),
    // 61: decode: BVC taken
    Term::pattern("1 000 010 0xx xxx xxx", "xxx xxx0x 1111110"),
    // 62: decode: BVC not taken
    Term::pattern("1 000 010 0xx xxx xxx", "xxx xxx1x 1111110"),
    // 63: decode: BVS taken
    Term::pattern("1 000 010 1xx xxx xxx", "xxx xxx1x 1111110"),
    // 64: decode: BVS not taken
    Term::pattern("1 000 010 1xx xxx xxx", "xxx xxx0x 1111110"),
    // 65: decode: BCC taken
    Term::pattern("1 000 011 0xx xxx xxx", "xxx xxxx0 1111110"),
    // 66: decode: BCC not taken
    Term::pattern("1 000 011 0xx xxx xxx", "xxx xxxx1 1111110"),
    // 67: decode: BCS taken
    Term::pattern("1 000 011 1xx xxx xxx", "xxx xxxx1 1111110"),
    // 68: decode: BCS not taken
    Term::pattern("1 000 011 1xx xxx xxx", "xxx xxxx0 1111110"),
    // 69: decode: EMT
    Term::pattern("1 000 100 0xx xxx xxx", "xxx xxxxx 1111110"),
    // 70: decode: TRAP
    Term::pattern("1 000 100 1xx xxx xxx", "xxx xxxxx 1111110"),
    // 71: decode: BPT
    Term::pattern("0 000 000 000 000 011", "xxx xxxxx 1111110"),
    // 72: decode: IOT
    Term::pattern("0 000 000 000 000 100", "xxx xxxxx 1111110"),
    // 73: decode: HALT
    Term::pattern("0 000 000 000 000 000", "xxx xxxxx 1111110"),
    // 74: decode: WAIT
    Term::pattern("0 000 000 000 000 001", "xxx xxxxx 1111110"),
    // 75: decode: RTI/RTT
    Term::pattern("0 000 000 000 000 x10", "xxx xxxxx 1111110"),
    // 76: decode: RESET
    Term::pattern("0 000 000 000 000 101", "xxx xxxxx 1111110"),
    // 77: decode: RTS
    Term::pattern("0 000 000 010 000 xxx", "xxx xxxxx 1111110"),
    // 78: decode: CCC/SCC
    Term::pattern("0 000 000 010 1xx xxx", "xxx xxxxx 1111110"),
    // 79: src: mode 0: register
    Term::pattern("x xxx 000 xxx xxx xxx", "xxx xxxxx 0000010"),
    // 80: src: mode 1: deferred
    Term::pattern("x xxx 001 xxx xxx xxx", "xxx xxxxx 0000010"),
    // 81: src: mode 2: autoincrement
    Term::pattern("x xxx 010 xxx xxx xxx", "xxx xxxxx 0000010"),
    // 82: src: mode 3: autoincrement deferred
    Term::pattern("x xxx 011 xxx xxx xxx", "xxx xxxxx 0000010"),
    // 83: src: mode 4/5: autodecrement
    Term::pattern("x xxx 10x xxx xxx xxx", "xxx xxxxx 0000010"),
    // 84: src: mode 6/7: fetch index word
    Term::pattern("x xxx 11x xxx xxx xxx", "xxx xxxxx 0000010"),
    // 85: src: step register up
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010000"),
    // 86: src: step register down
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010001"),
    // 87: src: address after decrement
    Term::pattern("x xxx 100 xxx xxx xxx", "xxx xxxxx 0010100"),
    // 88: src: pointer after decrement
    Term::pattern("x xxx 101 xxx xxx xxx", "xxx xxxxx 0010100"),
    // 89: src: pointer read, step by two
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010101"),
    // 90: src: pointer read
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010110"),
    // 91: decode: HALT/WAIT shared strobes
    Term::pattern("0 000 000 000 000 00x", "xxx xxxxx 1111110"),
    // 92: src: pointer to address
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010111"),
    // 93: src: index add
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0011000"),
    // 94: src: indexed address
    Term::pattern("x xxx 110 xxx xxx xxx", "xxx xxxxx 0011001"),
    // 95: src: indexed pointer
    Term::pattern("x xxx 111 xxx xxx xxx", "xxx xxxxx 0011001"),
    // 96: src: operand read
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0111000"),
    // 97: src: latch operand
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0011010"),
    // 98: src: word step
    Term::pattern("0 xxx xxx xxx xxx xxx", "xxx xxxxx 001000x"),
    // 99: src: SUB step
    Term::pattern("1 110 xxx xxx xxx xxx", "xxx xxxxx 001000x"),
    // 100: src: SP/PC step
    Term::pattern("x xxx xxx 11x xxx xxx", "xxx xxxxx 001000x"),
    // 101: dst: mode 0: register
    Term::pattern("x xxx xxx xxx 000 xxx", "xxx xxxxx 0100000"),
    // 102: dst: mode 1: deferred
    Term::pattern("x xxx xxx xxx 001 xxx", "xxx xxxxx 0100000"),
    // 103: dst: mode 2: autoincrement
    Term::pattern("x xxx xxx xxx 010 xxx", "xxx xxxxx 0100000"),
    // 104: dst: mode 3: autoincrement deferred
    Term::pattern("x xxx xxx xxx 011 xxx", "xxx xxxxx 0100000"),
    // 105: dst: mode 4/5: autodecrement
    Term::pattern("x xxx xxx xxx 10x xxx", "xxx xxxxx 0100000"),
    // 106: dst: mode 6/7: fetch index word
    Term::pattern("x xxx xxx xxx 11x xxx", "xxx xxxxx 0100000"),
    // 107: dst: step register up
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010010"),
    // 108: dst: step register down
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0010011"),
    // 109: dst: address after decrement
    Term::pattern("x xxx xxx xxx 100 xxx", "xxx xxxxx 0100100"),
    // 110: dst: pointer after decrement
    Term::pattern("x xxx xxx xxx 101 xxx", "xxx xxxxx 0100100"),
    // 111: dst: pointer read, step by two
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0100101"),
    // 112: dst: pointer read
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0100110"),
    // 113: dst: pointer to address
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0100111"),
    // 114: dst: index add
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0101001"),
    // 115: dst: indexed address
    Term::pattern("x xxx xxx xxx 110 xxx", "xxx xxxxx 0101010"),
    // 116: dst: indexed pointer
    Term::pattern("x xxx xxx xxx 111 xxx", "xxx xxxxx 0101010"),
    // 117: dst: word step
    Term::pattern("0 xxx xxx xxx xxx xxx", "xxx xxxxx 001001x"),
    // 118: dst: SUB step
    Term::pattern("1 110 xxx xxx xxx xxx", "xxx xxxxx 001001x"),
    // 119: dst: SP/PC step
    Term::pattern("x xxx xxx xxx xxx 11x", "xxx xxxxx 001001x"),
    // 120: dst: operand read (CMP/BIT)
    Term::pattern("x 01x xxx xxx xxx xxx", "xxx xxxxx 0111001"),
    // 121: dst: operand read (BIC/BIS)
    Term::pattern("x 10x xxx xxx xxx xxx", "xxx xxxxx 0111001"),
    // 122: dst: operand read (ADD/SUB)
    Term::pattern("x 110 xxx xxx xxx xxx", "xxx xxxxx 0111001"),
    // 123: dst: operand read (CLR..TST)
    Term::pattern("x 000 101 xxx xxx xxx", "xxx xxxxx 0111001"),
    // 124: dst: operand read (ROR..ASL)
    Term::pattern("x 000 110 0xx xxx xxx", "xxx xxxxx 0111001"),
    // 125: dst: operand read (SWAB)
    Term::pattern("0 000 000 011 xxx xxx", "xxx xxxxx 0111001"),
    // 126: dst: operand read (XOR)
    Term::pattern("0 111 100 xxx xxx xxx", "xxx xxxxx 0111001"),
    // 127: dst: operand read (MTPS)
    Term::pattern("1 000 110 100 xxx xxx", "xxx xxxxx 0111001"),
    // 128: dst: address only (MOV)
    Term::pattern("x 001 xxx xxx xxx xxx", "xxx xxxxx 0111001"),
    // 129: dst: address only (JMP)
    Term::pattern("0 000 000 001 xxx xxx", "xxx xxxxx 0111001"),
    // 130: dst: address only (JSR)
    Term::pattern("0 000 100 xxx xxx xxx", "xxx xxxxx 0111001"),
    // 131: dst: address only (SXT/MFPS)
    Term::pattern("x 000 110 111 xxx xxx", "xxx xxxxx 0111001"),
    // 132: byte operand
    Term::pattern("1 0xx xxx xxx xxx xxx", "xxx xxxxx 0111xxx"),
    // 133: byte operand
    Term::pattern("1 10x xxx xxx xxx xxx", "xxx xxxxx 0111xxx"),
    // 134: exec: MOV to register
    Term::pattern("x 001 xxx xxx xxx xxx", "110 xxxxx 0101000"),
    // 135: exec: MOV to memory
    Term::pattern("x 001 xxx xxx xxx xxx", "101 xxxxx 0101000"),
    // 136: exec: CMP
    Term::pattern("x 010 xxx xxx xxx xxx", "xxx xxxxx 0101000"),
    // 137: exec: BIT
    Term::pattern("x 011 xxx xxx xxx xxx", "xxx xxxxx 0101000"),
    // 138: exec: BIC to register
    Term::pattern("x 100 xxx xxx xxx xxx", "110 xxxxx 0101000"),
    // 139: exec: BIC to memory
    Term::pattern("x 100 xxx xxx xxx xxx", "101 xxxxx 0101000"),
    // 140: exec: BIS to register
    Term::pattern("x 101 xxx xxx xxx xxx", "110 xxxxx 0101000"),
    // 141: exec: BIS to memory
    Term::pattern("x 101 xxx xxx xxx xxx", "101 xxxxx 0101000"),
    // 142: exec: ADD to register
    Term::pattern("0 110 xxx xxx xxx xxx", "110 xxxxx 0101000"),
    // 143: exec: ADD to memory
    Term::pattern("0 110 xxx xxx xxx xxx", "101 xxxxx 0101000"),
    // 144: exec: SUB to register
    Term::pattern("1 110 xxx xxx xxx xxx", "110 xxxxx 0101000"),
    // 145: exec: SUB to memory
    Term::pattern("1 110 xxx xxx xxx xxx", "101 xxxxx 0101000"),
    // 146: exec: CLR to register
    Term::pattern("x 000 101 000 xxx xxx", "110 xxxxx 0101000"),
    // 147: exec: CLR to memory
    Term::pattern("x 000 101 000 xxx xxx", "101 xxxxx 0101000"),
    // 148: exec: COM to register
    Term::pattern("x 000 101 001 xxx xxx", "110 xxxxx 0101000"),
    // 149: exec: COM to memory
    Term::pattern("x 000 101 001 xxx xxx", "101 xxxxx 0101000"),
    // 150: exec: INC to register
    Term::pattern("x 000 101 010 xxx xxx", "110 xxxxx 0101000"),
    // 151: exec: INC to memory
    Term::pattern("x 000 101 010 xxx xxx", "101 xxxxx 0101000"),
    // 152: exec: DEC to register
    Term::pattern("x 000 101 011 xxx xxx", "110 xxxxx 0101000"),
    // 153: exec: DEC to memory
    Term::pattern("x 000 101 011 xxx xxx", "101 xxxxx 0101000"),
    // 154: exec: NEG to register
    Term::pattern("x 000 101 100 xxx xxx", "110 xxxxx 0101000"),
    // 155: exec: NEG to memory
    Term::pattern("x 000 101 100 xxx xxx", "101 xxxxx 0101000"),
    // 156: exec: ADC to register
    Term::pattern("x 000 101 101 xxx xxx", "110 xxxxx 0101000"),
    // 157: exec: ADC to memory
    Term::pattern("x 000 101 101 xxx xxx", "101 xxxxx 0101000"),
    // 158: exec: SBC to register
    Term::pattern("x 000 101 110 xxx xxx", "110 xxxxx 0101000"),
    // 159: exec: SBC to memory
    Term::pattern("x 000 101 110 xxx xxx", "101 xxxxx 0101000"),
    // 160: exec: TST
    Term::pattern("x 000 101 111 xxx xxx", "xxx xxxxx 0101000"),
    // 161: exec: ROR/ASR to register
    Term::pattern("x 000 110 0x0 xxx xxx", "110 xxxxx 0101000"),
    // 162: exec: ROR/ASR to memory
    Term::pattern("x 000 110 0x0 xxx xxx", "101 xxxxx 0101000"),
    // 163: exec: ROL/ASL to register
    Term::pattern("x 000 110 0x1 xxx xxx", "110 xxxxx 0101000"),
    // 164: exec: ROL/ASL to memory
    Term::pattern("x 000 110 0x1 xxx xxx", "101 xxxxx 0101000"),
    // 165: exec: SWAB to register
    Term::pattern("0 000 000 011 xxx xxx", "110 xxxxx 0101000"),
    // 166: exec: SWAB to memory
    Term::pattern("0 000 000 011 xxx xxx", "101 xxxxx 0101000"),
    // 167: exec: SXT to register
    Term::pattern("0 000 110 111 xxx xxx", "110 xxxxx 0101000"),
    // 168: exec: SXT to memory
    Term::pattern("0 000 110 111 xxx xxx", "101 xxxxx 0101000"),
    // 169: exec: XOR to register
    Term::pattern("0 111 100 xxx xxx xxx", "110 xxxxx 0101000"),
    // 170: exec: XOR to memory
    Term::pattern("0 111 100 xxx xxx xxx", "101 xxxxx 0101000"),
    // 171: exec: JMP
    Term::pattern("0 000 000 001 xxx xxx", "101 xxxxx 0101000"),
    // 172: exec: JSR
    Term::pattern("0 000 100 xxx xxx xxx", "101 xxxxx 0101000"),
    // 173: exec: MTPS
    Term::pattern("1 000 110 100 xxx xxx", "xxx xxxxx 0101000"),
    // 174: exec: MFPS to register
    Term::pattern("1 000 110 111 xxx xxx", "110 xxxxx 0101000"),
    // 175: exec: MFPS to memory
    Term::pattern("1 000 110 111 xxx xxx", "101 xxxxx 0101000"),
    // 176: dst: write back
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0111010"),
    // 177: jsr: stage link register
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0101011"),
    // 178: jsr: push link register
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0101100"),
    // 179: jsr: link register from PC
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0101101"),
    // 180: jsr: jump
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0101110"),
    // 181: rts: PC from link register
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000000"),
    // 182: rts: pop
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000001"),
    // 183: rts: restore link register
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000010"),
    // 184: rti: pop PC
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000011"),
    // 185: rti: load PC
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000100"),
    // 186: rti: pop PSW
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000101"),
    // 187: rti: load PSW
    Term::pattern("0 000 000 000 000 010", "xxx xxxxx 1000110"),
    // 188: rtt: load PSW, skip trace poll
    Term::pattern("0 000 000 000 000 110", "xxx xxxxx 1000110"),
    // 189: decode: MUL/DIV/ASH/ASHC
    Term::pattern("0 111 0xx xxx xxx xxx", "xxx xxxxx 1111110"),
    // 190: dst: operand read (EIS)
    Term::pattern("0 111 0xx xxx xxx xxx", "xxx xxxxx 0111001"),
    // 191: exec: EIS operand to temp
    Term::pattern("0 111 0xx xxx xxx xxx", "xxx xxxxx 0101000"),
    // 192: eis: iteration A0
    Term::pattern("x xxx xxx xxx xxx xxx", "000 xxxxx 0110000"),
    // 193: eis: iteration A1
    Term::pattern("x xxx xxx xxx xxx xxx", "001 xxxxx 0110000"),
    // 194: eis: iteration A2
    Term::pattern("x xxx xxx xxx xxx xxx", "010 xxxxx 0110000"),
    // 195: eis: iteration A3
    Term::pattern("x xxx xxx xxx xxx xxx", "011 xxxxx 0110000"),
    // 196: eis: iteration A4
    Term::pattern("x xxx xxx xxx xxx xxx", "100 xxxxx 0110000"),
    // 197: eis: iteration A5
    Term::pattern("x xxx xxx xxx xxx xxx", "101 xxxxx 0110000"),
    // 198: eis: iteration A6
    Term::pattern("x xxx xxx xxx xxx xxx", "110 xxxxx 0110000"),
    // 199: eis: iteration A7
    Term::pattern("x xxx xxx xxx xxx xxx", "111 xxxxx 0110000"),
    // 200: eis: iteration B0
    Term::pattern("x xxx xxx xxx xxx xxx", "000 xxxxx 0110001"),
    // 201: eis: iteration B1
    Term::pattern("x xxx xxx xxx xxx xxx", "001 xxxxx 0110001"),
    // 202: eis: iteration B2
    Term::pattern("x xxx xxx xxx xxx xxx", "010 xxxxx 0110001"),
    // 203: eis: iteration B3
    Term::pattern("x xxx xxx xxx xxx xxx", "011 xxxxx 0110001"),
    // 204: eis: iteration B4
    Term::pattern("x xxx xxx xxx xxx xxx", "100 xxxxx 0110001"),
    // 205: eis: iteration B5
    Term::pattern("x xxx xxx xxx xxx xxx", "101 xxxxx 0110001"),
    // 206: eis: iteration B6
    Term::pattern("x xxx xxx xxx xxx xxx", "110 xxxxx 0110001"),
    // 207: eis: iteration B7
    Term::pattern("x xxx xxx xxx xxx xxx", "111 xxxxx 0110001"),
    // 208: eis: MUL step
    Term::pattern("0 111 000 xxx xxx xxx", "xxx xxxxx 011000x"),
    // 209: eis: DIV step
    Term::pattern("0 111 001 xxx xxx xxx", "xxx xxxxx 011000x"),
    // 210: eis: ASH step
    Term::pattern("0 111 010 xxx xxx xxx", "xxx xxxxx 011000x"),
    // 211: eis: ASHC step
    Term::pattern("0 111 011 xxx xxx xxx", "xxx xxxxx 011000x"),
    // 212: eis: store low result
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0110010"),
    // 213: eis: store high result
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0110011"),
    // 214: reset: bus init
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1000111"),
    // 215: reset: bus init, done
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 1001000"),
    // 216: branch: PC plus offset
    Term::pattern("x xxx xxx xxx xxx xxx", "xxx xxxxx 0000001"),
];

/// Rows feeding each bit of the internal sum vector, indexed by output bit.
pub static SUMS: [&[u8]; 34] = [
    /*  0 */ &[
        0, 2, 4, 6, 8, 11, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 30, 32, 35,
        36, 39, 40, 43, 44, 45, 49, 50, 52, 54, 56, 57, 60, 62, 64, 66, 68, 77, 78, 79, 80, 81, 84,
        85, 86, 87, 88, 92, 94, 95, 96, 97, 101, 103, 108, 110, 114, 116, 120, 121, 122, 123, 124,
        125, 126, 127, 128, 129, 130, 131, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144,
        145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162,
        163, 164, 165, 166, 167, 168, 169, 170, 171, 173, 174, 175, 176, 177, 179, 180, 182, 183,
        184, 186, 187, 188, 189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 207, 213, 214, 215,
        216,
    ],
    /*  1 */ &[
        1, 3, 6, 7, 11, 12, 13, 14, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34,
        35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57,
        58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 74, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87,
        92, 93, 94, 97, 101, 102, 104, 106, 107, 108, 109, 113, 115, 120, 121, 122, 123, 124, 125,
        126, 127, 128, 129, 130, 131, 134, 136, 137, 138, 140, 142, 144, 146, 148, 150, 152, 154,
        156, 158, 160, 161, 163, 165, 167, 169, 171, 173, 174, 176, 177, 178, 180, 181, 183, 184,
        185, 187, 188, 189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203,
        204, 205, 206, 213, 214, 215, 216,
    ],
    /*  2 */ &[
        0, 6, 7, 8, 9, 11, 12, 76, 82, 86, 88, 89, 90, 95, 104, 108, 110, 111, 112, 116, 177, 178,
        179, 184, 185, 186,
    ],
    /*  3 */ &[
        13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
        36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58,
        59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 75, 76, 77, 78, 79, 81, 82, 83, 86, 88, 89, 90, 95,
        97, 103, 104, 105, 108, 110, 111, 112, 116, 134, 136, 137, 138, 140, 142, 144, 146, 148,
        150, 152, 154, 156, 158, 160, 161, 163, 165, 167, 169, 171, 173, 174, 176, 180, 181, 182,
        183, 184, 185, 186, 187, 188, 189, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201,
        202, 203, 204, 205, 206, 207, 212, 213, 215, 216,
    ],
    /*  4 */ &[
        0, 10, 11, 12, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 92, 93, 94, 95, 96, 102, 103,
        105, 107, 109, 113, 115, 135, 139, 141, 143, 145, 147, 149, 151, 153, 155, 157, 159, 162,
        164, 166, 168, 170, 175, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203,
        204, 205, 206, 207, 212,
    ],
    /*  5 */ &[
        0, 19, 20, 21, 22, 23, 24, 25, 26, 27, 79, 80, 85, 87, 92, 94, 97, 101, 102, 104, 106, 107,
        108, 109, 110, 111, 112, 113, 114, 115, 116, 120, 121, 122, 123, 124, 125, 126, 127, 128,
        129, 130, 131, 135, 139, 141, 143, 145, 147, 149, 151, 153, 155, 157, 159, 162, 164, 166,
        168, 170, 172, 175, 177, 178, 179, 189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 199,
        200, 201, 202, 203, 204, 205, 206, 207, 212,
    ],
    /*  6 */ &[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
        26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
        49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 74, 78, 79,
        80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 92, 93, 94, 95, 96, 97, 101, 102, 103, 104, 105,
        106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 120, 121, 122, 123, 124, 125, 126,
        127, 128, 129, 130, 131, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146,
        147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164,
        165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 180, 183, 187,
        188, 189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205,
        206, 207, 212, 213, 215, 216,
    ],
    /*  7 */ &[
        13, 14, 30, 32, 35, 36, 39, 40, 43, 44, 45, 49, 50, 52, 54, 56, 57, 60, 62, 64, 66, 68, 74,
        78, 134, 136, 137, 138, 140, 142, 144, 146, 148, 150, 152, 154, 156, 158, 160, 161, 163,
        165, 167, 169, 171, 173, 174, 176, 180, 183, 187, 188, 213, 215, 216,
    ],
    /*  8 */ &[
        0, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
        29, 31, 33, 34, 37, 38, 41, 42, 46, 47, 48, 51, 53, 55, 58, 59, 61, 63, 65, 67, 69, 70, 71,
        72, 75, 76, 77, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 92, 93, 94, 95, 96, 97, 101,
        102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 120, 121, 122,
        123, 124, 125, 126, 127, 128, 129, 130, 131, 135, 139, 141, 143, 145, 147, 149, 151, 153,
        155, 157, 159, 162, 164, 166, 168, 170, 172, 175, 177, 178, 179, 181, 182, 184, 185, 186,
        188, 189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205,
        206, 207, 212, 214,
    ],
    /*  9 */ &[0],
    /* 10 */ &[],
    /* 11 */ &[
        0, 11, 12, 84, 89, 90, 96, 106, 111, 112, 120, 121, 122, 123, 124, 125, 126, 127, 182, 184,
        186, 190, 214, 215,
    ],
    /* 12 */ &[7, 10, 176, 178],
    /* 13 */ &[214, 215],
    /* 14 */ &[132, 133],
    /* 15 */ &[
        5, 6, 7, 8, 9, 12, 79, 80, 81, 82, 86, 87, 88, 92, 94, 95, 97, 101, 102, 103, 104, 108, 109,
        110, 113, 115, 116, 134, 135, 136, 138, 139, 144, 145, 146, 147, 148, 149, 152, 153, 154,
        155, 158, 159, 160, 163, 164, 167, 168, 169, 170, 171, 172, 177, 179, 180, 181, 183, 185,
        191, 209, 210, 212, 213, 216,
    ],
    /* 16 */ &[
        0, 5, 7, 84, 89, 93, 98, 99, 100, 106, 111, 114, 117, 118, 119, 136, 140, 141, 142, 143,
        144, 145, 148, 149, 154, 155, 156, 157, 158, 159, 165, 166, 169, 170, 172, 182, 184, 186,
        208, 209, 216,
    ],
    /* 17 */ &[
        0, 5, 7, 84, 85, 86, 89, 106, 107, 108, 111, 150, 151, 152, 153, 161, 162, 163, 164, 165,
        166, 172, 182, 184, 186, 210, 211, 216,
    ],
    /* 18 */ &[
        137, 138, 139, 140, 141, 146, 147, 148, 149, 161, 162, 163, 164, 165, 166, 169, 170, 210,
        211, 216,
    ],
    /* 19 */ &[
        0, 9, 12, 79, 80, 81, 82, 84, 87, 88, 92, 93, 94, 95, 97, 106, 113, 115, 116, 134, 135, 136,
        137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 160, 169, 170, 177, 179, 183, 185,
        191, 208, 209, 210, 211, 212, 213,
    ],
    /* 20 */ &[
        0, 7, 9, 10, 12, 84, 89, 90, 92, 94, 95, 96, 97, 101, 102, 103, 104, 106, 109, 110, 111,
        112, 113, 114, 115, 116, 120, 121, 122, 123, 124, 125, 126, 127, 146, 147, 160, 171, 176,
        179, 180, 181, 183, 185, 190, 191, 213,
    ],
    /* 21 */ &[
        6, 7, 8, 10, 12, 89, 90, 92, 94, 95, 96, 97, 111, 112, 113, 115, 116, 120, 121, 122, 123,
        124, 125, 126, 127, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147,
        160, 171, 176, 178, 180, 182, 183, 184, 185, 186, 190, 191, 212, 213,
    ],
    /* 22 */ &[
        0, 9, 12, 79, 84, 85, 86, 89, 93, 97, 101, 106, 114, 135, 136, 137, 139, 141, 143, 145, 147,
        149, 151, 153, 155, 157, 159, 160, 162, 164, 166, 168, 170, 171, 175, 177, 179, 180, 181,
        185, 191, 208, 209, 210, 211, 212, 213, 216,
    ],
    /* 23 */ &[
        0, 6, 8, 9, 12, 80, 81, 82, 84, 87, 88, 92, 93, 94, 95, 101, 102, 103, 104, 106, 107, 108,
        109, 110, 111, 113, 114, 115, 116, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144,
        145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162,
        163, 164, 165, 166, 167, 168, 169, 170, 171, 174, 175, 177, 180, 181, 183, 185, 216,
    ],
    /* 24 */ &[
        5, 6, 7, 8, 9, 79, 80, 81, 82, 87, 88, 92, 93, 94, 95, 97, 101, 102, 103, 104, 109, 110,
        113, 114, 115, 116, 135, 136, 137, 139, 141, 143, 145, 147, 149, 151, 153, 155, 157, 159,
        160, 162, 164, 166, 168, 170, 172, 175, 177, 182, 184, 186, 191, 208, 209, 210, 211,
    ],
    /* 25 */ &[
        13, 136, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157,
        158, 159, 160, 161, 162, 163, 164, 165, 166, 173, 187, 188, 212,
    ],
    /* 26 */ &[
        6, 13, 134, 135, 137, 138, 139, 140, 141, 167, 168, 169, 170, 173, 174, 175, 187, 188,
    ],
    /* 27 */ &[6, 78, 150, 151, 152, 153, 174, 175],
    /* 28 */ &[101, 191, 193, 195, 197, 199, 201, 203, 205, 207],
    /* 29 */ &[
        0, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 190, 191, 192, 195, 196, 199,
        200, 203, 204, 207,
    ],
    /* 30 */ &[0, 191, 192, 193, 194, 199, 200, 201, 202, 207],
    /* 31 */ &[
        1, 3, 11, 13, 14, 30, 32, 35, 36, 39, 40, 43, 44, 45, 49, 50, 52, 54, 56, 57, 60, 62, 64,
        66, 68, 78, 91, 134, 136, 137, 138, 140, 142, 144, 146, 148, 150, 152, 154, 156, 158, 160,
        161, 163, 165, 167, 169, 171, 173, 174, 176, 180, 183, 187, 213, 215, 216,
    ],
    /* 32 */ &[11, 12],
    /* 33 */ &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
        48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70,
        71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93,
        94, 95, 96, 97, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
        116, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 134, 135, 136, 137, 138,
        139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156,
        157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174,
        175, 176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 192,
        193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 212, 213, 214,
        215, 216,
    ],
];
