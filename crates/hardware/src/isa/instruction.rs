//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the fields of a 16-bit E20 instruction word and
//! the [`Decoded`] structure produced by the decoder.
//!
//! Field layout (bit 0 is the least significant):
//!
//! ```text
//!  15  13 12  10 9    7 6    4 3    0
//! | group |  rA  |  rB  |  rC  | funct |   three-register
//! | group |  rA  |  rB  |     imm7     |   immediate / memory / branch
//! | group |           imm13            |   j / jal
//! ```

/// Bit mask for a 3-bit register index.
pub const REG_MASK: u16 = 0b111;
/// Bit shift of the `rA` field (bits 12-10).
pub const RA_SHIFT: u16 = 10;
/// Bit shift of the `rB` field (bits 9-7).
pub const RB_SHIFT: u16 = 7;
/// Bit shift of the `rC` field (bits 6-4).
pub const RC_SHIFT: u16 = 4;
/// Bit shift of the opcode group (bits 15-13).
pub const GROUP_SHIFT: u16 = 13;
/// Bit mask for the opcode group.
pub const GROUP_MASK: u16 = 0b111;
/// Bit mask for the function code (bits 3-0).
pub const FUNCT_MASK: u16 = 0b1111;
/// Bit mask for the 7-bit immediate (bits 6-0).
pub const IMM7_MASK: u16 = 0x7F;
/// Sign bit of the 7-bit immediate.
pub const IMM7_SIGN: u16 = 0x40;
/// Bit mask for the 13-bit jump target (bits 12-0).
pub const IMM13_MASK: u16 = 0x1FFF;
/// Bits 9-4, which must be zero for `jr`.
pub const JR_ZERO_MASK: u16 = 0b11_1111 << RC_SHIFT;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode group (bits 15-13).
    fn group(&self) -> u16;

    /// Extracts the `rA` register index (bits 12-10).
    fn ra(&self) -> usize;

    /// Extracts the `rB` register index (bits 9-7).
    fn rb(&self) -> usize;

    /// Extracts the `rC` register index (bits 6-4).
    ///
    /// Only meaningful for three-register instructions, where it names the
    /// destination.
    fn rc(&self) -> usize;

    /// Extracts the function code (bits 3-0).
    fn funct(&self) -> u16;

    /// Extracts the 7-bit immediate, sign-extended to 16 bits.
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit absolute jump target.
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn group(&self) -> u16 {
        (self >> GROUP_SHIFT) & GROUP_MASK
    }

    #[inline(always)]
    fn ra(&self) -> usize {
        ((self >> RA_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rb(&self) -> usize {
        ((self >> RB_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rc(&self) -> usize {
        ((self >> RC_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u16 {
        self & FUNCT_MASK
    }

    /// Extracts the 7-bit immediate and sign-extends it.
    ///
    /// When bit 6 is set the value is treated as a two's-complement 7-bit
    /// quantity, so `0x7F` becomes `0xFFFF` (-1).
    #[inline(always)]
    fn imm7(&self) -> u16 {
        let imm = self & IMM7_MASK;
        if imm & IMM7_SIGN != 0 { imm | !IMM7_MASK } else { imm }
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// Closed set of operations the E20 executes.
///
/// Encodings that match none of the defined formats decode to
/// [`Opcode::Unknown`], which executes as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Opcode {
    /// `rC = rA + rB`.
    Add,
    /// `rC = rA - rB`.
    Sub,
    /// `rC = rA | rB`.
    Or,
    /// `rC = rA & rB`.
    And,
    /// `rC = (rA < rB) ? 1 : 0`.
    Slt,
    /// `pc = rA`.
    Jr,
    /// `rB = rA + imm`.
    Addi,
    /// `pc = imm`.
    J,
    /// `$7 = pc + 1; pc = imm`.
    Jal,
    /// `rB = mem[rA + imm]`.
    Lw,
    /// `mem[rA + imm] = rB`.
    Sw,
    /// `if rA == rB { pc += imm + 1 }`.
    Jeq,
    /// `rB = (rA < imm) ? 1 : 0`.
    Slti,
    /// Unrecognized encoding.
    #[default]
    Unknown,
}

impl Opcode {
    /// Returns true for instructions that access data memory.
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Lw | Self::Sw)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Or => "or",
            Self::And => "and",
            Self::Slt => "slt",
            Self::Jr => "jr",
            Self::Addi => "addi",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Jeq => "jeq",
            Self::Slti => "slti",
            Self::Unknown => ".fill",
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Created fresh for every fetch and consumed by execution. The meaning of
/// `imm` depends on the opcode: a displacement for `lw`/`sw`, a branch offset
/// for `jeq`, a sign-extended literal for `addi`/`slti` and an absolute
/// 13-bit target for `j`/`jal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 16-bit instruction encoding.
    pub raw: u16,
    /// Decoded operation.
    pub opcode: Opcode,
    /// First source register index.
    pub ra: usize,
    /// Second source register, or destination for immediate formats.
    pub rb: usize,
    /// Destination register index for three-register formats, zero otherwise.
    pub rc: usize,
    /// Immediate operand.
    pub imm: u16,
}

impl Decoded {
    /// Returns true if this instruction is the halt idiom: a `j` whose target
    /// is the address it was fetched from.
    #[inline]
    pub fn is_halt(&self, fetch_addr: u16) -> bool {
        self.opcode == Opcode::J && self.imm == fetch_addr
    }
}
