//! The fixed catalog of Hylo integer kinds and their attributes.
//!
//! Every inclusion decision made by the fragment library is answered by a
//! method here, so the rules live in one table instead of being spread over
//! the templates.

use std::fmt;

use intgen_core::{Error, Result, Selection};

/// Signed or unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Signed,
    Unsigned,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Signed => "signed",
            Family::Unsigned => "unsigned",
        }
    }

    /// Prefix selecting the signed or unsigned flavour of a builtin
    /// (`icmp_slt` vs `icmp_ult`, `sdiv` vs `udiv`, ...).
    pub fn builtin_prefix(&self) -> &'static str {
        match self {
            Family::Signed => "s",
            Family::Unsigned => "u",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Native storage of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Platform word.
    Word,
    /// Fixed 8 bits.
    Bits8,
    /// Fixed 32 bits, independent of the platform word.
    Bits32,
}

impl Representation {
    /// Suffix of the `Builtin` type and functions (`Builtin.word`, `add_i8`, ...).
    pub fn builtin(&self) -> &'static str {
        match self {
            Representation::Word => "word",
            Representation::Bits8 => "i8",
            Representation::Bits32 => "i32",
        }
    }
}

/// How `hash(into:)` feeds a value to the hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    /// Raw byte representation in one unchecked combine.
    RawBytes,
    /// Reinterpret as `Int8`, then combine one byte.
    ReinterpretedByte,
    /// Combine `self` directly as one byte.
    DirectByte,
    /// Walk the value's bytes by address, combining each in ascending order.
    ByteDecomposition { bytes: usize },
}

/// How `signum()` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignumStrategy {
    /// `(self > 0)` widened, or-ed with `self` shifted right by `bit_width - 1`.
    ShiftSign,
    /// `(self > 0) - (self < 0)`, both widened to 0 or 1.
    Difference,
    /// `(self > Self())` widened.
    CompareZeroValue,
    /// `(self > 0)` widened.
    CompareZeroLiteral,
}

/// One of the five integer types of the Hylo standard library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntKind {
    Int,
    Int8,
    Int32,
    UInt,
    UInt8,
}

impl IntKind {
    /// The whole catalog, in generation order.
    pub const ALL: [IntKind; 5] = [
        IntKind::Int,
        IntKind::Int8,
        IntKind::Int32,
        IntKind::UInt,
        IntKind::UInt8,
    ];

    /// Hylo type name; also the generated file's stem.
    pub fn name(&self) -> &'static str {
        match self {
            IntKind::Int => "Int",
            IntKind::Int8 => "Int8",
            IntKind::Int32 => "Int32",
            IntKind::UInt => "UInt",
            IntKind::UInt8 => "UInt8",
        }
    }

    /// Look a kind up by its exact Hylo name.
    pub fn from_name(name: &str) -> Option<IntKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Like [`IntKind::from_name`], reporting the valid names on failure.
    pub fn parse(name: &str) -> Result<IntKind> {
        Self::from_name(name).ok_or_else(|| {
            let valid = Self::ALL.map(|k| k.name()).join(", ");
            Box::new(Error::UnknownKind {
                name: name.to_string(),
                valid,
            })
        })
    }

    pub fn family(&self) -> Family {
        match self {
            IntKind::Int | IntKind::Int8 | IntKind::Int32 => Family::Signed,
            IntKind::UInt | IntKind::UInt8 => Family::Unsigned,
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            IntKind::Int | IntKind::UInt => Representation::Word,
            IntKind::Int8 | IntKind::UInt8 => Representation::Bits8,
            IntKind::Int32 => Representation::Bits32,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.family() == Family::Signed
    }

    pub fn is_word_sized(&self) -> bool {
        self.representation() == Representation::Word
    }

    pub fn is_8_bit(&self) -> bool {
        self.representation() == Representation::Bits8
    }

    pub fn is_32_bit(&self) -> bool {
        self.representation() == Representation::Bits32
    }

    /// Shorthand for `self.representation().builtin()`.
    pub fn builtin(&self) -> &'static str {
        self.representation().builtin()
    }

    /// The kind with the same width and the opposite family, found by
    /// toggling the `U` prefix of the name. `Int32` has none.
    pub fn counterpart(&self) -> Option<IntKind> {
        let name = self.name();
        match name.strip_prefix('U') {
            Some(signed) => Self::from_name(signed),
            None => Self::from_name(&format!("U{name}")),
        }
    }

    /// Whether the kind carries the full integer protocol hierarchy
    /// (`Regular`, ordering, arithmetic, bit manipulation, fixed width).
    /// `Int32` only supports storage, equality and hashing.
    pub fn is_full_integer(&self) -> bool {
        !self.is_32_bit()
    }

    pub fn hash_strategy(&self) -> HashStrategy {
        match self {
            IntKind::Int | IntKind::UInt => HashStrategy::RawBytes,
            IntKind::UInt8 => HashStrategy::ReinterpretedByte,
            IntKind::Int8 => HashStrategy::DirectByte,
            IntKind::Int32 => HashStrategy::ByteDecomposition { bytes: 4 },
        }
    }

    /// `None` for kinds without the bit-manipulation block.
    pub fn signum_strategy(&self) -> Option<SignumStrategy> {
        match self {
            IntKind::Int => Some(SignumStrategy::ShiftSign),
            IntKind::Int8 => Some(SignumStrategy::Difference),
            IntKind::UInt => Some(SignumStrategy::CompareZeroValue),
            IntKind::UInt8 => Some(SignumStrategy::CompareZeroLiteral),
            IntKind::Int32 => None,
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `kind` belongs to `selection`.
pub fn admits(selection: Selection, kind: IntKind) -> bool {
    match selection {
        Selection::All => true,
        Selection::Signed => kind.family() == Family::Signed,
        Selection::Unsigned => kind.family() == Family::Unsigned,
    }
}

/// The kinds admitted by `selection`, in catalog order.
pub fn select(selection: Selection) -> Vec<IntKind> {
    IntKind::ALL
        .into_iter()
        .filter(|&kind| admits(selection, kind))
        .collect()
}
