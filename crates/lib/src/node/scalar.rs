//! Leaf values of a [`Node`](super::Node) tree.

use std::fmt::{self, Write as _};

/// A primitive leaf value.
///
/// Fixed-width numerics keep the width they were written with, so a value
/// encoded as `u8` is still a [`Scalar::U8`] when it is read back. Decoders
/// convert between integer widths losslessly and report out-of-range values
/// as corrupted data.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Scalar {
    /// Explicit null marker
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
}

impl Scalar {
    /// Returns true if this is the explicit null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns true for any integer width
    pub fn is_integer(&self) -> bool {
        self.as_i128().is_some()
    }

    /// Returns true for either float width
    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::F32(_) | Scalar::F64(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::I8(_) => "i8",
            Scalar::I16(_) => "i16",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::U8(_) => "u8",
            Scalar::U16(_) => "u16",
            Scalar::U32(_) => "u32",
            Scalar::U64(_) => "u64",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
            Scalar::String(_) => "string",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns any integer width widened to `i128`.
    ///
    /// Every fixed-width integer fits, so callers can narrow with `TryFrom`
    /// and get an exact range check.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Scalar::I8(n) => Some(n.into()),
            Scalar::I16(n) => Some(n.into()),
            Scalar::I32(n) => Some(n.into()),
            Scalar::I64(n) => Some(n.into()),
            Scalar::U8(n) => Some(n.into()),
            Scalar::U16(n) => Some(n.into()),
            Scalar::U32(n) => Some(n.into()),
            Scalar::U64(n) => Some(n.into()),
            _ => None,
        }
    }

    /// Attempts to convert to an `i64` without loss
    pub fn as_i64(&self) -> Option<i64> {
        self.as_i128().and_then(|n| i64::try_from(n).ok())
    }

    /// Attempts to convert to a `u64` without loss
    pub fn as_u64(&self) -> Option<u64> {
        self.as_i128().and_then(|n| u64::try_from(n).ok())
    }

    /// Attempts to convert to an `f64`, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::F32(n) => Some(n.into()),
            Scalar::F64(n) => Some(n),
            _ => self.as_i128().map(|n| n as f64),
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::I8(n) => write!(f, "{n}"),
            Scalar::I16(n) => write!(f, "{n}"),
            Scalar::I32(n) => write!(f, "{n}"),
            Scalar::I64(n) => write!(f, "{n}"),
            Scalar::U8(n) => write!(f, "{n}"),
            Scalar::U16(n) => write!(f, "{n}"),
            Scalar::U32(n) => write!(f, "{n}"),
            Scalar::U64(n) => write!(f, "{n}"),
            Scalar::F32(n) => write!(f, "{n}"),
            Scalar::F64(n) => write!(f, "{n}"),
            Scalar::String(s) => write_quoted(f, s),
        }
    }
}

/// Writes `s` as a double-quoted JSON string literal.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

impl PartialEq<str> for Scalar {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}
