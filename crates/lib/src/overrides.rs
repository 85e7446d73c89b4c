//! Fixed table of types with a canonical string representation.
//!
//! A few semantic leaf types would otherwise be described field by field.
//! The registry maps them to a single string scalar instead: the canonical
//! text form on encode, parsed back on decode. Registered types implement
//! [`Encode`] and [`Decode`] through the registry, so the override is
//! applied before any generic recursion can happen.
//!
//! | Type | Kind | Canonical form |
//! |------|------|----------------|
//! | [`url::Url`] | [`OverrideKind::Url`] | serialized URL (`Url::as_str`) |
//! | [`bigdecimal::BigDecimal`] | [`OverrideKind::Decimal`] | plain decimal notation |
//!
//! ```
//! use url::Url;
//!
//! let url = Url::parse("https://example.com/a?b=c")?;
//! let node = treecodec::encode(&url)?;
//! assert_eq!(node.as_str(), Some("https://example.com/a?b=c"));
//! assert_eq!(treecodec::decode::<Url>(&node)?, url);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use url::Url;

use crate::{
    CodingError, Result,
    decode::{Decode, Decoder},
    encode::{Encode, Encoder},
    node::Scalar,
};

/// The registered override families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKind {
    Url,
    Decimal,
}

impl OverrideKind {
    /// Returns the name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OverrideKind::Url => "url",
            OverrideKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every override family, in registry order.
pub const REGISTERED: &[OverrideKind] = &[OverrideKind::Url, OverrideKind::Decimal];

/// A leaf type represented by a canonical string.
pub trait ScalarOverride: Sized {
    const KIND: OverrideKind;

    /// Renders the canonical string form.
    fn to_canonical(&self) -> String;

    /// Parses the canonical string form, returning the reason on failure.
    fn from_canonical(s: &str) -> std::result::Result<Self, String>;
}

impl ScalarOverride for Url {
    const KIND: OverrideKind = OverrideKind::Url;

    fn to_canonical(&self) -> String {
        self.as_str().to_owned()
    }

    fn from_canonical(s: &str) -> std::result::Result<Self, String> {
        Url::parse(s).map_err(|e| e.to_string())
    }
}

impl ScalarOverride for BigDecimal {
    const KIND: OverrideKind = OverrideKind::Decimal;

    fn to_canonical(&self) -> String {
        self.to_plain_string()
    }

    fn from_canonical(s: &str) -> std::result::Result<Self, String> {
        BigDecimal::from_str(s.trim()).map_err(|e| e.to_string())
    }
}

/// Writes `value` as its canonical string scalar.
pub fn encode_override<T: ScalarOverride>(value: &T, encoder: &mut Encoder<'_>) -> Result<()> {
    encoder
        .single_value_container()
        .encode_scalar(value.to_canonical());
    Ok(())
}

/// Reads a `T` from a canonical string scalar.
///
/// # Errors
///
/// [`CodingError::TypeMismatch`] if the node is not a string,
/// [`CodingError::DataCorrupted`] if the string does not parse.
pub fn decode_override<T: ScalarOverride>(decoder: &mut Decoder<'_>) -> Result<T> {
    let container = decoder.single_value_container();
    let text = container.decode_str()?;
    T::from_canonical(text).map_err(|reason| {
        tracing::debug!(kind = %T::KIND, path = %container.coding_path(), "override parse failed");
        CodingError::data_corrupted(
            container.coding_path().clone(),
            format!("invalid {} '{text}': {reason}", T::KIND),
        )
    })
}

macro_rules! register_overrides {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
                    encode_override(self, encoder)
                }

                fn to_scalar(&self) -> Option<Scalar> {
                    Some(Scalar::String(self.to_canonical()))
                }
            }

            impl Decode for $ty {
                fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
                    decode_override(decoder)
                }
            }
        )*
    };
}

register_overrides!(Url, BigDecimal);
