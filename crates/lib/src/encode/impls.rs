//! `Encode` implementations for standard library types.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::{
    Result,
    encode::{Encode, Encoder},
    node::{Node, Scalar},
};

macro_rules! encode_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
                    encoder.single_value_container().encode_scalar(*self);
                    Ok(())
                }

                fn to_scalar(&self) -> Option<Scalar> {
                    Some(Scalar::from(*self))
                }
            }
        )*
    };
}

encode_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Encode for str {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_scalar(self);
        Ok(())
    }

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::from(self))
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_str().encode(encoder)
    }

    fn to_scalar(&self) -> Option<Scalar> {
        self.as_str().to_scalar()
    }
}

impl Encode for char {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_scalar(self.to_string());
        Ok(())
    }

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::String(self.to_string()))
    }
}

impl Encode for () {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_nil();
        Ok(())
    }

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Null)
    }
}

impl Encode for Node {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_node(self.clone());
        Ok(())
    }

    fn to_scalar(&self) -> Option<Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar.clone()),
            _ => None,
        }
    }
}

// `None` is an explicit null; `Some` is transparent.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        match self {
            Some(value) => value.encode(encoder),
            None => {
                encoder.single_value_container().encode_nil();
                Ok(())
            }
        }
    }

    fn to_scalar(&self) -> Option<Scalar> {
        match self {
            Some(value) => value.to_scalar(),
            None => Some(Scalar::Null),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }

    fn to_scalar(&self) -> Option<Scalar> {
        (**self).to_scalar()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }

    fn to_scalar(&self) -> Option<Scalar> {
        (**self).to_scalar()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.unkeyed_container().encode_all(self)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.unkeyed_container().encode_all(self)
    }
}

impl<K: AsRef<str>, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        for (key, value) in self {
            container.encode(key.as_ref(), value)?;
        }
        Ok(())
    }
}

impl<K: AsRef<str>, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        for (key, value) in self {
            container.encode(key.as_ref(), value)?;
        }
        Ok(())
    }
}
