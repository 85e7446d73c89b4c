//! `Decode` implementations for standard library types.

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    hash::BuildHasher,
};

use crate::{
    CodingError, Result,
    decode::{Decode, Decoder},
    node::Node,
};

macro_rules! decode_via {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
                    decoder.single_value_container().$method()
                }
            }
        )*
    };
}

decode_via! {
    bool => decode_bool,
    i8 => decode_i8,
    i16 => decode_i16,
    i32 => decode_i32,
    i64 => decode_i64,
    u8 => decode_u8,
    u16 => decode_u16,
    u32 => decode_u32,
    u64 => decode_u64,
    f32 => decode_f32,
    f64 => decode_f64,
    String => decode_string,
    char => decode_char,
}

impl Decode for () {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.single_value_container();
        if container.decode_nil() {
            Ok(())
        } else {
            Err(CodingError::type_mismatch(
                container.coding_path().clone(),
                "null",
                decoder.node().type_name(),
            ))
        }
    }
}

impl Decode for Node {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(decoder.single_value_container().decode_node())
    }
}

// Null reads as `None`; anything else is handed to `T` unchanged.
impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        if decoder.node().is_null() {
            Ok(None)
        } else {
            T::decode(decoder).map(Some)
        }
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        T::decode(decoder).map(Box::new)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let mut container = decoder.unkeyed_container()?;
        let mut items = Vec::with_capacity(container.count().unwrap_or(0));
        while !container.is_at_end() {
            items.push(container.decode()?);
        }
        Ok(items)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Vec::<T>::decode(decoder).map(VecDeque::from)
    }
}

impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        container
            .keys()
            .map(|key| Ok((key.to_string(), container.decode(key)?)))
            .collect()
    }
}

impl<T: Decode, S: BuildHasher + Default> Decode for HashMap<String, T, S> {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        container
            .keys()
            .map(|key| Ok((key.to_string(), container.decode(key)?)))
            .collect()
    }
}
