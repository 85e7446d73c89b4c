//! Fixture types for the integration tests.
//!
//! Each type describes itself by hand through `Encode`/`Decode`, the way a
//! downstream crate would.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use treecodec::{
    CodingError, Decode, Decoder, Encode, Encoder, Node, Result, TreeDecoder, TreeEncoder,
};
use url::Url;

// ===== FIXTURES =====

/// Flat record with an optional field.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: Option<String>,
}

impl Encode for Point {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        container.encode("x", &self.x)?;
        container.encode("y", &self.y)?;
        container.encode_if_present("label", &self.label)
    }
}

impl Decode for Point {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        Ok(Point {
            x: container.decode("x")?,
            y: container.decode("y")?,
            label: container.decode_if_present("label")?,
        })
    }
}

/// Single integer field.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub count: i64,
}

impl Encode for Counter {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container().encode("count", &self.count)
    }
}

impl Decode for Counter {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Counter {
            count: decoder.keyed_container()?.decode("count")?,
        })
    }
}

/// Sequence of URLs under one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Links {
    pub urls: Vec<Url>,
}

impl Encode for Links {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container().encode("urls", &self.urls)
    }
}

impl Decode for Links {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Links {
            urls: decoder.keyed_container()?.decode("urls")?,
        })
    }
}

/// Line item mixing overrides, optionals, and a nested unkeyed container.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub sku: String,
    pub price: BigDecimal,
    pub link: Option<Url>,
    pub dims: (u32, u32),
}

impl Encode for Item {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        container.encode("sku", &self.sku)?;
        container.encode("price", &self.price)?;
        container.encode_if_present("link", &self.link)?;
        let mut dims = container.nested_unkeyed_container("dims");
        dims.encode(&self.dims.0)?;
        dims.encode(&self.dims.1)
    }
}

impl Decode for Item {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        let mut dims = container.nested_unkeyed_container("dims")?;
        Ok(Item {
            sku: container.decode("sku")?,
            price: container.decode("price")?,
            link: container.decode_if_present("link")?,
            dims: (dims.decode()?, dims.decode()?),
        })
    }
}

/// Nested record holding a sequence of records and a string-keyed map.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub owner: String,
    pub items: Vec<Item>,
    pub stock: BTreeMap<String, u32>,
}

impl Encode for Inventory {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        container.encode("owner", &self.owner)?;
        container.encode("items", &self.items)?;
        container.encode("stock", &self.stock)
    }
}

impl Decode for Inventory {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        Ok(Inventory {
            owner: container.decode("owner")?,
            items: container.decode("items")?,
            stock: container.decode("stock")?,
        })
    }
}

/// Record that delegates part of itself through a keyed super coder.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled {
    pub base: Point,
    pub visible: bool,
}

impl Encode for Labeled {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut container = encoder.keyed_container();
        container.encode("visible", &self.visible)?;
        self.base
            .encode(&mut container.super_encoder_for_key("base"))
    }
}

impl Decode for Labeled {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let container = decoder.keyed_container()?;
        Ok(Labeled {
            base: Point::decode(&mut container.super_decoder_for_key("base"))?,
            visible: container.decode("visible")?,
        })
    }
}

/// Outer layer of the `a.0.b` path fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Outer {
    pub a: Vec<Inner>,
}

/// Inner layer of the `a.0.b` path fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Inner {
    pub b: i64,
}

impl Encode for Outer {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container().encode("a", &self.a)
    }
}

impl Decode for Outer {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Outer {
            a: decoder.keyed_container()?.decode("a")?,
        })
    }
}

impl Encode for Inner {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container().encode("b", &self.b)
    }
}

impl Decode for Inner {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Inner {
            b: decoder.keyed_container()?.decode("b")?,
        })
    }
}

/// Newtype that refuses negative values on encode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonNegative(pub i64);

impl Encode for NonNegative {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        if self.0 < 0 {
            return Err(CodingError::invalid_value(
                encoder.coding_path().clone(),
                format!("{} is negative", self.0),
            ));
        }
        encoder.single_value_container().encode_scalar(self.0);
        Ok(())
    }
}

/// Reads the `version` entry of the user info into its own value.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionProbe(pub Option<i64>);

impl Encode for VersionProbe {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let version = encoder.user_info().get("version").and_then(Node::as_i64);
        encoder.single_value_container().encode(&version)
    }
}

impl Decode for VersionProbe {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let version = decoder.user_info().get("version").and_then(Node::as_i64);
        decoder.single_value_container();
        Ok(VersionProbe(version))
    }
}

// ===== CONTRACT VIOLATIONS =====

/// Requests two containers from one encoder.
pub struct TwoContainers;

impl Encode for TwoContainers {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.keyed_container();
        encoder.unkeyed_container();
        Ok(())
    }
}

/// Requests a single-value container and never writes it.
pub struct NeverWritten;

impl Encode for NeverWritten {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container();
        Ok(())
    }
}

/// Never requests a container at all.
pub struct NoContainer;

impl Encode for NoContainer {
    fn encode(&self, _encoder: &mut Encoder<'_>) -> Result<()> {
        Ok(())
    }
}

// ===== FACTORIES =====

pub fn sample_item(sku: &str) -> Item {
    Item {
        sku: sku.to_string(),
        price: "19.99".parse().unwrap(),
        link: Some(Url::parse(&format!("https://shop.example/{sku}")).unwrap()),
        dims: (4, 2),
    }
}

pub fn sample_inventory() -> Inventory {
    let mut stock = BTreeMap::new();
    stock.insert("bolt".to_string(), 120);
    stock.insert("nut".to_string(), 0);
    Inventory {
        owner: "warehouse-1".to_string(),
        items: vec![
            sample_item("bolt"),
            Item {
                link: None,
                ..sample_item("nut")
            },
        ],
        stock,
    }
}

/// Builds a map node from `(key, node)` pairs.
pub fn map(entries: impl IntoIterator<Item = (&'static str, Node)>) -> Node {
    entries.into_iter().collect()
}

// ===== ASSERTION HELPERS =====

/// Encode `value`, decode the result, and assert both steps agree.
pub fn assert_roundtrip<T: Encode + Decode + PartialEq + std::fmt::Debug>(value: &T) -> Node {
    let node = TreeEncoder::new().encode(value).expect("encode failed");
    let back: T = TreeDecoder::new().decode(&node).expect("decode failed");
    assert_eq!(&back, value, "round trip changed the value; node was {node}");
    node
}
