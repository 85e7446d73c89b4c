use crate::{
    CodingConfig, CodingError, Result,
    container::DecodingContainer,
    decode::Decode,
    node::{Node, Scalar},
    path::CodingPath,
};

/// Decode container reading its node as one value.
///
/// Reading does not extend the coding path and does not consume anything,
/// so the same value may be read more than once.
#[derive(Debug, Clone)]
pub struct SingleValueDecoder<'a> {
    node: &'a Node,
    path: CodingPath,
    config: &'a CodingConfig,
}

macro_rules! decode_int {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads an integer that fits in `", stringify!($ty), "`.")]
            ///
            /// Any integer width is accepted as long as the value is in range.
            pub fn $name(&self) -> Result<$ty> {
                let n = self.integer(stringify!($ty))?;
                <$ty>::try_from(n).map_err(|_| {
                    CodingError::data_corrupted(
                        self.path.clone(),
                        format!("number {n} does not fit in {}", stringify!($ty)),
                    )
                })
            }
        )*
    };
}

impl<'a> SingleValueDecoder<'a> {
    pub(crate) fn new(node: &'a Node, path: CodingPath, config: &'a CodingConfig) -> Self {
        Self { node, path, config }
    }

    /// Returns the path of this container.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns true if the node is the explicit null marker.
    pub fn decode_nil(&self) -> bool {
        self.is_nil_equivalent(Some(self.node))
    }

    fn mismatch(&self, expected: &str) -> CodingError {
        CodingError::type_mismatch(self.path.clone(), expected, self.node.type_name())
    }

    fn scalar(&self, expected: &str) -> Result<&'a Scalar> {
        self.node.as_scalar().ok_or_else(|| self.mismatch(expected))
    }

    fn integer(&self, expected: &str) -> Result<i128> {
        self.scalar(expected)?
            .as_i128()
            .ok_or_else(|| self.mismatch(expected))
    }

    /// Reads a boolean.
    pub fn decode_bool(&self) -> Result<bool> {
        self.scalar("bool")?
            .as_bool()
            .ok_or_else(|| self.mismatch("bool"))
    }

    decode_int! {
        decode_i8 => i8,
        decode_i16 => i16,
        decode_i32 => i32,
        decode_i64 => i64,
        decode_u8 => u8,
        decode_u16 => u16,
        decode_u32 => u32,
        decode_u64 => u64,
    }

    /// Reads a float. Integers are widened.
    pub fn decode_f64(&self) -> Result<f64> {
        self.scalar("f64")?
            .as_f64()
            .ok_or_else(|| self.mismatch("f64"))
    }

    /// Reads a float that fits in `f32`.
    ///
    /// Non-finite values pass through; finite values beyond the `f32` range
    /// are rejected with [`CodingError::DataCorrupted`].
    pub fn decode_f32(&self) -> Result<f32> {
        let value = self
            .scalar("f32")?
            .as_f64()
            .ok_or_else(|| self.mismatch("f32"))?;
        if value.is_finite() && value.abs() > f64::from(f32::MAX) {
            return Err(CodingError::data_corrupted(
                self.path.clone(),
                format!("number {value} does not fit in f32"),
            ));
        }
        Ok(value as f32)
    }

    /// Borrows a string from the tree.
    pub fn decode_str(&self) -> Result<&'a str> {
        self.node.as_str().ok_or_else(|| self.mismatch("string"))
    }

    /// Reads an owned string.
    pub fn decode_string(&self) -> Result<String> {
        self.decode_str().map(str::to_owned)
    }

    /// Reads a string holding exactly one character.
    pub fn decode_char(&self) -> Result<char> {
        let s = self.decode_str()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CodingError::data_corrupted(
                self.path.clone(),
                format!("expected a single character, found {} characters", s.chars().count()),
            )),
        }
    }

    /// Returns a copy of the whole subtree.
    pub fn decode_node(&self) -> Node {
        self.node.clone()
    }

    /// Lets `T` reconstruct itself from the node through a sub-decoder at the
    /// same path.
    pub fn decode<T: Decode>(&self) -> Result<T> {
        self.decode_or_delegate(self.node, self.path.clone())
    }
}

impl<'a> DecodingContainer<'a> for SingleValueDecoder<'a> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn config(&self) -> &'a CodingConfig {
        self.config
    }
}
