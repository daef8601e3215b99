//! Wire category classification for declared field types.

use crate::error::{SchemaError, SchemaResult};

/// The wire category of a field: the fixed vocabulary of encodable shapes.
///
/// Scalars, strings, and byte runs are leaves. `List` and `Map` are also
/// leaves from the diff's perspective: their element/value categories are
/// tracked so the codec can encode them, but a changed collection is always
/// compared and replaced as a whole, never element-diffed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireCategory {
    /// Boolean, one byte on the wire.
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer, little-endian.
    I16,
    /// Signed 32-bit integer, little-endian.
    I32,
    /// Signed 64-bit integer, little-endian.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer, little-endian.
    U16,
    /// Unsigned 32-bit integer, little-endian.
    U32,
    /// Unsigned 64-bit integer, little-endian.
    U64,
    /// 32-bit IEEE-754 float, little-endian bit pattern.
    F32,
    /// 64-bit IEEE-754 float, little-endian bit pattern.
    F64,
    /// UTF-8 text, varuint length prefix.
    Str,
    /// Raw bytes, varuint length prefix.
    Bytes,
    /// Ordered list of elements, varuint count prefix.
    List(Box<WireCategory>),
    /// Key/value map, varuint entry-count prefix.
    Map(Box<WireCategory>, Box<WireCategory>),
}

impl WireCategory {
    /// Classifies a declared type string into a wire category.
    ///
    /// The vocabulary is `bool`, `i8`/`i16`/`i32`/`i64`, `u8`/`u16`/`u32`/
    /// `u64`, `f32`/`f64`, `string`, `bytes`, `list<T>`, and `map<K,V>`.
    /// Integer selection is by exact bit width and signedness; platform-width
    /// names (`int`, `usize`, ...) are rejected. Collection classification
    /// inspects only the outer shape; the element/value declarations are
    /// classified recursively for codec purposes.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedType`] for anything outside the
    /// vocabulary and [`SchemaError::InvalidMapKey`] for a map whose key
    /// category is not a scalar or string.
    pub fn classify(declared: &str) -> SchemaResult<Self> {
        let declared = declared.trim();
        match declared {
            "bool" => Ok(Self::Bool),
            "i8" => Ok(Self::I8),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            "string" => Ok(Self::Str),
            "bytes" => Ok(Self::Bytes),
            _ => Self::classify_collection(declared),
        }
    }

    fn classify_collection(declared: &str) -> SchemaResult<Self> {
        if let Some(elem) = strip_generic(declared, "list") {
            let elem = Self::classify(elem)?;
            return Ok(Self::List(Box::new(elem)));
        }
        if let Some(params) = strip_generic(declared, "map") {
            let (key_decl, value_decl) =
                split_top_level(params).ok_or_else(|| SchemaError::UnsupportedType {
                    declared: declared.to_string(),
                })?;
            let key = Self::classify(key_decl)?;
            if !key.is_map_key() {
                return Err(SchemaError::InvalidMapKey {
                    declared: key_decl.trim().to_string(),
                });
            }
            let value = Self::classify(value_decl)?;
            return Ok(Self::Map(Box::new(key), Box::new(value)));
        }
        Err(SchemaError::UnsupportedType {
            declared: declared.to_string(),
        })
    }

    /// Returns `true` for categories usable as map keys (scalars and strings).
    #[must_use]
    pub const fn is_map_key(&self) -> bool {
        !matches!(self, Self::Bytes | Self::List(_) | Self::Map(..))
    }

    /// Returns `true` for the collection categories (`list`, `map`).
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(..))
    }

    /// Returns `true` for the 64-bit integer categories.
    #[must_use]
    pub const fn is_identity_compatible(&self) -> bool {
        matches!(self, Self::I64 | Self::U64)
    }

    /// Returns the category's short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Str => "string",
            Self::Bytes => "bytes",
            Self::List(_) => "list",
            Self::Map(..) => "map",
        }
    }
}

/// Strips `name<` and the trailing `>` from a generic declaration.
fn strip_generic<'a>(declared: &'a str, name: &str) -> Option<&'a str> {
    declared
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Splits `K, V` at the first comma outside nested angle brackets.
fn split_top_level(params: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (idx, ch) in params.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                return Some((&params[..idx], &params[idx + 1..]));
            }
            _ => {}
        }
    }
    None
}
