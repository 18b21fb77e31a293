//! `application/x-www-form-urlencoded` serializer.
//!
//! Walks a `Serialize` value and produces ordered `(key, value)` pairs:
//!
//! - `None` fields are omitted; `Some(v)` is emitted even when `v` is zero
//! - sequences become repeated `key[]=v` pairs, nothing for an empty one
//! - nested structs and maps become `key[sub]=v`
//! - unit enum variants use their serde name
//!
//! Byte strings, data-carrying enum variants, and containers inside a
//! sequence are rejected with [`EncodeError::Unsupported`].

use serde::ser::{self, Impossible, Serialize};

use crate::rest::errors::EncodeError;

type Pairs = Vec<(String, String)>;

/// Serializes `value` into ordered form pairs.
///
/// # Errors
///
/// Returns [`EncodeError`] naming the first field that cannot be encoded.
pub fn to_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Pairs, EncodeError> {
    let mut pairs = Vec::new();
    value.serialize(RootSerializer { out: &mut pairs })?;
    Ok(pairs)
}

/// Serializes `value` into a url-encoded form string.
///
/// # Errors
///
/// Returns [`EncodeError`] naming the first field that cannot be encoded.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(join_pairs(&to_pairs(value)?))
}

/// Joins pairs as `k=v&k=v`, escaping every key and value.
#[must_use]
pub fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn unsupported(field: &str, kind: &'static str) -> EncodeError {
    EncodeError::Unsupported {
        field: field.to_string(),
        kind,
    }
}

fn child_key(prefix: Option<&str>, key: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |prefix| format!("{prefix}[{key}]"))
}

/// Accepts only struct-like top-level values.
struct RootSerializer<'a> {
    out: &'a mut Pairs,
}

macro_rules! reject_root {
    ($($method:ident($($arg:ty),*) => $kind:literal;)*) => {
        $(
            fn $method(self, $(_: $arg),*) -> Result<Self::Ok, Self::Error> {
                Err(unsupported("", $kind))
            }
        )*
    };
}

impl<'a> ser::Serializer for RootSerializer<'a> {
    type Ok = ();
    type Error = EncodeError;
    type SerializeSeq = Impossible<(), EncodeError>;
    type SerializeTuple = Impossible<(), EncodeError>;
    type SerializeTupleStruct = Impossible<(), EncodeError>;
    type SerializeTupleVariant = Impossible<(), EncodeError>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), EncodeError>;

    reject_root! {
        serialize_bool(bool) => "a top-level bool";
        serialize_i8(i8) => "a top-level integer";
        serialize_i16(i16) => "a top-level integer";
        serialize_i32(i32) => "a top-level integer";
        serialize_i64(i64) => "a top-level integer";
        serialize_u8(u8) => "a top-level integer";
        serialize_u16(u16) => "a top-level integer";
        serialize_u32(u32) => "a top-level integer";
        serialize_u64(u64) => "a top-level integer";
        serialize_f32(f32) => "a top-level float";
        serialize_f64(f64) => "a top-level float";
        serialize_char(char) => "a top-level char";
        serialize_str(&str) => "a top-level string";
        serialize_bytes(&[u8]) => "a byte string";
        serialize_unit_variant(&'static str, u32, &'static str) => "a top-level enum";
    }

    fn serialize_none(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), EncodeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), EncodeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), EncodeError> {
        Err(unsupported("", "a top-level enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, EncodeError> {
        Err(unsupported("", "a top-level sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        Err(unsupported("", "a top-level tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        Err(unsupported("", "a top-level tuple"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(unsupported("", "a top-level enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        Ok(MapSerializer {
            out: self.out,
            prefix: None,
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        Ok(StructSerializer {
            out: self.out,
            prefix: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(unsupported("", "a top-level enum"))
    }
}

/// Serializes one field value under a fully qualified key.
struct ValueSerializer<'a> {
    out: &'a mut Pairs,
    key: String,
    in_seq: bool,
}

impl ValueSerializer<'_> {
    fn push(self, value: String) -> Result<(), EncodeError> {
        self.out.push((self.key, value));
        Ok(())
    }
}

macro_rules! display_scalar {
    ($($method:ident($ty:ty);)*) => {
        $(
            fn $method(self, v: $ty) -> Result<(), EncodeError> {
                self.push(v.to_string())
            }
        )*
    };
}

impl<'a> ser::Serializer for ValueSerializer<'a> {
    type Ok = ();
    type Error = EncodeError;
    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), EncodeError>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), EncodeError>;

    display_scalar! {
        serialize_bool(bool);
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_f32(f32);
        serialize_f64(f64);
        serialize_char(char);
    }

    fn serialize_str(self, v: &str) -> Result<(), EncodeError> {
        self.push(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), EncodeError> {
        Err(unsupported(&self.key, "a byte string"))
    }

    fn serialize_none(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), EncodeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), EncodeError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<(), EncodeError> {
        self.push(variant.to_string())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), EncodeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), EncodeError> {
        Err(unsupported(&self.key, "an enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, EncodeError> {
        if self.in_seq {
            return Err(unsupported(&self.key, "a nested sequence"));
        }
        Ok(SeqSerializer {
            key: format!("{}[]", self.key),
            out: self.out,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(unsupported(&self.key, "an enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        if self.in_seq {
            return Err(unsupported(&self.key, "a map inside a sequence"));
        }
        Ok(MapSerializer {
            out: self.out,
            prefix: Some(self.key),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        if self.in_seq {
            return Err(unsupported(&self.key, "a struct inside a sequence"));
        }
        Ok(StructSerializer {
            out: self.out,
            prefix: Some(self.key),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(unsupported(&self.key, "an enum variant with data"))
    }
}

struct StructSerializer<'a> {
    out: &'a mut Pairs,
    prefix: Option<String>,
}

impl ser::SerializeStruct for StructSerializer<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), EncodeError> {
        let key = child_key(self.prefix.as_deref(), key);
        value
            .serialize(ValueSerializer {
                out: &mut *self.out,
                key: key.clone(),
                in_seq: false,
            })
            .map_err(|e| e.with_field(&key))
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

struct MapSerializer<'a> {
    out: &'a mut Pairs,
    prefix: Option<String>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), EncodeError> {
        let key = key
            .serialize(KeySerializer)
            .map_err(|e| e.with_field(self.prefix.as_deref().unwrap_or_default()))?;
        self.pending_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| <EncodeError as ser::Error>::custom("map value without a key"))?;
        let key = child_key(self.prefix.as_deref(), &key);
        value
            .serialize(ValueSerializer {
                out: &mut *self.out,
                key: key.clone(),
                in_seq: false,
            })
            .map_err(|e| e.with_field(&key))
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

struct SeqSerializer<'a> {
    out: &'a mut Pairs,
    key: String,
}

impl SeqSerializer<'_> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        value.serialize(ValueSerializer {
            out: &mut *self.out,
            key: self.key.clone(),
            in_seq: true,
        })
    }
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        self.element(value)
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        self.element(value)
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = EncodeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        self.element(value)
    }

    fn end(self) -> Result<(), EncodeError> {
        Ok(())
    }
}

/// Turns a map key into a string. Only scalar keys are accepted.
struct KeySerializer;

macro_rules! display_key {
    ($($method:ident($ty:ty);)*) => {
        $(
            fn $method(self, v: $ty) -> Result<String, EncodeError> {
                Ok(v.to_string())
            }
        )*
    };
}

macro_rules! reject_key {
    ($($method:ident($($arg:ty),*);)*) => {
        $(
            fn $method(self, $(_: $arg),*) -> Result<String, EncodeError> {
                Err(unsupported("", "a non-scalar map key"))
            }
        )*
    };
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = EncodeError;
    type SerializeSeq = Impossible<String, EncodeError>;
    type SerializeTuple = Impossible<String, EncodeError>;
    type SerializeTupleStruct = Impossible<String, EncodeError>;
    type SerializeTupleVariant = Impossible<String, EncodeError>;
    type SerializeMap = Impossible<String, EncodeError>;
    type SerializeStruct = Impossible<String, EncodeError>;
    type SerializeStructVariant = Impossible<String, EncodeError>;

    display_key! {
        serialize_bool(bool);
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_char(char);
        serialize_str(&str);
    }

    reject_key! {
        serialize_f32(f32);
        serialize_f64(f64);
        serialize_bytes(&[u8]);
        serialize_none();
        serialize_unit();
        serialize_unit_struct(&'static str);
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<String, EncodeError> {
        Ok(variant.to_string())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String, EncodeError> {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, EncodeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, EncodeError> {
        Err(unsupported("", "a non-scalar map key"))
    }
}
