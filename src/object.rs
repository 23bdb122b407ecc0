//! PDF object types used when writing reports.
//!
//! Dictionaries are ordered maps so that serialized output is byte-for-byte
//! reproducible for the same input.

use std::collections::BTreeMap;

/// Dictionary of PDF objects keyed by name (without the leading `/`).
pub type Dictionary = BTreeMap<String, Object>;

/// The object kinds a report needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    /// Raw string bytes, written literal or hex depending on content
    String(Vec<u8>),
    /// Name without the leading `/`
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    /// Stream dictionary plus data; `/Length` is filled in on write
    Stream { dict: Dictionary, data: bytes::Bytes },
    Reference(ObjectRef),
}

/// `id gen R`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    pub id: u32,
    pub gen: u16,
}

impl ObjectRef {
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// PDF text string: ASCII as-is, anything else as UTF-16BE with a byte order mark.
    pub fn text(s: &str) -> Object {
        if s.is_ascii() {
            return Object::String(s.as_bytes().to_vec());
        }
        let mut bytes = vec![0xFE, 0xFF];
        for unit in s.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes)
    }

    /// Reference to generation 0 of an object.
    pub fn reference(id: u32) -> Object {
        Object::Reference(ObjectRef::new(id, 0))
    }

    /// Dictionary from `(key, value)` pairs.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        Object::Dictionary(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Rectangle `[llx lly urx ury]` from origin and size.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Real(x),
            Object::Real(y),
            Object::Real(x + width),
            Object::Real(y + height),
        ])
    }

    /// The name, if this is a name object.
    pub fn as_name(&self) -> Option<&str> {
        if let Object::Name(name) = self {
            Some(name)
        } else {
            None
        }
    }

    /// The dictionary of a dictionary or stream object.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) | Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_corner_array() {
        let rect = Object::rect(0.0, 0.0, 612.0, 792.0);
        assert_eq!(
            rect,
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(612.0),
                Object::Real(792.0),
            ])
        );
    }

    #[test]
    fn test_dict_helper_and_accessors() {
        let obj = Object::dict(vec![("Type", Object::name("Catalog"))]);
        let dict = obj.as_dict().unwrap();
        assert_eq!(dict.get("Type").and_then(|o| o.as_name()), Some("Catalog"));
    }

    #[test]
    fn test_reference_display() {
        assert_eq!(ObjectRef::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_text_ascii_is_verbatim() {
        assert_eq!(Object::text("Report"), Object::String(b"Report".to_vec()));
    }

    #[test]
    fn test_text_non_ascii_is_utf16be() {
        assert_eq!(
            Object::text("Café"),
            Object::String(vec![0xFE, 0xFF, 0x00, b'C', 0x00, b'a', 0x00, b'f', 0x00, 0xE9])
        );
    }
}
