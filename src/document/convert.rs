use std::{collections::btree_map, slice};

use super::{Document, Number, Object, Value};

impl Document {
    /**
    Convert a document into a [`serde_json::Value`].

    Doubles that aren't finite have no JSON representation and become `null`.

    The conversion itself doesn't recurse, but dropping a [`serde_json::Value`] does,
    so very deeply nested values need to be taken apart before they're dropped.
    */
    pub fn to_value(&self) -> serde_json::Value {
        let mut stack = Vec::new();
        let mut doc = self;

        loop {
            let mut value = match doc.as_value() {
                Value::Object(o) => {
                    stack.push(Frame::Map {
                        entries: o.iter(),
                        key: None,
                        values: serde_json::Map::new(),
                    });
                    None
                }
                Value::Array(a) => {
                    stack.push(Frame::Arr {
                        elements: a.iter(),
                        values: Vec::with_capacity(a.len()),
                    });
                    None
                }
                Value::Number(Number::Int(i)) => Some(serde_json::Value::Number((*i).into())),
                Value::Number(Number::Float(f)) => Some(
                    serde_json::Number::from_f64(*f)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null),
                ),
                Value::String(s) => Some(serde_json::Value::String(s.clone())),
                Value::Boolean(b) => Some(serde_json::Value::Bool(*b)),
                Value::Null => Some(serde_json::Value::Null),
            };

            // add the finished value to its parent, closing any parents that are
            // also finished, until there's another child to convert
            doc = loop {
                let next = match stack.last_mut() {
                    Some(Frame::Arr { elements, values }) => {
                        values.extend(value.take());
                        elements.next()
                    }
                    Some(Frame::Map {
                        entries,
                        key,
                        values,
                    }) => {
                        if let (Some(k), Some(v)) = (key.take(), value.take()) {
                            values.insert(k, v);
                        }

                        entries.next().map(|(k, v)| {
                            *key = Some(k.clone());
                            v
                        })
                    }
                    None => return value.unwrap_or(serde_json::Value::Null),
                };

                match next {
                    Some(child) => break child,
                    None => {
                        value = stack.pop().map(|frame| match frame {
                            Frame::Arr { values, .. } => serde_json::Value::Array(values),
                            Frame::Map { values, .. } => serde_json::Value::Object(values),
                        })
                    }
                }
            };
        }
    }

    /**
    Convert a [`serde_json::Value`] into a document.

    Numbers that fit in an `i64` are kept as integers. Everything else becomes a double.

    This recurses once per level of nesting. Values parsed by `serde_json` are limited to
    128 levels.
    */
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Document::from(
                map.into_iter()
                    .map(|(k, v)| (k, Document::from_value(v)))
                    .collect::<Object>(),
            ),
            serde_json::Value::Array(arr) => arr.into_iter().map(Document::from_value).collect(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Document::from(i),
                None => Document::from(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Document::from(s),
            serde_json::Value::Bool(b) => Document::from(b),
            serde_json::Value::Null => Document::null(),
        }
    }
}

impl From<serde_json::Value> for Document {
    #[inline]
    fn from(value: serde_json::Value) -> Self {
        Document::from_value(value)
    }
}

enum Frame<'doc> {
    Arr {
        elements: slice::Iter<'doc, Document>,
        values: Vec<serde_json::Value>,
    },
    Map {
        entries: btree_map::Iter<'doc, String, Document>,
        key: Option<String>,
        values: serde_json::Map<String, serde_json::Value>,
    },
}
