use std::{
    ptr,
    sync::{Arc, OnceLock},
};

use super::{Array, Document, Kind, Number, Object};

/**
A single node in a document tree.

Composite nodes hold handles to their children, so cloning a node only copies
its immediate container. Each child is copied on write independently when mutated.
*/
#[derive(Debug, Clone)]
pub enum Value {
    Object(Object),
    Array(Array),
    Number(Number),
    String(String),
    Boolean(bool),
    Null,
}

impl Value {
    /**
    The kind of this node.
    */
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::Null => Kind::Null,
        }
    }

    /**
    Compare two nodes structurally.

    Nodes are equal when they're the same kind and their contents are equal.
    Numbers compare by value, so `5` equals `5.0`.

    The comparison walks the trees with an explicit worklist, so it doesn't
    recurse for deeply nested documents.
    */
    pub fn equals(&self, other: &Value) -> bool {
        let mut pending: Vec<(&Value, &Value)> = vec![(self, other)];

        while let Some((l, r)) = pending.pop() {
            // shared nodes are trivially equal
            if ptr::eq(l, r) {
                continue;
            }

            match (l, r) {
                (Value::Object(l), Value::Object(r)) => {
                    if l.len() != r.len() {
                        return false;
                    }

                    // keys are sorted, so equal objects line up entry by entry
                    for ((lk, lv), (rk, rv)) in l.iter().zip(r.iter()) {
                        if lk != rk {
                            return false;
                        }

                        pending.push((lv.as_value(), rv.as_value()));
                    }
                }
                (Value::Array(l), Value::Array(r)) => {
                    if l.len() != r.len() {
                        return false;
                    }

                    pending.extend(l.iter().zip(r.iter()).map(|(l, r)| (l.as_value(), r.as_value())));
                }
                (Value::Number(l), Value::Number(r)) => {
                    if l != r {
                        return false;
                    }
                }
                (Value::String(l), Value::String(r)) => {
                    if l != r {
                        return false;
                    }
                }
                (Value::Boolean(l), Value::Boolean(r)) => {
                    if l != r {
                        return false;
                    }
                }
                (Value::Null, Value::Null) => (),
                _ => return false,
            }
        }

        true
    }

    #[inline]
    pub(crate) fn as_object_unchecked(&self) -> &Object {
        match self {
            Value::Object(o) => o,
            v => kind_unreachable!(Kind::Object, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_object_unchecked_mut(&mut self) -> &mut Object {
        match self {
            Value::Object(o) => o,
            v => kind_unreachable!(Kind::Object, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_array_unchecked(&self) -> &Array {
        match self {
            Value::Array(a) => a,
            v => kind_unreachable!(Kind::Array, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_array_unchecked_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(a) => a,
            v => kind_unreachable!(Kind::Array, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_number_unchecked(&self) -> Number {
        match self {
            Value::Number(n) => *n,
            v => kind_unreachable!(Kind::Number, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_str_unchecked(&self) -> &str {
        match self {
            Value::String(s) => s,
            v => kind_unreachable!(Kind::String, v.kind()),
        }
    }

    #[inline]
    pub(crate) fn as_bool_unchecked(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            v => kind_unreachable!(Kind::Boolean, v.kind()),
        }
    }
}

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Value) -> bool {
        self.equals(other)
    }
}

/**
The canonical `null` node.

Every `null` in every document shares this node. It's created on first use
and never mutated or freed.
*/
pub(super) fn null_node() -> &'static Arc<Value> {
    static NULL: OnceLock<Arc<Value>> = OnceLock::new();

    NULL.get_or_init(|| Arc::new(Value::Null))
}

/**
The canonical `true` and `false` nodes.
*/
pub(super) fn bool_node(b: bool) -> &'static Arc<Value> {
    static TRUE: OnceLock<Arc<Value>> = OnceLock::new();
    static FALSE: OnceLock<Arc<Value>> = OnceLock::new();

    if b {
        TRUE.get_or_init(|| Arc::new(Value::Boolean(true)))
    } else {
        FALSE.get_or_init(|| Arc::new(Value::Boolean(false)))
    }
}

/**
A `null` document with a `'static` lifetime, returned by lookups that miss.
*/
pub(super) fn null_document() -> &'static Document {
    static NULL: OnceLock<Document> = OnceLock::new();

    NULL.get_or_init(Document::null)
}
