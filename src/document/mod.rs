/*!
The in-memory JSON document model.

A [`Document`] is a handle to a single [`Value`] node. Handles have value semantics:
cloning one is cheap because it only shares the node, and mutating through a handle
copies the node first if any other handle can still see it. So a clone never observes
changes made through the document it was cloned from.

`true`, `false`, and `null` nodes are canonical singletons shared by every document.
*/

use std::{
    collections::BTreeMap,
    fmt, mem,
    sync::Arc,
};

use crate::{
    de,
    error::{ParseError, TypeError},
    ser,
};

#[cfg(any(test, feature = "serde_json"))]
mod convert;
mod index;
mod number;
mod reclaim;
mod value;

pub use number::Number;
pub use value::Value;

/**
The entries of a JSON object, sorted by key.
*/
pub type Object = BTreeMap<String, Document>;

/**
The elements of a JSON array.
*/
pub type Array = Vec<Document>;

/**
The kind of a document.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    Number,
    String,
    Boolean,
    Null,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        })
    }
}

/**
A JSON document.

Documents can be constructed:

- From Rust values using the `From` and `FromIterator` implementations.
- By parsing text using [`Document::parse`] or [`Document::try_parse`].
- By indexing into a `null` document, which turns it into an array or object on demand.
*/
#[derive(Clone)]
pub struct Document {
    node: Arc<Value>,
}

impl Document {
    /**
    A `null` document.
    */
    #[inline]
    pub fn null() -> Self {
        Document {
            node: Arc::clone(value::null_node()),
        }
    }

    #[inline]
    fn from_node(value: Value) -> Self {
        Document {
            node: Arc::new(value),
        }
    }

    /**
    Parse a document from UTF-8 text.

    If the text isn't valid JSON then the result is `null`.
    Use [`Document::try_parse`] to find out why parsing failed.
    */
    pub fn parse(input: impl AsRef<[u8]>) -> Self {
        Self::try_parse(input).unwrap_or_else(|_| Document::null())
    }

    /**
    Parse a document from UTF-8 text, returning the reason and position of any error.
    */
    pub fn try_parse(input: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        de::Parser::new().parse(input)
    }

    /**
    Render this document as compact JSON text.
    */
    pub fn to_json_string(&self) -> String {
        ser::to_string(self)
    }

    /**
    The node this document refers to.
    */
    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.node
    }

    /**
    The kind of this document.
    */
    #[inline]
    pub fn kind(&self) -> Kind {
        self.node.kind()
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.kind() == Kind::Number
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.kind() == Kind::Boolean
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /**
    Whether the node behind this document is also referenced by another document.

    A shared node is copied before it's mutated.
    */
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.node) > 1
    }

    #[inline]
    fn expect_kind(&self, expected: Kind) -> Result<(), TypeError> {
        match self.kind() {
            found if found == expected => Ok(()),
            found => Err(TypeError::new(expected, found)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        self.expect_kind(Kind::Boolean)?;
        Ok(self.node.as_bool_unchecked())
    }

    pub fn as_number(&self) -> Result<Number, TypeError> {
        self.expect_kind(Kind::Number)?;
        Ok(self.node.as_number_unchecked())
    }

    /**
    The number as an integer.

    Doubles are truncated toward zero, saturating at the bounds of `i64`.
    A double that's NaN or infinite is an error.
    */
    pub fn as_int(&self) -> Result<i64, TypeError> {
        self.as_number()?.as_i64().ok_or_else(TypeError::non_finite)
    }

    pub fn as_double(&self) -> Result<f64, TypeError> {
        self.as_number().map(|n| n.as_f64())
    }

    pub fn as_str(&self) -> Result<&str, TypeError> {
        self.expect_kind(Kind::String)?;
        Ok(self.node.as_str_unchecked())
    }

    pub fn as_object(&self) -> Result<&Object, TypeError> {
        self.expect_kind(Kind::Object)?;
        Ok(self.node.as_object_unchecked())
    }

    pub fn as_array(&self) -> Result<&Array, TypeError> {
        self.expect_kind(Kind::Array)?;
        Ok(self.node.as_array_unchecked())
    }

    /**
    Get mutable access to the entries of an object.

    If the object is shared with other documents then it's copied first.
    */
    pub fn as_object_mut(&mut self) -> Result<&mut Object, TypeError> {
        self.expect_kind(Kind::Object)?;
        Ok(self.make_mut().as_object_unchecked_mut())
    }

    /**
    Get mutable access to the elements of an array.

    If the array is shared with other documents then it's copied first.
    */
    pub fn as_array_mut(&mut self) -> Result<&mut Array, TypeError> {
        self.expect_kind(Kind::Array)?;
        Ok(self.make_mut().as_array_unchecked_mut())
    }

    /**
    Look up the value for a key, if this is an object and the key is present.
    */
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_object().ok()?.get(key)
    }

    /**
    Look up the element at an index, if this is an array and the index is in bounds.
    */
    pub fn get_index(&self, index: usize) -> Option<&Document> {
        self.as_array().ok()?.get(index)
    }

    /**
    The number of entries in an object or elements in an array.

    Any other kind of document has a length of zero.
    */
    pub fn len(&self) -> usize {
        match &*self.node {
            Value::Object(o) => o.len(),
            Value::Array(a) => a.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /**
    Append an element to this array.

    If this isn't an array then it's replaced by an empty one first.
    */
    pub fn push(&mut self, value: impl Into<Document>) {
        self.vivify_array().push(value.into());
    }

    /**
    Insert an entry into this object, returning the previous value for the key.

    If this isn't an object then it's replaced by an empty one first.
    */
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Document>) -> Option<Document> {
        self.vivify_object().insert(key.into(), value.into())
    }

    /**
    Remove an entry from this object.

    Nothing is removed if this isn't an object.
    */
    pub fn remove(&mut self, key: &str) -> Option<Document> {
        if !self.as_object().ok()?.contains_key(key) {
            return None;
        }

        self.as_object_mut().ok()?.remove(key)
    }

    /**
    Remove an element from this array, shifting the elements after it down.

    Nothing is removed if this isn't an array or the index is out of bounds.
    */
    pub fn remove_index(&mut self, index: usize) -> Option<Document> {
        if index >= self.as_array().ok()?.len() {
            return None;
        }

        Some(self.as_array_mut().ok()?.remove(index))
    }

    /**
    Take the value out of this document, leaving `null` in its place.
    */
    pub fn take(&mut self) -> Document {
        mem::take(self)
    }

    /**
    Get mutable access to the node, copying it first if it's shared.
    */
    #[inline]
    fn make_mut(&mut self) -> &mut Value {
        Arc::make_mut(&mut self.node)
    }

    /**
    Turn this document into an object if it isn't one already.
    */
    fn vivify_object(&mut self) -> &mut Object {
        if !self.is_object() {
            *self = Document::from(Object::new());
        }

        self.make_mut().as_object_unchecked_mut()
    }

    /**
    Turn this document into an array if it isn't one already.
    */
    fn vivify_array(&mut self) -> &mut Array {
        if !self.is_array() {
            *self = Document::from(Array::new());
        }

        self.make_mut().as_array_unchecked_mut()
    }
}

impl Default for Document {
    #[inline]
    fn default() -> Self {
        Document::null()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Document(")?;
        ser::to_writer(&mut *f, self)?;
        f.write_str(")")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ser::to_writer(f, self)
    }
}

impl PartialEq for Document {
    #[inline]
    fn eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.node.equals(&other.node)
    }
}

macro_rules! impl_eq_int {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Document {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(&*self.node, Value::Number(n) if *n == Number::Int(i64::from(*other)))
                }
            }
        )*
    };
}

impl_eq_int!(i32, i64, u32);

impl PartialEq<f64> for Document {
    fn eq(&self, other: &f64) -> bool {
        matches!(&*self.node, Value::Number(n) if *n == Number::Float(*other))
    }
}

impl PartialEq<bool> for Document {
    fn eq(&self, other: &bool) -> bool {
        matches!(&*self.node, Value::Boolean(b) if b == other)
    }
}

impl PartialEq<str> for Document {
    fn eq(&self, other: &str) -> bool {
        matches!(&*self.node, Value::String(s) if s == other)
    }
}

impl<'a> PartialEq<&'a str> for Document {
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}

impl From<()> for Document {
    #[inline]
    fn from(_: ()) -> Self {
        Document::null()
    }
}

impl From<bool> for Document {
    #[inline]
    fn from(b: bool) -> Self {
        Document {
            node: Arc::clone(value::bool_node(b)),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Document {
                #[inline]
                fn from(i: $ty) -> Self {
                    Document::from_node(Value::Number(Number::Int(i64::from(i))))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Document {
    #[inline]
    fn from(f: f32) -> Self {
        Document::from(f64::from(f))
    }
}

impl From<f64> for Document {
    #[inline]
    fn from(f: f64) -> Self {
        Document::from_node(Value::Number(Number::Float(f)))
    }
}

impl From<Number> for Document {
    #[inline]
    fn from(n: Number) -> Self {
        Document::from_node(Value::Number(n))
    }
}

impl<'a> From<&'a str> for Document {
    #[inline]
    fn from(s: &'a str) -> Self {
        Document::from_node(Value::String(s.to_owned()))
    }
}

impl<'a> From<&'a String> for Document {
    #[inline]
    fn from(s: &'a String) -> Self {
        Document::from(s.as_str())
    }
}

impl From<String> for Document {
    #[inline]
    fn from(s: String) -> Self {
        Document::from_node(Value::String(s))
    }
}

impl From<Object> for Document {
    #[inline]
    fn from(o: Object) -> Self {
        Document::from_node(Value::Object(o))
    }
}

impl From<Array> for Document {
    #[inline]
    fn from(a: Array) -> Self {
        Document::from_node(Value::Array(a))
    }
}

impl<T: Into<Document>> From<Option<T>> for Document {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

impl From<Value> for Document {
    #[inline]
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Document::null(),
            Value::Boolean(b) => Document::from(b),
            v => Document::from_node(v),
        }
    }
}

impl FromIterator<Document> for Document {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Document::from(iter.into_iter().collect::<Array>())
    }
}

/**
Collect entries into an object.

If a key appears more than once then the last value for it wins.
*/
impl<K: Into<String>> FromIterator<(K, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Document)>>(iter: I) -> Self {
        Document::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect::<Object>(),
        )
    }
}
