/*!
# `simple-json`

A small JSON value model with a strict parser and a compact serializer.

Documents are cheap to clone and copy their nodes on write, so a clone can be freely
mutated without affecting the original:

```
use simple_json::Document;

let mut doc = Document::parse(r#"{"name":"widget","tags":["small","fast"]}"#);

let original = doc.clone();
doc["tags"][2] = "fluffy".into();

assert_eq!(3, doc["tags"].len());
assert_eq!(2, original["tags"].len());
assert_eq!(
    r#"{"name":"widget","tags":["small","fast","fluffy"]}"#,
    doc.to_json_string()
);
```

Parsing, comparing, serializing, and dropping documents never recurse on the native stack,
so arbitrarily deeply nested input is handled without overflowing it.

Any unchecked operations performed on documents are done using macros that use the checked
variant in test/debug builds (or when the `checked` cfg is enabled) to make sure we don't
ever cause UB when working through documents.
*/

#[macro_use]
mod macros;

mod std_ext;
mod unescape;

pub mod de;
pub mod document;
pub mod error;
pub mod ser;

pub use self::{
    document::{Array, Document, Kind, Number, Object, Value},
    error::{ParseError, ParseErrorKind, TypeError},
};

/**
Parse a document from UTF-8 text.

This is the same as [`Document::try_parse`].
*/
pub fn parse(input: impl AsRef<[u8]>) -> Result<Document, ParseError> {
    de::Parser::new().parse(input)
}
