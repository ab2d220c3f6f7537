/*!
Rendering documents as JSON text.

Output is compact, with no whitespace between tokens. Object entries are written in
sorted key order. Strings escape `"`, `\`, and control characters; everything else,
including non-ASCII characters, is written as-is.

Like the parser, the writer keeps an explicit stack of the containers it's inside of
rather than recursing, so deeply nested documents can be written too.
*/

use std::{collections::btree_map, fmt, slice};

use crate::document::{Document, Value};

/**
Render a document as a string of compact JSON.
*/
pub fn to_string(doc: &Document) -> String {
    let mut buf = String::new();

    // writing into a `String` can't fail
    let _ = to_writer(&mut buf, doc);

    buf
}

/**
Write a document as compact JSON.
*/
pub fn to_writer<W: fmt::Write + ?Sized>(w: &mut W, doc: &Document) -> fmt::Result {
    let mut stack: Vec<Frame> = Vec::new();
    let mut next = Some(doc);

    loop {
        if let Some(doc) = next.take() {
            match doc.as_value() {
                Value::Object(entries) => {
                    w.write_char('{')?;
                    stack.push(Frame::Map {
                        entries: entries.iter(),
                        first: true,
                    });
                }
                Value::Array(elements) => {
                    w.write_char('[')?;
                    stack.push(Frame::Arr {
                        elements: elements.iter(),
                        first: true,
                    });
                }
                Value::Number(n) => write!(w, "{}", n)?,
                Value::String(s) => write_escaped(w, s)?,
                Value::Boolean(true) => w.write_str("true")?,
                Value::Boolean(false) => w.write_str("false")?,
                Value::Null => w.write_str("null")?,
            }
        }

        // find the next value to write, closing any containers that are finished
        let frame = match stack.last_mut() {
            Some(frame) => frame,
            None => return Ok(()),
        };

        match frame {
            Frame::Arr { elements, first } => match elements.next() {
                Some(element) => {
                    if !*first {
                        w.write_char(',')?;
                    }
                    *first = false;

                    next = Some(element);
                }
                None => {
                    w.write_char(']')?;
                    stack.pop();
                }
            },
            Frame::Map { entries, first } => match entries.next() {
                Some((key, value)) => {
                    if !*first {
                        w.write_char(',')?;
                    }
                    *first = false;

                    write_escaped(w, key)?;
                    w.write_char(':')?;

                    next = Some(value);
                }
                None => {
                    w.write_char('}')?;
                    stack.pop();
                }
            },
        }
    }
}

enum Frame<'doc> {
    Arr {
        elements: slice::Iter<'doc, Document>,
        first: bool,
    },
    Map {
        entries: btree_map::Iter<'doc, String, Document>,
        first: bool,
    },
}

/**
Write a string literal, escaping it so it parses back to the same string.
*/
fn write_escaped<W: fmt::Write + ?Sized>(w: &mut W, s: &str) -> fmt::Result {
    w.write_char('"')?;

    // escapes are all ASCII, so the unescaped runs between them
    // always start and end on character boundaries
    let mut start = 0;
    for (i, b) in s.bytes().enumerate() {
        let escape = match b {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0c => "\\f",
            0x00..=0x1f => "",
            _ => continue,
        };

        if start < i {
            w.write_str(&s[start..i])?;
        }

        if escape.is_empty() {
            write!(w, "\\u{:04x}", b)?;
        } else {
            w.write_str(escape)?;
        }

        start = i + 1;
    }

    if start < s.len() {
        w.write_str(&s[start..])?;
    }

    w.write_char('"')
}
