/*!
Parsing JSON text into documents.

The parser is a recursive descent parser with the recursion replaced by an explicit stack.
Each object or array that's still being filled is a frame on the stack. When a value is
complete it's added to the frame on top of the stack, and if that finishes the frame then
the frame becomes a complete value itself and is added to the one below it.

This means the depth of the native call stack doesn't depend on how deeply nested the input
is, so inputs like `[[[[[[[[[[[[[[[[[[[[[[[[[..` can't overflow it.

The parser is strict:

- The input must be valid UTF8.
- Whitespace is only space, tab, carriage return, and line feed.
- Objects can't repeat a key.
- Anything after the top-level value besides whitespace is an error.

Errors are returned rather than panicking, and carry the byte offset into the input
where they were detected.
*/

mod number;

use std::str;

use crate::{
    document::{Array, Document, Object},
    error::{ParseError, ParseErrorKind},
    unescape::{char_at, unescape},
};

/**
Options for parsing documents.
*/
#[derive(Debug, Clone, Default)]
pub struct Parser {
    max_depth: Option<usize>,
}

impl Parser {
    /**
    A parser with the default options.

    There's no limit on how deeply nested the input can be.
    */
    pub fn new() -> Self {
        Parser::default()
    }

    /**
    Limit how many objects and arrays can be nested within each other.
    */
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /**
    Parse a single document from UTF8 text.
    */
    pub fn parse(&self, input: impl AsRef<[u8]>) -> Result<Document, ParseError> {
        let input = scan_begin(input.as_ref())?;

        let mut scan = Scan {
            input,
            input_offset: 0,
            stack: Vec::new(),
            max_depth: self.max_depth,
        };

        let document = scan.value()?;
        scan_end(&mut scan)?;

        Ok(document)
    }
}

/**
Validate the input is UTF8.

Strings are built from ranges of the input, so this guarantees they're valid too.
*/
#[inline]
fn scan_begin(input: &[u8]) -> Result<&[u8], ParseError> {
    match str::from_utf8(input) {
        Ok(input) => Ok(input.as_bytes()),
        Err(e) => Err(ParseError::new(ParseErrorKind::InvalidUtf8, e.valid_up_to())),
    }
}

/**
Ensure there's nothing but whitespace after the document.
*/
#[inline]
fn scan_end(scan: &mut Scan) -> Result<(), ParseError> {
    test_assert!(scan.stack.is_empty());

    scan.skip_whitespace();

    if scan.input_offset < scan.input.len() {
        return Err(scan.err(ParseErrorKind::TrailingCharacters));
    }

    Ok(())
}

/**
The state of our JSON parser.
*/
struct Scan<'input> {
    /**
    The complete raw input buffer.
    */
    input: &'input [u8],
    /**
    The current offset in the input.
    */
    input_offset: usize,
    /**
    The objects and arrays that have been opened but not closed yet.
    */
    stack: Vec<Frame>,
    max_depth: Option<usize>,
}

/**
An object or array that's still being parsed.
*/
enum Frame {
    Arr(Array),
    /**
    An object along with the key for the value currently being parsed.
    */
    Map { entries: Object, key: String },
}

impl<'input> Scan<'input> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.input_offset).copied()
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.input_offset += 1;
        }
    }

    #[cold]
    fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.input_offset)
    }

    /**
    An error for an unexpected byte at the current offset, or for running out of input.
    */
    #[cold]
    fn err_unexpected(&self, expected: ParseErrorKind) -> ParseError {
        match self.peek() {
            Some(_) => self.err(expected),
            None => self.err(ParseErrorKind::UnexpectedEnd),
        }
    }

    /**
    Parse a complete value, including everything nested within it.
    */
    fn value(&mut self) -> Result<Document, ParseError> {
        'value: loop {
            self.skip_whitespace();

            let mut value = match self.peek() {
                Some(b'{') => {
                    self.enter()?;
                    self.input_offset += 1;
                    self.skip_whitespace();

                    if let Some(b'}') = self.peek() {
                        self.input_offset += 1;
                        Document::from(Object::new())
                    } else {
                        let entries = Object::new();
                        let key = self.key(&entries)?;

                        self.stack.push(Frame::Map { entries, key });
                        continue 'value;
                    }
                }
                Some(b'[') => {
                    self.enter()?;
                    self.input_offset += 1;
                    self.skip_whitespace();

                    if let Some(b']') = self.peek() {
                        self.input_offset += 1;
                        Document::from(Array::new())
                    } else {
                        self.stack.push(Frame::Arr(Array::new()));
                        continue 'value;
                    }
                }
                Some(b'"') => Document::from(self.string()?),
                Some(b't') => self.literal("true", Document::from(true))?,
                Some(b'f') => self.literal("false", Document::from(false))?,
                Some(b'n') => self.literal("null", Document::null())?,
                Some(b'-' | b'0'..=b'9') => self.number()?,
                Some(_) => {
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(char_at(
                        self.input,
                        self.input_offset,
                    ))))
                }
                None => return Err(self.err(ParseErrorKind::UnexpectedEnd)),
            };

            // the value is complete, so add it to its parent
            // and keep closing parents until one expects another value
            loop {
                let frame = match self.stack.pop() {
                    Some(frame) => frame,
                    None => return Ok(value),
                };

                self.skip_whitespace();

                match frame {
                    Frame::Arr(mut elements) => {
                        elements.push(value);

                        match self.peek() {
                            Some(b',') => {
                                self.input_offset += 1;
                                self.stack.push(Frame::Arr(elements));

                                continue 'value;
                            }
                            Some(b']') => {
                                self.input_offset += 1;
                                value = Document::from(elements);
                            }
                            _ => {
                                return Err(
                                    self.err_unexpected(ParseErrorKind::ExpectedArraySeparator)
                                )
                            }
                        }
                    }
                    Frame::Map { mut entries, key } => {
                        entries.insert(key, value);

                        match self.peek() {
                            Some(b',') => {
                                self.input_offset += 1;
                                let key = self.key(&entries)?;
                                self.stack.push(Frame::Map { entries, key });

                                continue 'value;
                            }
                            Some(b'}') => {
                                self.input_offset += 1;
                                value = Document::from(entries);
                            }
                            _ => {
                                return Err(
                                    self.err_unexpected(ParseErrorKind::ExpectedObjectSeparator)
                                )
                            }
                        }
                    }
                }
            }
        }
    }

    /**
    Check another object or array can be opened.
    */
    #[inline]
    fn enter(&self) -> Result<(), ParseError> {
        match self.max_depth {
            Some(max_depth) if self.stack.len() >= max_depth => {
                Err(self.err(ParseErrorKind::DepthLimitExceeded(max_depth)))
            }
            _ => Ok(()),
        }
    }

    /**
    Parse an object key and the `:` that follows it.

    Keys are compared after unescaping, so `"\u0061"` and `"a"` are the same key.
    */
    fn key(&mut self, entries: &Object) -> Result<String, ParseError> {
        self.skip_whitespace();

        let key_offset = self.input_offset;
        if self.peek() != Some(b'"') {
            return Err(self.err_unexpected(ParseErrorKind::ExpectedKey));
        }

        let key = self.string()?;
        if entries.contains_key(&key) {
            return Err(ParseError::new(
                ParseErrorKind::DuplicatedKey(key),
                key_offset,
            ));
        }

        self.skip_whitespace();
        if self.peek() != Some(b':') {
            return Err(self.err_unexpected(ParseErrorKind::ExpectedColon));
        }
        self.input_offset += 1;

        Ok(key)
    }

    #[inline]
    fn string(&mut self) -> Result<String, ParseError> {
        unescape(self.input, &mut self.input_offset)
    }

    /**
    Parse one of the `true`, `false`, or `null` literals.
    */
    #[inline]
    fn literal(&mut self, literal: &'static str, value: Document) -> Result<Document, ParseError> {
        if !self.input[self.input_offset..].starts_with(literal.as_bytes()) {
            return Err(self.err(ParseErrorKind::ExpectedLiteral(literal)));
        }

        self.input_offset += literal.len();

        Ok(value)
    }
}
