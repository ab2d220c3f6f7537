/*!
String literal decoding for JSON text.

Strings are scanned from their opening quote to their closing one. Runs of bytes
without escapes are copied into the output in a single flush, and each escape sequence
is decoded into its literal UTF-8 bytes in between.

The input must already be valid UTF8. Escapes are always ASCII, so every flush starts
and ends on a character boundary and the output is valid UTF8 too.
*/

use crate::{
    error::{ParseError, ParseErrorKind},
    std_ext::char::{is_high_surrogate, try_from_utf16_surrogate_pair},
};

/**
Decode the string literal starting at the `"` at `input_offset`.

On success, `input_offset` is moved past the closing `"`.
*/
pub(crate) fn unescape(input: &[u8], input_offset: &mut usize) -> Result<String, ParseError> {
    test_assert_eq!(Some(&b'"'), input.get(*input_offset));

    let mut scan = Scan {
        input,
        input_offset: *input_offset + 1,
        start: *input_offset + 1,
        unescaped: Unescaped { buf: Vec::new() },
    };

    loop {
        match scan.input.get(scan.input_offset) {
            Some(b'"') => {
                scan.flush();
                *input_offset = scan.input_offset + 1;

                return Ok(unescape_end(scan.unescaped));
            }
            Some(b'\\') => interest_unescape(&mut scan)?,
            Some(_) => scan.input_offset += 1,
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedEnd,
                    scan.input_offset,
                ))
            }
        }
    }
}

/**
The character that starts at `offset`.

The offset must be on a character boundary within UTF8 input.
*/
pub(crate) fn char_at(input: &[u8], offset: usize) -> char {
    from_utf8_unchecked!(&input[offset..])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[inline]
fn unescape_end(unescaped: Unescaped) -> String {
    owned_from_utf8_unchecked!(unescaped.buf)
}

struct Scan<'input> {
    input: &'input [u8],
    /**
    The current byte offset into the input.
    */
    input_offset: usize,
    /**
    The position to start copying from.
    */
    start: usize,
    unescaped: Unescaped,
}

struct Unescaped {
    buf: Vec<u8>,
}

impl<'input> Scan<'input> {
    /**
    Copy everything between the last escape and the current offset.
    */
    #[inline]
    fn flush(&mut self) {
        // if a string starts with an escape then we'll try flush 0 bytes
        if self.input_offset == self.start {
            return;
        }

        self.unescaped
            .buf
            .extend_from_slice(&self.input[self.start..self.input_offset]);

        self.start = self.input_offset;
    }

    #[inline]
    fn push_unescaped_byte(&mut self, b: u8) {
        self.unescaped.buf.push(b);
    }

    #[inline]
    fn push_unescaped_char(&mut self, c: char) {
        let mut buf = [0; 4];

        let encoded = c.encode_utf8(&mut buf);
        self.unescaped.buf.extend(encoded.as_bytes());
    }

    #[cold]
    fn err(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, offset)
    }

    /**
    Read the 4 hex digits of a `\u` escape as a UTF-16 code unit.
    */
    fn utf16_code_unit(&mut self) -> Result<u16, ParseError> {
        let digits = self
            .input
            .get(self.input_offset..self.input_offset + 4)
            .ok_or_else(|| self.err(ParseErrorKind::ExpectedHexDigits, self.input_offset))?;

        let mut code = 0u16;
        for digit in digits {
            let digit = (*digit as char)
                .to_digit(16)
                .ok_or_else(|| self.err(ParseErrorKind::ExpectedHexDigits, self.input_offset))?;

            code = (code << 4) | digit as u16;
        }

        self.input_offset += 4;

        Ok(code)
    }

    /**
    Decode the rest of a `\u` escape, following it into a second escape
    if it's the first half of a surrogate pair.
    */
    fn utf16_escape(&mut self) -> Result<char, ParseError> {
        let first_offset = self.input_offset;
        let first = self.utf16_code_unit()?;

        if is_high_surrogate(first) {
            if !self.input[self.input_offset..].starts_with(b"\\u") {
                return Err(self.err(ParseErrorKind::ExpectedLowSurrogate, self.input_offset));
            }
            self.input_offset += 2;

            let second_offset = self.input_offset;
            let second = self.utf16_code_unit()?;

            return try_from_utf16_surrogate_pair(first, second)
                .map_err(|_| self.err(ParseErrorKind::InvalidSurrogatePair, second_offset));
        }

        // a low surrogate on its own can't be encoded as UTF8
        char::from_u32(first as u32)
            .ok_or_else(|| self.err(ParseErrorKind::InvalidCodePoint(first as u32), first_offset))
    }
}

fn interest_unescape(scan: &mut Scan) -> Result<(), ParseError> {
    scan.flush();

    // skip over the `\` and peek the escape char
    let escape_offset = scan.input_offset + 1;
    let escaped = *scan
        .input
        .get(escape_offset)
        .ok_or_else(|| scan.err(ParseErrorKind::UnexpectedEnd, escape_offset))?;

    scan.input_offset = escape_offset + 1;

    match escaped {
        b'"' => scan.push_unescaped_byte(b'"'),
        b'\\' => scan.push_unescaped_byte(b'\\'),
        b'/' => scan.push_unescaped_byte(b'/'),
        b'n' => scan.push_unescaped_byte(b'\n'),
        b'r' => scan.push_unescaped_byte(b'\r'),
        b't' => scan.push_unescaped_byte(b'\t'),
        b'f' => scan.push_unescaped_byte(0x0c),
        b'b' => scan.push_unescaped_byte(0x08),
        b'u' => {
            let ch = scan.utf16_escape()?;
            scan.push_unescaped_char(ch);
        }
        _ => {
            return Err(scan.err(
                ParseErrorKind::InvalidEscape(char_at(scan.input, escape_offset)),
                escape_offset,
            ))
        }
    }

    // skip over the escape chars
    scan.start = scan.input_offset;

    Ok(())
}
