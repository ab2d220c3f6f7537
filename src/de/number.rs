/*!
Number literals.

A number without a fraction or exponent is read as an exact 64-bit integer.
If it doesn't fit then it's read as a double instead of failing, so very large
integers lose precision rather than being rejected. Anything with a fraction
or exponent is read as a double.
*/

use super::Scan;

use crate::{
    document::Document,
    error::{ParseError, ParseErrorKind},
};

impl<'input> Scan<'input> {
    pub(super) fn number(&mut self) -> Result<Document, ParseError> {
        let start = self.input_offset;
        let mut integral = true;

        if let Some(b'-') = self.peek() {
            self.input_offset += 1;
        }

        // the integer part is either a single `0` or doesn't start with one
        match self.peek() {
            Some(b'0') => self.input_offset += 1,
            Some(b'1'..=b'9') => self.digits(),
            _ => return Err(self.err_unexpected(ParseErrorKind::ExpectedDigit)),
        }

        if let Some(b'.') = self.peek() {
            integral = false;

            self.input_offset += 1;
            self.required_digits()?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            integral = false;

            self.input_offset += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.input_offset += 1;
            }
            self.required_digits()?;
        }

        // the number is made up of ASCII digits and signs
        let text = from_utf8_unchecked!(&self.input[start..self.input_offset]);

        if integral {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Document::from(i));
            }

            // fall through to a double if the integer overflows
        }

        // Rust's float parsing is locale-independent and correctly rounded
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Document::from(f)),
            _ => Err(ParseError::new(ParseErrorKind::NumberOutOfRange, start)),
        }
    }

    #[inline]
    fn digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.input_offset += 1;
        }
    }

    #[inline]
    fn required_digits(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                self.digits();
                Ok(())
            }
            _ => Err(self.err_unexpected(ParseErrorKind::ExpectedDigit)),
        }
    }
}
