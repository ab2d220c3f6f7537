use std::fmt;

/**
A JSON number.

Numbers without a fraction or exponent that fit in 64 bits are kept as exact integers.
Everything else is a double.
*/
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /**
    Whether the number is stored as an exact integer.
    */
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /**
    Whether the number is stored as a double.
    */
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /**
    The number as an integer.

    Doubles are truncated toward zero, saturating at the bounds of `i64`.
    NaN and infinities have no integer value and return `None`.
    */
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::Float(f) if f.is_finite() => Some(f as i64),
            Number::Float(_) => None,
        }
    }

    /**
    The number as a double.
    */
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/**
Numbers compare by value, regardless of how they're stored.

Two integers compare exactly, two doubles compare as IEEE doubles, and an integer only
equals a double that has no fractional part and converts to exactly the same integer.
*/
impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Number) -> bool {
        match (*self, *other) {
            (Number::Int(l), Number::Int(r)) => l == r,
            (Number::Float(l), Number::Float(r)) => l == r,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                float_eq_int(f, i)
            }
        }
    }
}

#[inline]
fn float_eq_int(f: f64, i: i64) -> bool {
    // `i64::MIN` and `-i64::MIN` are exactly representable
    // so any integral double in between converts without loss
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    f.fract() == 0.0 && (LOWER..UPPER).contains(&f) && f as i64 == i
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            // the debug format is the shortest text that parses back to the same double,
            // and always keeps a `.` or exponent so it stays a double
            Number::Float(n) if n.is_finite() => write!(f, "{:?}", n),
            // JSON has no representation for NaN or infinities
            Number::Float(_) => f.write_str("null"),
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}
