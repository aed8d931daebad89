//! Canonical JSON — the exact bytes that get signed and sent.
//!
//! The futures gateway recomputes the signature over the body it receives,
//! and its reference client produces compact JSON with ASCII-only output
//! and repr-style floats. Serializing through `CanonicalFormatter` yields
//! identical bytes for the same logical document:
//!
//! - no whitespace after `:` or `,`
//! - keys in insertion order (`serde_json` built with `preserve_order`)
//! - anything outside printable ASCII escaped as `\uXXXX`
//! - floats in shortest round-trip form, positional for decimal exponents
//!   in `[-4, 16)` (`10.0`, `0.0001`), otherwise `1e-05` / `1.5e+16`

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// Serialize `value` into its canonical compact form.
///
/// Non-finite floats (`NaN`, `inf`) in typed values are written as `null`;
/// `serde_json` substitutes them before the formatter sees them.
///
/// # Errors
/// Fails only when the value has no JSON representation
/// (e.g. a map keyed by non-strings).
pub fn to_canonical_json<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Compact formatter with ASCII-only strings and repr-style floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        // Widen via the shortest decimal so 0.1f32 stays "0.1".
        let widened = value.to_string().parse::<f64>().unwrap_or(value as f64);
        self.write_f64(writer, widened)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if is_printable_ascii(ch) {
                continue;
            }
            if start < idx {
                writer.write_all(fragment[start..idx].as_bytes())?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Render a finite float the way the reference client does.
///
/// `{:e}` already yields the shortest round-trip digits; only the layout
/// differs.
pub(crate) fn format_float(value: f64) -> String {
    let sci = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let point = exp as usize + 1;
    if digits.len() <= point {
        let pad = "0".repeat(point - digits.len());
        format!("{sign}{digits}{pad}.0")
    } else {
        format!("{sign}{}.{}", &digits[..point], &digits[point..])
    }
}
