//! Support for the `.properties` key/value format.
//!
//! Follows the line-oriented syntax of `java.util.Properties`: `#` and `!`
//! comments, `=`, `:` or whitespace between key and value, backslash line
//! continuations and `\uXXXX` escapes.

use std::borrow::Cow;

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::{error::Error, traits::Loader, types::OrderedProperties};

/// A parsed `.properties` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub properties: OrderedProperties,
}

impl Loader for Format {
    /// UTF-8 is assumed unless a byte-order mark says otherwise; input that is
    /// not valid UTF-8 is decoded as Latin-1, the historical encoding of
    /// properties files.
    fn load(bytes: &[u8]) -> Result<Self, Error> {
        let text = decode(bytes);

        let mut properties = OrderedProperties::new();
        for line in logical_lines(&text) {
            let (key, value) = split_key_value(&line);
            properties.insert(unescape(key)?, unescape(value)?);
        }
        Ok(Format { properties })
    }
}

impl From<Format> for OrderedProperties {
    fn from(value: Format) -> Self {
        value.properties
    }
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return encoding
            .decode_without_bom_handling(&bytes[bom_len..])
            .0;
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Joins continued lines and drops blank and comment lines.
fn logical_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut natural = normalized.split('\n');
    let mut logical = Vec::new();

    while let Some(line) = natural.next() {
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut current = trimmed.to_string();
        while ends_with_continuation(&current) {
            current.pop();
            match natural.next() {
                Some(next) => current.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }
        logical.push(current);
    }
    logical
}

/// Splits a logical line at the first unescaped `=`, `:` or blank.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = idx;
                break;
            }
            c if is_blank(c) => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn unescape(raw: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.clone().next() == Some('u') {
            chars.next();
            let hex: String = chars.by_ref().take(4).collect();
            if hex.chars().count() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                return Err(Error::InvalidResource(format!(
                    "malformed \\uxxxx escape in `{raw}`"
                )));
            }
            // four hex digits always fit
            units.push(u16::from_str_radix(&hex, 16).unwrap_or_default());
            continue;
        }

        flush_units(&mut units, &mut out);
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

// Escaped UTF-16 units may form surrogate pairs across two escapes.
fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}
