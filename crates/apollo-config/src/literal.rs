//! Reading the static object literals exported by `apollo.config.js`.
//!
//! Only data is understood: objects, arrays, strings, numbers, booleans and
//! `null`/`undefined`. Keys may be bare identifiers, strings may use any of the
//! three JS quote styles and trailing commas are accepted.

use std::iter::Peekable;
use std::str::Chars;

/// Removes `//` and `/* */` comments while leaving string contents untouched.
pub(crate) fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' | '`' => {
                out.push(c);
                copy_quoted(&mut chars, c, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn copy_quoted(chars: &mut Peekable<Chars<'_>>, quote: char, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            return;
        }
    }
}

/// Rewrites a comment-free JS object literal as JSON text.
pub(crate) fn to_json(literal: &str) -> Result<String, String> {
    let mut out = String::with_capacity(literal.len() + 16);
    let mut chars = literal.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' | '}' | '[' | ']' | ':' => out.push(c),
            c if c.is_whitespace() => out.push(c),
            ',' => {
                skip_whitespace(&mut chars, &mut out);
                if !matches!(chars.peek(), Some('}') | Some(']')) {
                    out.push(',');
                }
            }
            '"' | '\'' | '`' => {
                let value = read_string(&mut chars, c)?;
                out.push_str(&quote(&value)?);
            }
            c if is_identifier_start(c) => {
                let mut ident = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !is_identifier_part(next) {
                        break;
                    }
                    ident.push(next);
                    chars.next();
                }
                let mut gap = String::new();
                skip_whitespace(&mut chars, &mut gap);
                if chars.peek() == Some(&':') {
                    out.push_str(&quote(&ident)?);
                } else {
                    out.push_str(match ident.as_str() {
                        "true" => "true",
                        "false" => "false",
                        "null" | "undefined" => "null",
                        _ => return Err(format!("unsupported value `{ident}`, only static data is allowed")),
                    });
                }
                out.push_str(&gap);
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let mut token = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || matches!(next, '.' | '_' | '+' | '-')) {
                        break;
                    }
                    token.push(next);
                    chars.next();
                }
                out.push_str(&number(&token)?);
            }
            other => return Err(format!("unexpected character `{other}`")),
        }
    }
    Ok(out)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while let Some(&next) = chars.peek() {
        if !next.is_whitespace() {
            break;
        }
        out.push(next);
        chars.next();
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn quote(value: &str) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn number(token: &str) -> Result<String, String> {
    let digits = token.replace('_', "");
    if serde_json::from_str::<serde_json::Number>(&digits).is_ok() {
        return Ok(digits);
    }
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, digits.strip_prefix('+').unwrap_or(&digits)),
    };
    let parsed = match magnitude.get(..2) {
        Some("0x") | Some("0X") => i64::from_str_radix(&magnitude[2..], 16).ok().map(|n| n as f64),
        _ => magnitude.parse::<f64>().ok().filter(|n| n.is_finite()),
    };
    match parsed {
        Some(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Ok(format!("{}", (sign * n) as i64)),
        Some(n) => serde_json::to_string(&(sign * n)).map_err(|e| e.to_string()),
        None => Err(format!("unsupported number `{token}`")),
    }
}

fn read_string(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, String> {
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            c if c == quote => return Ok(value),
            '\n' if quote != '`' => break,
            '$' if quote == '`' && chars.peek() == Some(&'{') => {
                return Err("template literals with `${...}` substitutions are not static".to_string());
            }
            '\\' => read_escape(chars, &mut value)?,
            c => value.push(c),
        }
    }
    Err("unterminated string literal".to_string())
}

fn read_escape(chars: &mut Peekable<Chars<'_>>, value: &mut String) -> Result<(), String> {
    let escaped = chars.next().ok_or("unterminated string literal")?;
    match escaped {
        'n' => value.push('\n'),
        't' => value.push('\t'),
        'r' => value.push('\r'),
        'b' => value.push('\u{8}'),
        'f' => value.push('\u{c}'),
        'v' => value.push('\u{b}'),
        '0' => value.push('\0'),
        '\n' => {}
        '\r' => {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
        }
        'x' => value.push(read_code_point(chars, Some(2))?),
        'u' if chars.peek() == Some(&'{') => {
            chars.next();
            value.push(read_code_point(chars, None)?);
        }
        'u' => value.push(read_code_point(chars, Some(4))?),
        other => value.push(other),
    }
    Ok(())
}

fn read_code_point(chars: &mut Peekable<Chars<'_>>, width: Option<usize>) -> Result<char, String> {
    let mut hex = String::new();
    match width {
        Some(width) => {
            for _ in 0..width {
                hex.push(chars.next().ok_or("truncated escape sequence")?);
            }
        }
        None => loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => hex.push(c),
                None => return Err("truncated escape sequence".to_string()),
            }
        },
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid escape sequence `{hex}`"))
}
