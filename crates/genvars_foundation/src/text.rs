//! Canonical text codec shared by every reflected type.
//!
//! Values export to a compact, human-readable form and import back from it:
//!
//! - scalars: `True`, `-12`, `3.5`, `Red`
//! - strings: raw at top level, `"quoted \"and\" escaped"` when nested
//! - aggregates: `(X=1,Y=2,Z=3)`
//! - arrays and sets: `(1,2,3)`; maps: `((k,v),(k,v))`
//!
//! Top-level empty containers export as the empty string; nested ones as `()`.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::reflect::Reflect;

/// Characters that terminate an unquoted token.
const DELIMITERS: &[char] = &[',', '(', ')', '='];

/// Cursor over canonical text.
#[derive(Clone, Debug)]
pub struct TextReader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TextReader<'a> {
    /// Creates a reader positioned at the start of `src`.
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread remainder.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Returns true when nothing but whitespace is left.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.remaining().trim_start().is_empty()
    }

    /// Skips leading whitespace.
    pub fn skip_ws(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Returns the next non-whitespace character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.remaining().chars().next()
    }

    /// Consumes `c` if it is the next non-whitespace character.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `c` or fails.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the next character is not `c`.
    pub fn expect(&mut self, c: char) -> Result<()> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{c}'")))
        }
    }

    /// Reads an unquoted token up to the next delimiter or whitespace.
    pub fn read_token(&mut self) -> &'a str {
        self.skip_ws();
        let rest = self.remaining();
        let end = rest
            .find(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Consumes and returns everything that is left, untrimmed.
    pub fn read_rest(&mut self) -> &'a str {
        let rest = self.remaining();
        self.pos = self.src.len();
        rest
    }

    /// Reads a double-quoted string, resolving escapes.
    ///
    /// # Errors
    ///
    /// Returns a parse error on a missing quote, an unknown escape or an
    /// unterminated string.
    pub fn read_quoted(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut value = String::new();
        let mut chars = self.remaining().char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += i + 1;
                    return Ok(value);
                }
                '\\' => {
                    let Some((_, escaped)) = chars.next() else {
                        break;
                    };
                    match escaped {
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        '0' => value.push('\0'),
                        'u' => {
                            let code = read_unicode_escape(&mut chars)
                                .ok_or_else(|| Error::parse("bad \\u escape", self.pos + i))?;
                            value.push(code);
                        }
                        other => {
                            return Err(Error::parse(
                                format!("unknown escape '\\{other}'"),
                                self.pos + i,
                            ));
                        }
                    }
                }
                _ => value.push(c),
            }
        }
        Err(self.error("unterminated string"))
    }

    /// Reads a string value: raw remainder at top level, quoted (or a bare
    /// token) when nested.
    ///
    /// # Errors
    ///
    /// Returns a parse error on malformed quoted text.
    pub fn read_string(&mut self, nested: bool) -> Result<String> {
        if !nested {
            return Ok(self.read_rest().to_owned());
        }
        if self.peek() == Some('"') {
            self.read_quoted()
        } else {
            Ok(self.read_token().to_owned())
        }
    }

    /// Skips one value of any shape.
    ///
    /// # Errors
    ///
    /// Returns a parse error on unbalanced parentheses or strings.
    pub fn skip_value(&mut self) -> Result<()> {
        match self.peek() {
            Some('"') => self.read_quoted().map(drop),
            Some('(') => {
                let mut depth = 0usize;
                loop {
                    match self.peek() {
                        Some('(') => {
                            self.pos += 1;
                            depth += 1;
                        }
                        Some(')') => {
                            self.pos += 1;
                            depth -= 1;
                            if depth == 0 {
                                return Ok(());
                            }
                        }
                        Some('"') => {
                            self.read_quoted()?;
                        }
                        Some(',' | '=') => self.pos += 1,
                        Some(_) => {
                            self.read_token();
                        }
                        None => return Err(self.error("unbalanced parentheses")),
                    }
                }
            }
            _ => {
                self.read_token();
                Ok(())
            }
        }
    }

    /// Reads a parenthesised, comma-separated list, calling `element` once per
    /// item. At top level an empty remainder is an empty list.
    ///
    /// # Errors
    ///
    /// Propagates element errors and reports malformed separators.
    pub fn read_list(
        &mut self,
        nested: bool,
        mut element: impl FnMut(&mut Self) -> Result<()>,
    ) -> Result<()> {
        if !nested && self.is_at_end() {
            return Ok(());
        }
        self.expect('(')?;
        if self.eat(')') {
            return Ok(());
        }
        loop {
            element(self)?;
            if self.eat(')') {
                return Ok(());
            }
            self.expect(',')?;
        }
    }

    /// Reads `(Field=value,...)`. The callback imports the named field and
    /// returns `false` for unknown fields, which are then skipped.
    ///
    /// # Errors
    ///
    /// Propagates field errors and reports malformed syntax.
    pub fn read_struct(
        &mut self,
        mut field: impl FnMut(&mut Self, &'a str) -> Result<bool>,
    ) -> Result<()> {
        self.expect('(')?;
        if self.eat(')') {
            return Ok(());
        }
        loop {
            let name = self.read_token();
            if name.is_empty() {
                return Err(self.error("expected field name"));
            }
            self.expect('=')?;
            let handled = field(self, name).map_err(|e| e.in_frame(format!("field {name}")))?;
            if !handled {
                self.skip_value()?;
            }
            if self.eat(')') {
                return Ok(());
            }
            self.expect(',')?;
        }
    }

    /// Builds a parse error at the current offset.
    #[must_use]
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(message, self.pos)
    }
}

fn read_unicode_escape(chars: &mut std::str::CharIndices<'_>) -> Option<char> {
    if chars.next()?.1 != '{' {
        return None;
    }
    let mut code = 0u32;
    for (_, c) in chars.by_ref() {
        if c == '}' {
            return char::from_u32(code);
        }
        code = code.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
    }
    None
}

/// Appends `value` double-quoted with escapes.
pub fn write_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Appends a string value: raw at top level, quoted when nested.
pub fn write_string(out: &mut String, value: &str, nested: bool) {
    if nested {
        write_quoted(out, value);
    } else {
        out.push_str(value);
    }
}

/// Appends a list of nested values. A top-level empty list writes nothing.
pub fn write_list<'v>(
    out: &mut String,
    nested: bool,
    items: impl IntoIterator<Item = &'v dyn Reflect>,
) {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() && !nested {
        return;
    }
    out.push('(');
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.export_text(out, true);
    }
    out.push(')');
}

/// Incremental writer for `(Field=value,...)`.
pub struct StructWriter<'o> {
    out: &'o mut String,
    first: bool,
}

impl<'o> StructWriter<'o> {
    /// Opens the aggregate.
    pub fn begin(out: &'o mut String) -> Self {
        out.push('(');
        Self { out, first: true }
    }

    /// Writes one field.
    pub fn field(&mut self, name: &str, value: &dyn Reflect) {
        if !self.first {
            self.out.push(',');
        }
        self.first = false;
        self.out.push_str(name);
        self.out.push('=');
        value.export_text(self.out, true);
    }

    /// Closes the aggregate.
    pub fn finish(self) {
        self.out.push(')');
    }
}
