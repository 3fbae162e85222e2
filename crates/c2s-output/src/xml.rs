//! Minimal streaming XML writer.
//!
//! SUMO documents are flat and attribute-only, so this writes elements with
//! attributes and nesting by hand.  Every attribute value is escaped;
//! indentation is two spaces per level.

use std::fmt::Display;
use std::io::{self, Write};

/// Attribute list: `(name, value)` pairs written in order.
pub type Attrs<'a> = [(&'a str, &'a dyn Display)];

pub struct XmlWriter<W: Write> {
    inner: W,
    depth: usize,
}

impl<W: Write> XmlWriter<W> {
    /// Wrap `inner` and write the XML declaration.
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        Ok(Self { inner, depth: 0 })
    }

    /// `<tag a="…">` and descend one level.
    pub fn open(&mut self, tag: &str, attrs: &Attrs<'_>) -> io::Result<()> {
        self.start_tag(tag, attrs)?;
        writeln!(self.inner, ">")?;
        self.depth += 1;
        Ok(())
    }

    /// `<tag a="…"/>`.
    pub fn empty(&mut self, tag: &str, attrs: &Attrs<'_>) -> io::Result<()> {
        self.start_tag(tag, attrs)?;
        writeln!(self.inner, "/>")
    }

    /// `</tag>` one level up.
    pub fn close(&mut self, tag: &str) -> io::Result<()> {
        debug_assert!(self.depth > 0, "close({tag}) without matching open");
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        writeln!(self.inner, "</{tag}>")
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn start_tag(&mut self, tag: &str, attrs: &Attrs<'_>) -> io::Result<()> {
        self.indent()?;
        write!(self.inner, "<{tag}")?;
        for (name, value) in attrs {
            write!(self.inner, r#" {name}="{}""#, escape(&value.to_string()))?;
        }
        Ok(())
    }

    fn indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            self.inner.write_all(b"  ")?;
        }
        Ok(())
    }
}

/// Escape the five XML special characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c    => out.push(c),
        }
    }
    out
}

/// Build an [`Attrs`] slice from `"name" => value` pairs.
macro_rules! attrs {
    ($($name:literal => $value:expr),* $(,)?) => {
        &[$(($name, &$value as &dyn ::std::fmt::Display)),*]
    };
}
pub(crate) use attrs;
