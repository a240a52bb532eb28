// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Render engine: shared formatting protocol and dump entry points.
//!
//! Every descriptor renders into an append-only [`fmt::Write`] sink with
//! [`INDENT_WIDTH`](crate::config::INDENT_WIDTH) spaces per level, and never
//! emits a line break after its closing brace. Callers append their own.

use crate::config::indent_columns;
use crate::descriptor::Reflect;
use std::fmt;
use std::io;

/// Errors raised while rendering.
#[derive(Debug)]
pub enum RenderError {
    /// The text sink refused a write.
    Write(fmt::Error),
    /// The byte sink of [`write_dump`] failed.
    Io(io::Error),
    /// A registered accessor did not match the value it was handed.
    TypeMismatch { expected: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(_) => write!(f, "Render sink refused write"),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::TypeMismatch { expected } => {
                write!(f, "Type mismatch: value is not a {}", expected)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::TypeMismatch { .. } => None,
        }
    }
}

impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        Self::Write(e)
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Write `level` indentation steps.
pub fn write_indent(out: &mut dyn fmt::Write, level: usize) -> fmt::Result {
    for _ in 0..indent_columns(level) {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Render `value` at indentation level 0.
///
/// ```rust
/// let text = typedesc::dump(&vec![1u8, 2]).unwrap();
/// assert_eq!(text, "Sequence<u8>{\n    [0] u8{1}\n    [1] u8{2}\n}");
/// ```
pub fn dump<T: Reflect>(value: &T) -> Result<String, RenderError> {
    dump_at(value, 0)
}

/// Render `value` as if nested `indent_level` levels deep.
///
/// The first line is not indented; inner lines and the closing brace are.
pub fn dump_at<T: Reflect>(value: &T, indent_level: usize) -> Result<String, RenderError> {
    let mut out = String::new();
    crate::resolve::<T>().render(value, &mut out, indent_level)?;
    Ok(out)
}

/// Render `value` into a byte sink (console, file, socket).
///
/// Nothing is appended after the closing brace.
pub fn write_dump<T: Reflect, W: io::Write>(value: &T, mut sink: W) -> Result<(), RenderError> {
    let text = dump(value)?;
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// `Display` adapter over a reflectable value.
///
/// ```rust
/// use typedesc::Dump;
///
/// let line = format!("state: {}", Dump(&Some(Box::new(7i32))));
/// assert_eq!(line, "state: Owned<i32>{\n    i32{7}\n}");
/// ```
///
/// Render errors surface as [`fmt::Error`].
pub struct Dump<'a, T>(pub &'a T);

impl<T: Reflect> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::resolve::<T>()
            .render(self.0, f, 0)
            .map_err(|_| fmt::Error)
    }
}

impl<T: Reflect> fmt::Debug for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_indent() {
        let mut out = String::new();
        write_indent(&mut out, 2).expect("indent");
        assert_eq!(out, "        ");

        let mut out = String::new();
        write_indent(&mut out, 0).expect("indent");
        assert!(out.is_empty());
    }

    #[test]
    fn test_dump_primitive() {
        assert_eq!(dump(&42i32).expect("dump"), "i32{42}");
        assert_eq!(dump(&true).expect("dump"), "bool{true}");
    }

    #[test]
    fn test_dump_at_indents_inner_lines() {
        let text = dump_at(&vec![3u32], 2).expect("dump");
        assert_eq!(text, "Sequence<u32>{\n            [0] u32{3}\n        }");
    }

    #[test]
    fn test_write_dump_to_bytes() {
        let mut sink = Vec::new();
        write_dump(&String::from("hi"), &mut sink).expect("write");
        assert_eq!(sink, b"String{\"hi\"}");
    }

    #[test]
    fn test_display_adapter() {
        assert_eq!(Dump(&7u8).to_string(), "u8{7}");
        assert_eq!(format!("{:?}", Dump(&'c')), "char{'c'}");
    }

    #[test]
    fn test_error_display() {
        let err = RenderError::TypeMismatch {
            expected: "Node".into(),
        };
        assert_eq!(err.to_string(), "Type mismatch: value is not a Node");
        assert_eq!(
            RenderError::from(fmt::Error).to_string(),
            "Render sink refused write"
        );
    }
}
