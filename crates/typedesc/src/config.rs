// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Render constants - single source of truth.
//!
//! Every piece of fixed text the render engine emits lives here.
//! **Never hardcode these elsewhere!**

/// Spaces emitted per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Display name of every sequence descriptor.
///
/// Full name: `Sequence<item>`, e.g. `Sequence<i32>`.
pub const SEQUENCE_NAME: &str = "Sequence";

/// Display name of every optional-owning-reference descriptor.
///
/// Full name: `Owned<target>`, e.g. `Owned<Node>`.
pub const OWNED_NAME: &str = "Owned";

/// Literal rendered inside the braces of an absent owned slot.
pub const NULL_LITERAL: &str = "nullptr";

/// Separator between a struct member name and its rendered value.
pub const MEMBER_SEPARATOR: &str = " = ";

/// Number of spaces for `level` indentation steps.
#[inline]
pub const fn indent_columns(level: usize) -> usize {
    level * INDENT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_columns() {
        assert_eq!(indent_columns(0), 0);
        assert_eq!(indent_columns(1), 4);
        assert_eq!(indent_columns(3), 12);
    }
}
