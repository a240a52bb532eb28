// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Leaf descriptors for atomic types.

use std::any::Any;
use std::fmt;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    F32,
    F64,
    /// Owned `String`.
    String,
    /// `&'static str`.
    Str,
}

impl PrimitiveKind {
    /// Check if this is an integer kind.
    pub fn is_integer(&self) -> bool {
        !matches!(
            self,
            Self::Bool | Self::Char | Self::F32 | Self::F64 | Self::String | Self::Str
        )
    }

    /// Check if this is a text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::String | Self::Str)
    }

    /// Write the literal form of `value`.
    ///
    /// Integers and bools use `Display`; floats, chars and text use `Debug`
    /// so `1.0`, `'a'` and `"apple"` stay unambiguous. Returns `Ok(false)`
    /// when `value` is not of this kind.
    pub(crate) fn write_literal(
        &self,
        value: &dyn Any,
        out: &mut dyn fmt::Write,
    ) -> Result<bool, fmt::Error> {
        macro_rules! display {
            ($ty:ty) => {
                match value.downcast_ref::<$ty>() {
                    Some(v) => write!(out, "{}", v).map(|()| true),
                    None => Ok(false),
                }
            };
        }
        macro_rules! debug {
            ($ty:ty) => {
                match value.downcast_ref::<$ty>() {
                    Some(v) => write!(out, "{:?}", v).map(|()| true),
                    None => Ok(false),
                }
            };
        }

        match self {
            Self::Bool => display!(bool),
            Self::Char => debug!(char),
            Self::U8 => display!(u8),
            Self::U16 => display!(u16),
            Self::U32 => display!(u32),
            Self::U64 => display!(u64),
            Self::U128 => display!(u128),
            Self::Usize => display!(usize),
            Self::I8 => display!(i8),
            Self::I16 => display!(i16),
            Self::I32 => display!(i32),
            Self::I64 => display!(i64),
            Self::I128 => display!(i128),
            Self::Isize => display!(isize),
            Self::F32 => debug!(f32),
            Self::F64 => debug!(f64),
            Self::String => debug!(String),
            Self::Str => debug!(&'static str),
        }
    }
}
