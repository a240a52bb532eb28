// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional-owning-reference descriptors.
//!
//! Models a nullable slot with exactly one owner (`Option<Box<T>>`): the
//! target lives and dies with the slot, so the owned edges of a value always
//! form a tree.

use super::{NestedType, Reflect, TypeDescriptor};
use crate::config::NULL_LITERAL;
use crate::render::{write_indent, RenderError};
use std::any::Any;
use std::fmt;

/// Presence and dereference accessor over a type-erased slot.
pub trait OwnedAccess: Send + Sync {
    /// `None` if `slot` is not the expected slot type, `Some(None)` if it is
    /// empty, `Some(Some(target))` otherwise.
    fn target<'a>(&self, slot: &'a dyn Any) -> Option<Option<&'a dyn Any>>;
}

struct OwnedAccessor<P, T> {
    target: fn(&P) -> Option<&T>,
}

impl<P: Any, T: Any> OwnedAccess for OwnedAccessor<P, T> {
    fn target<'a>(&self, slot: &'a dyn Any) -> Option<Option<&'a dyn Any>> {
        let slot = slot.downcast_ref::<P>()?;
        Some((self.target)(slot).map(|t| t as &dyn Any))
    }
}

/// Optional-owning-reference type descriptor.
pub struct OwnedDescriptor {
    target_type: NestedType,
    access: Box<dyn OwnedAccess>,
}

impl OwnedDescriptor {
    /// Create an owned-slot layout for slot `P` holding a `T`.
    pub fn new<P: Any, T: Reflect>(target: fn(&P) -> Option<&T>) -> Self {
        Self {
            target_type: NestedType::of::<T>(),
            access: Box::new(OwnedAccessor { target }),
        }
    }

    /// Descriptor of the owned type.
    pub fn target_type(&self) -> &'static TypeDescriptor {
        self.target_type.get()
    }

    /// Whether `slot` currently owns a target.
    pub fn is_present(&self, slot: &dyn Any) -> bool {
        matches!(self.access.target(slot), Some(Some(_)))
    }

    /// Dereference `slot`; `None` when empty or of the wrong type.
    pub fn target<'a>(&self, slot: &'a dyn Any) -> Option<&'a dyn Any> {
        self.access.target(slot).flatten()
    }

    pub(crate) fn render(
        &self,
        desc: &TypeDescriptor,
        value: &dyn Any,
        out: &mut dyn fmt::Write,
        indent_level: usize,
    ) -> Result<(), RenderError> {
        let target = self.access.target(value).ok_or_else(|| desc.mismatch())?;
        out.write_str(desc.full_name())?;
        out.write_char('{')?;
        match target {
            None => out.write_str(NULL_LITERAL)?,
            Some(target) => {
                out.write_char('\n')?;
                write_indent(out, indent_level + 1)?;
                self.target_type().render(target, out, indent_level + 1)?;
                out.write_char('\n')?;
                write_indent(out, indent_level)?;
            }
        }
        out.write_char('}')?;
        Ok(())
    }
}

impl fmt::Debug for OwnedDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedDescriptor")
            .field("target", &self.target_type().full_name())
            .finish()
    }
}
