// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence descriptors: homogeneous ordered collections.

use super::{NestedType, Reflect, TypeDescriptor};
use crate::render::{write_indent, RenderError};
use std::any::Any;
use std::fmt;

/// Count and index accessors over a type-erased collection.
pub trait SequenceAccess: Send + Sync {
    /// Number of items, or `None` if `seq` is not the expected collection.
    fn count(&self, seq: &dyn Any) -> Option<usize>;

    /// Item at `index`, or `None` if out of range or `seq` has the wrong type.
    fn item<'a>(&self, seq: &'a dyn Any, index: usize) -> Option<&'a dyn Any>;
}

struct SequenceAccessor<C, T> {
    count: fn(&C) -> usize,
    item: fn(&C, usize) -> Option<&T>,
}

impl<C: Any, T: Any> SequenceAccess for SequenceAccessor<C, T> {
    fn count(&self, seq: &dyn Any) -> Option<usize> {
        seq.downcast_ref::<C>().map(self.count)
    }

    fn item<'a>(&self, seq: &'a dyn Any, index: usize) -> Option<&'a dyn Any> {
        let seq = seq.downcast_ref::<C>()?;
        let item = (self.item)(seq, index)?;
        Some(item as &dyn Any)
    }
}

/// Sequence type descriptor.
pub struct SequenceDescriptor {
    item_type: NestedType,
    access: Box<dyn SequenceAccess>,
}

impl SequenceDescriptor {
    /// Create a sequence layout for collection `C` of `T` items.
    pub fn new<C: Any, T: Reflect>(
        count: fn(&C) -> usize,
        item: fn(&C, usize) -> Option<&T>,
    ) -> Self {
        Self {
            item_type: NestedType::of::<T>(),
            access: Box::new(SequenceAccessor { count, item }),
        }
    }

    /// Descriptor of the item type.
    pub fn item_type(&self) -> &'static TypeDescriptor {
        self.item_type.get()
    }

    /// Number of items in `seq`.
    pub fn count(&self, seq: &dyn Any) -> Option<usize> {
        self.access.count(seq)
    }

    /// Item at `index` in `seq`.
    pub fn item<'a>(&self, seq: &'a dyn Any, index: usize) -> Option<&'a dyn Any> {
        self.access.item(seq, index)
    }

    pub(crate) fn render(
        &self,
        desc: &TypeDescriptor,
        value: &dyn Any,
        out: &mut dyn fmt::Write,
        indent_level: usize,
    ) -> Result<(), RenderError> {
        let count = self.count(value).ok_or_else(|| desc.mismatch())?;
        out.write_str(desc.full_name())?;
        if count == 0 {
            out.write_str("{}")?;
            return Ok(());
        }

        let item_type = self.item_type();
        out.write_str("{\n")?;
        for index in 0..count {
            let item = self.item(value, index).ok_or_else(|| desc.mismatch())?;
            write_indent(out, indent_level + 1)?;
            write!(out, "[{}] ", index)?;
            item_type.render(item, out, indent_level + 1)?;
            out.write_char('\n')?;
        }
        write_indent(out, indent_level)?;
        out.write_char('}')?;
        Ok(())
    }
}

impl fmt::Debug for SequenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceDescriptor")
            .field("item", &self.item_type().full_name())
            .finish()
    }
}
