// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.
//!
//! A [`TypeDescriptor`] describes the shape of one concrete Rust type and
//! knows how to render a value of that type. The set of shapes is closed
//! ([`TypeKind`]): primitives, structs, sequences and owned nullable slots.
//!
//! Descriptors are never built directly by callers; they come out of
//! [`resolve`](crate::resolve), which caches exactly one instance per type.

mod owned;
mod primitive;
mod sequence;
mod structure;

pub use owned::{OwnedAccess, OwnedDescriptor};
pub use primitive::PrimitiveKind;
pub use sequence::{SequenceAccess, SequenceDescriptor};
pub use structure::{Member, MemberAccess, StructBuilder, StructDescriptor};

use crate::render::RenderError;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::OnceLock;

/// Lazily resolves a nested descriptor.
///
/// Composite descriptors hold these instead of `&'static TypeDescriptor` so a
/// type can refer to itself (`Node { children: Vec<Node> }`) without
/// re-entering its own registry slot during construction.
pub type DescriptorFn = fn() -> &'static TypeDescriptor;

/// Nested descriptor edge: resolved through the registry once, then read
/// straight from the cell on every later render.
pub(crate) struct NestedType {
    resolve: DescriptorFn,
    cached: OnceLock<&'static TypeDescriptor>,
}

impl NestedType {
    pub(crate) fn of<T: Reflect>() -> Self {
        Self {
            resolve: crate::resolve::<T>,
            cached: OnceLock::new(),
        }
    }

    pub(crate) fn get(&self) -> &'static TypeDescriptor {
        *self.cached.get_or_init(self.resolve)
    }
}

/// Opt-in contract for reflectable types.
///
/// `type_descriptor` is the schema: it runs once, on first resolution, and
/// its result is cached for the rest of the process. Use
/// `#[derive(Reflect)]` for plain structs, or the builders on
/// [`TypeDescriptor`] / [`StructDescriptor`] for hand-written schemas.
///
/// The schema must not call `resolve::<Self>()`; nested types are wired
/// through [`DescriptorFn`] pointers and resolved on use.
pub trait Reflect: Any {
    /// Build the descriptor for `Self`.
    fn type_descriptor() -> TypeDescriptor;
}

/// Type kind enumeration.
#[derive(Debug)]
pub enum TypeKind {
    /// Leaf type rendered as a literal.
    Primitive(PrimitiveKind),
    /// Struct with ordered named members.
    Struct(StructDescriptor),
    /// Homogeneous ordered collection.
    Sequence(SequenceDescriptor),
    /// Nullable, exclusively owned sub-object.
    Owned(OwnedDescriptor),
}

/// A complete type descriptor.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    size: usize,
    type_id: TypeId,
    kind: TypeKind,
    full_name: OnceLock<String>,
}

impl TypeDescriptor {
    /// Create a new type descriptor for `T`.
    pub fn new<T: Any>(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            size: std::mem::size_of::<T>(),
            type_id: TypeId::of::<T>(),
            kind,
            full_name: OnceLock::new(),
        }
    }

    /// Create a primitive descriptor for `T`.
    pub fn primitive<T: Any>(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new::<T>(name, TypeKind::Primitive(kind))
    }

    /// Create a sequence descriptor for collection `C` holding `T` items.
    pub fn sequence<C: Any, T: Reflect>(
        count: fn(&C) -> usize,
        item: fn(&C, usize) -> Option<&T>,
    ) -> Self {
        Self::new::<C>(
            crate::config::SEQUENCE_NAME,
            TypeKind::Sequence(SequenceDescriptor::new(count, item)),
        )
    }

    /// Create an optional-owning-reference descriptor for slot `P` owning a `T`.
    pub fn owned<P: Any, T: Reflect>(target: fn(&P) -> Option<&T>) -> Self {
        Self::new::<P>(
            crate::config::OWNED_NAME,
            TypeKind::Owned(OwnedDescriptor::new(target)),
        )
    }

    /// Display name (`i32`, `Node`, `Sequence`, `Owned`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structurally composed name, e.g. `Sequence<Owned<i32>>`.
    ///
    /// Composed on first call, which resolves the nested types it names.
    pub fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| match &self.kind {
            TypeKind::Primitive(_) | TypeKind::Struct(_) => self.name.clone(),
            TypeKind::Sequence(seq) => {
                format!("{}<{}>", self.name, seq.item_type().full_name())
            }
            TypeKind::Owned(owned) => {
                format!("{}<{}>", self.name, owned.target_type().full_name())
            }
        })
    }

    /// Size in bytes of the described type (informational).
    pub fn size(&self) -> usize {
        self.size
    }

    /// `TypeId` of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Check if `value` is an instance of the described type.
    pub fn describes(&self, value: &dyn Any) -> bool {
        (*value).type_id() == self.type_id
    }

    /// Type kind.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Get struct layout if this is a struct.
    pub fn as_struct(&self) -> Option<&StructDescriptor> {
        match &self.kind {
            TypeKind::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Get sequence layout if this is a sequence.
    pub fn as_sequence(&self) -> Option<&SequenceDescriptor> {
        match &self.kind {
            TypeKind::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Get owned-slot layout if this is an owned reference.
    pub fn as_owned(&self) -> Option<&OwnedDescriptor> {
        match &self.kind {
            TypeKind::Owned(o) => Some(o),
            _ => None,
        }
    }

    /// Get members if this is a struct.
    pub fn members(&self) -> Option<&[Member]> {
        self.as_struct().map(StructDescriptor::members)
    }

    /// Get member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.as_struct()?.member(name)
    }

    /// Render `value` into `out`.
    ///
    /// `value` must be an instance of the described type; anything else is
    /// rejected before output is written. Output follows the block grammar
    /// of each kind and never ends with a line break.
    pub fn render(
        &self,
        value: &dyn Any,
        out: &mut dyn fmt::Write,
        indent_level: usize,
    ) -> Result<(), RenderError> {
        if !self.describes(value) {
            return Err(self.mismatch());
        }
        match &self.kind {
            TypeKind::Primitive(kind) => {
                out.write_str(&self.name)?;
                out.write_char('{')?;
                if !kind.write_literal(value, out)? {
                    return Err(self.mismatch());
                }
                out.write_char('}')?;
                Ok(())
            }
            TypeKind::Struct(s) => s.render(self, value, out, indent_level),
            TypeKind::Sequence(seq) => seq.render(self, value, out, indent_level),
            TypeKind::Owned(owned) => owned.render(self, value, out, indent_level),
        }
    }

    pub(crate) fn mismatch(&self) -> RenderError {
        RenderError::TypeMismatch {
            expected: self.full_name().to_owned(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
