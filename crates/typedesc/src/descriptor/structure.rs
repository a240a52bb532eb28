// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct descriptors: ordered named members.

use super::{NestedType, Reflect, TypeDescriptor, TypeKind};
use crate::config::MEMBER_SEPARATOR;
use crate::render::{write_indent, RenderError};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// Locates one member inside a type-erased owner.
pub trait MemberAccess: Send + Sync {
    /// Borrow the member out of `owner`, or `None` if `owner` is not the
    /// struct type this accessor was built for.
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Any>;
}

struct FieldGetter<S, F> {
    get: fn(&S) -> &F,
}

impl<S: Any, F: Any> MemberAccess for FieldGetter<S, F> {
    fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Any> {
        let owner = owner.downcast_ref::<S>()?;
        Some((self.get)(owner) as &dyn Any)
    }
}

/// A named, located, typed field of a struct.
pub struct Member {
    name: String,
    member_type: NestedType,
    access: Box<dyn MemberAccess>,
}

impl Member {
    /// Create a member of struct `S` whose field has type `F`.
    pub fn new<S: Any, F: Reflect>(name: impl Into<String>, get: fn(&S) -> &F) -> Self {
        Self {
            name: name.into(),
            member_type: NestedType::of::<F>(),
            access: Box::new(FieldGetter { get }),
        }
    }

    /// Member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor of the member's type.
    pub fn type_desc(&self) -> &'static TypeDescriptor {
        self.member_type.get()
    }

    /// Borrow this member out of `owner`.
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Any> {
        self.access.get(owner)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("type", &self.type_desc().full_name())
            .finish()
    }
}

/// Struct layout: members in declaration order.
#[derive(Debug)]
pub struct StructDescriptor {
    members: Vec<Member>,
}

impl StructDescriptor {
    /// Create struct layout from ordered members.
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Start a fluent schema for struct `S`.
    pub fn builder<S: Any>(name: impl Into<String>) -> StructBuilder<S> {
        StructBuilder::new(name)
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Get member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Get member index by name.
    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name)
    }

    pub(crate) fn render(
        &self,
        desc: &TypeDescriptor,
        value: &dyn Any,
        out: &mut dyn fmt::Write,
        indent_level: usize,
    ) -> Result<(), RenderError> {
        writeln!(out, "{} {{", desc.name())?;
        for member in &self.members {
            let field = member.get(value).ok_or_else(|| desc.mismatch())?;
            write_indent(out, indent_level + 1)?;
            out.write_str(&member.name)?;
            out.write_str(MEMBER_SEPARATOR)?;
            member.type_desc().render(field, out, indent_level + 1)?;
            out.write_char('\n')?;
        }
        write_indent(out, indent_level)?;
        out.write_char('}')?;
        Ok(())
    }
}

/// Builder for struct descriptors.
///
/// ```rust
/// use typedesc::{dump, Reflect, StructDescriptor, TypeDescriptor};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Reflect for Point {
///     fn type_descriptor() -> TypeDescriptor {
///         StructDescriptor::builder::<Point>("Point")
///             .member("x", |p| &p.x)
///             .member("y", |p| &p.y)
///             .build()
///     }
/// }
///
/// let text = dump(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "Point {\n    x = i32{1}\n    y = i32{2}\n}");
/// ```
pub struct StructBuilder<S> {
    name: String,
    members: Vec<Member>,
    _owner: PhantomData<fn(&S)>,
}

impl<S: Any> StructBuilder<S> {
    /// Create a new builder for struct `S`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            _owner: PhantomData,
        }
    }

    /// Append a member; members render in the order they are added.
    pub fn member<F: Reflect>(mut self, name: &str, get: fn(&S) -> &F) -> Self {
        self.members.push(Member::new(name, get));
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::new::<S>(self.name, TypeKind::Struct(StructDescriptor::new(self.members)))
    }
}
