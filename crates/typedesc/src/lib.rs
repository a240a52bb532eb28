// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # typedesc - Runtime type descriptors and structural dumps
//!
//! Prints arbitrary Rust values without a hand-written formatter per type.
//! Each reflectable type has exactly one [`TypeDescriptor`] per process,
//! built from a schema on first use and cached in the [`TypeRegistry`].
//!
//! ## Quick Start
//!
//! ```rust
//! use typedesc::{dump, Reflect};
//!
//! #[derive(Reflect)]
//! struct Node {
//!     key: String,
//!     value: i32,
//!     children: Vec<Node>,
//! }
//!
//! let node = Node {
//!     key: "apple".into(),
//!     value: 3,
//!     children: vec![],
//! };
//!
//! assert_eq!(
//!     dump(&node).unwrap(),
//!     "Node {\n    key = String{\"apple\"}\n    value = i32{3}\n    children = Sequence<Node>{}\n}"
//! );
//! ```
//!
//! ## Descriptor Kinds
//!
//! | Kind | Rust types | Rendering |
//! |------|------------|-----------|
//! | Primitive | integers, floats, `bool`, `char`, `String`, `&str` | `i32{3}` |
//! | Struct | `#[derive(Reflect)]` or [`StructDescriptor::builder`] | `Name { ... }` |
//! | Sequence | `Vec<T>`, `VecDeque<T>`, `[T; N]` | `Sequence<T>{ [0] ... }` |
//! | Owned | `Option<Box<T>>` | `Owned<T>{nullptr}` / `Owned<T>{ ... }` |
//!
//! ## Limitations
//!
//! Rendering follows owned edges only and never detects cycles. Reflected
//! values must be finite trees, which the supported container types
//! guarantee (no `Rc`/`Arc` impls are provided).

extern crate self as typedesc;

pub mod config;
pub mod descriptor;
mod impls;
pub mod registry;
pub mod render;

pub use descriptor::{
    DescriptorFn, Member, MemberAccess, OwnedAccess, OwnedDescriptor, PrimitiveKind, Reflect,
    SequenceAccess, SequenceDescriptor, StructBuilder, StructDescriptor, TypeDescriptor, TypeKind,
};
pub use registry::{resolve, LookupStats, TypeRegistry};
pub use render::{dump, dump_at, write_dump, Dump, RenderError};

/// `#[derive(Reflect)]`: generates the struct schema for a type.
///
/// Members are registered in declaration order. Attributes:
///
/// - `#[reflect(name = "Display")]` on the struct overrides the type name
/// - `#[reflect(rename = "label")]` on a field overrides the member name
/// - `#[reflect(skip)]` on a field leaves it out of the schema
///
/// Every non-skipped field type must itself implement [`Reflect`].
pub use typedesc_codegen::Reflect;
