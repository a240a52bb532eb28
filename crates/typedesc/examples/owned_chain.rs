// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Example readability over pedantic

// Owned Chain Example
//
// Dumps a singly linked list built from exclusively owned nullable slots,
// then the registry contents it populated.

use typedesc::{Dump, Reflect, TypeRegistry};

#[derive(Reflect)]
struct Link {
    key: String,
    value: i32,
    next: Option<Box<Link>>,
}

fn chain(items: &[(&str, i32)]) -> Option<Box<Link>> {
    items.iter().rev().fold(None, |next, &(key, value)| {
        Some(Box::new(Link {
            key: key.into(),
            value,
            next,
        }))
    })
}

fn main() {
    let Some(head) = chain(&[("apple", 3), ("banana", 7), ("cherry", 11)]) else {
        return;
    };

    println!("{}", Dump(head.as_ref()));

    let registry = TypeRegistry::global();
    let stats = registry.stats();
    println!();
    println!(
        "// {} descriptors registered ({} builds, {} cache hits)",
        registry.len(),
        stats.misses,
        stats.hits
    );
    for name in registry.type_names() {
        println!("//   {}", name);
    }
}
