// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Example readability over pedantic

// Node Tree Example
//
// Builds a small tree owned through a sequence field and dumps it to stdout.

use typedesc::{resolve, write_dump, Reflect};

#[derive(Reflect)]
struct Node {
    key: String,
    value: i32,
    children: Vec<Node>,
}

fn main() -> Result<(), typedesc::RenderError> {
    let node = Node {
        key: "apple".into(),
        value: 3,
        children: vec![
            Node {
                key: "banana".into(),
                value: 7,
                children: vec![],
            },
            Node {
                key: "cherry".into(),
                value: 11,
                children: vec![],
            },
        ],
    };

    let desc = resolve::<Node>();
    println!("// {} ({} bytes)", desc.full_name(), desc.size());

    let stdout = std::io::stdout();
    write_dump(&node, stdout.lock())?;
    println!();
    Ok(())
}
