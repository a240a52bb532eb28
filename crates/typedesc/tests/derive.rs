// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// #[derive(Reflect)] schema generation.

use typedesc::{dump, resolve, Reflect};

#[derive(Reflect)]
#[reflect(name = "Sensor")]
struct SensorReading {
    id: u32,
    #[reflect(rename = "celsius")]
    temperature: f64,
    #[reflect(skip)]
    #[allow(dead_code)]
    scratch: Vec<u8>,
    label: &'static str,
}

#[derive(Reflect)]
struct Pair(u8, char);

#[derive(Reflect)]
struct Marker;

/// Declared order differs from the order a layout pass might choose.
#[derive(Reflect)]
struct Mixed {
    small: u8,
    big: u128,
    medium: u32,
}

#[test]
fn container_and_field_attributes() {
    let reading = SensorReading {
        id: 7,
        temperature: 21.5,
        scratch: vec![1, 2, 3],
        label: "lab",
    };
    assert_eq!(
        dump(&reading).unwrap(),
        "Sensor {\n    id = u32{7}\n    celsius = f64{21.5}\n    label = &str{\"lab\"}\n}"
    );

    let desc = resolve::<SensorReading>();
    assert!(desc.member("scratch").is_none());
    assert!(desc.member("temperature").is_none());
    assert!(desc.member("celsius").is_some());
}

#[test]
fn tuple_struct_members_are_indexed() {
    assert_eq!(
        dump(&Pair(4, 'z')).unwrap(),
        "Pair {\n    0 = u8{4}\n    1 = char{'z'}\n}"
    );
}

#[test]
fn unit_struct_renders_empty_block() {
    assert_eq!(dump(&Marker).unwrap(), "Marker {\n}");
}

#[test]
fn member_order_is_declaration_order() {
    let names: Vec<&str> = resolve::<Mixed>()
        .members()
        .unwrap()
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(names, ["small", "big", "medium"]);

    let text = dump(&Mixed {
        small: 1,
        big: 2,
        medium: 3,
    })
    .unwrap();
    let small = text.find("small").unwrap();
    let big = text.find("big").unwrap();
    let medium = text.find("medium").unwrap();
    assert!(small < big && big < medium);
}
