// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Intrinsic `Reflect` impls: primitives, std sequences, owned slots.

use crate::descriptor::{PrimitiveKind, Reflect, TypeDescriptor};
use std::collections::VecDeque;

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident, $name:literal;)*) => {
        $(
            impl Reflect for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::primitive::<$ty>($name, PrimitiveKind::$kind)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool, "bool";
    char => Char, "char";
    u8 => U8, "u8";
    u16 => U16, "u16";
    u32 => U32, "u32";
    u64 => U64, "u64";
    u128 => U128, "u128";
    usize => Usize, "usize";
    i8 => I8, "i8";
    i16 => I16, "i16";
    i32 => I32, "i32";
    i64 => I64, "i64";
    i128 => I128, "i128";
    isize => Isize, "isize";
    f32 => F32, "f32";
    f64 => F64, "f64";
    String => String, "String";
    &'static str => Str, "&str";
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<Vec<T>, T>(Vec::len, |v, index| v.get(index))
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<VecDeque<T>, T>(VecDeque::len, |v, index| v.get(index))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<[T; N], T>(|_| N, |a, index| a.get(index))
    }
}

impl<T: Reflect> Reflect for Option<Box<T>> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::owned::<Option<Box<T>>, T>(|slot| slot.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dump, resolve, TypeKind};
    use std::collections::VecDeque;

    #[test]
    fn test_primitive_names_and_sizes() {
        assert_eq!(resolve::<i32>().name(), "i32");
        assert_eq!(resolve::<String>().name(), "String");
        assert_eq!(resolve::<&'static str>().name(), "&str");
        assert_eq!(resolve::<u16>().size(), 2);
        assert!(resolve::<f64>().is_primitive());
    }

    #[test]
    fn test_all_sequence_impls_share_full_name() {
        assert_eq!(resolve::<Vec<i32>>().full_name(), "Sequence<i32>");
        assert_eq!(resolve::<VecDeque<i32>>().full_name(), "Sequence<i32>");
        assert_eq!(resolve::<[i32; 3]>().full_name(), "Sequence<i32>");
        // Same display name, distinct concrete types, distinct descriptors.
        assert!(!std::ptr::eq(resolve::<Vec<i32>>(), resolve::<[i32; 3]>()));
    }

    #[test]
    fn test_nested_full_names() {
        assert_eq!(
            resolve::<Vec<Option<Box<i32>>>>().full_name(),
            "Sequence<Owned<i32>>"
        );
        assert_eq!(
            resolve::<Option<Box<Vec<String>>>>().full_name(),
            "Owned<Sequence<String>>"
        );
        assert!(matches!(
            resolve::<Option<Box<u8>>>().kind(),
            TypeKind::Owned(_)
        ));
    }

    #[test]
    fn test_deque_renders_in_logical_order() {
        let mut deque = VecDeque::new();
        deque.push_back(2u8);
        deque.push_front(1u8);
        assert_eq!(
            dump(&deque).expect("dump"),
            "Sequence<u8>{\n    [0] u8{1}\n    [1] u8{2}\n}"
        );
    }

    #[test]
    fn test_empty_array() {
        let empty: [u8; 0] = [];
        assert_eq!(dump(&empty).expect("dump"), "Sequence<u8>{}");
    }
}
