// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide descriptor registry.
//!
//! The registry ensures that a type's schema runs only once per process.
//! Every `TypeId` owns an exactly-once cell; the first caller builds and
//! publishes the descriptor inside that cell, racing callers block on the
//! same cell, and every later lookup is a map read followed by a cell read.
//! Descriptors are leaked on purpose: they live until process exit, which
//! is what lets callers hold `&'static TypeDescriptor`.

use crate::descriptor::{Reflect, TypeDescriptor};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::any::{type_name, TypeId};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

type Slot = OnceLock<&'static TypeDescriptor>;

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupStats {
    /// Resolutions served by an already published descriptor.
    pub hits: u64,
    /// Resolutions that ran a schema (one per type).
    pub misses: u64,
    /// Time spent building the most recent descriptor.
    pub last_build_ns: u64,
}

/// Maps concrete types to their singleton descriptors.
pub struct TypeRegistry {
    slots: DashMap<TypeId, &'static Slot>,
    stats: RwLock<LookupStats>,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            slots: DashMap::new(),
            stats: RwLock::new(LookupStats::default()),
        }
    }

    /// The registry shared by every descriptor in the process.
    pub fn global() -> &'static TypeRegistry {
        static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TypeRegistry::new)
    }

    /// Descriptor for `T`, built on first use.
    ///
    /// Repeated calls return the identical instance, including when several
    /// threads race on the first call.
    pub fn resolve<T: Reflect>(&self) -> &'static TypeDescriptor {
        let slot = self.slot(TypeId::of::<T>());
        if let Some(&desc) = slot.get() {
            self.record_hit();
            log::trace!("[TypeRegistry::resolve] hit {}", desc.name());
            return desc;
        }

        let mut built = false;
        let desc = *slot.get_or_init(|| {
            built = true;
            self.build::<T>()
        });
        if !built {
            // Lost the first-use race; another thread published it.
            self.record_hit();
        }
        desc
    }

    /// Descriptor for `T` if it has already been published.
    pub fn get<T: Reflect>(&self) -> Option<&'static TypeDescriptor> {
        let slot = *self.slots.get(&TypeId::of::<T>())?;
        slot.get().copied()
    }

    /// Whether `T` has been resolved at least once.
    pub fn contains<T: Reflect>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Number of published descriptors.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|e| e.value().get().is_some()).count()
    }

    /// Check if no descriptor has been published yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full names of all published descriptors, sorted.
    ///
    /// Only descriptors published before the call are listed. Composing a
    /// composite's full name resolves its nested types, so a nested type
    /// that was never resolved on its own is published by this call and
    /// counted by [`len`](Self::len) afterwards.
    pub fn type_names(&self) -> Vec<String> {
        // Collect first: full names resolve nested types, which may need
        // the map shards the iterator is holding.
        let published: Vec<&'static TypeDescriptor> = self
            .slots
            .iter()
            .filter_map(|e| e.value().get().copied())
            .collect();
        let mut names: Vec<String> = published.iter().map(|d| d.full_name().to_owned()).collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn slot(&self, id: TypeId) -> &'static Slot {
        if let Some(slot) = self.slots.get(&id) {
            return *slot;
        }
        *self
            .slots
            .entry(id)
            .or_insert_with(|| &*Box::leak(Box::new(OnceLock::new())))
    }

    fn build<T: Reflect>(&self) -> &'static TypeDescriptor {
        let start = Instant::now();
        let desc: &'static TypeDescriptor = Box::leak(Box::new(T::type_descriptor()));
        self.record_miss(start);
        log::debug!(
            "[TypeRegistry::resolve] registered {} as {} ({} bytes)",
            type_name::<T>(),
            desc.name(),
            desc.size()
        );
        desc
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self, start: Instant) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
        stats.last_build_ns = saturating_nanos(start.elapsed());
    }
}

fn saturating_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Descriptor for `T` from the global registry.
///
/// Types without a [`Reflect`] impl are rejected at compile time.
pub fn resolve<T: Reflect>() -> &'static TypeDescriptor {
    TypeRegistry::global().resolve::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::StructDescriptor;

    struct Probe {
        id: u32,
    }

    impl Reflect for Probe {
        fn type_descriptor() -> TypeDescriptor {
            StructDescriptor::builder::<Probe>("Probe")
                .member("id", |p| &p.id)
                .build()
        }
    }

    struct NeverResolved;

    struct OnlyNested {
        tag: u8,
    }

    impl Reflect for OnlyNested {
        fn type_descriptor() -> TypeDescriptor {
            StructDescriptor::builder::<OnlyNested>("OnlyNested")
                .member("tag", |n| &n.tag)
                .build()
        }
    }

    impl Reflect for NeverResolved {
        fn type_descriptor() -> TypeDescriptor {
            StructDescriptor::builder::<NeverResolved>("NeverResolved").build()
        }
    }

    #[test]
    fn test_resolve_is_identity_stable() {
        let a = resolve::<Probe>();
        let b = resolve::<Probe>();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), "Probe");
    }

    #[test]
    fn test_get_does_not_build() {
        let registry = TypeRegistry::global();
        assert!(registry.get::<NeverResolved>().is_none());
        assert!(!registry.contains::<NeverResolved>());
    }

    #[test]
    fn test_resolution_is_counted() {
        let registry = TypeRegistry::global();
        let _ = registry.resolve::<Probe>();
        let before = registry.stats();
        let _ = registry.resolve::<Probe>();
        let after = registry.stats();
        assert!(after.hits > before.hits);
        assert!(after.misses >= 1);
        assert!(registry.contains::<Probe>());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_type_names_include_nested_full_names() {
        let _ = resolve::<Vec<Probe>>();
        let names = TypeRegistry::global().type_names();
        assert!(names.iter().any(|n| n == "Sequence<Probe>"));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_type_names_publishes_nested_types() {
        let registry = TypeRegistry::global();
        let _ = registry.resolve::<Vec<OnlyNested>>();

        let names = registry.type_names();
        assert!(names.iter().any(|n| n == "Sequence<OnlyNested>"));
        assert!(registry.contains::<OnlyNested>());
    }

    #[test]
    fn test_build_time_saturates() {
        assert_eq!(saturating_nanos(Duration::from_nanos(1500)), 1500);
        assert_eq!(saturating_nanos(Duration::MAX), u64::MAX);
    }
}
