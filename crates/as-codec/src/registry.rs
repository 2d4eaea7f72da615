//! Type-discriminator resolution.
//!
//! A [`Registry`] maps, per capability interface, the `type` strings found
//! in JSON to concrete type handles and back. It is built once from a
//! declarative table and is read-only afterwards.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::{CodecError, RegistryError};

/// Names a capability interface, such as "can appear where an Object or a
/// Link is expected".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(&'static str);

impl InterfaceId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identifies a concrete vocabulary type.
///
/// Implemented for every small copyable key, typically a fieldless enum.
pub trait TypeHandle: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> TypeHandle for T where T: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

#[derive(Debug, Clone)]
struct InterfaceTable<K> {
    by_discriminator: HashMap<String, K>,
    by_handle: HashMap<K, String>,
    fallback: Option<K>,
}

impl<K> Default for InterfaceTable<K> {
    fn default() -> Self {
        Self {
            by_discriminator: HashMap::new(),
            by_handle: HashMap::new(),
            fallback: None,
        }
    }
}

/// Closed, immutable table of the concrete types registered per interface.
#[derive(Debug, Clone)]
pub struct Registry<K> {
    tables: HashMap<InterfaceId, InterfaceTable<K>>,
}

impl<K: TypeHandle> Registry<K> {
    pub fn builder() -> RegistryBuilder<K> {
        RegistryBuilder::default()
    }

    /// Resolves the declared discriminators of a node to a concrete type.
    ///
    /// Discriminators are tried in the order given and the first registered
    /// one wins. When none matches, the interface's fallback is returned if
    /// it has one.
    pub fn resolve<S: AsRef<str>>(
        &self,
        interface: InterfaceId,
        discriminators: &[S],
    ) -> Result<K, CodecError> {
        let table = self.tables.get(&interface);

        let matched = table.and_then(|table| {
            discriminators
                .iter()
                .find_map(|d| table.by_discriminator.get(d.as_ref()).copied())
        });
        if let Some(handle) = matched {
            return Ok(handle);
        }

        let declared: Vec<String> = discriminators
            .iter()
            .map(|d| d.as_ref().to_owned())
            .collect();

        match table.and_then(|table| table.fallback) {
            Some(fallback) => {
                tracing::debug!(
                    "no type in {interface} for {declared:?}, falling back to {fallback:?}"
                );
                Ok(fallback)
            }
            None => Err(CodecError::UnknownDiscriminator {
                interface,
                discriminators: declared,
            }),
        }
    }

    /// Returns the discriminator a handle is registered under in `interface`.
    pub fn discriminator_for(&self, interface: InterfaceId, handle: K) -> Result<&str, CodecError> {
        self.tables
            .get(&interface)
            .and_then(|table| table.by_handle.get(&handle))
            .map(String::as_str)
            .ok_or_else(|| {
                tracing::warn!("attempt to encode {handle:?} through {interface}");
                CodecError::UnregisteredType {
                    interface,
                    handle: format!("{handle:?}"),
                }
            })
    }

    pub fn fallback(&self, interface: InterfaceId) -> Option<K> {
        self.tables.get(&interface).and_then(|table| table.fallback)
    }

    pub fn contains(&self, interface: InterfaceId, handle: K) -> bool {
        self.tables
            .get(&interface)
            .is_some_and(|table| table.by_handle.contains_key(&handle))
    }

    pub fn interfaces(&self) -> impl Iterator<Item = InterfaceId> + '_ {
        self.tables.keys().copied()
    }
}

/// Collects the declarative table a [`Registry`] is built from.
#[derive(Debug, Clone)]
pub struct RegistryBuilder<K> {
    entries: Vec<(InterfaceId, String, K)>,
    interfaces: Vec<InterfaceId>,
    fallbacks: Vec<(InterfaceId, K)>,
}

impl<K> Default for RegistryBuilder<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            interfaces: Vec::new(),
            fallbacks: Vec::new(),
        }
    }
}

impl<K: TypeHandle> RegistryBuilder<K> {
    /// Declares `interface` and its members as (discriminator, handle) pairs.
    pub fn interface<'a, I>(mut self, interface: InterfaceId, members: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, K)>,
    {
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
        self.entries.extend(
            members
                .into_iter()
                .map(|(discriminator, handle)| (interface, discriminator.to_owned(), handle)),
        );
        self
    }

    /// Designates the type unknown discriminators resolve to in `interface`.
    pub fn fallback(mut self, interface: InterfaceId, handle: K) -> Self {
        self.fallbacks.retain(|(id, _)| *id != interface);
        self.fallbacks.push((interface, handle));
        self
    }

    pub fn build(self) -> Result<Registry<K>, RegistryError> {
        let mut tables: HashMap<InterfaceId, InterfaceTable<K>> = self
            .interfaces
            .iter()
            .map(|interface| (*interface, InterfaceTable::default()))
            .collect();

        for (interface, discriminator, handle) in self.entries {
            let table = tables.entry(interface).or_default();

            if table.by_discriminator.contains_key(&discriminator) {
                tracing::error!("found duplicate discriminator in {interface}: {discriminator}");
                return Err(RegistryError::DuplicateDiscriminator {
                    interface,
                    discriminator,
                });
            }
            if table.by_handle.contains_key(&handle) {
                tracing::error!("found duplicate type in {interface}: {handle:?}");
                return Err(RegistryError::DuplicateHandle {
                    interface,
                    handle: format!("{handle:?}"),
                });
            }

            table.by_discriminator.insert(discriminator.clone(), handle);
            table.by_handle.insert(handle, discriminator);
        }

        for (interface, handle) in self.fallbacks {
            let table = tables
                .get_mut(&interface)
                .ok_or(RegistryError::UndeclaredInterface { interface })?;
            if !table.by_handle.contains_key(&handle) {
                return Err(RegistryError::FallbackNotMember {
                    interface,
                    handle: format!("{handle:?}"),
                });
            }
            table.fallback = Some(handle);
        }

        tracing::debug!("type registry built with {} interfaces", tables.len());
        Ok(Registry { tables })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THING: InterfaceId = InterfaceId::new("Thing");
    const SHAPE: InterfaceId = InterfaceId::new("Shape");

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Kind {
        Circle,
        Square,
        Blob,
    }

    fn registry() -> Registry<Kind> {
        Registry::builder()
            .interface(THING, [("Circle", Kind::Circle), ("Square", Kind::Square), ("Blob", Kind::Blob)])
            .interface(SHAPE, [("Circle", Kind::Circle), ("Square", Kind::Square)])
            .build()
            .unwrap()
    }

    #[test]
    fn resolves_single_discriminator() {
        assert_eq!(registry().resolve(SHAPE, &["Square"]).unwrap(), Kind::Square);
    }

    #[test]
    fn first_declared_match_wins() {
        let registry = registry();

        assert_eq!(registry.resolve(SHAPE, &["Foo", "Square"]).unwrap(), Kind::Square);
        // Declared order decides, not the order of the table.
        assert_eq!(registry.resolve(SHAPE, &["Square", "Circle"]).unwrap(), Kind::Square);
        assert_eq!(registry.resolve(SHAPE, &["Circle", "Square"]).unwrap(), Kind::Circle);
    }

    #[test]
    fn membership_is_per_interface() {
        let err = registry().resolve(SHAPE, &["Blob"]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownDiscriminator { interface, ref discriminators }
                if interface == SHAPE && discriminators == &["Blob".to_owned()]
        ));
    }

    #[test]
    fn unknown_interface_resolves_nothing() {
        let err = registry()
            .resolve(InterfaceId::new("Nope"), &["Circle"])
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownDiscriminator { .. }));
    }

    #[test]
    fn fallback_absorbs_unknown_discriminators() {
        let registry = Registry::builder()
            .interface(SHAPE, [("Circle", Kind::Circle), ("Square", Kind::Square)])
            .fallback(SHAPE, Kind::Circle)
            .build()
            .unwrap();

        assert_eq!(registry.resolve(SHAPE, &["Zzz"]).unwrap(), Kind::Circle);
        assert_eq!(registry.resolve::<&str>(SHAPE, &[]).unwrap(), Kind::Circle);
        assert_eq!(registry.fallback(SHAPE), Some(Kind::Circle));
    }

    #[test]
    fn inverse_lookup() {
        let registry = registry();

        assert_eq!(registry.discriminator_for(THING, Kind::Blob).unwrap(), "Blob");
        let err = registry.discriminator_for(SHAPE, Kind::Blob).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnregisteredType { interface, ref handle }
                if interface == SHAPE && handle == "Blob"
        ));
    }

    #[test]
    fn rejects_invalid_tables() {
        let duplicate_discriminator = Registry::builder()
            .interface(SHAPE, [("Circle", Kind::Circle), ("Circle", Kind::Square)])
            .build()
            .unwrap_err();
        assert_eq!(
            duplicate_discriminator,
            RegistryError::DuplicateDiscriminator {
                interface: SHAPE,
                discriminator: "Circle".to_owned()
            }
        );

        let duplicate_handle = Registry::builder()
            .interface(SHAPE, [("Circle", Kind::Circle), ("Round", Kind::Circle)])
            .build()
            .unwrap_err();
        assert!(matches!(duplicate_handle, RegistryError::DuplicateHandle { .. }));

        let foreign_fallback = Registry::builder()
            .interface(SHAPE, [("Circle", Kind::Circle)])
            .fallback(SHAPE, Kind::Blob)
            .build()
            .unwrap_err();
        assert!(matches!(foreign_fallback, RegistryError::FallbackNotMember { .. }));

        let undeclared = Registry::builder()
            .interface(SHAPE, [("Circle", Kind::Circle)])
            .fallback(THING, Kind::Circle)
            .build()
            .unwrap_err();
        assert_eq!(undeclared, RegistryError::UndeclaredInterface { interface: THING });
    }

    #[test]
    fn same_handle_may_join_several_interfaces() {
        let registry = registry();
        assert!(registry.contains(THING, Kind::Circle));
        assert!(registry.contains(SHAPE, Kind::Circle));
        assert_eq!(registry.interfaces().count(), 2);
    }
}
