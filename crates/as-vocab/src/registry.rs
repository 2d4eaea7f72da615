//! The declarative type table and the process-wide registries built from it.

use as_codec::{Capability, InterfaceId, Registry, RegistryBuilder};
use once_cell::sync::Lazy;

use crate::{
    capability::{CollectionOrLink, CollectionPageOrLink, ImageOrLink, ObjectOrLink, UriOrLink},
    kind::Kind,
};

fn members(filter: fn(Kind) -> bool) -> impl Iterator<Item = (&'static str, Kind)> {
    Kind::ALL
        .iter()
        .copied()
        .filter(move |kind| filter(*kind))
        .map(|kind| (kind.name(), kind))
}

/// The vocabulary's interface table, without fallbacks.
///
/// Callers that need their own fallbacks start from this builder.
pub fn vocabulary() -> RegistryBuilder<Kind> {
    Registry::builder()
        .interface(interface::<ObjectOrLink>(), members(|_| true))
        .interface(
            interface::<ImageOrLink>(),
            members(|kind| kind == Kind::Image || kind.is_link()),
        )
        .interface(
            interface::<CollectionOrLink>(),
            members(|kind| kind.is_collection() || kind.is_link()),
        )
        .interface(
            interface::<CollectionPageOrLink>(),
            members(|kind| kind.is_collection_page() || kind.is_link()),
        )
        .interface(interface::<UriOrLink>(), members(Kind::is_link))
}

/// The vocabulary table with a fallback on every interface, so unknown
/// extension kinds decode as the most general member instead of failing.
pub fn lenient_vocabulary() -> RegistryBuilder<Kind> {
    vocabulary()
        .fallback(interface::<ObjectOrLink>(), Kind::Object)
        .fallback(interface::<ImageOrLink>(), Kind::Link)
        .fallback(interface::<CollectionOrLink>(), Kind::Collection)
        .fallback(interface::<CollectionPageOrLink>(), Kind::CollectionPage)
        .fallback(interface::<UriOrLink>(), Kind::Link)
}

fn interface<C: Capability<Kind>>() -> InterfaceId {
    C::INTERFACE
}

static STRICT: Lazy<Registry<Kind>> = Lazy::new(|| {
    tracing::debug!("building strict ActivityStreams registry");
    vocabulary().build().expect("vocabulary table is valid")
});

static LENIENT: Lazy<Registry<Kind>> = Lazy::new(|| {
    tracing::debug!("building lenient ActivityStreams registry");
    lenient_vocabulary()
        .build()
        .expect("vocabulary table is valid")
});

/// Registry where unknown discriminators fail with `UnknownDiscriminator`.
pub fn registry() -> &'static Registry<Kind> {
    &STRICT
}

/// Registry where unknown discriminators resolve to each interface's
/// fallback.
pub fn lenient_registry() -> &'static Registry<Kind> {
    &LENIENT
}
