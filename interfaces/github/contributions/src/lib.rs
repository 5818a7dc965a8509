//! GitHub GraphQL contribution calendar lookup.

pub mod index;
