//! GitHub REST `users` lookup.

pub mod index;
