//! # tempo-core
//!
//! Core types and error types for Tempo.
//!
//! This crate provides the foundational types shared across all Tempo crates:
//! - The time-tracking [`Entry`](entities::Entry) as read from the record store
//! - Controlled [`Vocabulary`](entities::Vocabulary) label sets
//! - The partial [`Classification`](entities::Classification) written back
//! - The [`Attribute`](enums::Attribute) enum naming the two classified fields
//! - Date parsing helpers and cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
