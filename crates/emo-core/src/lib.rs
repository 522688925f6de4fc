//! # emo-core
//!
//! Core record types, enums, and error types for emotrace.
//!
//! This crate provides the foundational types shared across all emotrace crates:
//! - Backend records as read by the dashboard (documents, inferences, alerts, evidence)
//! - Highlight spans and the segments produced by merging them
//! - Per-day emotion buckets and alert filter criteria
//! - The explicit session context handed to the fetch layer
//! - Response envelopes returned by the `emo` CLI
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod session;
