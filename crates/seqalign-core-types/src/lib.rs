//! Core types shared across seqalign facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility:
//!
//! - **Field keys**: component, op, event, sizes, error classification
//! - **Event names**: start, end, end_error

pub mod schema;
