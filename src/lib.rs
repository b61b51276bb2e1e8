//! Rent validation engine for Swiss tenancies indexed to the mortgage
//! reference rate (Referenzzinssatz).
//!
//! The engine reconstructs what a rent should have become after every
//! published rate change, reconciles that against the adjustments a tenancy's
//! records actually show, and reports whether the tenant is currently owed a
//! reduction that was never applied. Callers assemble a [`rentcheck::RentHistory`],
//! inject "today", and receive a [`rentcheck::ValidationReport`]; the engine
//! performs no I/O of its own.

pub mod config;
pub mod error;
pub mod rentcheck;
pub mod telemetry;
