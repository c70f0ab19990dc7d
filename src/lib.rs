//! Attendance Reconciliation Engine
//!
//! This crate reconciles two independent event streams of a shop's
//! time-tracking system (scheduled shifts and employee time-clock punches)
//! into a live attendance status per shift, and raises lateness alerts for
//! clock-ins past a configurable grace period.
//!
//! The same delay formula and threshold comparison back both the synchronous
//! per-punch check and the dashboard aggregate, so the two call sites can
//! never disagree about what counts as "late".

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod reconciliation;
pub mod store;
