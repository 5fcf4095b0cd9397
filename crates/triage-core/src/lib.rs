//! Clinical triage rule-matching and arbitration engine.
//!
//! The `triage` module carries the decision core: declarative rule tables
//! for the general, pediatric, and geriatric populations, a weight-based
//! arbitration engine with a full explainability trail, an independent
//! quick scorer, and the wait-time contract consumed by queue tooling.
//! `config`, `telemetry`, and `error` are the shared ambient plumbing the
//! API service builds on.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;
