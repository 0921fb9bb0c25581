//! Core data models for the Severance Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod request;
mod settlement;

pub use request::{NoticeType, TerminationReason, TerminationRequest};
pub use settlement::{SettlementComponent, SettlementLine, SettlementResult};
