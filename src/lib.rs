//! Severance Settlement Engine for Brazilian CLT terminations
//!
//! This crate computes the gross severance settlement ("rescisão") owed to an
//! employee on termination, itemized into its legal components: salary balance,
//! notice pay, proportional 13th salary, proportional vacation pay with its
//! one-third bonus, expired vacation, and the FGTS deposit and penalty amounts.
//! Tax withholding (INSS/IRRF) is out of scope and is left to a downstream
//! fiscal module consuming the gross result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
