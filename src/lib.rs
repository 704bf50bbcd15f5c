//! Contract Payment Audit Engine.
//!
//! This crate audits housemaid-contract payment records against a
//! nationality/contract-type price table, running an ordered cascade of
//! compliance checks per contract: current price, price at contract start,
//! nationality-upgrade price, pro-rated threshold, and a historical-price
//! tolerance check.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
