//! # IO Module
//!
//! Adapter between the UI layer's JSON call contract (`shared` DTOs holding
//! `yyyy-MM-dd` keys) and the domain. Handlers parse and validate input,
//! call the domain, and map results or errors back into DTOs.

pub mod commands;
pub mod mappers;

pub use commands::*;
