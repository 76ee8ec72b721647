//! Communication Styles - Four-colour questionnaire scoring engine
//!
//! This crate scores a fixed questionnaire into four communication style
//! categories, ranks them into dominant and secondary styles, and assembles
//! a narrative report that export adapters render to documents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
