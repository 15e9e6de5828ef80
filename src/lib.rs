//! CodeCrafter Library
//!
//! Core modules for the CodeCrafter editor action pipeline.

pub mod action;
pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod handler;
pub mod host;
pub mod orchestrator;
