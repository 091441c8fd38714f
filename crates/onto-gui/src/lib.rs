//! Ontology Browser - GUI Library
//!
//! Exposes the application's modules for integration testing. The binary in
//! `main.rs` assembles the same modules into the running Iced application.

pub mod component;
pub mod handler;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod util;
pub mod view;
