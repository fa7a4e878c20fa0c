//! axolgo: a command-line toolkit for AWS, GCP and cryptography chores
//!
//! The binary wires a clap command tree over three domains (`aws`, `gcp`,
//! `cryptography`). Every command resolves the layered YAML/environment
//! configuration once and receives it by reference.

pub mod aws;
pub mod cli;
pub mod config;
pub mod cryptography;
pub mod error;
pub mod gcp;
pub mod utils;
