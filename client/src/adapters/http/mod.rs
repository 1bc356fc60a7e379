//! PickGit REST adapter
//!
//! `reqwest` client for the PickGit API and the response types it maps into
//! domain entities.

pub mod client;
mod responses;

pub use client::PickGitClient;
