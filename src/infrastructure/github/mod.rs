//! GitHub adapter for the issue source port.

pub mod client;

pub use client::{GithubClient, GithubClientConfig};
