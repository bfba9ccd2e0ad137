//! Progress Hub - Professional profile aggregation service
//!
//! This crate backs a learning-progress dashboard's Professional Hub: a user
//! links their GitHub, LeetCode, Medium and Twitter accounts once, and the hub
//! shows recent repositories, solved-problem stats, latest articles and an
//! embedded timeline side by side.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
