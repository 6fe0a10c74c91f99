//! Random movie discovery service.
//!
//! Samples random pages of the TMDB discover catalog until a movie matches the
//! requested genres and streaming platforms, then enriches it with runtime,
//! rating and trailers.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
