//! # Centroid Library
//!
//! Content-based article recommendations from pretrained word embeddings.
//! Each article body becomes the mean of its word vectors; articles are then
//! ranked against each other by Euclidean distance.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
