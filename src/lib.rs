//! # KinetiCandles
//!
//! Candlestick aggregation and movement-pattern analysis for accelerometer
//! activity data.
//!
//! This crate takes an irregular, variable-resolution stream of
//! (timestamp, activity level) samples and produces OHLC-style candle
//! aggregates (first/last/max/min plus summary statistics) at three
//! granularities, along with rule-based pattern classification.
//!
//! ## Features
//!
//! - **Data Loading**: Parse activity samples from CSV files
//! - **Resolution Detection**: Classify a series as second- or minute-level
//! - **Time Bucketing**: Epoch-aligned interval buckets, hour-of-day buckets,
//!   and weekday buckets
//! - **Candle Aggregation**: Per-bucket candle records with minimum-sample
//!   policies per view
//! - **Pattern Classification**: Daily and weekly decision trees producing
//!   categorical pattern labels with supporting statistics
//! - **Day Navigation**: Wrapping cursor over the distinct dates in a series
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Flat re-export surface for the public types and entry points
//! - [`models`]: Core data types (samples, candles, view configuration)
//! - [`services`]: Bucketing, aggregation, classification, and the view
//!   pipeline
//! - [`loader`]: CSV ingestion
//! - [`error`]: Error taxonomy for loading and view configuration
//!
//! Data flows one way: raw samples are loaded into a [`models::Series`], the
//! view pipeline buckets and aggregates them into candle records per the
//! requested [`models::ViewConfig`], and the classifier derives pattern
//! labels from the aggregates. Every pipeline call is pure with respect to
//! its inputs; degenerate inputs degrade to empty results rather than errors.

pub mod api;

pub mod error;
pub mod loader;
pub mod models;

pub mod services;
