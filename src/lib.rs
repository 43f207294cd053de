// src/lib.rs

//! Watchlist Streams Library
//!
//! Harvests a Letterboxd watchlist, looks every film up on a streaming
//! availability service and groups the results by subscription service.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
