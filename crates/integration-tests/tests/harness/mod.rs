//! Shared test harness
//!
//! Each integration test binary compiles this module separately, so not
//! every binary uses every helper.
#![allow(dead_code)]

pub mod mock_provider;
pub mod server;
