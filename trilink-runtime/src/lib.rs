// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Animation runtime for the planar arm.
//!
//! The runtime sweeps the joints, evaluates the arm for every instant and
//! hands the positioned frames to one or more render sinks.

pub mod animation;
pub mod scene;
pub mod sink;

mod config;
mod error;

pub use self::animation::Animator;
pub use self::config::*;
pub use self::error::Error;

pub use trilink_core;

pub type Result<T = ()> = std::result::Result<T, Error>;

pub mod consts {
    /// Trilink runtime version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default delay between two animation instants in milliseconds.
    pub const DEFAULT_INTERVAL: u64 = 300;
}
