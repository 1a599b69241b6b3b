// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Forward kinematics for a planar manipulator.
//!
//! The crate builds rotation matrices per joint, composes them with the joint
//! offsets into homogeneous transforms and chains those transforms from the
//! base outward. The resulting poses are applied to frame geometry which can be
//! handed to any renderer.

pub mod arm;
pub mod chain;
pub mod frame;
pub mod geometry;
pub mod trajectory;
pub mod transform;

mod error;

pub use self::arm::Arm;
pub use self::chain::{evaluate, Chain, Joint};
pub use self::error::{Error, Result};
pub use self::geometry::{rotation, Axis};
pub use self::trajectory::{JointAngles, Sweep};
pub use self::transform::compose;

pub use nalgebra;
