//! Pose snapshots and the targets they are captured from and restored to.

use serde::{Deserialize, Serialize};

/// Three-component vector used for positions and Euler angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Position plus orientation (Euler angles, degrees).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Vec3,
}

/// Whatever an entity's pose lives on.
///
/// `capture_pose` is read once when the controller is built;
/// `restore_pose` is written each time the entity enters `Resetting`.
pub trait PoseTarget {
    /// Current pose, or `None` if the pose source is not available.
    fn capture_pose(&self) -> Option<Pose>;

    fn restore_pose(&mut self, pose: &Pose);
}

/// In-memory transform: a root position and an optional pivot carrying the
/// orientation.
///
/// Without a pivot there is no orientation to capture, so
/// [`capture_pose`](PoseTarget::capture_pose) returns `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub pivot: Option<Vec3>,
}

impl Transform {
    pub fn new(position: Vec3, orientation: Vec3) -> Self {
        Self {
            position,
            pivot: Some(orientation),
        }
    }

    /// A transform missing its pivot.
    pub fn without_pivot(position: Vec3) -> Self {
        Self {
            position,
            pivot: None,
        }
    }

    pub fn pose(&self) -> Option<Pose> {
        self.capture_pose()
    }
}

impl PoseTarget for Transform {
    fn capture_pose(&self) -> Option<Pose> {
        let orientation = self.pivot?;
        Some(Pose {
            position: self.position,
            orientation,
        })
    }

    fn restore_pose(&mut self, pose: &Pose) {
        self.position = pose.position;
        self.pivot = Some(pose.orientation);
    }
}
