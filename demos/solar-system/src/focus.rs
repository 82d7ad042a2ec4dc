use glam::Vec3;

use crate::body::{BodyId, BodySet};
use crate::config::SimulationConfig;

/// Eye and look-at target for the scene camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Keeps the camera locked onto one body, or leaves it free.
///
/// Focus is held as a [`BodyId`] and resolved against the [`BodySet`] every
/// tick, so the controller never outlives or owns the body it follows.
#[derive(Debug, Clone)]
pub struct CameraFocusController {
    focused: Option<BodyId>,
    offset: Vec3,
    default_pose: CameraPose,
}

impl CameraFocusController {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            focused: None,
            offset: config.focus_offset,
            default_pose: CameraPose {
                eye: config.default_eye,
                target: config.default_target,
            },
        }
    }

    /// Change focus by body name.
    ///
    /// `None` clears focus and returns the default pose to apply immediately.
    /// A known name focuses that body and returns its pose. An unknown name
    /// clears focus and returns nothing, leaving the camera where it is.
    pub fn set_focus(&mut self, name: Option<&str>, bodies: &BodySet) -> Option<CameraPose> {
        let Some(name) = name else {
            self.focused = None;
            log::info!("camera focus cleared");
            return Some(self.default_pose);
        };

        match bodies.find(name) {
            Some(id) => {
                self.focused = Some(id);
                log::info!("camera focus on {name}");
                self.pose(bodies)
            }
            None => {
                self.focused = None;
                log::warn!("no body named {name:?}, camera focus cleared");
                None
            }
        }
    }

    /// Pose for the current tick, if a body is focused.
    pub fn pose(&self, bodies: &BodySet) -> Option<CameraPose> {
        let body = bodies.get(self.focused?)?;
        Some(CameraPose {
            eye: body.position + self.offset,
            target: body.position,
        })
    }

    pub fn focused(&self) -> Option<BodyId> {
        self.focused
    }

    pub fn default_pose(&self) -> CameraPose {
        self.default_pose
    }
}
