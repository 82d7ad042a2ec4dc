use orrery_engine::Speed;

use crate::body::{BodyId, BodySet};
use crate::config::SimulationConfig;

/// A user request. Each one maps to exactly one state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleMeteors,
    ToggleOrbits,
    /// Focus a body by name; `None` returns to the free default view.
    SetFocus(Option<String>),
    IncreaseSpeed,
    DecreaseSpeed,
}

/// Every user-controlled toggle, as one value.
///
/// Never mutated in place: [`SimulationState::apply`] returns the next state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub meteors_enabled: bool,
    pub orbits_visible: bool,
    pub focus: Option<BodyId>,
    pub speed: Speed,
}

impl SimulationState {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            meteors_enabled: config.meteors_enabled,
            orbits_visible: config.orbits_visible,
            focus: None,
            speed: Speed::new(config.initial_speed, config.speed_step, config.speed_floor),
        }
    }

    pub fn apply(self, command: &Command, bodies: &BodySet) -> Self {
        match command {
            Command::ToggleMeteors => Self {
                meteors_enabled: !self.meteors_enabled,
                ..self
            },
            Command::ToggleOrbits => Self {
                orbits_visible: !self.orbits_visible,
                ..self
            },
            Command::SetFocus(name) => Self {
                focus: name.as_deref().and_then(|n| bodies.find(n)),
                ..self
            },
            Command::IncreaseSpeed => Self {
                speed: self.speed.increased(),
                ..self
            },
            Command::DecreaseSpeed => Self {
                speed: self.speed.decreased(),
                ..self
            },
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
