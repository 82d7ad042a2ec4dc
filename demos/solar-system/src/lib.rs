use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod body;
mod config;
mod focus;
mod game;
mod meteors;
mod orbit;
mod state;
mod update;

use config::SimulationConfig;
use game::SolarSystem;
use state::Command;

thread_local! {
    static CONFIG: std::cell::RefCell<SimulationConfig> = std::cell::RefCell::new(SimulationConfig::default());
}

fn configured_game() -> SolarSystem {
    SolarSystem::with_config(CONFIG.with(|c| c.borrow().clone()))
}

orrery_web::export_game!(SolarSystem, "solar-system", configured_game);

/// Override simulation constants. Takes effect at the next `game_init`.
/// Returns false (and keeps the previous values) when the JSON is invalid.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> bool {
    match SimulationConfig::from_json(json) {
        Ok(config) => {
            CONFIG.with(|c| *c.borrow_mut() = config);
            true
        }
        Err(err) => {
            log::error!("invalid simulation config: {err}");
            false
        }
    }
}

/// Focus the camera on a body by name. `"default"` or an empty name returns
/// to the free overview.
#[wasm_bindgen]
pub fn game_set_focus(name: &str) {
    with_runner(|r| r.game_mut().queue(focus_command(name)));
}

fn focus_command(name: &str) -> Command {
    match name.trim() {
        "" | "default" => Command::SetFocus(None),
        name => Command::SetFocus(Some(name.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_means_no_focus() {
        assert_eq!(focus_command("default"), Command::SetFocus(None));
        assert_eq!(focus_command(""), Command::SetFocus(None));
        assert_eq!(focus_command("Earth"), Command::SetFocus(Some("earth".into())));
    }
}
