//! Browser bindings
//!
//! The page owns the canvas, input listeners and `requestAnimationFrame`
//! loop; it calls into [`WebGame`] and draws the JSON snapshot it returns.

use wasm_bindgen::prelude::*;

use crate::Engine;
use crate::audio::cues_for;
use crate::persistence::{BestScoreStore, PersistError, load_best_score, persist_events};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Best score in LocalStorage, stored as a plain number string
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub const STORAGE_KEY: &'static str = "bestScore";

    pub fn new() -> Self {
        Self {
            key: Self::STORAGE_KEY,
        }
    }

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .ok_or_else(|| PersistError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistError::Unavailable("LocalStorage disabled".into()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        let value = Self::storage()?
            .get_item(self.key)
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?;
        match value {
            Some(text) => text
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| PersistError::Unavailable(format!("bad value {:?}: {}", text, e))),
            None => Ok(None),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(self.key, &best.to_string())
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        Self::storage()?
            .remove_item(self.key)
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Skyhop (web) starting...");
}

/// Game handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    engine: Engine,
    store: LocalStorageStore,
    /// Sound asset names queued since the last `take_sounds`
    sounds: Vec<String>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json_str(tuning_json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning, using defaults: {}", e);
                Tuning::default()
            })
        };
        let store = LocalStorageStore::new();
        let best = load_best_score(&store);
        let seed = js_sys::Date::now() as u64;

        WebGame {
            engine: Engine::new(seed, tuning, best),
            store,
            sounds: Vec::new(),
        }
    }

    /// Advance one frame; returns the renderable state as JSON
    pub fn tick(&mut self, now_ms: f64) -> String {
        let snapshot = self.engine.tick(now_ms);
        self.flush_events();
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::new()
        })
    }

    pub fn activate(&mut self) {
        self.engine.activate();
        self.flush_events();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
        self.flush_events();
    }

    #[wasm_bindgen(js_name = resetBestScore)]
    pub fn reset_best_score(&mut self) {
        self.engine.reset_best_score();
        self.flush_events();
    }

    #[wasm_bindgen(js_name = cycleSkin)]
    pub fn cycle_skin(&mut self) {
        self.engine.cycle_skin();
    }

    /// Replace settings from JSON (ignored if invalid)
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, settings_json: &str) {
        match Settings::from_json_str(settings_json) {
            Ok(settings) => self.engine.set_settings(settings),
            Err(e) => log::warn!("Invalid settings ignored: {}", e),
        }
    }

    /// Sound asset names to play, oldest first
    #[wasm_bindgen(js_name = takeSounds)]
    pub fn take_sounds(&mut self) -> Vec<String> {
        std::mem::take(&mut self.sounds)
    }

    fn flush_events(&mut self) {
        let events = self.engine.take_events();
        if events.is_empty() {
            return;
        }
        for cue in cues_for(&events, self.engine.settings()) {
            self.sounds.push(cue.effect.name().to_string());
        }
        persist_events(&mut self.store, &events);
    }
}
