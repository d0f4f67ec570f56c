//! Input actions and key bindings
//!
//! Keyboard events arrive in the wasm driver; this module maps key names to
//! game actions and tracks which actions are held between frames. Bindings
//! persist to LocalStorage so rebound keys survive a reload.

use serde::{Deserialize, Serialize};

/// An action the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Duck,
    /// Restart from the death screen
    Confirm,
}

/// Number of distinct actions
const ACTION_COUNT: usize = 3;

impl Action {
    fn index(self) -> usize {
        match self {
            Action::Jump => 0,
            Action::Duck => 1,
            Action::Confirm => 2,
        }
    }
}

/// Which actions are currently held down
///
/// Key events flip these flags; the frame loop snapshots them into a
/// `TickInput` once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; ACTION_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn set_held(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }
}

/// Key bindings, stored as `KeyboardEvent.key` values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    pub jump: Vec<String>,
    pub duck: Vec<String>,
    pub confirm: Vec<String>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            jump: vec![" ".to_string(), "w".to_string(), "ArrowUp".to_string()],
            duck: vec![
                "s".to_string(),
                "Control".to_string(),
                "ArrowDown".to_string(),
            ],
            confirm: vec!["Enter".to_string()],
        }
    }
}

impl Bindings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvasGame.bindings";

    /// Map a `KeyboardEvent.key` value to its bound action.
    ///
    /// Matching ignores ASCII case so "W" with Shift held still jumps.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        let bound = |keys: &[String]| keys.iter().any(|k| k.eq_ignore_ascii_case(key));
        if bound(&self.jump) {
            Some(Action::Jump)
        } else if bound(&self.duck) {
            Some(Action::Duck)
        } else if bound(&self.confirm) {
            Some(Action::Confirm)
        } else {
            None
        }
    }

    /// Load bindings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(bindings) = serde_json::from_str(&json) {
                    log::info!("Loaded key bindings from LocalStorage");
                    return bindings;
                }
            }
        }

        log::info!("Using default key bindings");
        Self::default()
    }

    /// Save bindings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Key bindings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
