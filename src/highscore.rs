//! Best-score persistence
//!
//! Persisted to LocalStorage as a plain decimal string so the value stays
//! readable in the browser's storage inspector.

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "canvasGame.highScore";

/// Parse a stored value, falling back to zero for anything unreadable
#[allow(dead_code)]
fn parse_stored(raw: Option<String>) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Load the best score from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load() -> f32 {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if let Ok(raw) = storage.get_item(STORAGE_KEY) {
            let best = parse_stored(raw);
            log::info!("Loaded best score {:.1}", best);
            return best;
        }
    }

    log::info!("No stored best score, starting fresh");
    0.0
}

/// Save the best score to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save(best: f32) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        let _ = storage.set_item(STORAGE_KEY, &best.to_string());
        log::info!("Best score saved ({:.1})", best);
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> f32 {
    0.0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_best: f32) {
    // No-op for native
}
