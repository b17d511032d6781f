//! Application state module

mod viewport;

pub use viewport::{
    CanvasFit, SharedViewportState, ViewportState, canvas_points, physical_size,
};

use std::sync::Arc;

use parking_lot::Mutex;

use bird_core::{Blueprint, DisplayToggles, SceneState};

/// Application state
pub struct AppState {
    /// Toggles bound to the debug controls
    pub toggles: DisplayToggles,
    /// Scene built from the last applied toggles
    pub scene: SceneState,
    /// Frames processed so far
    pub frame: u64,
}

impl AppState {
    /// Create the state with an initial scene for `toggles`
    pub fn new(toggles: DisplayToggles) -> Self {
        Self {
            toggles,
            scene: SceneState::new(Blueprint::DRINKING_BIRD, toggles),
            frame: 0,
        }
    }

    /// Advance one frame. Returns true when the scene was rebuilt.
    pub fn update(&mut self) -> bool {
        self.frame += 1;
        self.scene.update(&self.toggles)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DisplayToggles::default())
    }
}

/// Shared application state
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state(toggles: DisplayToggles) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(toggles)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bird_core::DisplayToggle;

    #[test]
    fn test_initial_scene_matches_toggles() {
        let state = AppState::default();
        assert_eq!(state.frame, 0);
        assert_eq!(state.scene.built_for(), &state.toggles);
        assert_eq!(state.scene.rebuild_count(), 0);
    }

    #[test]
    fn test_update_without_changes() {
        let mut state = AppState::default();
        assert!(!state.update());
        assert!(!state.update());
        assert_eq!(state.frame, 2);
        assert_eq!(state.scene.rebuild_count(), 0);
    }

    #[test]
    fn test_toggle_rebuilds_once() {
        let mut state = AppState::default();
        state.toggles.set(DisplayToggle::Axes, true);
        assert!(state.update());
        assert!(!state.update());
        assert_eq!(state.scene.rebuild_count(), 1);
        assert!(state.scene.built_for().axes);
    }

    #[test]
    fn test_shared_state() {
        let shared = create_shared_state(DisplayToggles::default());
        shared.lock().toggles.set(DisplayToggle::Ground, false);
        assert!(shared.lock().update());
        assert!(!shared.lock().scene.built_for().ground);
    }
}
