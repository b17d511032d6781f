//! Scene assembly and the rebuild state machine
//!
//! [`assemble_scene`] builds a complete scene from the display toggles.
//! [`SceneState`] keeps the last built scene together with the toggles it was
//! built for and rebuilds it from scratch whenever the requested toggles
//! differ. A rebuild finishes synchronously inside [`SceneState::update`].

use glam::Vec3;

use crate::blueprint::Blueprint;
use crate::constants::{BACKGROUND_COLOR, fog, helpers as helper_constants, lights};
use crate::display::DisplayToggles;
use crate::helpers::{GridOrientation, axes, grid, ground};
use crate::layout::build_drinking_bird;
use crate::material::Color;
use crate::scene::{Fog, Light, Scene};

/// Build a fresh scene: lights, enabled helpers, then the model
pub fn assemble_scene(blueprint: &Blueprint, toggles: &DisplayToggles) -> Scene {
    let mut scene = Scene::new(Color::from_hex(BACKGROUND_COLOR));
    scene.fog = Some(Fog {
        color: Color::from_hex(fog::COLOR),
        near: fog::NEAR,
        far: fog::FAR,
    });

    scene.add_light(Light::Ambient {
        color: Color::from_hex(lights::AMBIENT_COLOR),
    });
    scene.add_light(Light::Directional {
        color: Color::from_hex(lights::KEY_COLOR),
        intensity: lights::KEY_INTENSITY,
        position: Vec3::from_array(lights::KEY_POSITION),
    });
    scene.add_light(Light::Directional {
        color: Color::from_hex(lights::FILL_COLOR),
        intensity: lights::FILL_INTENSITY,
        position: Vec3::from_array(lights::FILL_POSITION),
    });

    let size = helper_constants::GROUND_SIZE;
    let scale = helper_constants::GRID_SCALE;
    if toggles.ground {
        scene.add_mesh(ground(size));
    }
    if toggles.grid_x {
        scene.add_lines(grid(size, scale, GridOrientation::X));
    }
    if toggles.grid_y {
        scene.add_lines(grid(size, scale, GridOrientation::Y));
    }
    if toggles.grid_z {
        scene.add_lines(grid(size, scale, GridOrientation::Z));
    }
    if toggles.axes {
        scene.add_meshes(axes(
            helper_constants::AXIS_LENGTH,
            helper_constants::AXIS_RADIUS,
            helper_constants::AXIS_TESSELLATION,
        ));
    }

    scene.add_meshes(build_drinking_bird(blueprint));
    scene
}

/// Phase of the scene for a given toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerPhase {
    /// Scene matches the request, nothing to do
    Idle,
    /// Toggles changed since the last build, the scene must be rebuilt
    Rebuilding,
}

/// Current scene plus the toggles it was built for
#[derive(Debug, Clone)]
pub struct SceneState {
    blueprint: Blueprint,
    built_for: DisplayToggles,
    scene: Scene,
    rebuild_count: u64,
}

impl SceneState {
    /// Build the initial scene
    pub fn new(blueprint: Blueprint, toggles: DisplayToggles) -> Self {
        let scene = assemble_scene(&blueprint, &toggles);
        tracing::info!(objects = scene.object_count(), "Initial scene assembled");
        Self {
            blueprint,
            built_for: toggles,
            scene,
            rebuild_count: 0,
        }
    }

    pub fn phase_for(&self, requested: &DisplayToggles) -> AssemblerPhase {
        if *requested == self.built_for {
            AssemblerPhase::Idle
        } else {
            AssemblerPhase::Rebuilding
        }
    }

    /// Rebuild the scene if `requested` differs from the last build.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn update(&mut self, requested: &DisplayToggles) -> bool {
        match self.phase_for(requested) {
            AssemblerPhase::Idle => false,
            AssemblerPhase::Rebuilding => {
                let changed = requested.changed_from(&self.built_for);
                self.scene = assemble_scene(&self.blueprint, requested);
                self.built_for = *requested;
                self.rebuild_count += 1;
                tracing::info!(
                    ?changed,
                    objects = self.scene.object_count(),
                    rebuilds = self.rebuild_count,
                    "Scene rebuilt"
                );
                true
            }
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn built_for(&self) -> &DisplayToggles {
        &self.built_for
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayToggle;
    use crate::placement::Group;

    fn state() -> SceneState {
        SceneState::new(Blueprint::DRINKING_BIRD, DisplayToggles::default())
    }

    #[test]
    fn test_default_scene_contents() {
        let scene = assemble_scene(&Blueprint::DRINKING_BIRD, &DisplayToggles::default());
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.meshes.len(), 11); // ground + 10 bird parts
        assert!(scene.lines.is_empty());
        assert_eq!(scene.object_count(), 14);
        assert_eq!(scene.background, Color(0xAAAAAA));
        assert!(scene.find_mesh("ground").is_some());
        assert_eq!(scene.meshes_in(Group::Support).count(), 5);
    }

    #[test]
    fn test_all_helpers() {
        let toggles = DisplayToggles {
            grid_x: true,
            grid_y: true,
            grid_z: true,
            ground: true,
            axes: true,
        };
        let scene = assemble_scene(&Blueprint::DRINKING_BIRD, &toggles);
        assert_eq!(scene.lines.len(), 3);
        assert_eq!(scene.meshes_in(Group::Helper).count(), 7);
        assert_eq!(scene.object_count(), 3 + 3 + 7 + 10);
    }

    #[test]
    fn test_no_helpers() {
        let toggles = DisplayToggles {
            ground: false,
            ..DisplayToggles::default()
        };
        let scene = assemble_scene(&Blueprint::DRINKING_BIRD, &toggles);
        assert_eq!(scene.meshes_in(Group::Helper).count(), 0);
        assert_eq!(scene.meshes.len(), 10);
    }

    #[test]
    fn test_lights() {
        let scene = assemble_scene(&Blueprint::DRINKING_BIRD, &DisplayToggles::default());
        assert_eq!(
            scene.lights[0],
            Light::Ambient {
                color: Color(0x222222)
            }
        );
        assert_eq!(
            scene.lights[2],
            Light::Directional {
                color: Color::WHITE,
                intensity: 1.0,
                position: Vec3::new(-400.0, 200.0, -300.0),
            }
        );
    }

    #[test]
    fn test_unchanged_toggles_stay_idle() {
        let mut state = state();
        let requested = DisplayToggles::default();
        assert_eq!(state.phase_for(&requested), AssemblerPhase::Idle);
        assert!(!state.update(&requested));
        assert_eq!(state.rebuild_count(), 0);
    }

    #[test]
    fn test_single_toggle_rebuilds_exactly_once() {
        let mut state = state();
        let mut requested = DisplayToggles::default();
        requested.set(DisplayToggle::Axes, true);

        assert_eq!(state.phase_for(&requested), AssemblerPhase::Rebuilding);
        assert!(state.update(&requested));
        assert_eq!(state.phase_for(&requested), AssemblerPhase::Idle);

        for _ in 0..10 {
            assert!(!state.update(&requested));
        }
        assert_eq!(state.rebuild_count(), 1);
        assert_eq!(state.built_for(), &requested);
        assert!(state.scene().find_mesh("x axis").is_some());
    }

    #[test]
    fn test_each_toggle_triggers_rebuild() {
        let mut state = state();
        let mut requested = DisplayToggles::default();
        for (i, toggle) in DisplayToggle::ALL.into_iter().enumerate() {
            let value = requested.get(toggle);
            requested.set(toggle, !value);
            assert!(state.update(&requested));
            assert_eq!(state.rebuild_count(), i as u64 + 1);
        }
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut state = state();
        let original = state.scene().clone();

        let mut requested = DisplayToggles::default();
        requested.grid_y = true;
        assert!(state.update(&requested));
        requested.grid_y = false;
        assert!(state.update(&requested));

        assert_eq!(state.rebuild_count(), 2);
        assert_eq!(state.scene().object_count(), original.object_count());
        assert_eq!(state.scene(), &original);
    }
}
