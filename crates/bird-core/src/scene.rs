//! Scene description handed to the renderer
//!
//! A [`Scene`] is plain data: lights, fog, meshes and line sets. It is built
//! from scratch by the assembler and replaced wholesale, never patched.

use glam::Vec3;

use crate::material::Color;
use crate::placement::{Group, Placement};

/// Light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light from every direction
    Ambient { color: Color },
    /// Parallel light shining from `position` toward the origin
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

impl Light {
    /// Unit vector pointing from the scene toward the light, if directional
    pub fn direction_to_light(&self) -> Option<Vec3> {
        match self {
            Light::Ambient { .. } => None,
            Light::Directional { position, .. } => {
                Some(position.try_normalize().unwrap_or(Vec3::Y))
            }
        }
    }
}

/// Linear distance fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

/// Set of unlit line segments sharing one color
#[derive(Debug, Clone, PartialEq)]
pub struct LineSet {
    pub name: &'static str,
    pub color: Color,
    pub segments: Vec<[Vec3; 2]>,
}

/// Everything drawn in a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub fog: Option<Fog>,
    pub lights: Vec<Light>,
    pub meshes: Vec<Placement>,
    pub lines: Vec<LineSet>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            fog: None,
            lights: Vec::new(),
            meshes: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_mesh(&mut self, placement: Placement) {
        self.meshes.push(placement);
    }

    pub fn add_meshes(&mut self, placements: impl IntoIterator<Item = Placement>) {
        self.meshes.extend(placements);
    }

    pub fn add_lines(&mut self, lines: LineSet) {
        self.lines.push(lines);
    }

    /// Number of objects in the scene: lights, meshes and line sets
    pub fn object_count(&self) -> usize {
        self.lights.len() + self.meshes.len() + self.lines.len()
    }

    pub fn meshes_in(&self, group: Group) -> impl Iterator<Item = &Placement> {
        self.meshes.iter().filter(move |p| p.group == group)
    }

    pub fn find_mesh(&self, name: &str) -> Option<&Placement> {
        self.meshes.iter().find(|p| p.name == name)
    }

    /// Sum of all ambient light colors, in linear space
    pub fn ambient_linear(&self) -> [f32; 3] {
        self.lights
            .iter()
            .filter_map(|light| match light {
                Light::Ambient { color } => Some(color.to_linear()),
                Light::Directional { .. } => None,
            })
            .fold([0.0; 3], |acc, c| [acc[0] + c[0], acc[1] + c[1], acc[2] + c[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_points_toward_light() {
        let light = Light::Directional {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::new(0.0, 400.0, 0.0),
        };
        assert_eq!(light.direction_to_light(), Some(Vec3::Y));
        assert_eq!(
            Light::Ambient {
                color: Color::WHITE
            }
            .direction_to_light(),
            None
        );
    }

    #[test]
    fn test_object_count() {
        let mut scene = Scene::new(Color::BLACK);
        assert_eq!(scene.object_count(), 0);
        scene.add_light(Light::Ambient {
            color: Color(0x222222),
        });
        scene.add_lines(LineSet {
            name: "grid",
            color: Color::BLACK,
            segments: Vec::new(),
        });
        assert_eq!(scene.object_count(), 2);
    }

    #[test]
    fn test_ambient_sums_lights() {
        let mut scene = Scene::new(Color::BLACK);
        scene.add_light(Light::Ambient {
            color: Color::WHITE,
        });
        scene.add_light(Light::Directional {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::ONE,
        });
        assert_eq!(scene.ambient_linear(), [1.0, 1.0, 1.0]);
    }
}
