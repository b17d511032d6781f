//! Light and fog uniform
//!
//! Everything the shaders need from the scene's lights and fog, packed into a
//! single uniform buffer. Colors are converted to linear space here.

use bytemuck::{Pod, Zeroable};

use bird_core::{Light, Scene};

use crate::constants::lighting::MAX_DIRECTIONAL_LIGHTS;

/// One directional light as seen by the shader
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// Unit vector toward the light (w unused)
    pub direction: [f32; 4],
    /// Linear color premultiplied by intensity (w unused)
    pub color: [f32; 4],
}

/// Light uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    /// Summed ambient light, linear RGB
    pub ambient: [f32; 4],
    /// Fog color, linear RGB
    pub fog_color: [f32; 4],
    /// Fog near, fog far, enabled flag (0 or 1), unused
    pub fog_params: [f32; 4],
    /// Number of directional lights in `directional` (x), rest unused
    pub counts: [u32; 4],
    /// Directional lights; only the first `counts[0]` are valid
    pub directional: [DirectionalLightUniform; MAX_DIRECTIONAL_LIGHTS],
}

impl Default for LightUniform {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl LightUniform {
    /// Pack the lights and fog of a scene
    pub fn from_scene(scene: &Scene) -> Self {
        let mut uniform = Self::default();

        let ambient = scene.ambient_linear();
        uniform.ambient = [ambient[0], ambient[1], ambient[2], 1.0];

        let mut count = 0;
        for light in &scene.lights {
            let Light::Directional {
                color, intensity, ..
            } = light
            else {
                continue;
            };
            let Some(direction) = light.direction_to_light() else {
                continue;
            };
            if count == MAX_DIRECTIONAL_LIGHTS {
                tracing::warn!(
                    "Scene has more than {} directional lights, ignoring the rest",
                    MAX_DIRECTIONAL_LIGHTS
                );
                break;
            }
            let [r, g, b] = color.to_linear();
            uniform.directional[count] = DirectionalLightUniform {
                direction: [direction.x, direction.y, direction.z, 0.0],
                color: [r * intensity, g * intensity, b * intensity, 1.0],
            };
            count += 1;
        }
        uniform.counts[0] = count as u32;

        if let Some(fog) = scene.fog {
            let [r, g, b] = fog.color.to_linear();
            uniform.fog_color = [r, g, b, 1.0];
            uniform.fog_params = [fog.near, fog.far, 1.0, 0.0];
        }

        uniform
    }

    /// Number of active directional lights
    pub fn directional_count(&self) -> usize {
        self.counts[0] as usize
    }

    /// Whether fog is applied
    pub fn fog_enabled(&self) -> bool {
        self.fog_params[2] > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bird_core::{Blueprint, Color, DisplayToggles, Fog, assemble_scene};
    use glam::Vec3;

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightUniform>() % 16, 0);
        assert_eq!(
            std::mem::size_of::<LightUniform>(),
            64 + 32 * MAX_DIRECTIONAL_LIGHTS
        );
    }

    #[test]
    fn test_packs_assembled_scene() {
        let scene = assemble_scene(&Blueprint::DRINKING_BIRD, &DisplayToggles::default());
        let uniform = LightUniform::from_scene(&scene);

        assert_eq!(uniform.directional_count(), 2);
        assert!(uniform.fog_enabled());
        assert_eq!(uniform.fog_params[0], 3000.0);
        assert_eq!(uniform.fog_params[1], 6000.0);
        // 0x22 linearizes to roughly 0.016
        assert!(uniform.ambient[0] > 0.01 && uniform.ambient[0] < 0.02);

        let key = uniform.directional[0];
        let expected = Vec3::new(200.0, 400.0, 500.0).normalize();
        assert!((key.direction[1] - expected.y).abs() < 1e-6);
        assert!(key.color[..3].iter().all(|c| (c - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_extra_directional_lights_are_dropped() {
        let mut scene = Scene::new(Color::BLACK);
        for i in 0..6 {
            scene.add_light(Light::Directional {
                color: Color::WHITE,
                intensity: 0.5,
                position: Vec3::new(i as f32 + 1.0, 1.0, 0.0),
            });
        }
        let uniform = LightUniform::from_scene(&scene);
        assert_eq!(uniform.directional_count(), MAX_DIRECTIONAL_LIGHTS);
        assert!((uniform.directional[3].color[0] - 0.5).abs() < 1e-5);
        assert!(!uniform.fog_enabled());
    }

    #[test]
    fn test_fog_color_is_linear() {
        let mut scene = Scene::new(Color::BLACK);
        scene.fog = Some(Fog {
            color: Color(0x808080),
            near: 1.0,
            far: 2.0,
        });
        let uniform = LightUniform::from_scene(&scene);
        assert!(uniform.fog_color[0] < 0.5);
    }
}
