//! GPU-ready render data
//!
//! The renderer owns buffers, shaders and draw calls. This module flattens a
//! `FrameSnapshot` into plain-old-data uniforms and instance lists it can
//! upload as-is, one list per view.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::session::FrameSnapshot;
use crate::settings::Material;

/// Vertical field of view
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_2;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 2000.0;
/// Clip-space shift that moves the overview into the top-right corner
pub const OVERVIEW_OFFSET: Vec3 = Vec3::new(0.8, 0.7, 0.0);
/// Body opacity in the overview
pub const OVERVIEW_ALPHA: f32 = 0.3;

/// Which mesh an instance uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Model {
    SnakeBody = 0,
    Apple = 1,
    MinimapApple = 2,
    /// Drawn after clearing depth so it shows through the body
    MinimapHead = 3,
}

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniform {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub eye: [f32; 3],            // offset 64
    pub alpha: f32,               // offset 76
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub model: u32,
}

impl Instance {
    pub fn new(position: Vec3, model: Model) -> Self {
        Self {
            position: position.to_array(),
            model: model as u32,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub diffuse: [f32; 3],
    pub _pad1: f32,
    pub specular: [f32; 3],
    pub _pad2: f32,
}

impl From<&Material> for MaterialUniform {
    fn from(m: &Material) -> Self {
        Self {
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
            ..Self::zeroed()
        }
    }
}

// ============================================================================
// PER-VIEW LISTS
// ============================================================================

/// Everything needed to draw one view
#[derive(Debug, Clone)]
pub struct ViewPass {
    pub uniform: ViewUniform,
    pub instances: Vec<Instance>,
}

impl ViewPass {
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn count(&self, model: Model) -> usize {
        self.instances.iter().filter(|i| i.model == model as u32).count()
    }
}

/// Main and overview passes for one frame
#[derive(Debug, Clone)]
pub struct RenderLists {
    pub main: ViewPass,
    pub overview: ViewPass,
    pub material: MaterialUniform,
}

pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y, aspect.max(f32::EPSILON), Z_NEAR, Z_FAR)
}

fn view_uniform(camera: &Camera, clip: Mat4, alpha: f32) -> ViewUniform {
    ViewUniform {
        view_proj: (clip * camera.view).to_cols_array_2d(),
        eye: camera.eye.to_array(),
        alpha,
    }
}

impl RenderLists {
    pub fn build(frame: &FrameSnapshot, aspect: f32, material: &Material) -> Self {
        let proj = projection(aspect);

        // The first segment sits right behind the first-person camera
        let main_instances = frame
            .body
            .iter()
            .skip(1)
            .map(|p| Instance::new(*p, Model::SnakeBody))
            .chain(frame.consumables.iter().map(|p| Instance::new(*p, Model::Apple)))
            .collect();

        let overview_instances = frame
            .body
            .iter()
            .map(|p| Instance::new(*p, Model::SnakeBody))
            .chain(
                frame
                    .consumables
                    .iter()
                    .map(|p| Instance::new(*p, Model::MinimapApple)),
            )
            .chain(std::iter::once(Instance::new(frame.head, Model::MinimapHead)))
            .collect();

        Self {
            main: ViewPass {
                uniform: view_uniform(&frame.cameras.main, proj, 1.0),
                instances: main_instances,
            },
            overview: ViewPass {
                uniform: view_uniform(
                    &frame.cameras.overview,
                    Mat4::from_translation(OVERVIEW_OFFSET) * proj,
                    OVERVIEW_ALPHA,
                ),
                instances: overview_instances,
            },
            material: material.into(),
        }
    }
}
