//! Batch visibility testing against one view

use glam::Mat4;
use log::debug;

use crate::aabb::Aabb;
use crate::camera::Camera;
use crate::error::Result;
use crate::frustum::Frustum;

/// Counters from one culling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    pub tested: usize,
    pub visible: usize,
}

impl CullStats {
    pub fn culled(&self) -> usize {
        self.tested - self.visible
    }
}

/// Output of [`Culler::cull`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CullResult {
    /// Indices of the visible objects in input order
    pub visible: Vec<usize>,
    pub stats: CullStats,
}

/// Frustum extracted once per view, reused for every object of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Culler {
    frustum: Frustum,
}

impl Culler {
    pub fn new(view_projection: &Mat4) -> Result<Self> {
        Ok(Self {
            frustum: Frustum::from_view_projection(view_projection)?,
        })
    }

    pub fn from_camera(camera: &Camera) -> Result<Self> {
        camera.validate()?;
        Self::new(&camera.view_projection())
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn is_visible(&self, bounds: &Aabb, world: &Mat4) -> bool {
        self.frustum.is_box_visible(bounds, world)
    }

    /// Test every `(local bounds, world transform)` pair
    pub fn cull<'b, I>(&self, objects: I) -> CullResult
    where
        I: IntoIterator<Item = (&'b Aabb, &'b Mat4)>,
    {
        let mut result = CullResult::default();

        for (index, (bounds, world)) in objects.into_iter().enumerate() {
            result.stats.tested += 1;
            if self.is_visible(bounds, world) {
                result.stats.visible += 1;
                result.visible.push(index);
            }
        }

        debug!(
            "Culled {} of {} objects",
            result.stats.culled(),
            result.stats.tested
        );
        result
    }
}
