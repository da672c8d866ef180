//! Scene description files
//!
//! A scene is one rigged model plus a camera and the drawable objects to
//! cull. Objects may be attached to a bone, in which case their transform is
//! relative to that bone's current world transform.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skelvis_anim::{AnimError, Animator, NodeId, RigAsset, RigDef, TransformDef};
use skelvis_cull::{Aabb, Camera, CullError};

/// Errors raised while validating a scene description
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid rig: {0}")]
    Rig(#[from] AnimError),

    #[error("Invalid camera: {0}")]
    Camera(#[from] CullError),

    #[error("Object '{0}' has no bounds points")]
    EmptyBounds(String),

    #[error("Object '{object}' is attached to unknown bone '{bone}'")]
    UnknownAttachment { object: String, bone: String },
}

/// Local bounds given directly or as the points of a mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundsDef {
    Box { min: Vec3, max: Vec3 },
    Points { points: Vec<Vec3> },
}

/// A drawable object as written in the scene file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    pub bounds: BoundsDef,
    #[serde(default)]
    pub transform: TransformDef,
    /// Bone the object follows
    #[serde(default)]
    pub attach: Option<String>,
}

/// Root of a scene file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDef {
    #[serde(flatten)]
    pub rig: RigDef,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

/// A validated drawable object
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub bounds: Aabb,
    pub transform: Mat4,
    pub attach: Option<NodeId>,
}

impl SceneObject {
    /// World transform under the pose held by `animator`
    pub fn world_transform(&self, animator: &Animator<'_>) -> Mat4 {
        self.attach
            .and_then(|bone| animator.world_transform(bone))
            .map_or(self.transform, |bone_world| bone_world * self.transform)
    }
}

/// Immutable scene content shared by every command
#[derive(Debug, Clone)]
pub struct SceneAsset {
    pub rig: RigAsset,
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
}

impl SceneAsset {
    pub fn from_def(def: &SceneDef) -> Result<Self, SceneError> {
        let rig = RigAsset::from_def(&def.rig)?;
        def.camera.validate()?;

        let objects = def
            .objects
            .iter()
            .map(|object| {
                let bounds = match &object.bounds {
                    BoundsDef::Box { min, max } => Aabb::new(*min, *max),
                    BoundsDef::Points { points } => Aabb::from_points(points.iter().copied())
                        .ok_or_else(|| SceneError::EmptyBounds(object.name.clone()))?,
                };

                let attach = match &object.attach {
                    None => None,
                    Some(bone) => Some(rig.hierarchy.find(bone).ok_or_else(|| {
                        SceneError::UnknownAttachment {
                            object: object.name.clone(),
                            bone: bone.clone(),
                        }
                    })?),
                };

                Ok(SceneObject {
                    name: object.name.clone(),
                    bounds,
                    transform: object.transform.to_matrix(),
                    attach,
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        Ok(Self {
            rig,
            camera: def.camera,
            objects,
        })
    }
}

/// Read, parse and validate a scene file
pub fn load_scene(path: &Path) -> Result<SceneAsset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    let def: SceneDef = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scene file {}", path.display()))?;
    let scene = SceneAsset::from_def(&def)
        .with_context(|| format!("Invalid scene file {}", path.display()))?;

    info!(
        "Loaded scene {}: {} nodes, {} clips, {} objects",
        path.display(),
        scene.rig.hierarchy.len(),
        scene.rig.clips.len(),
        scene.objects.len()
    );
    Ok(scene)
}

/// Load a scene on a blocking worker and wait for the finished asset
///
/// Nothing is evaluated until the returned future resolves, after which the
/// asset is only read.
pub async fn load_scene_async(path: PathBuf) -> Result<SceneAsset> {
    tokio::task::spawn_blocking(move || load_scene(&path))
        .await
        .context("Scene loader task failed")?
}
