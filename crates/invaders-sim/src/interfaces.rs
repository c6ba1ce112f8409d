//! Boundary with the collaborators the simulation drives but does not implement:
//! the scene-graph renderer, the input device and the model loader.

use std::collections::VecDeque;

use hecs::Entity;

use invaders_core::constants::{ALIEN_HALF_EXTENTS, MOTHERSHIP_HALF_EXTENTS, PLAYER_HALF_EXTENTS};
use invaders_core::enums::{CollisionTag, EntityKind, ModelId};
use invaders_core::error::AssetLoadFailure;
use invaders_core::types::{InputState, Orientation, Vector3};

/// Opaque scene-graph handle. Equal to the owner id of the entity it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

impl RenderHandle {
    pub fn of(entity: Entity) -> Self {
        Self(entity.to_bits().get())
    }

    /// The entity this handle was issued for, if the bits are a valid id.
    pub fn owner(self) -> Option<Entity> {
        Entity::from_bits(self.0)
    }
}

/// Placement of one renderable, with the tags needed to map it back to its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderNode {
    pub kind: EntityKind,
    pub tag: Option<CollisionTag>,
    pub model: Option<ModelId>,
    pub position: Vector3,
    pub orientation: Orientation,
    /// Uniform visual scale (explosion magnitude for effects, 1.0 otherwise).
    pub scale: f32,
}

/// Scene-graph collaborator. The core only moves and removes nodes; it never draws.
pub trait Renderer {
    /// Create or move the node for `handle`.
    fn place(&mut self, handle: RenderHandle, node: &RenderNode);
    /// Drop the node for `handle`. Unknown handles must be ignored.
    fn remove(&mut self, handle: RenderHandle);
}

/// Renderer that discards everything (headless runs).
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn place(&mut self, _handle: RenderHandle, _node: &RenderNode) {}
    fn remove(&mut self, _handle: RenderHandle) {}
}

/// Input device collaborator, polled once per tick.
pub trait InputSource {
    fn poll(&mut self) -> InputState;
}

impl InputSource for InputState {
    fn poll(&mut self) -> InputState {
        *self
    }
}

/// A model wanted for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRequest {
    pub entity: Entity,
    pub model: ModelId,
}

/// Completion of an [`AssetRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssetResponse {
    pub entity: Entity,
    pub model: ModelId,
    /// Half-extents of the loaded model's collision surface.
    pub result: Result<Vector3, AssetLoadFailure>,
}

/// Asynchronous model loader. Requests are issued and completions drained
/// outside the simulation tick.
pub trait AssetLoader {
    fn request(&mut self, request: AssetRequest);
    /// Drain every completion that is ready.
    fn poll(&mut self) -> Vec<AssetResponse>;
}

/// Loader backed by the built-in model table. Every request completes on the next poll.
#[derive(Debug, Default)]
pub struct BuiltinModels {
    pending: VecDeque<AssetRequest>,
}

impl BuiltinModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn half_extents(model: ModelId) -> Vector3 {
        let extents = match model {
            ModelId::Player1 => PLAYER_HALF_EXTENTS,
            ModelId::Alien1 | ModelId::Alien2 | ModelId::Alien3 => ALIEN_HALF_EXTENTS,
            ModelId::Mothership => MOTHERSHIP_HALF_EXTENTS,
        };
        Vector3::from_array(extents)
    }
}

impl AssetLoader for BuiltinModels {
    fn request(&mut self, request: AssetRequest) {
        self.pending.push_back(request);
    }

    fn poll(&mut self) -> Vec<AssetResponse> {
        self.pending
            .drain(..)
            .map(|req| AssetResponse {
                entity: req.entity,
                model: req.model,
                result: Ok(Self::half_extents(req.model)),
            })
            .collect()
    }
}
