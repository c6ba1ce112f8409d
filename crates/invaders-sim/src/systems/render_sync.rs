//! Pushes entity placements to the scene-graph collaborator.

use invaders_core::components::{Explosion, Lifecycle, Model, Transform};
use invaders_core::enums::EntityKind;

use crate::interfaces::{RenderHandle, RenderNode, Renderer};
use crate::session::Session;
use crate::systems::actors::is_live;
use crate::systems::collision::tag_of;

/// Remove nodes for everything disposed since the last sync, then place every live entity.
///
/// Entities whose model has not loaded are not placed.
pub fn sync(session: &mut Session, renderer: &mut dyn Renderer) {
    for entity in session.removed.drain(..) {
        renderer.remove(RenderHandle::of(entity));
    }

    for (entity, (kind, transform, life, model, explosion)) in session
        .world
        .query::<(
            &EntityKind,
            &Transform,
            &Lifecycle,
            Option<&Model>,
            Option<&Explosion>,
        )>()
        .iter()
    {
        if life.disposed || model.is_some_and(|model| !is_live(model)) {
            continue;
        }
        let node = RenderNode {
            kind: *kind,
            tag: tag_of(*kind),
            model: model.map(|model| model.id),
            position: transform.position,
            orientation: transform.orientation,
            scale: explosion.map_or(1.0, |explosion| explosion.magnitude),
        };
        renderer.place(RenderHandle::of(entity), &node);
    }
}
