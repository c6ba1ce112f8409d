//! Asset completion system: applies loader responses to pending models.
//!
//! Runs between ticks, never inside one.

use tracing::{debug, error};

use invaders_core::components::{Model, ModelState};
use invaders_core::events::GameEvent;

use crate::interfaces::AssetResponse;
use crate::session::Session;

/// Apply one loader completion. Responses for despawned entities are dropped.
pub fn apply_response(session: &mut Session, response: AssetResponse) {
    let Ok(model) = session.world.query_one_mut::<&mut Model>(response.entity) else {
        debug!(model = %response.model, "Asset completed for a removed entity");
        return;
    };
    if model.state != ModelState::Pending {
        return;
    }
    match response.result {
        Ok(half_extents) => {
            model.state = ModelState::Loaded { half_extents };
        }
        Err(failure) => {
            error!(model = %failure.model(), "{failure}");
            model.state = ModelState::Failed;
            session.events.push(GameEvent::AssetLoadFailed {
                model: response.model,
            });
        }
    }
}
