//! Using inventory items

use crate::gameloop::GameState;
use crate::interface::Input;
use crate::message::Tone;
use crate::object::{EffectOutcome, use_effect};

use super::ActionResult;

/// Use the item under `letter`
///
/// A used item is consumed unless reusable, and every consumed item feeds
/// the distortion. A cancelled use keeps the item and takes no time.
pub fn use_item(state: &mut GameState, letter: char, input: &mut dyn Input) -> ActionResult {
    let Some(entity) = state.inventory.get(letter) else {
        return ActionResult::Failed("You have no such item.".to_string());
    };
    let name = entity.name.clone();
    let Some(item) = entity.item else {
        return ActionResult::Failed(format!("The {name} cannot be used."));
    };
    let Some(effect) = item.effect else {
        state.message(
            format!("The {name} cannot be used. Perhaps it has another purpose?"),
            Tone::Warning,
        );
        return ActionResult::NoTime;
    };

    match use_effect(state, effect, input) {
        EffectOutcome::Cancelled => ActionResult::Cancelled,
        EffectOutcome::Used => {
            if !item.reusable {
                state.inventory.remove(letter);
                state.add_corruption(1);
            }
            ActionResult::Success
        }
    }
}
