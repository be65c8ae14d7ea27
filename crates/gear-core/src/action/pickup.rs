//! Picking up and dropping items

use crate::gameloop::GameState;
use crate::message::Tone;
use crate::object::InventoryFull;
use crate::rng::GameRng;

use super::ActionResult;

fn pickup_quip(rng: &mut GameRng, name: &str) -> String {
    match rng.range(0, 4) {
        0 => format!("You got yourself a shiny, new {name}. (Okay, maybe it was a little used.)"),
        1 => format!("I hope you know what you are doing by picking up {name}."),
        2 => format!("You now have a {name}. Hooray greed!"),
        3 => format!("Pretty sweet {name} you got there."),
        _ => format!("Oh good, you finally got your own {name}. Now you can stop borrowing mine."),
    }
}

fn inventory_full_quip(rng: &mut GameRng, name: &str) -> String {
    match rng.range(0, 4) {
        0 => "You cannot carry any more items, puny automaton.".to_string(),
        1 => format!("Do you really need {name}? If you do, get rid of some of this other junk."),
        2 => "Hoarding is not healthy. Shed something before adding to your horrid collection."
            .to_string(),
        3 => format!("You must clear some space in your inventory before you can pick up {name}."),
        _ => "You simply cannot carry anything more. Even the strongest adventurer is bound by \
              the mysterious limit of 26."
            .to_string(),
    }
}

/// Pick up the first item on the player's cell
pub fn pick_up(state: &mut GameState) -> ActionResult {
    let pos = state.player_pos();
    let Some(id) = state.entities.item_at(pos) else {
        return ActionResult::Failed("There is nothing here to pick up.".to_string());
    };

    if state.inventory.is_full() {
        let name = state
            .entities
            .get(id)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        return ActionResult::Failed(inventory_full_quip(&mut state.rng, &name));
    }

    let Some(item) = state.entities.remove(id) else {
        return ActionResult::NoTime;
    };
    let name = item.name.clone();
    if let Err(InventoryFull(item)) = state.inventory.push(item) {
        state.entities.insert(item);
        return ActionResult::NoTime;
    }

    let quip = pickup_quip(&mut state.rng, &name);
    state.message(quip, Tone::Success);
    ActionResult::Success
}

/// Drop an inventory item at the player's feet
pub fn drop(state: &mut GameState, letter: char) -> ActionResult {
    let Some(mut item) = state.inventory.remove(letter) else {
        return ActionResult::Failed("You have no such item.".to_string());
    };
    item.pos = state.player_pos();
    let name = item.name.clone();
    state.entities.insert(item);
    state.message(format!("You dropped a {name}."), Tone::Info);
    ActionResult::Success
}
