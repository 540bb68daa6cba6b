//! End-to-end scenarios driven purely through the engine commands.

use genelab_core::content::{room, Item, RoomId};
use genelab_core::effects::{Effect, Sound};
use genelab_core::state::{Character, GamePhase, InteractionState, NpcState};
use genelab_core::engine::GameEngine;
use genelab_logic::geometry::Vec2;

/// A fresh engine already in the Playing phase.
fn playing_engine() -> GameEngine {
    let mut engine = GameEngine::with_seed(42);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    engine
}

fn place(engine: &mut GameEngine, pos: Vec2) {
    engine.state_mut().player.position = pos;
}

/// Open the pending modal (no kick) and complete it.
fn complete_open_task(engine: &mut GameEngine) {
    assert_eq!(engine.state().phase, GamePhase::Interacting);
    engine.update(500);
    assert_eq!(engine.state().interaction, InteractionState::Open);
    engine.complete_task();
}

#[test]
fn scenario_a_intro_station_grants_items_and_unlocks_methodology() {
    let mut engine = playing_engine();
    assert!(engine.state().inventory.is_empty());

    place(&mut engine, Vec2::new(460.0, 150.0)); // under the sample bench
    assert_eq!(engine.nearby_object_id(), Some("sample-collection"));

    engine.interact();
    complete_open_task(&mut engine);

    let state = engine.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(state.inventory.contains(Item::CaseFile));
    assert!(state.inventory.contains(Item::DnaSample));
    assert!(state.is_unlocked(RoomId::Methodology));
    assert!(state.notification.is_some());
}

#[test]
fn scenario_b_sequence_gate_blocks_then_advances() {
    let mut engine = playing_engine();
    engine.state_mut().current_room = RoomId::Methodology;
    engine.state_mut().unlocked_rooms.insert(RoomId::Methodology);
    engine.state_mut().inventory.insert(Item::DnaSample);

    // Station at sequence index 2 while the cursor is at 0.
    place(&mut engine, Vec2::new(430.0, 150.0));
    assert_eq!(engine.nearby_object_id(), Some("electrophoresis"));
    engine.interact();

    let state = engine.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.current_step_index, 0);
    assert_eq!(state.inventory.len(), 1);
    let note = state.notification.as_ref().expect("a go-to-X-first hint");
    assert!(note.text.contains("DNA Extraction Bench"), "{}", note.text);

    // The station at index 0, with its required item held, succeeds.
    place(&mut engine, Vec2::new(85.0, 150.0));
    assert_eq!(engine.nearby_object_id(), Some("extraction"));
    engine.interact();
    complete_open_task(&mut engine);

    let state = engine.state();
    assert_eq!(state.current_step_index, 1);
    assert!(state.inventory.contains(Item::ExtractedDna));
}

#[test]
fn scenario_b_gating_is_idempotent() {
    let mut engine = playing_engine();
    engine.state_mut().current_room = RoomId::Methodology;
    engine.state_mut().inventory.insert(Item::DnaSample);

    place(&mut engine, Vec2::new(430.0, 150.0));
    for _ in 0..10 {
        engine.interact();
    }
    assert_eq!(engine.state().current_step_index, 0);
    assert_eq!(engine.state().inventory.len(), 1);
    assert_eq!(engine.state().phase, GamePhase::Playing);
}

#[test]
fn scenario_c_locked_door_reminds_and_changes_nothing() {
    let mut engine = playing_engine();
    let spawn = room(RoomId::Introduction).door_spawn("intro-east").unwrap();
    place(&mut engine, spawn);
    assert_eq!(engine.nearby_object_id(), Some("intro-east"));

    engine.interact();

    let state = engine.state();
    assert_eq!(state.current_room, RoomId::Introduction);
    assert_eq!(state.player.position, spawn);
    let note = state.notification.as_ref().expect("objective reminder");
    assert!(note.text.contains("locked"), "{}", note.text);
    assert!(engine.take_effects().is_empty()); // no door sound
}

#[test]
fn scenario_d_blocked_npc_shouts_once_per_cooldown() {
    let mut engine = playing_engine();
    engine.state_mut().current_room = RoomId::Methodology;
    place(&mut engine, Vec2::new(300.0, 260.0));

    {
        let npc = engine
            .state_mut()
            .npcs
            .iter_mut()
            .find(|n| n.id == "npc-okafor")
            .unwrap();
        npc.state = NpcState::Walking;
        npc.position = Vec2::new(300.0, 300.0);
        npc.target = Some(Vec2::new(300.0, 200.0));
    }

    engine.update(50); // first tick: blocked, shouts
    let shouts = |effects: &[Effect]| {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::PlaySound(Sound::Shout)))
            .count()
    };
    assert_eq!(shouts(&engine.take_effects()), 1);
    let note = engine.state().notification.clone().expect("shout line");
    assert!(note.text.contains("Okafor"), "{}", note.text);

    engine.update(1000); // still blocked, inside cooldown: silent
    assert_eq!(shouts(&engine.take_effects()), 0);

    engine.update(2200); // past the 3000 ms cooldown: shouts again
    assert_eq!(shouts(&engine.take_effects()), 1);
}

#[test]
fn door_transit_moves_player_and_plays_sound() {
    let mut engine = playing_engine();
    engine.state_mut().unlocked_rooms.insert(RoomId::Methodology);
    let spawn = room(RoomId::Introduction).door_spawn("intro-east").unwrap();
    place(&mut engine, spawn);

    engine.interact();

    let state = engine.state();
    assert_eq!(state.current_room, RoomId::Methodology);
    assert_eq!(
        state.player.position,
        room(RoomId::Methodology).door_spawn("meth-west").unwrap()
    );
    let banner = state.banner.as_ref().expect("room banner");
    assert_eq!(banner.room, RoomId::Methodology);
    assert!(engine
        .take_effects()
        .contains(&Effect::PlaySound(Sound::DoorOpen)));
}

#[test]
fn modal_cancel_changes_nothing_but_phase() {
    let mut engine = playing_engine();
    place(&mut engine, Vec2::new(460.0, 150.0));
    engine.interact();
    assert_eq!(engine.state().phase, GamePhase::Interacting);

    engine.close_modal();

    let state = engine.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(state.pending_object.is_none());
    assert_eq!(state.interaction, InteractionState::Idle);
    assert!(state.inventory.is_empty());
    assert!(!state.is_unlocked(RoomId::Methodology));
}

#[test]
fn kick_chain_runs_through_its_deadlines() {
    let mut engine = playing_engine();
    engine.state_mut().current_room = RoomId::Applications;
    place(&mut engine, Vec2::new(140.0, 160.0)); // under the forensics display

    engine.interact();
    let state = engine.state();
    assert_eq!(state.phase, GamePhase::Interacting);
    assert!(state.player.is_kicking);
    assert!(matches!(
        state.interaction,
        InteractionState::Kicking { .. }
    ));
    assert!(!state.interaction.modal_open());

    engine.update(400);
    let state = engine.state();
    assert!(!state.player.is_kicking);
    assert!(state.player.kick_direction.is_none());
    assert!(state.interaction.modal_open());
    assert!(state.interaction.modal_entering());

    engine.update(500);
    assert_eq!(engine.state().interaction, InteractionState::Open);
    assert!(!engine.state().interaction.modal_entering());

    engine.complete_task();
    assert!(engine.state().is_unlocked(RoomId::Limitations));
}

#[test]
fn completing_during_kick_is_ignored() {
    let mut engine = playing_engine();
    engine.state_mut().current_room = RoomId::Applications;
    place(&mut engine, Vec2::new(140.0, 160.0));

    engine.interact();
    engine.complete_task(); // modal not open yet
    assert_eq!(engine.state().phase, GamePhase::Interacting);
    assert!(!engine.state().is_unlocked(RoomId::Limitations));
}

#[test]
fn npc_dialogue_takes_priority_and_keeps_phase() {
    let mut engine = playing_engine();
    place(&mut engine, Vec2::new(700.0, 430.0)); // next to Dr. Reyes

    engine.interact();
    let state = engine.state();
    assert_eq!(state.dialogue_npc.as_deref(), Some("npc-reyes"));
    assert_eq!(state.phase, GamePhase::Playing);

    // A second interact while the dialogue is up is swallowed.
    engine.interact();
    assert_eq!(engine.state().dialogue_npc.as_deref(), Some("npc-reyes"));

    engine.close_dialogue();
    assert!(engine.state().dialogue_npc.is_none());
}

#[test]
fn unlocks_only_grow_and_inventory_stays_a_set() {
    let mut engine = playing_engine();

    // Complete the intake bench twice; the second run re-grants items.
    for _ in 0..2 {
        place(&mut engine, Vec2::new(460.0, 150.0));
        engine.interact();
        complete_open_task(&mut engine);
    }

    let state = engine.state();
    assert_eq!(state.inventory.len(), 2); // no duplicates
    assert_eq!(state.unlocked_rooms.len(), 2); // entry + methodology, once
    let order: Vec<Item> = state.inventory.iter().copied().collect();
    assert_eq!(order, vec![Item::CaseFile, Item::DnaSample]);
}

#[test]
fn full_playthrough_reaches_complete() {
    let mut engine = playing_engine();

    // Intake.
    place(&mut engine, Vec2::new(460.0, 150.0));
    engine.interact();
    complete_open_task(&mut engine);

    // Through the east door.
    place(
        &mut engine,
        room(RoomId::Introduction).door_spawn("intro-east").unwrap(),
    );
    engine.interact();
    assert_eq!(engine.state().current_room, RoomId::Methodology);

    // The six methodology stations, in order.
    let bench_spots = [
        ("extraction", Vec2::new(85.0, 150.0)),
        ("digestion", Vec2::new(255.0, 150.0)),
        ("electrophoresis", Vec2::new(430.0, 150.0)),
        ("blotting", Vec2::new(600.0, 150.0)),
        ("hybridisation", Vec2::new(770.0, 150.0)),
        ("detection", Vec2::new(770.0, 545.0)),
    ];
    for (id, spot) in bench_spots {
        place(&mut engine, spot);
        assert_eq!(engine.nearby_object_id(), Some(id));
        engine.interact();
        complete_open_task(&mut engine);
    }
    assert!(engine.state().is_unlocked(RoomId::Applications));

    // Into applications, one display (kick room).
    place(
        &mut engine,
        room(RoomId::Methodology).door_spawn("meth-east").unwrap(),
    );
    engine.interact();
    assert_eq!(engine.state().current_room, RoomId::Applications);

    place(&mut engine, Vec2::new(140.0, 160.0));
    engine.interact();
    engine.update(400); // kick
    complete_open_task(&mut engine);
    assert!(engine.state().is_unlocked(RoomId::Limitations));

    // Into limitations, certification desk ends the game.
    place(
        &mut engine,
        room(RoomId::Applications).door_spawn("apps-east").unwrap(),
    );
    engine.interact();
    assert_eq!(engine.state().current_room, RoomId::Limitations);

    place(&mut engine, Vec2::new(460.0, 410.0)); // above the desk
    assert_eq!(engine.nearby_object_id(), Some("certification"));
    engine.interact();
    engine.update(400); // kick
    complete_open_task(&mut engine);

    let state = engine.state();
    assert_eq!(state.phase, GamePhase::Complete);
    assert!(state.inventory.contains(Item::Certificate));
    assert_eq!(state.unlocked_rooms.len(), 4);
}

#[test]
fn restart_from_any_phase_resets_initial_values() {
    let mut engine = playing_engine();
    place(&mut engine, Vec2::new(460.0, 150.0));
    engine.interact(); // leave a pending interaction and deadline behind
    engine.restart();

    let state = engine.state();
    assert_eq!(state.phase, GamePhase::CharacterCreation);
    assert!(state.pending_object.is_none());
    assert_eq!(state.interaction, InteractionState::Idle);
    assert!(state.inventory.is_empty());
    assert_eq!(state.current_room, RoomId::ENTRY);
    assert!(state.is_unlocked(RoomId::ENTRY));
    assert_eq!(state.unlocked_rooms.len(), 1);
    assert!(!state.player.is_kicking);

    // Stale deadlines are gone: nothing fires.
    engine.update(10_000);
    assert!(engine.state().notification.is_none());
    assert_eq!(engine.state().interaction, InteractionState::Idle);
}
