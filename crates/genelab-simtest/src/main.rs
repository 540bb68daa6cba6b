//! GeneLab Headless Validation Harness
//!
//! Drives the full game loop in-process — no rendering, no audio, no
//! input devices. Validates room content, collision, proximity ordering,
//! the timed interaction chain, NPC determinism, and a complete scripted
//! playthrough.
//!
//! Usage:
//!   cargo run -p genelab-simtest
//!   cargo run -p genelab-simtest -- --verbose

use genelab_core::content::{
    initial_npcs, methodology_steps, room, step_for, ObjectKind, RoomId,
};
use genelab_core::state::{Character, GamePhase, InteractionState};
use genelab_core::engine::GameEngine;
use genelab_logic::collision::is_blocked;
use genelab_logic::constants::{avatar, interaction, timing};
use genelab_logic::geometry::{Rect, Vec2};

const ALL_ROOMS: [RoomId; 4] = [
    RoomId::Introduction,
    RoomId::Methodology,
    RoomId::Applications,
    RoomId::Limitations,
];

const ROOM_BOUNDS: Rect = Rect::new(0.0, 0.0, 960.0, 640.0);

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== GeneLab Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Room content integrity
    results.extend(validate_room_content(verbose));

    // 2. Movement and collision sweep
    results.extend(validate_collision(verbose));

    // 3. Proximity scan ordering
    results.extend(validate_proximity(verbose));

    // 4. Timed interaction chain
    results.extend(validate_timing_chain(verbose));

    // 5. NPC behavior determinism
    results.extend(validate_npc_determinism(verbose));

    // 6. Scripted full playthrough
    results.extend(validate_playthrough(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Room Content ─────────────────────────────────────────────────────

fn validate_room_content(verbose: bool) -> Vec<TestResult> {
    println!("--- Room Content ---");
    let mut results = Vec::new();

    // Every obstacle and interactive sits inside the room bounds.
    let mut out_of_bounds = 0;
    for id in ALL_ROOMS {
        let data = room(id);
        for rect in data.obstacles() {
            if rect.min_x() < ROOM_BOUNDS.min_x()
                || rect.max_x() > ROOM_BOUNDS.max_x()
                || rect.min_y() < ROOM_BOUNDS.min_y()
                || rect.max_y() > ROOM_BOUNDS.max_y()
            {
                out_of_bounds += 1;
            }
        }
    }
    results.push(TestResult {
        name: "content_in_bounds".into(),
        passed: out_of_bounds == 0,
        detail: format!("{} rects outside the 960x640 room", out_of_bounds),
    });

    // Object ids are unique within each room.
    let mut dup = 0;
    for id in ALL_ROOMS {
        let objects: Vec<_> = room(id).interactives().collect();
        for (i, a) in objects.iter().enumerate() {
            if objects[i + 1..].iter().any(|b| b.id == a.id) {
                dup += 1;
            }
        }
    }
    results.push(TestResult {
        name: "content_unique_ids".into(),
        passed: dup == 0,
        detail: format!("{} duplicate object ids", dup),
    });

    // Every door resolves to a spawn point in its target room, and the
    // spawn is collision-free for the player.
    let mut bad_doors = Vec::new();
    for id in ALL_ROOMS {
        for door in room(id).doors {
            let ObjectKind::Door { to, target_door } = door.kind else {
                bad_doors.push(door.id);
                continue;
            };
            match room(to).door_spawn(target_door) {
                Some(spawn) => {
                    if is_blocked(spawn, room(to).obstacles()) {
                        bad_doors.push(door.id);
                    }
                }
                None => bad_doors.push(door.id),
            }
        }
    }
    results.push(TestResult {
        name: "content_doors_resolve".into(),
        passed: bad_doors.is_empty(),
        detail: if bad_doors.is_empty() {
            "all doors land on a free spawn".into()
        } else {
            format!("broken doors: {}", bad_doors.join(", "))
        },
    });

    // Every station and display has a task step behind it.
    let mut stepless = Vec::new();
    for id in ALL_ROOMS {
        for obj in room(id).interactives() {
            if matches!(obj.kind, ObjectKind::Door { .. }) {
                continue;
            }
            if step_for(obj.id).is_none() {
                stepless.push(obj.id);
            }
        }
    }
    results.push(TestResult {
        name: "content_steps_cover_objects".into(),
        passed: stepless.is_empty(),
        detail: if stepless.is_empty() {
            "every station/display has a step".into()
        } else {
            format!("objects without a step: {}", stepless.join(", "))
        },
    });

    // The methodology item chain is closed: each step requires what the
    // previous one produced.
    let steps = methodology_steps();
    let mut chain_ok = true;
    for pair in steps.windows(2) {
        for needed in pair[1].required_items {
            if !pair[0].resulting_items.contains(needed) {
                chain_ok = false;
            }
        }
    }
    results.push(TestResult {
        name: "content_item_chain_closed".into(),
        passed: chain_ok,
        detail: format!("{} methodology steps chained", steps.len()),
    });

    if verbose {
        for id in ALL_ROOMS {
            let data = room(id);
            println!(
                "  {:?}: {} stations, {} displays, {} doors, {} decor",
                id,
                data.stations.len(),
                data.displays.len(),
                data.doors.len(),
                data.decor.len()
            );
        }
    }

    results
}

// ── 2. Movement & Collision ─────────────────────────────────────────────

fn validate_collision(_verbose: bool) -> Vec<TestResult> {
    println!("--- Movement & Collision ---");
    let mut results = Vec::new();

    // Touching edges don't collide.
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let b = Rect::new(40.0, 0.0, 40.0, 40.0);
    results.push(TestResult {
        name: "collision_strict_overlap".into(),
        passed: !a.overlaps(&b) && a.overlaps(&Rect::new(39.0, 0.0, 40.0, 40.0)),
        detail: "shared edge passes, 1px overlap blocks".into(),
    });

    // March the player into the west wall; they stop short and never
    // end up inside an obstacle.
    let mut engine = GameEngine::with_seed(1);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    for _ in 0..100 {
        engine.move_player(-avatar::MOVE_STEP, 0.0);
    }
    let pos = engine.state().player.position;
    let stuck = is_blocked(pos, room(engine.state().current_room).obstacles());
    let before = pos;
    engine.move_player(-avatar::MOVE_STEP, 0.0);
    results.push(TestResult {
        name: "collision_wall_stops_player".into(),
        passed: !stuck && pos.x >= 20.0 && engine.state().player.position == before,
        detail: format!("player settled at x={:.0} against the west wall", pos.x),
    });

    // Movement is ignored outside the Playing phase.
    let mut idle = GameEngine::with_seed(1);
    let start = idle.state().player.position;
    idle.move_player(avatar::MOVE_STEP, 0.0);
    results.push(TestResult {
        name: "collision_phase_gate".into(),
        passed: idle.state().player.position == start,
        detail: "no movement during character creation".into(),
    });

    results
}

// ── 3. Proximity Ordering ───────────────────────────────────────────────

fn validate_proximity(_verbose: bool) -> Vec<TestResult> {
    println!("--- Proximity ---");
    let mut results = Vec::new();

    // The scan order is stations, then doors, then displays.
    let order_ok = ALL_ROOMS.iter().all(|&id| {
        let data = room(id);
        let expected: Vec<&str> = data
            .stations
            .iter()
            .chain(data.doors.iter())
            .chain(data.displays.iter())
            .map(|o| o.id)
            .collect();
        data.interactives().map(|o| o.id).collect::<Vec<_>>() == expected
    });
    results.push(TestResult {
        name: "proximity_scan_order".into(),
        passed: order_ok,
        detail: "stations before doors before displays".into(),
    });

    // Standing under the intro bench reaches it; standing at the room
    // center reaches nothing.
    let mut engine = GameEngine::with_seed(1);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    engine.state_mut().player.position = Vec2::new(460.0, 150.0);
    let near = engine.nearby_object_id();
    engine.state_mut().player.position = Vec2::new(460.0, 300.0);
    let far = engine.nearby_object_id();
    results.push(TestResult {
        name: "proximity_radius".into(),
        passed: near == Some("sample-collection") && far.is_none(),
        detail: format!("{} px reach radius behaves", interaction::RADIUS),
    });

    results
}

// ── 4. Timed Interaction Chain ──────────────────────────────────────────

fn validate_timing_chain(_verbose: bool) -> Vec<TestResult> {
    println!("--- Timing Chain ---");
    let mut results = Vec::new();

    let mut engine = GameEngine::with_seed(1);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    engine.state_mut().current_room = RoomId::Applications;
    engine.state_mut().player.position = Vec2::new(140.0, 160.0);

    engine.interact();
    let kicking = matches!(
        engine.state().interaction,
        InteractionState::Kicking { .. }
    ) && engine.state().player.is_kicking;

    engine.update(timing::KICK_MS);
    let opening = engine.state().interaction.modal_entering() && !engine.state().player.is_kicking;

    engine.update(timing::MODAL_SLIDE_MS);
    let open = engine.state().interaction == InteractionState::Open;

    results.push(TestResult {
        name: "timing_kick_then_slide_then_open".into(),
        passed: kicking && opening && open,
        detail: format!(
            "kick {}ms, slide {}ms: kicking={} opening={} open={}",
            timing::KICK_MS,
            timing::MODAL_SLIDE_MS,
            kicking,
            opening,
            open
        ),
    });

    // Notifications auto-dismiss after their duration.
    let mut engine = GameEngine::with_seed(1);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    let spawn = room(RoomId::Introduction).door_spawn("intro-east");
    engine.state_mut().player.position = spawn.unwrap_or(Vec2::ZERO);
    engine.interact(); // locked door
    let shown = engine.state().notification.is_some();
    engine.update(timing::NOTIFICATION_MS);
    let dismissed = engine.state().notification.is_none();
    results.push(TestResult {
        name: "timing_notification_expiry".into(),
        passed: shown && dismissed,
        detail: format!("dismissed after {}ms", timing::NOTIFICATION_MS),
    });

    results
}

// ── 5. NPC Determinism ──────────────────────────────────────────────────

fn npc_snapshot(engine: &GameEngine) -> Vec<(String, Vec2)> {
    engine
        .state()
        .npcs
        .iter()
        .map(|n| (n.id.clone(), n.position))
        .collect()
}

fn methodology_engine(seed: u64) -> GameEngine {
    let mut engine = GameEngine::with_seed(seed);
    engine.select_character(Character::Aiko);
    engine.finish_intro();
    engine.state_mut().current_room = RoomId::Methodology;
    engine
}

fn validate_npc_determinism(verbose: bool) -> Vec<TestResult> {
    println!("--- NPC Determinism ---");
    let mut results = Vec::new();

    // Same seed, same tick schedule: identical trajectories.
    let mut a = methodology_engine(7);
    let mut b = methodology_engine(7);
    for _ in 0..200 {
        a.update(50);
        b.update(50);
    }
    results.push(TestResult {
        name: "npc_same_seed_same_paths".into(),
        passed: npc_snapshot(&a) == npc_snapshot(&b),
        detail: "two seed-7 runs agree after 10s".into(),
    });

    // NPCs only move in the methodology room.
    let moved = {
        let baseline = initial_npcs();
        a.state()
            .npcs
            .iter()
            .zip(baseline.iter())
            .filter(|(after, before)| after.position != before.position)
            .all(|(after, _)| after.room == RoomId::Methodology)
    };
    results.push(TestResult {
        name: "npc_confined_to_lab".into(),
        passed: moved,
        detail: "only methodology NPCs left their posts".into(),
    });

    if verbose {
        let mut c = methodology_engine(8);
        for _ in 0..200 {
            c.update(50);
        }
        let diverged = npc_snapshot(&a) != npc_snapshot(&c);
        println!("  seed 7 vs seed 8 diverged after 10s: {}", diverged);
        for (id, pos) in npc_snapshot(&a) {
            println!("    {:16} at ({:.0}, {:.0})", id, pos.x, pos.y);
        }
    }

    results
}

// ── 6. Scripted Playthrough ─────────────────────────────────────────────

fn complete_pending(engine: &mut GameEngine) {
    // Let any kick and the modal slide play out, then finish the task.
    engine.update(timing::KICK_MS + timing::MODAL_SLIDE_MS * 2);
    engine.complete_task();
}

fn validate_playthrough(verbose: bool) -> Vec<TestResult> {
    println!("--- Scripted Playthrough ---");
    let mut results = Vec::new();

    let mut engine = GameEngine::with_seed(42);
    engine.select_character(Character::Lena);
    engine.finish_intro();

    // Intake bench in the introduction.
    engine.state_mut().player.position = Vec2::new(460.0, 150.0);
    engine.interact();
    complete_pending(&mut engine);

    // East into the methodology lab.
    let spawn = room(RoomId::Introduction).door_spawn("intro-east");
    engine.state_mut().player.position = spawn.unwrap_or(Vec2::ZERO);
    engine.interact();
    results.push(TestResult {
        name: "play_reaches_methodology".into(),
        passed: engine.state().current_room == RoomId::Methodology,
        detail: format!("room after door: {:?}", engine.state().current_room),
    });

    // The six benches in protocol order.
    let bench_spots = [
        Vec2::new(85.0, 150.0),
        Vec2::new(255.0, 150.0),
        Vec2::new(430.0, 150.0),
        Vec2::new(600.0, 150.0),
        Vec2::new(770.0, 150.0),
        Vec2::new(770.0, 545.0),
    ];
    for spot in bench_spots {
        engine.state_mut().player.position = spot;
        engine.interact();
        complete_pending(&mut engine);
    }
    results.push(TestResult {
        name: "play_methodology_done".into(),
        passed: engine.state().is_unlocked(RoomId::Applications),
        detail: format!(
            "step cursor at {} of {}",
            engine.state().current_step_index,
            methodology_steps().len()
        ),
    });

    // Applications: one display unlocks the final room.
    let spawn = room(RoomId::Methodology).door_spawn("meth-east");
    engine.state_mut().player.position = spawn.unwrap_or(Vec2::ZERO);
    engine.interact();
    engine.state_mut().player.position = Vec2::new(140.0, 160.0);
    engine.interact();
    complete_pending(&mut engine);
    results.push(TestResult {
        name: "play_limitations_unlocked".into(),
        passed: engine.state().is_unlocked(RoomId::Limitations),
        detail: format!("{} rooms unlocked", engine.state().unlocked_rooms.len()),
    });

    // Limitations: the certification desk ends the game.
    let spawn = room(RoomId::Applications).door_spawn("apps-east");
    engine.state_mut().player.position = spawn.unwrap_or(Vec2::ZERO);
    engine.interact();
    engine.state_mut().player.position = Vec2::new(460.0, 410.0);
    engine.interact();
    complete_pending(&mut engine);

    results.push(TestResult {
        name: "play_game_complete".into(),
        passed: engine.state().phase == GamePhase::Complete,
        detail: format!(
            "phase {:?}, {} items held",
            engine.state().phase,
            engine.state().inventory.len()
        ),
    });

    // Restart returns to the documented initial values.
    engine.restart();
    results.push(TestResult {
        name: "play_restart_resets".into(),
        passed: engine.state().phase == GamePhase::CharacterCreation
            && engine.state().inventory.is_empty()
            && engine.state().unlocked_rooms.len() == 1,
        detail: "fresh state after restart".into(),
    });

    if verbose {
        match serde_json::to_string_pretty(engine.state()) {
            Ok(json) => println!("  post-restart state snapshot:\n{}", json),
            Err(e) => println!("  snapshot failed: {}", e),
        }
    }

    results
}
