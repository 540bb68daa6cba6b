//! NPC behavior loop — a fixed-tick two-state patrol machine.
//!
//! Runs one tick at a time (the engine drives the 50 ms cadence) and only
//! for NPCs in the given room. NPCs check collision against the PLAYER
//! only — they walk straight through static scenery.

use genelab_logic::collision::{npc_box, player_box};
use genelab_logic::constants::{avatar, npc as npc_tuning};
use genelab_logic::geometry::Vec2;
use rand::Rng;

use crate::content;
use crate::state::{Npc, NpcState};

/// Advance every NPC in `room` by one behavior tick. Returns indices of
/// NPCs that shouted at the player this tick (blocked + cooldown expired).
pub fn npc_tick(
    npcs: &mut [Npc],
    room: content::RoomId,
    player_pos: Vec2,
    now_ms: u64,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let stations = content::room(room).stations;
    let player = player_box(player_pos);
    let mut shouts = Vec::new();

    for (i, npc) in npcs.iter_mut().enumerate() {
        if npc.room != room {
            continue;
        }
        match npc.state {
            NpcState::Idle => {}
            NpcState::Working => {
                npc.work_timer_ms -= npc_tuning::TICK_MS as i64;
                if npc.work_timer_ms <= 0 && !stations.is_empty() {
                    let station = &stations[rng.gen_range(0..stations.len())];
                    npc.target = Some(walk_target(station.bounds.center().x, station.bounds.max_y()));
                    npc.state = NpcState::Walking;
                }
            }
            NpcState::Walking => {
                let Some(target) = npc.target else {
                    // Shouldn't happen; settle back into working.
                    npc.state = NpcState::Working;
                    npc.work_timer_ms = random_work_duration(rng);
                    continue;
                };
                let remaining = npc.position.distance(&target);
                if remaining < npc_tuning::SPEED {
                    npc.position = target;
                    npc.target = None;
                    npc.state = NpcState::Working;
                    npc.work_timer_ms = random_work_duration(rng);
                    continue;
                }
                let dir = (target - npc.position).normalize();
                let tentative = npc.position + dir * npc_tuning::SPEED;
                if npc_box(tentative).overlaps(&player) {
                    // Blocked by the player. Shout at most once per cooldown.
                    let can_shout = npc
                        .last_shout_ms
                        .map(|t| now_ms.saturating_sub(t) > npc_tuning::SHOUT_COOLDOWN_MS)
                        .unwrap_or(true);
                    if can_shout {
                        npc.last_shout_ms = Some(now_ms);
                        shouts.push(i);
                    }
                } else {
                    npc.position = tentative;
                }
            }
        }
    }

    shouts
}

/// Walk destination for a station: centered horizontally, just below its
/// bottom edge.
fn walk_target(station_center_x: f32, station_bottom: f32) -> Vec2 {
    Vec2::new(
        station_center_x - avatar::NPC_WIDTH / 2.0,
        station_bottom + npc_tuning::STATION_GAP,
    )
}

fn random_work_duration(rng: &mut impl Rng) -> i64 {
    rng.gen_range(npc_tuning::WORK_MIN_MS..=npc_tuning::WORK_MAX_MS) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{initial_npcs, room, RoomId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const AWAY: Vec2 = Vec2::new(-500.0, -500.0);

    fn methodology_npcs() -> Vec<Npc> {
        initial_npcs()
            .into_iter()
            .filter(|n| n.room == RoomId::Methodology)
            .collect()
    }

    #[test]
    fn test_work_timer_counts_down_then_picks_station_target() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = methodology_npcs();
        npcs[0].work_timer_ms = 100;

        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 0, &mut rng);
        assert_eq!(npcs[0].state, NpcState::Working);
        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 50, &mut rng);
        assert_eq!(npcs[0].state, NpcState::Walking);

        let target = npcs[0].target.expect("walking NPC has a target");
        let station = room(RoomId::Methodology)
            .stations
            .iter()
            .find(|s| {
                (target.x - (s.bounds.center().x - avatar::NPC_WIDTH / 2.0)).abs() < 0.01
                    && (target.y - (s.bounds.max_y() + npc_tuning::STATION_GAP)).abs() < 0.01
            });
        assert!(station.is_some(), "target {:?} is not below any station", target);
    }

    #[test]
    fn test_walking_advances_by_speed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = methodology_npcs();
        npcs[0].state = NpcState::Walking;
        npcs[0].position = Vec2::new(300.0, 300.0);
        npcs[0].target = Some(Vec2::new(300.0, 200.0));

        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 0, &mut rng);
        assert_eq!(npcs[0].position, Vec2::new(300.0, 300.0 - npc_tuning::SPEED));
        assert_eq!(npcs[0].state, NpcState::Walking);
    }

    #[test]
    fn test_snap_to_target_and_resume_working() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = methodology_npcs();
        npcs[0].state = NpcState::Walking;
        npcs[0].position = Vec2::new(300.0, 201.0);
        npcs[0].target = Some(Vec2::new(300.0, 200.0));

        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 0, &mut rng);
        assert_eq!(npcs[0].position, Vec2::new(300.0, 200.0));
        assert_eq!(npcs[0].state, NpcState::Working);
        assert!(npcs[0].work_timer_ms >= npc_tuning::WORK_MIN_MS as i64);
        assert!(npcs[0].work_timer_ms <= npc_tuning::WORK_MAX_MS as i64);
    }

    #[test]
    fn test_player_block_shouts_once_then_respects_cooldown() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = methodology_npcs();
        npcs[0].state = NpcState::Walking;
        npcs[0].position = Vec2::new(300.0, 300.0);
        npcs[0].target = Some(Vec2::new(300.0, 200.0));
        // Player directly on the NPC's path.
        let player = Vec2::new(300.0, 260.0);

        let shouts = npc_tick(&mut npcs, RoomId::Methodology, player, 10_000, &mut rng);
        assert_eq!(shouts, vec![0]);
        assert_eq!(npcs[0].last_shout_ms, Some(10_000));
        // Movement was blocked for the tick.
        assert_eq!(npcs[0].position, Vec2::new(300.0, 300.0));

        // 1 second later: still blocked, but silent.
        let shouts = npc_tick(&mut npcs, RoomId::Methodology, player, 11_000, &mut rng);
        assert!(shouts.is_empty());
        assert_eq!(npcs[0].last_shout_ms, Some(10_000));

        // Past the cooldown: shouts again.
        let shouts = npc_tick(&mut npcs, RoomId::Methodology, player, 13_100, &mut rng);
        assert_eq!(shouts, vec![0]);
        assert_eq!(npcs[0].last_shout_ms, Some(13_100));
    }

    #[test]
    fn test_npcs_outside_room_do_not_tick() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = initial_npcs();
        let reyes = npcs.iter().position(|n| n.id == "npc-reyes").unwrap();
        let before = npcs[reyes].position;

        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 0, &mut rng);
        assert_eq!(npcs[reyes].position, before);
        assert_eq!(npcs[reyes].state, NpcState::Idle);
    }

    #[test]
    fn test_npc_ignores_static_scenery() {
        // NPCs only avoid the player; a target across a decor rect is
        // reached by walking straight through it.
        let mut rng = StdRng::seed_from_u64(7);
        let mut npcs = methodology_npcs();
        npcs[0].state = NpcState::Walking;
        // The sample fridge decor sits at (60, 480, 80, 60).
        npcs[0].position = Vec2::new(80.0, 460.0);
        npcs[0].target = Some(Vec2::new(80.0, 560.0));

        npc_tick(&mut npcs, RoomId::Methodology, AWAY, 0, &mut rng);
        assert_eq!(npcs[0].position, Vec2::new(80.0, 460.0 + npc_tuning::SPEED));
    }
}
