//! Pure game logic for GeneLab.
//!
//! This crate contains the logic that is independent of any engine or
//! runtime. Functions take plain data and return results, making them
//! unit-testable and portable to any host shell (native, WASM, simtest).
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Tuning values — player size, interaction radius, tick rates, deadlines |
//! | [`geometry`] | `Vec2`/`Rect` primitives and strict AABB overlap tests |
//! | [`collision`] | Candidate-position blocking test against room obstacles |
//! | [`proximity`] | Interaction-zone expansion and fixed-order first-match scans |
//! | [`direction`] | Dominant-axis facing/kick direction |

pub mod collision;
pub mod constants;
pub mod direction;
pub mod geometry;
pub mod proximity;
