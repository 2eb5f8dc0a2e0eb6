//! Puzzle generation and the publishability contract.
//!
//! [`PuzzleGenerator`] produces puzzles from an explicit seed in two tiers:
//!
//! - [`generate`](PuzzleGenerator::generate): the cheap path. A solved grid
//!   is dug out to a difficulty-specific given count, with solvability kept
//!   but uniqueness and logical accessibility not guaranteed.
//! - [`generate_contract_gated`](PuzzleGenerator::generate_contract_gated):
//!   every removal must stay solvable by the technique solver, and the
//!   finished puzzle must have exactly one solution. Bounded attempts; a
//!   loud error on exhaustion.
//!
//! [`contract`] holds the validator that decides whether a puzzle/solution
//! payload is acceptable, independent of how it was produced or transported.
//!
//! All randomness flows from the caller's seed through a fixed PRNG
//! ([`rand_pcg::Pcg64Mcg`]); identical `(difficulty, seed)` always yields an
//! identical puzzle.

pub mod contract;
mod generator;
pub mod payload;

pub use self::{
    contract::{ContractError, validate_pair, validate_payload},
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    payload::{PuzzlePayload, SCHEMA_VERSION},
};
