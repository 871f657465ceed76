//! Core domain types for the Monty Hall quantum model
//!
//! This crate provides the leaf types every other montyq crate builds on:
//!
//! - **Doors**: 2-bit door registers where doors 0-2 are real and the
//!   value 3 is reserved/invalid ([`door`]).
//! - **Basis states**: the bijective codec between a (prize, player, host)
//!   register triple and a basis index into the 64-dimensional game
//!   statevector ([`basis`]).
//! - **Strategies**: the "keep" / "switch" labels the simulators accept
//!   ([`strategy`]).
//!
//! The bit layout of the basis index is the single most safety-critical
//! convention in the system: every operator and every state preparation
//! step must agree on it, so it is defined exactly once here.

pub mod basis;
pub mod door;
pub mod error;
pub mod strategy;

pub use basis::{BasisState, DIMENSION, PLAYER_HOST_DIMENSION};
pub use door::{is_valid_door, third_door, DOOR_COUNT, INVALID_DOOR};
pub use error::{CoreError, Result};
pub use strategy::Strategy;
