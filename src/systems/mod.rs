//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation one step.
//!
//! Submodules overview
//! - [`debugbounds`] – log world-space bounds while debug mode is on
//! - [`finish`] – fade in the end-of-level overlay and quit
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`goal`] – detect the player reaching the star
//! - [`input`] – play back scripted input into [`crate::resources::input::InputState`]
//! - [`movement`] – resolve player moves against floors and walls, aim toward the pointer
//! - [`time`] – update simulation time and delta
//! - [`torch`] – grab or drop the torch and keep its flame position current
//! - [`transform2d`] – world-space queries over the transform hierarchy

pub mod debugbounds;
pub mod finish;
pub mod gamestate;
pub mod goal;
pub mod input;
pub mod movement;
pub mod time;
pub mod torch;
pub mod transform2d;
