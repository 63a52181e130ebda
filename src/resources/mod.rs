//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `debugmode` – presence toggles per-step bounding shape diagnostics
//! - `finishsequence` – progress of the end-of-level fade
//! - `gameconfig` – INI-backed configuration of pace, player and resolver
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-step key state relevant to the game
//! - `inputscript` – scripted held keys for headless runs
//! - `levellayout` – floor/wall corners and spawn points of a level
//! - `movementsettings` – tunables of the movement resolver
//! - `regioncatalog` – ordered floor and wall regions
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldsignals` – global flags and named entities
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod finishsequence;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod inputscript;
pub mod levellayout;
pub mod movementsettings;
pub mod regioncatalog;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
