//! Event types and observers.
//!
//! Events decouple the system that notices something (a key press, the
//! player touching the star) from the code that reacts to it.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`level`] – the player reached the star
//! - [`torch`] – grabbing and dropping the torch
pub mod gamestate;
pub mod level;
pub mod torch;
