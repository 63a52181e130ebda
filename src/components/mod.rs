//! ECS components and the geometric shapes they produce.
//!
//! Submodules overview:
//! - [`boundingbox`] – axis-aligned world-space rectangle and its overlap tests
//! - [`boundingcircle`] – world-space circle and its overlap tests
//! - [`boxcollider`] – rectangular footprint of an entity, centered on its position
//! - [`circlecollider`] – circular collision shape of an entity
//! - [`globaltransform2d`] – world-space transform computed once per step
//! - [`inputcontrolled`] – per-direction step lengths for keyboard movement
//! - [`player`] – the controllable character and the torch it holds
//! - [`star`] – marker for the level goal
//! - [`torch`] – torch geometry and its cached flame position
//! - [`transform2d`] – local transform with an optional parent

pub mod boundingbox;
pub mod boundingcircle;
pub mod boxcollider;
pub mod circlecollider;
pub mod globaltransform2d;
pub mod inputcontrolled;
pub mod player;
pub mod star;
pub mod torch;
pub mod transform2d;
