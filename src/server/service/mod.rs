//! Business logic layer between controllers and data repositories.
//!
//! Services validate incoming operations, orchestrate repository calls,
//! emit real-time events on state changes, and assemble response DTOs.
//! Controllers never touch repositories directly.

pub mod block;
pub mod booking;
pub mod class;
pub mod feedback;
