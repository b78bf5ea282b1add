//! Domain services used by the HTTP routes and background tasks.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the ranking logic so route handlers can stay focused
//! on query parsing and response shaping.

pub mod histogram;
pub mod leaderboard;
pub mod seed;
pub mod simulation;
