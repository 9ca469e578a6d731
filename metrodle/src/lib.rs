//! Daily metro guessing games.
//!
//! Two games share one station catalog: guess the station of the day from
//! attribute feedback, or name every station on the shortest route between
//! two stations that share no line.

pub mod catalog;
pub mod daily;
pub mod domain;
pub mod network;
pub mod scoring;
pub mod session;
pub mod share;
