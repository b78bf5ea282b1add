//! Synthetic roster generation.
//!
//! Usernames are built from a first name with optional surname and gamer
//! suffix, so substring searches like `rahul` hit many players. Ratings
//! cluster around 2500.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use standings::{User, clamp_rating};

use super::leaderboard::Leaderboard;

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "neha", "vikram", "anjali", "rohan", "kavya", "arjun", "sneha", "aditya", "pooja",
    "karan", "divya", "rajesh", "simran", "sanjay", "meera", "varun", "isha", "nikhil", "tanvi", "manish", "riya",
    "akash", "nisha", "deepak", "swati", "gaurav", "preeti", "vishal", "aarti", "mohit", "shreya", "ankit", "sonal",
    "rahul_mathur", "rahul_burman", "rahul_kumar",
];

const LAST_NAMES: &[&str] = &[
    "", "_sharma", "_patel", "_kumar", "_singh", "_gupta", "_verma", "_iyer", "_reddy", "_nair", "_chopra", "_mehta",
    "_joshi", "_rao", "_das", "_pandey", "_mishra", "_deshpande", "_kulkarni", "_bhat", "_menon", "_pillai",
    "_mathur", "_burman", "_agarwal", "_malhotra", "_kapur", "_bose",
];

const SUFFIXES: &[&str] = &[
    "", "123", "007", "99", "2k", "pro", "king", "ace", "star", "legend", "master", "gamer", "alpha", "beta", "prime",
    "ultra", "mega", "super", "21", "22", "23", "24", "25", "x", "v2", "v3", "01", "02", "03",
];

const LAST_NAME_CHANCE: f64 = 0.4;
const SUFFIX_CHANCE: f64 = 0.3;

const RATING_MEAN: f64 = 2500.0;
const RATING_SPREAD: f64 = 800.0;

const PROGRESS_EVERY: u64 = 1000;

/// Fill `board` with `count` generated users, ids `1..=count`.
pub fn seed_leaderboard<R: Rng + ?Sized>(board: &mut Leaderboard, count: u64, rng: &mut R) {
    info!(count, "generating users");
    for id in 1..=count {
        let username = random_username(rng);
        let rating = random_rating(rng);
        board.add_user(User { id, username, rating });

        if id % PROGRESS_EVERY == 0 {
            info!(generated = id, "seed progress");
        }
    }
    info!(count, total = board.len(), "seed complete");
}

pub fn random_username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut username = String::from(*FIRST_NAMES.choose(rng).unwrap_or(&"player"));

    if rng.random_bool(LAST_NAME_CHANCE) {
        username.push_str(LAST_NAMES.choose(rng).unwrap_or(&""));
    }
    if rng.random_bool(SUFFIX_CHANCE) {
        username.push_str(SUFFIXES.choose(rng).unwrap_or(&""));
    }
    username
}

/// Triangular-ish spread: mean plus the scaled difference of two uniforms.
pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = RATING_SPREAD * (2.0 * u2 - 2.0 * u1);
    #[allow(clippy::cast_possible_truncation)]
    let rating = (RATING_MEAN + z) as i64;
    clamp_rating(rating)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
