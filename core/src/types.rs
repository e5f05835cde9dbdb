//! Shared primitive types used across the game client.

/// A game turn. One turn = one in-game month.
pub type Turn = u64;

/// A monetary value in BRL. The generator emits plain JSON numbers.
pub type Money = f64;

/// A fractional rate (0.045 = 4.5% a.m.).
pub type Rate = f64;
