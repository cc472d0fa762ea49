//! Lift Simulation Library
//!
//! Simulates a single elevator car delivering a fixed set of waiting
//! passengers, floor by floor, until everyone has arrived.

pub mod simulation;
