//! Logistics Simulation Library
//!
//! A multi-truck route-animation and scripted-scenario simulation engine
//! that can run headless or feed an external presentation layer.

pub mod simulation;
