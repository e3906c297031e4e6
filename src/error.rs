//! Error types for the simulator.
//!
//! This module provides a unified error type [`SimError`] and a convenient [`Result`] alias.
//! None of these errors are fatal: callers log them and continue with defaults or the
//! previous state.

use std::fmt;

/// Main error type for the simulation core.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A body was constructed with a zero, negative, or non-finite mass.
    InvalidMass(f64),
    /// A body was constructed with a zero, negative, or non-finite radius.
    InvalidRadius(f64),
    /// A time step was zero, negative, or non-finite.
    InvalidTimeStep(f64),
    /// A raw input field could not be parsed.
    InvalidInput { field: &'static str, value: String },
    /// The time step cannot change while a run is actively ticking.
    TimeStepLocked,
    /// The run already recorded an impact; reset first.
    AlreadyImpacted,
    /// The external map collaborator failed.
    MapGeneration(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidMass(mass) => write!(f, "Invalid mass: {mass} kg"),
            Self::InvalidRadius(radius) => write!(f, "Invalid radius: {radius} m"),
            Self::InvalidTimeStep(dt) => write!(f, "Invalid time step: {dt} s"),
            Self::InvalidInput { field, value } => {
                write!(f, "Invalid input for {field}: {value:?}")
            }
            Self::TimeStepLocked => write!(f, "Time step is locked while the run is ticking"),
            Self::AlreadyImpacted => write!(f, "Impact already recorded for this run"),
            Self::MapGeneration(msg) => write!(f, "Map generation failed: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenient Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;
