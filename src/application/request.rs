//! Caller-side validation of generation requests.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{MAX_LEVELS, MAX_NODES};

pub const LEVELS_MESSAGE: &str = "Please enter a level between 1 and 5.";
pub const NODES_MESSAGE: &str = "Please enter a number of nodes between 1 and 32.";
pub const TOO_FEW_NODES_MESSAGE: &str = "Invalid number of nodes for the selected level.";

/// Raw `(levels, nodes)` input as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeRequest {
    pub levels: u32,
    pub nodes: usize,
}

impl TreeRequest {
    pub fn new(levels: u32, nodes: usize) -> Self {
        Self { levels, nodes }
    }

    /// Enforces the input contract the builder relies on.
    ///
    /// Checks run in order: level range, node range, then `nodes >= levels`.
    /// Capacity is left to the builder.
    pub fn validate(&self) -> ApplicationResult<()> {
        if !(1..=MAX_LEVELS).contains(&self.levels) {
            debug!(levels = self.levels, "levels out of range");
            return Err(ApplicationError::invalid_input(LEVELS_MESSAGE));
        }
        if !(1..=MAX_NODES).contains(&self.nodes) {
            debug!(nodes = self.nodes, "nodes out of range");
            return Err(ApplicationError::invalid_input(NODES_MESSAGE));
        }
        if self.nodes < self.levels as usize {
            debug!(levels = self.levels, nodes = self.nodes, "fewer nodes than levels");
            return Err(ApplicationError::invalid_input(TOO_FEW_NODES_MESSAGE));
        }
        Ok(())
    }
}

/// Node counts that exactly populate `levels` levels, None outside `1..=5`.
///
/// The top range stops at 32 rather than 31 to match the input bound; 32
/// still fails the capacity check.
pub fn level_range(levels: u32) -> Option<RangeInclusive<usize>> {
    match levels {
        1 => Some(1..=1),
        2 => Some(2..=3),
        3 => Some(4..=7),
        4 => Some(8..=15),
        5 => Some(16..=32),
        _ => None,
    }
}

pub fn fits_level_range(levels: u32, nodes: usize) -> bool {
    level_range(levels).is_some_and(|range| range.contains(&nodes))
}
