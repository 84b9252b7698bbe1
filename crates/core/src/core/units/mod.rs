//! Execution units and functional components.
//!
//! This module contains the functional units of the division pipeline
//! model. The R5900 carries one integer divider on each of its two
//! execution pipes; both are instances of the same unit.

/// Integer division pipeline unit.
pub mod div;
