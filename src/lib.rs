//! Direct all-pairs N-body benchmark: deterministic seeded initial
//! conditions, fixed-step symplectic Euler integration, and wall-clock
//! timing of the step loop.

pub mod body;
pub mod forces;
pub mod sim;
