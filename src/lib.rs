//! Dimensioning and planning core for LTE radio access networks.
//!
//! Estimates the number of eNodeB sites needed to cover a service zone and
//! to carry its subscriber traffic, using the Cost-231 Hata propagation
//! model, then lays the sites out on a hexagonal planning grid for
//! visualization.
//!
//! Every operation is a pure, synchronous transform of its inputs: no state,
//! no I/O, no randomness. Input collection and rendering belong to callers;
//! the crate's binary provides a file-driven command line front end.

pub mod error;
pub mod layout;
pub mod planner;
pub mod propagation;
pub mod report;
pub mod scenario;
pub mod sizing;

pub use error::{DomainError, InputError, PlanningError};
pub use planner::{NetworkPlan, plan_network};
pub use scenario::{Scenario, ScenarioLoadError};
pub use sizing::SizingResult;
