//! An agent wandering a bounded grid with obstacles, never re-entering a
//! cell it has moved into, until it has no legal move left.

pub mod agent;
pub mod config;
pub mod environment;
pub mod error;
pub mod exploration;
pub mod policy;
pub mod report;
pub mod scenario;

pub use agent::{Agent, AgentConfig};
pub use environment::{Cell, GridMap, Movement, Pos};
pub use error::{ExploreError, MapError, ScenarioError};
pub use exploration::{Exploration, Step, Summary};
pub use policy::{FirstPolicy, Policy, RandomPolicy, ScriptedPolicy};
pub use report::{ConsoleObserver, CsvObserver, StepObserver};
