//! Work-priority scoring: per (agent, category) desirability built from an
//! ordered chain of considerations, quantized onto the host's discrete
//! priority scale.

pub mod considerations;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod quantize;
pub mod settings;
pub mod state;
pub mod testing;
pub mod types;

pub use error::{SignalError, SignalErrorKind};
pub use pipeline::{GLOBAL_DEFAULT, PriorityEngine};
pub use ports::{AgentSignals, AssignmentStore, WorldSignals};
pub use quantize::PriorityScale;
pub use settings::{Breakers, CircuitBreaker, ConsiderationSettings, PolicyStore};
pub use state::ScoreState;
pub use types::{
    AgentId, BeautyCategory, ComputedPriority, Condition, ExpectationTier, Passion, SkillRecord,
    TaskCategory, Thought,
};
