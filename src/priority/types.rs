use std::cmp::Ordering;
use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::priority::ports::AssignmentStore;

pub type AgentId = String;

/// A named class of work being scored. Categories without a dedicated
/// dispatch list fall through to the default list, so hosts can introduce
/// new categories via `Custom` with zero configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Firefighting,
    Patient,
    Doctoring,
    Bedrest,
    BasicWork,
    Warden,
    Handling,
    Cooking,
    Hunting,
    Construction,
    Growing,
    Mining,
    PlantCutting,
    Smithing,
    Tailoring,
    Art,
    Crafting,
    Hauling,
    Cleaning,
    Research,
    UrgentHauling,
    Custom(String),
}

impl TaskCategory {
    /// Stable string key, used for policy-offset lookup and logging.
    pub fn key(&self) -> &str {
        match self {
            Self::Firefighting => "firefighting",
            Self::Patient => "patient",
            Self::Doctoring => "doctoring",
            Self::Bedrest => "bedrest",
            Self::BasicWork => "basic_work",
            Self::Warden => "warden",
            Self::Handling => "handling",
            Self::Cooking => "cooking",
            Self::Hunting => "hunting",
            Self::Construction => "construction",
            Self::Growing => "growing",
            Self::Mining => "mining",
            Self::PlantCutting => "plant_cutting",
            Self::Smithing => "smithing",
            Self::Tailoring => "tailoring",
            Self::Art => "art",
            Self::Crafting => "crafting",
            Self::Hauling => "hauling",
            Self::Cleaning => "cleaning",
            Self::Research => "research",
            Self::UrgentHauling => "urgent_hauling",
            Self::Custom(name) => name,
        }
    }

    pub fn is_hauling_family(&self) -> bool {
        matches!(self, Self::Hauling | Self::UrgentHauling)
    }

    pub fn is_crafting_family(&self) -> bool {
        matches!(self, Self::Smithing | Self::Tailoring | Self::Art | Self::Crafting)
    }

    /// Patient and bedrest share "this agent is the one being cared for"
    /// semantics in several considerations.
    pub fn is_patient_family(&self) -> bool {
        matches!(self, Self::Patient | Self::Bedrest)
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An agent's attachment to one skill. The first six tiers are native;
/// `Tier` carries an interests-framework index resolved through the world
/// signal provider when that framework is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passion {
    None,
    Minor,
    Major,
    Apathy,
    Natural,
    Critical,
    Tier(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub label: String,
    pub passion: Passion,
}

/// A mood thought currently affecting the agent, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub name: String,
    pub stage: String,
    pub mood_effect: f32,
}

/// A health condition currently affecting the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub stage: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationTier {
    ExtremelyLow,
    VeryLow,
    Low,
    Moderate,
    High,
    SkyHigh,
    Noble,
    Royal,
}

impl ExpectationTier {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeautyCategory {
    Hideous,
    VeryUgly,
    Ugly,
    Neutral,
    Pretty,
    VeryPretty,
    Beautiful,
}

impl BeautyCategory {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One finalized evaluation: the continuous score, the sticky override
/// flags, the quantized level, and the ordered explanation trail.
///
/// Ordering compares the continuous `value` only, ascending; ties are left
/// to the caller's stable sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedPriority {
    pub agent: AgentId,
    pub category: TaskCategory,
    pub value: f32,
    pub enabled: bool,
    pub disabled: bool,
    pub level: u8,
    pub log: Vec<String>,
}

impl ComputedPriority {
    /// Writes the quantized level into the host's assignment store,
    /// switching the store to autonomous prioritization on first use.
    /// Idempotent: re-applying the same evaluation is a no-op for the host.
    pub fn apply_to(&self, store: &mut dyn AssignmentStore) {
        if !store.autonomous_enabled() {
            store.enable_autonomous();
        }
        store.set_priority(&self.agent, &self.category, self.level);
    }

    /// Human-readable explanation, suitable for a tooltip: the level line
    /// (omitted while disabled) followed by every adjustment in order.
    pub fn report(&self) -> String {
        let mut out = String::new();
        if !self.disabled {
            let _ = writeln!(out, "priority level {}", self.level);
            let _ = writeln!(out, "------------------------------");
        }
        for entry in &self.log {
            let _ = writeln!(out, "{entry}");
        }
        out
    }
}

impl PartialEq for ComputedPriority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComputedPriority {}

impl PartialOrd for ComputedPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComputedPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}
