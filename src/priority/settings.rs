use std::collections::BTreeMap;
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::priority::types::TaskCategory;

/// Colony-wide per-category additive offsets. Missing entries self-heal:
/// the first lookup inserts a neutral 0.0 and continues, so a new category
/// is configuration-free rather than an error. The mutex makes that first
/// insert safe when evaluations run concurrently across a batch.
#[derive(Debug, Default)]
pub struct PolicyStore {
    offsets: Mutex<BTreeMap<String, f32>>,
}

impl PolicyStore {
    pub fn new(offsets: BTreeMap<String, f32>) -> Self {
        Self {
            offsets: Mutex::new(offsets),
        }
    }

    pub fn offset(&self, category: &TaskCategory) -> f32 {
        let mut offsets = self
            .offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *offsets.entry(category.key().to_string()).or_insert(0.0)
    }

    pub fn set_offset(&self, category: &TaskCategory, offset: f32) {
        let mut offsets = self
            .offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        offsets.insert(category.key().to_string(), offset);
    }

    pub fn snapshot(&self) -> BTreeMap<String, f32> {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A fault-prone consideration's own toggle. Trips open on the first fault
/// and never auto-recovers, so one bad evaluation does not repeat every
/// cycle. Relaxed atomics are enough: a racing evaluation may run the
/// faulty consideration one extra time, never incorrectly.
#[derive(Debug)]
pub struct CircuitBreaker {
    open: AtomicBool,
}

impl CircuitBreaker {
    pub fn new(enabled: bool) -> Self {
        Self {
            open: AtomicBool::new(!enabled),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    pub fn trip(&self) {
        self.open.store(true, Ordering::Relaxed);
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Runtime knobs for the fault-prone considerations: a weight per scaled
/// consideration (0.0 disables it outright) and a breaker per consideration
/// that can fault on host data.
#[derive(Debug)]
pub struct ConsiderationSettings {
    pub verbose: bool,
    pub movement_speed_weight: f32,
    pub food_poisoning_weight: f32,
    pub own_room_weight: f32,
    pub plants_blighted_weight: f32,
    pub grove_pruning_weight: f32,
    pub breakers: Breakers,
}

#[derive(Debug, Default)]
pub struct Breakers {
    pub movement_speed: CircuitBreaker,
    pub food_poisoning: CircuitBreaker,
    pub own_room: CircuitBreaker,
    pub plants_blighted: CircuitBreaker,
    pub grove_pruning: CircuitBreaker,
    pub hunting_weapon: CircuitBreaker,
    pub brawlers_not_hunting: CircuitBreaker,
    pub interests: CircuitBreaker,
}

impl Default for ConsiderationSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            movement_speed_weight: 1.0,
            food_poisoning_weight: 1.0,
            own_room_weight: 1.0,
            plants_blighted_weight: 1.0,
            grove_pruning_weight: 1.0,
            breakers: Breakers::default(),
        }
    }
}
