use crate::priority::quantize::PriorityScale;

/// The accumulator threaded through one evaluation: the clamped continuous
/// score, the sticky enable/disable overrides, and the ordered explanation
/// trail. Every mutation returns the state so considerations compose as a
/// chain of `ScoreState -> ScoreState` steps.
///
/// Invariants: `value` is in [0,1] after every mutation; `enabled` and
/// `disabled` are never both true (setting one clears the other).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    value: f32,
    enabled: bool,
    disabled: bool,
    log: Vec<String>,
    verbose: bool,
    scale: PriorityScale,
}

impl ScoreState {
    pub fn new(scale: PriorityScale, verbose: bool) -> Self {
        Self {
            value: 0.0,
            enabled: false,
            disabled: false,
            log: Vec::new(),
            verbose,
            scale,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn into_log(self) -> Vec<String> {
        self.log
    }

    pub fn scale(&self) -> PriorityScale {
        self.scale
    }

    /// Discrete level this state would quantize to right now.
    pub fn level(&self) -> u8 {
        self.scale.quantize(self.value, self.enabled, self.disabled)
    }

    /// Overwrites the score, clamped to [0,1], and replaces the log with a
    /// single entry. Verbose mode appends a reset marker instead so the
    /// full trail survives for inspection.
    pub fn reset(mut self, value: f32, reason: &str) -> Self {
        self.value = value.clamp(0.0, 1.0);
        let entry = format!("{} ({reason})", percent(self.value));
        if self.verbose {
            self.log.push("-- reset --".to_string());
            self.log.push(entry);
        } else {
            self.log = vec![entry];
        }
        self
    }

    /// Adds `delta`, saturating into [0,1]. No-op while disabled. Logs a
    /// signed entry when the value changed; the unchanged branch uses exact
    /// float equality (the magnitude always comes from a previous clamp)
    /// and is only recorded in verbose mode.
    pub fn add(mut self, delta: f32, reason: &str) -> Self {
        if self.disabled {
            return self;
        }
        let new_value = (self.value + delta).clamp(0.0, 1.0);
        if new_value > self.value {
            self.log
                .push(format!("+{} ({reason})", percent(new_value - self.value)));
            self.value = new_value;
        } else if new_value < self.value {
            self.log
                .push(format!("-{} ({reason})", percent(self.value - new_value)));
            self.value = new_value;
        } else if self.verbose {
            self.log.push(format!("+{} ({reason})", percent(0.0)));
        }
        self
    }

    /// Multiplies the score by `factor`, expressed as the equivalent
    /// saturating addition so the log entry carries the real magnitude.
    pub fn multiply(self, factor: f32, reason: &str) -> Self {
        if self.disabled {
            return self;
        }
        let target = (self.value * factor).clamp(0.0, 1.0);
        let delta = target - self.value;
        self.add(delta, reason)
    }

    pub fn always_do(self, reason: &str) -> Self {
        self.always_do_if(true, reason)
    }

    /// Sticky "always do this" override; clears `disabled`. The log entry
    /// is suppressed unless it would actually tell the reader something:
    /// verbose mode, a previously disabled state, or a score that would
    /// otherwise quantize to off.
    pub fn always_do_if(mut self, condition: bool, reason: &str) -> Self {
        if !condition || self.enabled {
            return self;
        }
        if self.verbose || self.disabled || self.level() == 0 {
            self.log.push(format!("enabled ({reason})"));
        }
        self.enabled = true;
        self.disabled = false;
        self
    }

    pub fn never_do(self, reason: &str) -> Self {
        self.never_do_if(true, reason)
    }

    /// Sticky "never do this" override; clears `enabled`. Logged unless the
    /// state already quantized to off and nothing was enabled, mirroring
    /// the suppression rule of `always_do_if`.
    pub fn never_do_if(mut self, condition: bool, reason: &str) -> Self {
        if !condition || self.disabled {
            return self;
        }
        if self.verbose || self.enabled || self.level() > 0 {
            self.log.push(format!("disabled ({reason})"));
        }
        self.disabled = true;
        self.enabled = false;
        self
    }
}

fn percent(value: f32) -> String {
    format!("{:.0}%", value * 100.0)
}
