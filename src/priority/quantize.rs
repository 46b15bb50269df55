use serde::{Deserialize, Serialize};

/// The host's discrete priority scale: levels 1..=`lowest_level` where 1 is
/// the most urgent, plus level 0 for "off". The mapping from the continuous
/// score is monotonically decreasing: more desirable work gets a lower
/// (more urgent) level number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityScale {
    lowest_level: u8,
}

impl Default for PriorityScale {
    fn default() -> Self {
        Self { lowest_level: 4 }
    }
}

impl PriorityScale {
    pub fn new(lowest_level: u8) -> Self {
        Self {
            lowest_level: lowest_level.max(1),
        }
    }

    pub fn lowest_level(self) -> u8 {
        self.lowest_level
    }

    /// Percent points at or below which a score quantizes to "off".
    /// 20 for the default four-level scale.
    fn cutoff(self) -> i32 {
        100 / (i32::from(self.lowest_level) + 1)
    }

    fn active_width(self) -> i32 {
        100 - self.cutoff()
    }

    fn step_width(self) -> f32 {
        self.active_width() as f32 / f32::from(self.lowest_level)
    }

    /// Quantizes a finalized score. The sticky flags bypass the monotonic
    /// mapping at the boundary: `enabled` keeps a below-cutoff score on at
    /// the lowest active level, `disabled` turns everything off.
    pub fn quantize(self, value: f32, enabled: bool, disabled: bool) -> u8 {
        let points = ((value * 100.0).round() as i32).clamp(0, 100);
        if points <= self.cutoff() {
            if enabled {
                return self.lowest_level;
            }
            return 0;
        }
        if disabled {
            return 0;
        }

        let inverted = self.active_width() - (points - self.cutoff());
        let level = (inverted as f32 / self.step_width()).floor() as i32 + 1;
        if level < 1 || level > i32::from(self.lowest_level) {
            tracing::error!(
                target: "priority",
                level,
                value,
                lowest_level = self.lowest_level,
                "quantized level fell outside the valid range; clamping"
            );
            return level.clamp(1, i32::from(self.lowest_level)) as u8;
        }
        level as u8
    }

    /// Inverse informational mapping used by the gated (no free will) path:
    /// remaps an externally assigned manual level back onto the continuous
    /// scale. Manual level 0 stays off.
    pub fn from_manual(self, manual_level: u8) -> f32 {
        if manual_level == 0 {
            return 0.0;
        }
        (100.0 - self.step_width() * (f32::from(manual_level) - 1.0)) / 100.0
    }
}
