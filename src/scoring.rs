use crate::model::{AdjustmentKind, BonusType};

/// Points shown for a moderated activity: base energy plus at most one bonus
/// and at most one penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub base: i32,
    pub bonus: Option<i32>,
    pub penalty: Option<i32>,
}

impl PointsBreakdown {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Set the bonus, replacing any previous one.
    pub fn with_bonus(mut self, points: i32) -> Self {
        self.bonus = Some(points);
        self
    }

    /// Set the penalty, replacing any previous one. Penalties are signed
    /// adjustments and are normally negative.
    pub fn with_penalty(mut self, points: i32) -> Self {
        self.penalty = Some(points);
        self
    }

    /// Fill the slot matching the bonus type's kind.
    pub fn with_adjustment(self, adjustment: &BonusType) -> Self {
        match adjustment.kind {
            AdjustmentKind::Bonus => self.with_bonus(adjustment.points_adjustment),
            AdjustmentKind::Penalty => self.with_penalty(adjustment.points_adjustment),
        }
    }

    /// Base plus adjustments, saturating at the `i32` bounds. May be negative.
    pub fn total(&self) -> i32 {
        self.base
            .saturating_add(self.bonus.unwrap_or(0))
            .saturating_add(self.penalty.unwrap_or(0))
    }

    /// Points the server actually stores: the total floored at zero.
    pub fn credited(&self) -> i32 {
        self.total().max(0)
    }

    /// Preview line for the moderator, e.g. `"40 +10 -5 = 45"`.
    pub fn describe(&self) -> String {
        let mut line = self.base.to_string();
        for delta in [self.bonus, self.penalty].into_iter().flatten() {
            line.push_str(&format!(" {delta:+}"));
        }
        format!("{line} = {}", self.total())
    }
}
