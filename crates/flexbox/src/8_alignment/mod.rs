//! Alignment: justify-content, align-items/align-self, align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>
//!
//! justify-content (items within a line) and align-content (lines within the container) share
//! one integer slack distribution so both place remainders the same way.

use serde::{Deserialize, Serialize};

use crate::chapter6::AlignSelf;

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignItems {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    Stretch,
}

impl AlignSelf {
    /// Resolve `auto` against the container's `align-items`.
    #[inline]
    pub const fn resolve(self, container: AlignItems) -> AlignItems {
        match self {
            Self::Auto => container,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// Shared packing modes behind justify-content and align-content.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Packing {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<JustifyContent> for Packing {
    fn from(value: JustifyContent) -> Self {
        match value {
            JustifyContent::FlexStart => Self::Start,
            JustifyContent::FlexEnd => Self::End,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for Packing {
    /// `stretch` grows the lines themselves and then packs them at the start.
    fn from(value: AlignContent) -> Self {
        match value {
            AlignContent::FlexStart | AlignContent::Stretch => Self::Start,
            AlignContent::FlexEnd => Self::End,
            AlignContent::Center => Self::Center,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
        }
    }
}

/// Slack split into `count + 1` slots: before the first entry, between entries, after the last.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlackDistribution {
    slots: Vec<i32>,
}

impl SlackDistribution {
    /// Space before the first entry.
    #[inline]
    pub fn leading(&self) -> i32 {
        self.slots.first().copied().unwrap_or(0)
    }

    /// Space after the entry at `position`, before the next one.
    #[inline]
    pub fn after(&self, position: usize) -> i32 {
        self.slots.get(position + 1).copied().unwrap_or(0)
    }

    /// All slots, leading first.
    #[inline]
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }
}

/// Distribute `slack` around `count` entries.
///
/// Integer remainders go to the earliest slots. Negative slack falls back per CSS:
/// `space-between` packs at start, `space-around`/`space-evenly` center.
pub fn distribute_slack(packing: Packing, slack: i32, count: usize) -> SlackDistribution {
    let mut slots = vec![0; count + 1];
    let packing = match packing {
        Packing::SpaceBetween if slack < 0 || count < 2 => Packing::Start,
        Packing::SpaceAround | Packing::SpaceEvenly if slack < 0 => Packing::Center,
        other => other,
    };
    let last = slots.len() - 1;
    match packing {
        Packing::Start => slots[last] = slack,
        Packing::End => slots[0] = slack,
        Packing::Center => {
            let leading = slack.div_euclid(2);
            slots[0] = leading;
            slots[last] += slack - leading;
        }
        Packing::SpaceBetween => {
            let weights: Vec<i32> = (0..=count)
                .map(|slot| i32::from(slot != 0 && slot != count))
                .collect();
            slots = distribute_weighted(slack, &weights);
        }
        Packing::SpaceAround => {
            let weights: Vec<i32> = (0..=count)
                .map(|slot| if slot == 0 || slot == count { 1 } else { 2 })
                .collect();
            slots = distribute_weighted(slack, &weights);
        }
        Packing::SpaceEvenly => {
            slots = distribute_weighted(slack, &vec![1; count + 1]);
        }
    }
    SlackDistribution { slots }
}

/// Split a non-negative `slack` proportionally to `weights`, remainders to the earliest
/// weighted slots.
fn distribute_weighted(slack: i32, weights: &[i32]) -> Vec<i32> {
    let total: i64 = weights.iter().map(|&weight| i64::from(weight)).sum();
    if total <= 0 {
        let mut slots = vec![0; weights.len()];
        if let Some(last) = slots.last_mut() {
            *last = slack;
        }
        return slots;
    }
    let mut slots: Vec<i32> = weights
        .iter()
        .map(|&weight| (i64::from(slack) * i64::from(weight) / total) as i32)
        .collect();
    let mut remainder = slack - slots.iter().sum::<i32>();
    for (slot, &weight) in slots.iter_mut().zip(weights) {
        if remainder <= 0 {
            break;
        }
        if weight > 0 {
            *slot += 1;
            remainder -= 1;
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `auto` does not defer to the container.
    fn align_self_auto_defers() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(
            AlignSelf::Stretch.resolve(AlignItems::Center),
            AlignItems::Stretch
        );
    }

    #[test]
    /// # Panics
    /// Panics if start/end/center do not place slack at the expected slots.
    fn start_end_center() {
        assert_eq!(distribute_slack(Packing::Start, 10, 2).slots(), &[0, 0, 10]);
        assert_eq!(distribute_slack(Packing::End, 10, 2).slots(), &[10, 0, 0]);
        assert_eq!(distribute_slack(Packing::Center, 11, 2).slots(), &[5, 0, 6]);
    }

    #[test]
    /// # Panics
    /// Panics if space-around does not use half units at the ends with remainders first.
    fn space_around_remainder_goes_first() {
        let spacing = distribute_slack(Packing::SpaceAround, 100, 3);
        assert_eq!(spacing.slots(), &[17, 34, 33, 16]);
        assert_eq!(spacing.slots().iter().sum::<i32>(), 100);
    }

    #[test]
    /// # Panics
    /// Panics if space-between/evenly deviate from their slot layout.
    fn space_between_and_evenly() {
        assert_eq!(
            distribute_slack(Packing::SpaceBetween, 10, 3).slots(),
            &[0, 5, 5, 0]
        );
        assert_eq!(
            distribute_slack(Packing::SpaceBetween, 10, 1).slots(),
            &[0, 10]
        );
        assert_eq!(
            distribute_slack(Packing::SpaceEvenly, 10, 3).slots(),
            &[3, 3, 2, 2]
        );
    }

    #[test]
    /// # Panics
    /// Panics if negative slack does not fall back to start/center.
    fn negative_slack_fallbacks() {
        assert_eq!(distribute_slack(Packing::SpaceBetween, -10, 3).leading(), 0);
        assert_eq!(distribute_slack(Packing::SpaceAround, -10, 3).leading(), -5);
        assert_eq!(distribute_slack(Packing::SpaceEvenly, -9, 2).leading(), -5);
        assert_eq!(distribute_slack(Packing::End, -4, 2).leading(), -4);
    }
}
