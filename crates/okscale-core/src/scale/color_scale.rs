//! The generated scale: step → device color.

use std::collections::BTreeMap;

use super::step::ScaleStep;
use crate::color::DeviceColor;

/// Mapping from every requested step to its device color.
///
/// Lookup is by step value. Iteration runs in ascending step order, which is
/// a convenience for output, not part of the contract.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ColorScale {
    colors: BTreeMap<ScaleStep, DeviceColor>,
}

impl ColorScale {
    /// Color at `step`, if that step was requested.
    #[inline]
    pub fn get(&self, step: u16) -> Option<DeviceColor> {
        ScaleStep::new(step).and_then(|s| self.colors.get(&s).copied())
    }

    /// Number of steps in the scale.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the scale holds no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Steps in ascending order.
    pub fn steps(&self) -> impl Iterator<Item = ScaleStep> + '_ {
        self.colors.keys().copied()
    }

    /// `(step, color)` pairs in ascending step order.
    pub fn iter(&self) -> impl Iterator<Item = (ScaleStep, DeviceColor)> + '_ {
        self.colors.iter().map(|(s, c)| (*s, *c))
    }

    pub(crate) fn insert(&mut self, step: ScaleStep, color: DeviceColor) {
        self.colors.insert(step, color);
    }
}

impl FromIterator<(ScaleStep, DeviceColor)> for ColorScale {
    fn from_iter<I: IntoIterator<Item = (ScaleStep, DeviceColor)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
