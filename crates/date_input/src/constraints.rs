use std::fmt;

use chrono::Weekday;

use crate::calendar::{WEEKDAYS_FROM_SUNDAY, weekday_from_index, weekday_index};

/// The weekdays a selected date is allowed to fall on.
///
/// An empty set means "no constraint": every day is allowed.
///
/// This is a small `Copy` value, so every change produces a new set and a set
/// handed to a child display can never be edited behind its back.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DayConstraints {
    /// Bit `i` set = weekday index `i` (Sunday = 0) allowed.
    bits: u8,
}

impl DayConstraints {
    /// No constraint.
    pub const NONE: Self = Self { bits: 0 };

    /// Build from Sunday based weekday indices. Indices above `6` are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        indices
            .into_iter()
            .filter_map(|index| {
                let weekday = weekday_from_index(index);
                if weekday.is_none() {
                    log::warn!("Ignoring weekday index {index}, expected 0..=6");
                }
                weekday
            })
            .collect()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.bits & Self::bit(weekday) != 0
    }

    /// `true` if a day on `weekday` may be selected under this set.
    #[inline]
    pub fn allows(self, weekday: Weekday) -> bool {
        self.is_empty() || self.contains(weekday)
    }

    #[must_use]
    #[inline]
    pub fn with(self, weekday: Weekday) -> Self {
        Self {
            bits: self.bits | Self::bit(weekday),
        }
    }

    #[must_use]
    #[inline]
    pub fn without(self, weekday: Weekday) -> Self {
        Self {
            bits: self.bits & !Self::bit(weekday),
        }
    }

    /// The set after a weekday checkbox was switched to `checked`.
    #[must_use]
    pub fn toggled(self, weekday: Weekday, checked: bool) -> Self {
        if checked {
            self.with(weekday)
        } else {
            self.without(weekday)
        }
    }

    /// Allowed weekdays, Sunday first.
    pub fn weekdays(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS_FROM_SUNDAY
            .into_iter()
            .filter(move |weekday| self.contains(*weekday))
    }

    /// Allowed Sunday based weekday indices, ascending.
    pub fn indices(self) -> impl Iterator<Item = u8> {
        self.weekdays().map(weekday_index)
    }

    #[inline]
    fn bit(weekday: Weekday) -> u8 {
        1 << weekday_index(weekday)
    }
}

impl FromIterator<Weekday> for DayConstraints {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl fmt::Debug for DayConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.weekdays()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allows_everything() {
        let none = DayConstraints::default();
        assert!(none.is_empty());
        assert_eq!(none.len(), 0);
        assert!(WEEKDAYS_FROM_SUNDAY.iter().all(|w| none.allows(*w)));
        assert!(WEEKDAYS_FROM_SUNDAY.iter().all(|w| !none.contains(*w)));
    }

    #[test]
    fn toggling_returns_new_sets() {
        let before = DayConstraints::from_indices([1, 3]);
        let after = before.toggled(Weekday::Fri, true);

        assert_eq!(before.indices().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(after.indices().collect::<Vec<_>>(), vec![1, 3, 5]);

        let removed = after.toggled(Weekday::Mon, false);
        assert_eq!(removed.indices().collect::<Vec<_>>(), vec![3, 5]);
        assert!(removed.allows(Weekday::Wed));
        assert!(!removed.allows(Weekday::Mon));
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let set = DayConstraints::from_indices([0, 6, 7, 200]);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.weekdays().collect::<Vec<_>>(),
            vec![Weekday::Sun, Weekday::Sat]
        );
    }

    #[test]
    fn debug_lists_weekdays() {
        let set: DayConstraints = [Weekday::Wed, Weekday::Mon].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{Mon, Wed}");
    }
}
