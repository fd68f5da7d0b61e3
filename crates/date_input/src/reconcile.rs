//! Keeps the selected day consistent with the selected month, year and weekday constraints.

use crate::{DayConstraints, SelectionState, calendar};

/// Days shown by the day selector while no month is selected.
pub const MAX_DAYS_IN_MONTH: u32 = 31;

/// Length of the selected month, falling back to `default_year` while no year is set.
///
/// Without a month every day up to 31 is offered.
pub fn days_in_selected_month(selection: &SelectionState, default_year: i32) -> u32 {
    let Some(month) = selection.month else {
        return MAX_DAYS_IN_MONTH;
    };
    let year = selection.year.unwrap_or(default_year);
    calendar::days_in_month(year, month).unwrap_or(MAX_DAYS_IN_MONTH)
}

/// Ascending list of the selectable day numbers for the selected month.
///
/// Weekday filtering needs a concrete month, so without one (or without any
/// constraint) every day `1..=N` is available.
pub fn available_days(
    selection: &SelectionState,
    constraints: DayConstraints,
    default_year: i32,
) -> Vec<u32> {
    let days_in_month = days_in_selected_month(selection, default_year);
    let all_days = 1..=days_in_month;

    let Some(month) = selection.month else {
        return all_days.collect();
    };
    if constraints.is_empty() {
        return all_days.collect();
    }

    let year = selection.year.unwrap_or(default_year);
    all_days
        .filter(|&day| {
            calendar::weekday_of(year, month, day)
                .is_some_and(|weekday| constraints.allows(weekday))
        })
        .collect()
}

/// The available day closest to `day`. Ties go to the lower day number.
pub fn closest_available_day(day: u32, available: &[u32]) -> Option<u32> {
    // `min_by_key` keeps the first of several equal keys, and `available` is ascending.
    available
        .iter()
        .copied()
        .min_by_key(|candidate| candidate.abs_diff(day))
}

/// What [`relocate_if_invalid`] did to the selected day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// No day selected, or the selected day is available.
    Unchanged,

    /// The day was moved to the nearest available day.
    Moved { from: u32, to: u32 },

    /// No day of the month is available; the day was unset.
    Cleared { from: u32 },
}

/// Move an unavailable selected day to the nearest available one.
pub fn relocate_if_invalid(
    selection: &mut SelectionState,
    constraints: DayConstraints,
    default_year: i32,
) -> Relocation {
    let Some(day) = selection.day else {
        return Relocation::Unchanged;
    };

    let available = available_days(selection, constraints, default_year);
    if available.contains(&day) {
        return Relocation::Unchanged;
    }

    match closest_available_day(day, &available) {
        Some(to) => {
            selection.day = Some(to);
            Relocation::Moved { from: day, to }
        }
        None => {
            selection.day = None;
            Relocation::Cleared { from: day }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn march_2024(day: Option<u32>) -> SelectionState {
        SelectionState {
            day,
            month: Some(2),
            year: Some(2024),
            hour: 0,
            minute: 0,
        }
    }

    #[test]
    fn available_days_are_ascending_and_bounded() {
        let weekdays = [
            DayConstraints::NONE,
            DayConstraints::from_indices([0]),
            DayConstraints::from_indices([1, 3, 5]),
            DayConstraints::from_indices([0, 1, 2, 3, 4, 5, 6]),
        ];
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let selection = SelectionState {
                    month: Some(month),
                    year: Some(year),
                    ..Default::default()
                };
                let length = calendar::days_in_month(year, month).expect("valid month");

                for constraints in weekdays {
                    let days = available_days(&selection, constraints, 2000);
                    assert!(
                        days.windows(2).all(|pair| pair[0] < pair[1]),
                        "{year}-{month}: {days:?} is not strictly ascending"
                    );
                    assert!(days.iter().all(|day| (1..=length).contains(day)));
                    if constraints.is_empty() {
                        assert_eq!(days.len() as u32, length);
                        assert_eq!(days.first(), Some(&1));
                    }
                }
            }
        }
    }

    #[test]
    fn leap_february() {
        let mut selection = SelectionState {
            month: Some(1),
            year: Some(2024),
            ..Default::default()
        };
        assert_eq!(available_days(&selection, DayConstraints::NONE, 2024).len(), 29);
        selection.year = Some(2023);
        assert_eq!(available_days(&selection, DayConstraints::NONE, 2024).len(), 28);
    }

    #[test]
    fn missing_year_uses_default_year() {
        let selection = SelectionState {
            month: Some(1),
            year: None,
            ..Default::default()
        };
        assert_eq!(days_in_selected_month(&selection, 2024), 29);
        assert_eq!(days_in_selected_month(&selection, 2023), 28);
    }

    #[test]
    fn no_month_means_no_filtering() {
        let selection = SelectionState::default();
        let constraints = DayConstraints::from_indices([1]);
        assert_eq!(
            available_days(&selection, constraints, 2024),
            (1..=31).collect::<Vec<_>>()
        );
    }

    #[test]
    fn mon_wed_fri_in_march_2024() {
        let constraints = DayConstraints::from_indices([1, 3, 5]);
        assert_eq!(
            available_days(&march_2024(None), constraints, 2024),
            vec![1, 4, 6, 8, 11, 13, 15, 18, 20, 22, 25, 27, 29]
        );
    }

    #[test]
    fn relocates_saturday_to_nearest_friday() {
        let constraints = DayConstraints::from_indices([1, 3, 5]);
        let mut selection = march_2024(Some(2));

        let relocation = relocate_if_invalid(&mut selection, constraints, 2024);

        assert_eq!(relocation, Relocation::Moved { from: 2, to: 1 });
        assert_eq!(selection.day, Some(1));
    }

    #[test]
    fn tie_prefers_lower_day() {
        assert_eq!(closest_available_day(5, &[4, 6]), Some(4));
        assert_eq!(closest_available_day(7, &[4, 6, 8]), Some(6));
        assert_eq!(closest_available_day(31, &[1, 29]), Some(29));
        assert_eq!(closest_available_day(3, &[]), None);
    }

    #[test]
    fn available_day_is_left_alone() {
        let constraints = DayConstraints::from_indices([1, 3, 5]);
        let mut selection = march_2024(Some(4));
        let before = selection;

        assert_eq!(
            relocate_if_invalid(&mut selection, constraints, 2024),
            Relocation::Unchanged
        );
        assert_eq!(selection, before);
    }

    #[test]
    fn unset_day_is_left_alone() {
        let constraints = DayConstraints::from_indices([0]);
        let mut selection = march_2024(None);
        assert_eq!(
            relocate_if_invalid(&mut selection, constraints, 2024),
            Relocation::Unchanged
        );
        assert_eq!(selection.day, None);
    }

    #[test]
    fn relocation_is_nearest_for_every_day() {
        let constraints = DayConstraints::from_indices([2, 6]);
        for month in 0..12 {
            let base = SelectionState {
                month: Some(month),
                year: Some(2025),
                ..Default::default()
            };
            let available = available_days(&base, constraints, 2025);
            let length = days_in_selected_month(&base, 2025);

            for day in 1..=length {
                let mut selection = SelectionState {
                    day: Some(day),
                    ..base
                };
                let relocation = relocate_if_invalid(&mut selection, constraints, 2025);
                let picked = selection.day.expect("some day is always available");
                assert!(available.contains(&picked));

                let best = available
                    .iter()
                    .map(|candidate| candidate.abs_diff(day))
                    .min()
                    .expect("non-empty");
                assert_eq!(picked.abs_diff(day), best);
                if available.contains(&day) {
                    assert_eq!(relocation, Relocation::Unchanged);
                } else {
                    assert_eq!(relocation, Relocation::Moved { from: day, to: picked });
                    let lower = day.checked_sub(best).filter(|d| available.contains(d));
                    if let Some(lower) = lower {
                        assert_eq!(picked, lower, "ties go to the lower day");
                    }
                }
            }
        }
    }

    #[test]
    fn day_beyond_month_end_is_pulled_back() {
        let mut selection = SelectionState {
            day: Some(29),
            month: Some(1),
            year: Some(2023),
            ..Default::default()
        };
        assert_eq!(
            relocate_if_invalid(&mut selection, DayConstraints::NONE, 2023),
            Relocation::Moved { from: 29, to: 28 }
        );
    }
}
