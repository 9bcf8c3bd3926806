#[cfg(test)]
mod tests {
    use crate::date::{first_of_month, month_grid, week_anchor_of, week_days, CalendarDate};
    use crate::selection::{Direction, SelectionState};
    use chrono::{Duration, NaiveDate, Weekday};
    use proptest::prelude::*;

    // Dates between 1900 and 2200, away from the edges of the supported range
    fn arb_date() -> impl Strategy<Value = CalendarDate> {
        (0i64..110_000).prop_map(|offset| {
            let base = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid base date");
            CalendarDate::new(base + Duration::days(offset)).expect("date within range")
        })
    }

    proptest! {
        // The anchor is always the Sunday on or before the date
        #[test]
        fn test_anchor_is_sunday_within_same_week(date in arb_date()) {
            let anchor = week_anchor_of(date).date();
            prop_assert_eq!(anchor.weekday(), Weekday::Sun);

            let diff = (date.naive() - anchor.naive()).num_days();
            prop_assert!((0..7).contains(&diff));
            prop_assert_eq!(diff, i64::from(date.days_from_sunday()));
        }

        // Week days are seven consecutive dates and contain the input date
        #[test]
        fn test_week_days_are_consecutive(date in arb_date()) {
            let days = week_days(week_anchor_of(date));
            for pair in days.windows(2) {
                prop_assert_eq!((pair[1].naive() - pair[0].naive()).num_days(), 1);
            }
            prop_assert!(days.contains(&date));
        }

        // Forward then back returns to the starting state, and the selection
        // always stays inside the visible strip
        #[test]
        fn test_week_shift_round_trip(date in arb_date(), weeks in 1usize..8) {
            let start = SelectionState::new(date);
            let mut state = start;

            for _ in 0..weeks {
                state.shift_week(Direction::Forward).unwrap();
                prop_assert!(state.visible_week().contains(&state.selected()));
                prop_assert_eq!(
                    state.selected().days_from_sunday(),
                    date.days_from_sunday()
                );
            }
            for _ in 0..weeks {
                state.shift_week(Direction::Back).unwrap();
            }

            prop_assert_eq!(state.selected(), start.selected());
            prop_assert_eq!(state.anchor(), start.anchor());
        }

        // Grid length is leading blanks plus days in month, ending on the last day
        #[test]
        fn test_month_grid_shape(date in arb_date()) {
            let month = first_of_month(date);
            let grid = month_grid(month);
            let blanks = month.leading_blanks() as usize;

            prop_assert_eq!(grid.len(), blanks + month.days_in_month() as usize);
            prop_assert!(grid[..blanks].iter().all(|cell| cell.is_none()));
            prop_assert_eq!(grid[blanks], Some(month.date()));

            let last = grid.last().copied().flatten().unwrap();
            prop_assert_eq!(last.month(), month.month());
            prop_assert!(last.shift_days(1).unwrap().month() != month.month());
        }

        // Picking from the grid selects the date, moves the strip onto it
        // and closes the picker
        #[test]
        fn test_pick_from_month_grid_postconditions(today in arb_date(), picked in arb_date()) {
            let mut state = SelectionState::new(today);
            state.open_picker();

            state.pick_from_month_grid(picked);

            prop_assert_eq!(state.selected(), picked);
            prop_assert_eq!(state.anchor(), week_anchor_of(picked));
            prop_assert_eq!(state.picker_month(), first_of_month(picked));
            prop_assert!(!state.is_picker_open());
        }
    }
}
