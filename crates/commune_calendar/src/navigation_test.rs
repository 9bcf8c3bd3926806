#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::date::CalendarDate;
    use crate::navigation::{NavigationOutcome, NavigationPhase, WeekNavigator, DEFAULT_COOLDOWN};
    use crate::selection::{Direction, SelectionState};
    use commune_config::CalendarConfig;

    fn d(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_advance_week_moves_and_starts_cooldown() {
        let mut navigator = WeekNavigator::default();
        let mut state = SelectionState::new(d(2024, 4, 3));
        let t0 = Instant::now();

        let outcome = navigator.advance_week(&mut state, Direction::Forward, t0);

        assert_eq!(
            outcome,
            NavigationOutcome::Moved {
                anchor: state.anchor(),
                selected: d(2024, 4, 10),
            }
        );
        assert_eq!(state.anchor().date(), d(2024, 4, 7));
        assert_eq!(
            navigator.settle(t0),
            NavigationPhase::Navigating {
                until: t0 + DEFAULT_COOLDOWN
            }
        );
    }

    #[test]
    fn test_second_swipe_during_cooldown_is_dropped() {
        let mut navigator = WeekNavigator::default();
        let mut state = SelectionState::new(d(2024, 4, 3));
        let t0 = Instant::now();

        navigator.advance_week(&mut state, Direction::Forward, t0);
        let snapshot = state;

        let outcome = navigator.advance_week(
            &mut state,
            Direction::Forward,
            t0 + Duration::from_millis(120),
        );

        assert_eq!(
            outcome,
            NavigationOutcome::Busy {
                remaining: Duration::from_millis(180)
            }
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_navigation_allowed_again_after_cooldown() {
        let mut navigator = WeekNavigator::default();
        let mut state = SelectionState::new(d(2024, 4, 3));
        let t0 = Instant::now();

        navigator.advance_week(&mut state, Direction::Forward, t0);
        let after_cooldown = t0 + DEFAULT_COOLDOWN;

        assert_eq!(navigator.settle(after_cooldown), NavigationPhase::Idle);
        let outcome = navigator.advance_week(&mut state, Direction::Back, after_cooldown);

        assert!(matches!(outcome, NavigationOutcome::Moved { .. }));
        assert_eq!(state.anchor().date(), d(2024, 3, 31));
        assert_eq!(state.selected(), d(2024, 4, 3));
    }

    #[test]
    fn test_rejected_move_does_not_start_cooldown() {
        let mut navigator = WeekNavigator::default();
        let mut state = SelectionState::new(d(9999, 12, 31));
        let t0 = Instant::now();

        let outcome = navigator.advance_week(&mut state, Direction::Forward, t0);

        assert!(matches!(outcome, NavigationOutcome::Rejected(_)));
        assert_eq!(navigator.settle(t0), NavigationPhase::Idle);
        assert_eq!(state.selected(), d(9999, 12, 31));
    }

    #[test]
    fn test_cooldown_from_config() {
        let config = CalendarConfig {
            cooldown_ms: 50,
            ..CalendarConfig::default()
        };
        let mut navigator = WeekNavigator::from_config(&config);
        let mut state = SelectionState::new(d(2024, 4, 3));
        let t0 = Instant::now();

        assert_eq!(navigator.cooldown(), Duration::from_millis(50));
        navigator.advance_week(&mut state, Direction::Forward, t0);
        let outcome = navigator.advance_week(
            &mut state,
            Direction::Forward,
            t0 + Duration::from_millis(60),
        );
        assert!(matches!(outcome, NavigationOutcome::Moved { .. }));
        assert_eq!(state.selected(), d(2024, 4, 17));
    }
}
