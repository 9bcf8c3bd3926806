// --- File: crates/services/commune_app/src/app_state.rs ---
use std::sync::Arc;

use commune_auth::SessionContext;
use commune_calendar::{CalendarController, CalendarDate, CalendarZone};
use commune_config::AppConfig;
use commune_workouts::{load_workout_view, WorkoutView};

use crate::service_factory::CommuneServiceFactory;

/// Everything the shell works on, created once at start-up.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<CommuneServiceFactory>,
    pub session: SessionContext,
    pub calendar: CalendarController,
    zone: CalendarZone,
    today: CalendarDate,
    workout: Option<WorkoutView>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        services: Arc<CommuneServiceFactory>,
        zone: CalendarZone,
        today: CalendarDate,
    ) -> Self {
        let session = SessionContext::new(services.auth(), services.profiles());
        let calendar = CalendarController::new(today, &config.calendar);
        Self {
            config,
            services,
            session,
            calendar,
            zone,
            today,
            workout: None,
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Re-reads today's date from the configured zone, e.g. after midnight.
    pub fn refresh_today(&mut self) {
        self.today = self.zone.today();
    }

    /// The last loaded workout view, if any.
    pub fn workout(&self) -> Option<&WorkoutView> {
        self.workout.as_ref()
    }

    /// Loads the workout for the currently selected day.
    pub async fn reload_workout(&mut self) -> &WorkoutView {
        let source = self.services.workouts();
        let selected = self.calendar.state().selected();
        let view = load_workout_view(source.as_ref(), selected, self.today).await;
        self.workout.insert(view)
    }
}
