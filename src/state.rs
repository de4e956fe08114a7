use crate::catalog::FEATURED_WORKOUT;
use crate::plan::{self, DAYS_PER_WEEK, WEEKS};
use crate::types::{AppView, AthleteProfile, BaselineField, Equipment, Goal, Level, PlanEntry};

pub const ONBOARDING_STEPS: u8 = 3;

/// Everything the screens render from. Overlay flags are independent; only one is
/// expected open at a time but nothing here enforces it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub view: AppView,
    pub onboarding_open: bool,
    pub player_open: bool,
    pub coach_open: bool,
    pub plan: Vec<PlanEntry>,
    pub workout_id: String,
    pub onboarding_step: u8,
    pub profile: AthleteProfile,
    pub plan_week: u8,
    pub plan_day: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SelectTab(AppView),
    OpenPlayer(String),
    ClosePlayer,
    OpenCoach,
    CloseCoach,
    OnboardingNext,
    OnboardingBack,
    SetGoal(Goal),
    SetLevel(Level),
    ToggleEquipment(Equipment),
    SetBaseline(BaselineField, String),
    CompleteOnboarding,
    SelectPlanWeek(u8),
    SelectPlanDay(usize),
    ResetPlan,
}

/// Side effects for the controller to run against the plan store.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PersistPlan(Vec<PlanEntry>),
    ClearPlan,
}

impl AppState {
    /// Startup state: onboarding opens when nothing was stored.
    pub fn new(stored: Option<Vec<PlanEntry>>) -> Self {
        let onboarding_open = stored.is_none();
        Self {
            view: AppView::Home,
            onboarding_open,
            player_open: false,
            coach_open: false,
            plan: stored.unwrap_or_else(plan::build_four_week_plan),
            workout_id: FEATURED_WORKOUT.to_string(),
            onboarding_step: 0,
            profile: AthleteProfile::default(),
            plan_week: 1,
            plan_day: 0,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::SelectTab(view) => self.view = view,
            Intent::OpenPlayer(workout_id) => {
                self.workout_id = workout_id;
                self.player_open = true;
            }
            Intent::ClosePlayer => self.player_open = false,
            Intent::OpenCoach => self.coach_open = true,
            Intent::CloseCoach => self.coach_open = false,
            Intent::OnboardingNext => {
                if self.onboarding_step + 1 < ONBOARDING_STEPS {
                    self.onboarding_step += 1;
                }
            }
            Intent::OnboardingBack => {
                if self.onboarding_step > 0 {
                    self.onboarding_step -= 1;
                } else {
                    log::info!("onboarding skipped");
                    self.onboarding_open = false;
                }
            }
            Intent::SetGoal(goal) => self.profile.goal = goal,
            Intent::SetLevel(level) => self.profile.level = level,
            Intent::ToggleEquipment(item) => self.profile.toggle_equipment(item),
            Intent::SetBaseline(field, value) => self.profile.baseline.set(field, value),
            Intent::CompleteOnboarding => {
                self.plan = plan::build_four_week_plan();
                self.onboarding_open = false;
                self.onboarding_step = 0;
                self.view = AppView::Plan;
                self.plan_week = 1;
                self.plan_day = 0;
                log::info!(
                    "plan created for {} ({})",
                    self.profile.goal.label(),
                    self.profile.level.label()
                );
                return Some(Effect::PersistPlan(self.plan.clone()));
            }
            Intent::SelectPlanWeek(week) => {
                self.plan_week = week.clamp(1, WEEKS);
                self.plan_day = 0;
            }
            Intent::SelectPlanDay(day) => self.plan_day = day.min(DAYS_PER_WEEK as usize - 1),
            Intent::ResetPlan => {
                self.onboarding_open = true;
                self.onboarding_step = 0;
                return Some(Effect::ClearPlan);
            }
        }
        None
    }

    pub fn is_last_onboarding_step(&self) -> bool {
        self.onboarding_step + 1 >= ONBOARDING_STEPS
    }

    /// Workout the player overlay should show, if it is open.
    pub fn playing(&self) -> Option<&str> {
        self.player_open.then_some(self.workout_id.as_str())
    }

    /// Entry shown under the Plan screen's day selector.
    pub fn selected_plan_entry(&self) -> Option<&PlanEntry> {
        let index = (self.plan_week as usize - 1) * DAYS_PER_WEEK as usize + self.plan_day;
        plan::entry_for_day(&self.plan, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboarded() -> AppState {
        AppState::new(Some(plan::build_four_week_plan()))
    }

    #[test]
    fn missing_plan_opens_onboarding_with_generated_plan() {
        let state = AppState::new(None);
        assert!(state.onboarding_open);
        assert_eq!(state.plan.len(), 28);
        assert_eq!(state.view, AppView::Home);
    }

    #[test]
    fn stored_plan_skips_onboarding() {
        let mut stored = plan::build_four_week_plan();
        stored.truncate(7);
        let state = AppState::new(Some(stored.clone()));
        assert!(!state.onboarding_open);
        assert_eq!(state.plan, stored);
    }

    #[test]
    fn switching_tabs_keeps_overlays() {
        let mut state = onboarded();
        state.apply(Intent::OpenCoach);
        state.apply(Intent::OpenPlayer("row-intervals".to_string()));
        for view in AppView::ALL {
            assert_eq!(state.apply(Intent::SelectTab(view)), None);
            assert_eq!(state.view, view);
            assert!(state.coach_open);
            assert!(state.player_open);
            assert!(!state.onboarding_open);
        }
    }

    #[test]
    fn overlays_are_not_mutually_exclusive() {
        let mut state = AppState::new(None);
        state.apply(Intent::OpenPlayer(FEATURED_WORKOUT.to_string()));
        state.apply(Intent::OpenCoach);
        assert!(state.onboarding_open && state.player_open && state.coach_open);
        state.apply(Intent::ClosePlayer);
        assert!(!state.player_open);
        assert!(state.coach_open);
    }

    #[test]
    fn opening_another_workout_replaces_the_playing_one() {
        let mut state = onboarded();
        assert_eq!(state.playing(), None);
        state.apply(Intent::OpenPlayer(FEATURED_WORKOUT.to_string()));
        assert_eq!(state.playing(), Some(FEATURED_WORKOUT));
        state.apply(Intent::OpenPlayer("row-intervals".to_string()));
        assert!(state.player_open);
        assert_eq!(state.playing(), Some("row-intervals"));
        state.apply(Intent::ClosePlayer);
        assert_eq!(state.playing(), None);
    }

    #[test]
    fn completing_onboarding_persists_and_shows_plan() {
        let mut state = AppState::new(None);
        state.apply(Intent::OnboardingNext);
        state.apply(Intent::OnboardingNext);
        assert!(state.is_last_onboarding_step());
        let effect = state.apply(Intent::CompleteOnboarding);
        assert_eq!(effect, Some(Effect::PersistPlan(plan::build_four_week_plan())));
        assert!(!state.onboarding_open);
        assert_eq!(state.view, AppView::Plan);
        assert_eq!(state.onboarding_step, 0);
    }

    #[test]
    fn back_on_first_step_skips_without_saving() {
        let mut state = AppState::new(None);
        state.apply(Intent::OnboardingNext);
        assert_eq!(state.apply(Intent::OnboardingBack), None);
        assert_eq!(state.onboarding_step, 0);
        assert!(state.onboarding_open);
        assert_eq!(state.apply(Intent::OnboardingBack), None);
        assert!(!state.onboarding_open);
        assert_eq!(state.view, AppView::Home);
    }

    #[test]
    fn next_stops_at_last_step() {
        let mut state = AppState::new(None);
        for _ in 0..10 {
            state.apply(Intent::OnboardingNext);
        }
        assert_eq!(state.onboarding_step, ONBOARDING_STEPS - 1);
    }

    #[test]
    fn onboarding_answers_land_in_profile() {
        let mut state = AppState::new(None);
        state.apply(Intent::SetGoal(Goal::Strength));
        state.apply(Intent::SetLevel(Level::Advanced));
        state.apply(Intent::ToggleEquipment(Equipment::Bike));
        state.apply(Intent::SetBaseline(BaselineField::Row500m, "1:55".to_string()));
        assert_eq!(state.profile.goal, Goal::Strength);
        assert_eq!(state.profile.level, Level::Advanced);
        assert!(!state.profile.has_equipment(Equipment::Bike));
        assert_eq!(state.profile.baseline.row_500m, "1:55");
    }

    #[test]
    fn plan_selection_picks_week_and_day() {
        let mut state = onboarded();
        assert_eq!(state.selected_plan_entry().unwrap().id, "w1d1");
        state.apply(Intent::SelectPlanWeek(3));
        state.apply(Intent::SelectPlanDay(4));
        assert_eq!(state.selected_plan_entry().unwrap().id, "w3d5");
        state.apply(Intent::SelectPlanWeek(9));
        assert_eq!(state.plan_week, WEEKS);
        assert_eq!(state.plan_day, 0);
    }

    #[test]
    fn short_stored_plan_wraps_selection() {
        let mut stored = plan::build_four_week_plan();
        stored.truncate(7);
        let mut state = AppState::new(Some(stored));
        state.apply(Intent::SelectPlanWeek(2));
        state.apply(Intent::SelectPlanDay(1));
        assert_eq!(state.selected_plan_entry().unwrap().id, "w1d2");
    }

    #[test]
    fn reset_reopens_onboarding_and_clears_store() {
        let mut state = onboarded();
        assert_eq!(state.apply(Intent::ResetPlan), Some(Effect::ClearPlan));
        assert!(state.onboarding_open);
        assert_eq!(state.onboarding_step, 0);
    }
}
