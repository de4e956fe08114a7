use serde::{Deserialize, Serialize};

/// One scheduled day of the four-week plan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    pub id: String,
    pub day: u8,
    pub week: u8,
    pub title: String,
    pub focus: String,
    pub duration: u32,
    pub kcal: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Prep,
    Amrap,
    Finisher,
}

impl SegmentKind {
    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::Prep => "Warm-up",
            SegmentKind::Amrap => "Main set",
            SegmentKind::Finisher => "Finisher",
        }
    }
}

/// One timed block of a guided workout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub title: String,
    pub details: String,
    pub seconds: u32,
}

impl Segment {
    pub fn new(kind: SegmentKind, title: &str, details: &str, seconds: u32) -> Self {
        Self {
            kind,
            title: title.to_string(),
            details: details.to_string(),
            seconds,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDefinition {
    pub id: String,
    pub name: String,
    pub blocks: Vec<Segment>,
}

impl WorkoutDefinition {
    pub fn total_seconds(&self) -> u32 {
        self.blocks.iter().map(|b| b.seconds).sum()
    }
}

/// A row on the Train screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainItem {
    pub workout_id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub minutes: u32,
}

/// Planned load for one week of the plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekSummary {
    pub week: u8,
    pub sessions: usize,
    pub minutes: u32,
    pub kcal: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Train,
    Plan,
    Progress,
    Social,
    Profile,
}

impl AppView {
    pub const ALL: [AppView; 6] = [
        AppView::Home,
        AppView::Train,
        AppView::Plan,
        AppView::Progress,
        AppView::Social,
        AppView::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Train => "Train",
            AppView::Plan => "Plan",
            AppView::Progress => "Progress",
            AppView::Social => "Community",
            AppView::Profile => "Profile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    Athletic,
    Strength,
    Conditioning,
    Hybrid,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Athletic, Goal::Strength, Goal::Conditioning, Goal::Hybrid];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Athletic => "CrossFit/athletic",
            Goal::Strength => "Strength",
            Goal::Conditioning => "Conditioning/HIIT",
            Goal::Hybrid => "Hybrid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Equipment {
    Rower,
    Bike,
    Barbell,
    Dumbbells,
    PullUpBar,
    DipStation,
}

impl Equipment {
    pub const ALL: [Equipment; 6] = [
        Equipment::Rower,
        Equipment::Bike,
        Equipment::Barbell,
        Equipment::Dumbbells,
        Equipment::PullUpBar,
        Equipment::DipStation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Equipment::Rower => "Rower",
            Equipment::Bike => "Bike",
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::PullUpBar => "Pull-up bar",
            Equipment::DipStation => "Dip station",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineField {
    Squat5x5,
    Row500m,
    MaxChins,
    Burpees3Min,
}

impl BaselineField {
    pub const ALL: [BaselineField; 4] = [
        BaselineField::Squat5x5,
        BaselineField::Row500m,
        BaselineField::MaxChins,
        BaselineField::Burpees3Min,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BaselineField::Squat5x5 => "Squat 5×5 (kg)",
            BaselineField::Row500m => "Row 500m (min:sec)",
            BaselineField::MaxChins => "Max chin-ups",
            BaselineField::Burpees3Min => "Burpees in 3 min",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BaselineField::Squat5x5 => "e.g. 70",
            BaselineField::Row500m => "e.g. 1:55",
            BaselineField::MaxChins => "e.g. 8",
            BaselineField::Burpees3Min => "e.g. 42",
        }
    }
}

/// Self-reported fitness test, kept as typed so the form can echo it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Baseline {
    pub squat_5x5: String,
    pub row_500m: String,
    pub max_chins: String,
    pub burpees_3min: String,
}

impl Baseline {
    pub fn get(&self, field: BaselineField) -> &str {
        match field {
            BaselineField::Squat5x5 => &self.squat_5x5,
            BaselineField::Row500m => &self.row_500m,
            BaselineField::MaxChins => &self.max_chins,
            BaselineField::Burpees3Min => &self.burpees_3min,
        }
    }

    pub fn set(&mut self, field: BaselineField, value: String) {
        let slot = match field {
            BaselineField::Squat5x5 => &mut self.squat_5x5,
            BaselineField::Row500m => &mut self.row_500m,
            BaselineField::MaxChins => &mut self.max_chins,
            BaselineField::Burpees3Min => &mut self.burpees_3min,
        };
        *slot = value.trim().to_string();
    }
}

/// Onboarding answers. Lives in memory only; the persisted slot holds the plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AthleteProfile {
    pub goal: Goal,
    pub level: Level,
    pub equipment: Vec<Equipment>,
    pub baseline: Baseline,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            goal: Goal::Athletic,
            level: Level::Intermediate,
            equipment: Equipment::ALL.to_vec(),
            baseline: Baseline::default(),
        }
    }
}

impl AthleteProfile {
    pub fn has_equipment(&self, item: Equipment) -> bool {
        self.equipment.contains(&item)
    }

    pub fn toggle_equipment(&mut self, item: Equipment) {
        if let Some(pos) = self.equipment.iter().position(|e| *e == item) {
            self.equipment.remove(pos);
        } else {
            self.equipment.push(item);
            self.equipment.sort();
        }
    }

    pub fn equipment_summary(&self) -> String {
        if self.equipment.is_empty() {
            return "No equipment".to_string();
        }
        self.equipment
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_entry_serializes_with_flat_field_names() {
        let entry = PlanEntry {
            id: "w1d1".to_string(),
            day: 1,
            week: 1,
            title: "Mini-WOD".to_string(),
            focus: "DL/PU/AirSquat".to_string(),
            duration: 20,
            kcal: 180,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "w1d1");
        assert_eq!(json["duration"], 20);
        assert_eq!(json["kcal"], 180);
    }

    #[test]
    fn segment_kind_uses_lowercase_names() {
        let json = serde_json::to_string(&SegmentKind::Amrap).unwrap();
        assert_eq!(json, "\"amrap\"");
    }

    #[test]
    fn toggling_equipment_keeps_list_sorted() {
        let mut profile = AthleteProfile::default();
        profile.toggle_equipment(Equipment::Rower);
        assert!(!profile.has_equipment(Equipment::Rower));
        profile.toggle_equipment(Equipment::Rower);
        assert_eq!(profile.equipment, Equipment::ALL.to_vec());
    }

    #[test]
    fn empty_equipment_has_readable_summary() {
        let mut profile = AthleteProfile::default();
        profile.equipment.clear();
        assert_eq!(profile.equipment_summary(), "No equipment");
    }

    #[test]
    fn baseline_trims_input() {
        let mut baseline = Baseline::default();
        baseline.set(BaselineField::MaxChins, "  8 ".to_string());
        assert_eq!(baseline.get(BaselineField::MaxChins), "8");
    }
}
