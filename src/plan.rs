use crate::config::KCAL_PER_MINUTE;
use crate::types::{PlanEntry, WeekSummary};

pub const WEEKS: u8 = 4;
pub const DAYS_PER_WEEK: u8 = 7;

struct TemplateDay {
    title: &'static str,
    focus: &'static str,
    duration: u32,
}

const WEEK_TEMPLATE: [TemplateDay; DAYS_PER_WEEK as usize] = [
    TemplateDay { title: "Strength – Base lifts", focus: "Squat/Bench/Chins", duration: 52 },
    TemplateDay { title: "Intervals – Row", focus: "10×250m", duration: 28 },
    TemplateDay { title: "Rest / Easy bike", focus: "30 min zone 2", duration: 30 },
    TemplateDay { title: "Mini-WOD", focus: "DL/PU/AirSquat", duration: 20 },
    TemplateDay { title: "Accessory + Core", focus: "Dumbbells & trunk", duration: 40 },
    TemplateDay { title: "Optional – Easy mobility", focus: "Stretch/Mobility 15–20 min", duration: 20 },
    TemplateDay { title: "Endurance (optional)", focus: "Row/Bike 40–60 min", duration: 50 },
];

pub fn kcal_for(duration: u32) -> u32 {
    (duration as f64 * KCAL_PER_MINUTE).round() as u32
}

/// The 28-day schedule: the weekly template repeated four times, week-major.
pub fn build_four_week_plan() -> Vec<PlanEntry> {
    let mut plan = Vec::with_capacity((WEEKS * DAYS_PER_WEEK) as usize);
    for w in 0..WEEKS {
        for (d, base) in WEEK_TEMPLATE.iter().enumerate() {
            let day = d as u8 + 1;
            plan.push(PlanEntry {
                id: format!("w{}d{}", w + 1, day),
                day,
                week: w + 1,
                title: base.title.to_string(),
                focus: base.focus.to_string(),
                duration: base.duration,
                kcal: kcal_for(base.duration),
            });
        }
    }
    plan
}

/// Entries of a 1-based week, in day order. Empty when the week is not in the plan.
pub fn week_of(plan: &[PlanEntry], week: u8) -> &[PlanEntry] {
    if week == 0 {
        return &[];
    }
    let start = (week as usize - 1) * DAYS_PER_WEEK as usize;
    if start >= plan.len() {
        return &[];
    }
    let end = (start + DAYS_PER_WEEK as usize).min(plan.len());
    &plan[start..end]
}

/// Selected-day lookup used by the Plan screen; wraps around the plan length.
pub fn entry_for_day(plan: &[PlanEntry], index: usize) -> Option<&PlanEntry> {
    if plan.is_empty() {
        return None;
    }
    plan.get(index % plan.len())
}

pub fn weekly_summaries(plan: &[PlanEntry]) -> Vec<WeekSummary> {
    let mut summaries: Vec<WeekSummary> = Vec::new();
    for entry in plan {
        match summaries.iter_mut().find(|s| s.week == entry.week) {
            Some(summary) => {
                summary.sessions += 1;
                summary.minutes += entry.duration;
                summary.kcal += entry.kcal;
            }
            None => summaries.push(WeekSummary {
                week: entry.week,
                sessions: 1,
                minutes: entry.duration,
                kcal: entry.kcal,
            }),
        }
    }
    summaries.sort_by_key(|s| s.week);
    summaries
}
