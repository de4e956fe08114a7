use crate::types::{Segment, SegmentKind, TrainItem, WorkoutDefinition};

pub const FEATURED_WORKOUT: &str = "mini-wod";

pub const TRAIN_ITEMS: [TrainItem; 3] = [
    TrainItem {
        workout_id: "base-lifts",
        title: "Strength – Base lifts",
        detail: "Squat 5×5 • Bench 5×5 • Chins",
        minutes: 52,
    },
    TrainItem {
        workout_id: "row-intervals",
        title: "Intervals – Row",
        detail: "10×250m / 1:00 rest",
        minutes: 28,
    },
    TrainItem {
        workout_id: "mini-wod",
        title: "Mini-WOD (3RFT)",
        detail: "DL/PU/AirSquat",
        minutes: 22,
    },
];

pub fn workout(id: &str) -> Option<WorkoutDefinition> {
    let (name, blocks) = match id {
        "mini-wod" => (
            "Mini-WOD — Technique & Engine",
            vec![
                Segment::new(SegmentKind::Prep, "Warm-up", "5 min easy row + mobility", 300),
                Segment::new(
                    SegmentKind::Amrap,
                    "3 Rounds for Time",
                    "10 DL (light), 15 push-ups, 20 air squats",
                    900,
                ),
                Segment::new(SegmentKind::Finisher, "Cool-down", "2 min bike + stretch", 120),
            ],
        ),
        "base-lifts" => (
            "Strength — Base lifts",
            vec![
                Segment::new(SegmentKind::Prep, "Warm-up", "Bike + empty-bar ramp-up", 480),
                Segment::new(SegmentKind::Amrap, "Back squat 5×5", "2 min rest between sets", 900),
                Segment::new(SegmentKind::Amrap, "Bench press 5×5", "2 min rest between sets", 900),
                Segment::new(SegmentKind::Amrap, "Chin-ups 4×max", "90 s rest", 600),
                Segment::new(SegmentKind::Finisher, "Cool-down", "Hips and shoulders", 240),
            ],
        ),
        "row-intervals" => (
            "Intervals — Row 10×250m",
            vec![
                Segment::new(SegmentKind::Prep, "Warm-up", "Easy row, 3 builds", 360),
                Segment::new(SegmentKind::Amrap, "10×250m", "Hard 250m, 1:00 rest", 1080),
                Segment::new(SegmentKind::Finisher, "Cool-down", "Easy row + stretch", 240),
            ],
        ),
        _ => return None,
    };
    Some(WorkoutDefinition {
        id: id.to_string(),
        name: name.to_string(),
        blocks,
    })
}

pub struct Badge {
    pub name: &'static str,
}

pub const BADGES: [Badge; 4] = [
    Badge { name: "5 days in a row" },
    Badge { name: "Deadlift PR" },
    Badge { name: "10k kcal" },
    Badge { name: "500 chin-ups" },
];

pub struct FeedPost {
    pub user: &'static str,
    pub text: &'static str,
    pub likes: u32,
}

pub const FEED: [FeedPost; 3] = [
    FeedPost { user: "Lisa", text: "Squat 5×5 PR @75kg!", likes: 14 },
    FeedPost { user: "Johan", text: "3RFT done in 7:42. Dead but happy.", likes: 9 },
    FeedPost { user: "Stellan", text: "Row 6×500m done. Last two at 1:45!", likes: 11 },
];

pub struct BoardRow {
    pub user: &'static str,
    pub score: &'static str,
}

pub const LEADERBOARD: [BoardRow; 3] = [
    BoardRow { user: "Lisa", score: "7:35" },
    BoardRow { user: "Stellan", score: "7:58" },
    BoardRow { user: "Johan", score: "8:10" },
];

pub const COACH_TIPS: [&str; 3] = [
    "7/10 effort today – save the sprint for the last round.",
    "Squat bottom: braced core, knees over toes, whole foot down.",
    "Unsure about a weight? Drop 2.5 kg and own the technique.",
];
