/// Russian activity names accepted at the prompt and the English names the
/// remote service understands.
const ACTIVITY_NAMES: &[(&str, &str)] = &[
    ("бег", "running"),
    ("ходьба", "walking"),
    ("велосипед", "cycling"),
    ("плавание", "swimming"),
    ("йога", "yoga"),
    ("прыжки", "jumping jacks"),
    ("приседания", "squats"),
    ("отжимания", "push-ups"),
    ("скакалка", "jump rope"),
    ("гребля", "rowing"),
    ("танцы", "dancing"),
    ("подъем по лестнице", "stair climbing"),
];

/// Trim and lowercase `input`, then map it through the translation table.
/// Names not in the table are passed through.
pub fn normalize_activity(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    ACTIVITY_NAMES
        .iter()
        .find(|(from, _)| *from == lowered)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(lowered)
}
