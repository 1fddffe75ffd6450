use crate::remote::RemotePlanRequest;

/// Compose the instruction sent to the plan service when the caller gave none.
pub fn build_prompt(request: &RemotePlanRequest) -> String {
    let profile = &request.profile;
    let target = request.target_calories;

    let lines = [
        format!(
            "You are a nutritionist. Plan one day of {} food: breakfast, lunch, dinner and snacks.",
            request.cuisine.label()
        ),
        format!("Aim close to {target} kcal and never exceed it (<= {target} kcal)."),
        "If the day cannot be filled exactly, leave some calories unused rather than going over."
            .to_string(),
        format!(
            "User: {}, {} years, {} cm, {} kg, activity {}, goal {}.",
            profile.gender,
            profile.age,
            profile.height,
            profile.weight,
            profile.activity_level,
            profile.goal
        ),
        "Answer with JSON only, no other text, shaped as:".to_string(),
        r#"{"breakfast":[{"name":"","portion":"","calories":0,"protein":0,"carbs":0,"fat":0}],"lunch":[],"dinner":[],"snacks":[],"totalCalories":0}"#
            .to_string(),
        "totalCalories must equal the sum of every item's calories.".to_string(),
        format!("totalCalories must not exceed {target}."),
        "Avoid repeated fried dishes, keep protein adequate, use grams, cups or spoons for portions."
            .to_string(),
    ];

    lines.join("\n")
}
