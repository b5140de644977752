/// Numeric targets derived from a user's free-text goal description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalTargets {
    pub fat_goal: f64,
    pub carb_goal: f64,
    pub protein_goal: f64,
    pub calorie_goal: f64,
}

/// Turns the free-text goals input into numeric targets.
///
/// Deliberately a stub: it returns fixed maintenance-level defaults no matter
/// what the user wrote, and the raw input is stored alongside the numbers.
/// TODO: replace with real parsing once the nutrition service that scores
/// goal text is available.
pub fn parse_goals(_goals_input: &str) -> GoalTargets {
    GoalTargets {
        fat_goal: 70.0,
        carb_goal: 250.0,
        protein_goal: 120.0,
        calorie_goal: 2000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_fixed_targets_for_any_input() {
        let a = parse_goals("I want to bulk on 3500 kcal");
        let b = parse_goals("");
        assert_eq!(a, b);
        assert_eq!(a.calorie_goal, 2000.0);
        assert_eq!(a.fat_goal, 70.0);
        assert_eq!(a.carb_goal, 250.0);
        assert_eq!(a.protein_goal, 120.0);
    }
}
