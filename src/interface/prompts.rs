use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{PlanError, Result};
use crate::models::{parse_tags, DietTags};

/// Prompt for the daily calorie target.
pub fn prompt_kcal() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Daily calorie target?")
        .default("2000".to_string())
        .interact_text()?;

    let kcal: u32 = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if kcal == 0 {
        return Err(PlanError::InvalidInput(
            "Calorie target must be greater than zero".to_string(),
        ));
    }

    Ok(kcal)
}

/// Prompt for dietary restrictions. No selection means no restrictions.
pub fn prompt_diet_flags() -> Result<DietTags> {
    let options = ["VEG (vegetarian)", "PESC (pescatarian)", "GF (gluten-free)"];
    let keys = ["VEG", "PESC", "GF"];

    let picked = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    let flags: Vec<&str> = picked.into_iter().map(|i| keys[i]).collect();
    Ok(parse_tags(&flags))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
