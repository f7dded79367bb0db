use crate::i18n::{self, Lang};
use crate::models::{DayPlan, FoodItem, Micro, ShoppingItem, WeekPlan};

/// Display a single day's plate in a formatted table.
pub fn display_day_plan(day: &DayPlan, lang: Lang) {
    if day.meals.is_empty() {
        println!("No meals generated (no compatible recipes for these restrictions).");
        return;
    }

    println!();
    println!("=== Day Plan ===");
    println!();

    let max_title_len = day
        .meals
        .iter()
        .map(|m| m.title_translated.chars().count())
        .max()
        .unwrap_or(10);

    for (i, meal) in day.meals.iter().enumerate() {
        let portions: Vec<String> = meal
            .grams
            .iter()
            .map(|(name, g)| format!("{} {:.0} g", i18n::food_name(lang, name), g))
            .collect();

        println!(
            "{:>3}. {:<width$} - {:>4} kcal | {}",
            i + 1,
            meal.title_translated,
            meal.kcal,
            portions.join(", "),
            width = max_title_len
        );
    }

    println!();
    println!("--- Totals ---");
    println!("Calories: {} kcal", day.kcal);
    println!(
        "Protein: {:.1} g | Fat: {:.1} g | Carbs: {:.1} g | Fiber: {:.1} g",
        day.macros.protein_g, day.macros.fat_g, day.macros.carbs_g, day.macros.fiber_g
    );

    println!();
    println!("--- Coverage ---");
    for micro in Micro::ALL {
        println!(
            "  {:<12} {:>6.1}%",
            i18n::micro_name(lang, micro),
            day.coverage.get(micro)
        );
    }

    if !day.tips.is_empty() {
        println!();
        println!("--- Tips ---");
        for tip in &day.tips {
            println!("  {tip}");
        }
    }
    println!();
}

/// Display a seven-day plan: one block per day, averaged coverage, and the
/// consolidated shopping list.
pub fn display_week_plan(week: &WeekPlan, lang: Lang) {
    for (i, day) in week.days.iter().enumerate() {
        println!();
        println!("######## Day {} ########", i + 1);
        display_day_plan(day, lang);
    }

    println!();
    println!("=== Weekly Coverage (avg) ===");
    for micro in Micro::ALL {
        println!(
            "  {:<12} {:>6.1}%",
            i18n::micro_name(lang, micro),
            week.weekly_coverage.get(micro)
        );
    }

    display_shopping_list(&week.shopping_list);
}

/// Display the consolidated shopping list with estimated prices.
pub fn display_shopping_list(list: &[ShoppingItem]) {
    println!();
    println!("=== Shopping List ===");
    println!();

    if list.is_empty() {
        println!("  (empty)");
        return;
    }

    let max_name_len = list
        .iter()
        .map(|i| i.name_translated.chars().count())
        .max()
        .unwrap_or(10);
    let total: f64 = list.iter().map(|i| i.price_est).sum();

    for item in list {
        println!(
            "  {:<width$} {:>7.0} g   ~{:.2}",
            item.name_translated,
            item.grams,
            item.price_est,
            width = max_name_len
        );
    }

    println!();
    println!("Estimated total: {total:.2}");
    println!();
}

/// Display the food catalog with nutrient density and tags.
pub fn display_food_list<'a, I: Iterator<Item = &'a FoodItem>>(foods: I, lang: Lang) {
    println!();
    println!("=== Food Catalog ===");
    println!();

    let mut count = 0;
    for food in foods {
        let tags: Vec<&str> = food.tags.iter().map(|t| t.key()).collect();
        println!(
            "  {} ({}) - {:.0} kcal/{:.0} g, P:{:.1} F:{:.1} C:{:.1} [{}]",
            i18n::food_name(lang, &food.name),
            food.group,
            food.kcal_per_ref(),
            food.per_g,
            food.profile.macros.protein_g,
            food.profile.macros.fat_g,
            food.profile.macros.carbs_g,
            tags.join(";")
        );
        count += 1;
    }

    println!();
    println!("{count} foods");
    println!();
}
