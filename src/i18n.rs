use std::collections::HashMap;
use std::sync::LazyLock;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Micro;

/// Supported display languages.
///
/// Only display strings vary by language; numeric output is language-invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Lang {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "es")]
    Es,
}

static FOOD_NAMES: LazyLock<HashMap<(Lang, &'static str), &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (key, en, ru, es) in [
        ("chicken_breast", "Chicken breast", "Куриная грудка", "Pechuga de pollo"),
        ("salmon", "Salmon", "Лосось", "Salmón"),
        ("greek_yogurt", "Greek yogurt", "Греческий йогурт", "Yogur griego"),
        ("tofu", "Tofu", "Тофу", "Tofu"),
        ("eggs", "Eggs", "Яйца", "Huevos"),
        ("spinach", "Spinach", "Шпинат", "Espinacas"),
        ("lentils", "Lentils", "Чечевица", "Lentejas"),
        ("potato", "Potato", "Картофель", "Patata"),
        ("seaweed", "Seaweed", "Морская капуста", "Algas"),
        ("oats", "Oats", "Овсянка", "Avena"),
        ("brown_rice", "Brown rice", "Бурый рис", "Arroz integral"),
        ("whole_bread", "Whole-grain bread", "Цельнозерновой хлеб", "Pan integral"),
        ("olive_oil", "Olive oil", "Оливковое масло", "Aceite de oliva"),
        ("walnuts", "Walnuts", "Грецкие орехи", "Nueces"),
        ("banana", "Banana", "Банан", "Plátano"),
        ("nutritional_yeast", "Nutritional yeast", "Пищевые дрожжи", "Levadura nutricional"),
        ("iodized_salt", "Iodized salt", "Йодированная соль", "Sal yodada"),
    ] {
        m.insert((Lang::En, key), en);
        m.insert((Lang::Ru, key), ru);
        m.insert((Lang::Es, key), es);
    }
    m
});

static RECIPE_TITLES: LazyLock<HashMap<(Lang, &'static str), &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (key, en, ru, es) in [
        (
            "oatmeal_walnut_bowl",
            "Oatmeal walnut bowl",
            "Овсянка с орехами",
            "Bol de avena con nueces",
        ),
        (
            "veggie_omelette_plate",
            "Veggie omelette plate",
            "Омлет с овощами",
            "Plato de tortilla vegetal",
        ),
        (
            "tofu_scramble_toast",
            "Tofu scramble on toast",
            "Тофу-скрэмбл с тостом",
            "Revuelto de tofu con tostada",
        ),
        (
            "chicken_rice_bowl",
            "Chicken and rice bowl",
            "Курица с рисом",
            "Bol de pollo y arroz",
        ),
        (
            "lentil_spinach_salad",
            "Lentil spinach salad",
            "Салат из чечевицы со шпинатом",
            "Ensalada de lentejas y espinacas",
        ),
        (
            "salmon_potato_lunch",
            "Salmon with potatoes",
            "Лосось с картофелем",
            "Salmón con patatas",
        ),
        (
            "salmon_rice_dinner",
            "Salmon rice dinner",
            "Лосось с рисом на ужин",
            "Cena de salmón con arroz",
        ),
        (
            "tofu_veg_stirfry",
            "Tofu vegetable stir-fry",
            "Тофу с овощами",
            "Salteado de tofu y verduras",
        ),
        (
            "chicken_potato_roast",
            "Roast chicken with potatoes",
            "Курица с картофелем",
            "Pollo asado con patatas",
        ),
        (
            "yogurt_banana_snack",
            "Yogurt banana snack",
            "Йогурт с бананом",
            "Merienda de yogur y plátano",
        ),
        (
            "walnut_fruit_mix",
            "Walnut fruit mix",
            "Орехово-фруктовая смесь",
            "Mezcla de nueces y fruta",
        ),
        (
            "seaweed_rice_bites",
            "Seaweed rice bites",
            "Рисовые роллы с морской капустой",
            "Bocados de arroz y algas",
        ),
    ] {
        m.insert((Lang::En, key), en);
        m.insert((Lang::Ru, key), ru);
        m.insert((Lang::Es, key), es);
    }
    m
});

/// Translate a food name; unknown keys fall back to the canonical name.
pub fn food_name(lang: Lang, key: &str) -> String {
    FOOD_NAMES
        .get(&(lang, key))
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Translate a recipe title; unknown keys fall back to the canonical name.
pub fn recipe_title(lang: Lang, key: &str) -> String {
    RECIPE_TITLES
        .get(&(lang, key))
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Deficiency tip: which nutrient was low and which food was added.
///
/// `donor` should already be translated for `lang`.
pub fn deficiency_tip(lang: Lang, micro: Micro, donor: &str) -> String {
    let nutrient = micro_name(lang, micro);
    match lang {
        Lang::En => format!("Low {nutrient} → added {donor}"),
        Lang::Ru => format!("Низкий уровень: {nutrient} → добавлен {donor}"),
        Lang::Es => format!("Bajo {nutrient} → agregado {donor}"),
    }
}

/// Localized micronutrient name.
pub fn micro_name(lang: Lang, micro: Micro) -> &'static str {
    match (lang, micro) {
        (Lang::En, Micro::Iron) => "iron",
        (Lang::En, Micro::Calcium) => "calcium",
        (Lang::En, Micro::VitaminD) => "vitamin D",
        (Lang::En, Micro::B12) => "vitamin B12",
        (Lang::En, Micro::Folate) => "folate",
        (Lang::En, Micro::Iodine) => "iodine",
        (Lang::En, Micro::Potassium) => "potassium",
        (Lang::En, Micro::Magnesium) => "magnesium",
        (Lang::Ru, Micro::Iron) => "железо",
        (Lang::Ru, Micro::Calcium) => "кальций",
        (Lang::Ru, Micro::VitaminD) => "витамин D",
        (Lang::Ru, Micro::B12) => "витамин B12",
        (Lang::Ru, Micro::Folate) => "фолат",
        (Lang::Ru, Micro::Iodine) => "йод",
        (Lang::Ru, Micro::Potassium) => "калий",
        (Lang::Ru, Micro::Magnesium) => "магний",
        (Lang::Es, Micro::Iron) => "hierro",
        (Lang::Es, Micro::Calcium) => "calcio",
        (Lang::Es, Micro::VitaminD) => "vitamina D",
        (Lang::Es, Micro::B12) => "vitamina B12",
        (Lang::Es, Micro::Folate) => "folato",
        (Lang::Es, Micro::Iodine) => "yodo",
        (Lang::Es, Micro::Potassium) => "potasio",
        (Lang::Es, Micro::Magnesium) => "magnesio",
    }
}
