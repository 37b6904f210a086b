use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::events::{RecipeEvent, RecipeListeners};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Calories for the full quantity as entered. Scaling never writes back here.
    pub calories: i32,
    pub food_group: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: i32,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories,
            food_group: food_group.into(),
        }
    }
}

/// One ingredient line of a rendered recipe, with quantity and calories
/// multiplied by the scaling factor.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} {} ({} calories)",
            self.quantity, self.unit, self.name, self.calories
        )
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FoodGroupCalories {
    pub food_group: String,
    pub calories: i64,
}

/// A named list of ingredients and preparation steps.
///
/// `original_quantities` is index-aligned with `ingredients`: both only grow
/// through [`Recipe::add_ingredient`] and only shrink through [`Recipe::clear`].
#[derive(Debug, Default, Serialize)]
pub struct Recipe {
    name: Option<String>,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    original_quantities: Vec<f64>,
    #[serde(skip)]
    listeners: RecipeListeners,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name used in listings and notifications; empty once cleared.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ingredients can be edited in place, but not added or removed here.
    pub fn ingredients_mut(&mut self) -> &mut [Ingredient] {
        &mut self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn original_quantities(&self) -> &[f64] {
        &self.original_quantities
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_empty() && self.steps.is_empty()
    }

    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: i32,
        food_group: impl Into<String>,
    ) {
        let ingredient = Ingredient::new(name, quantity, unit, calories, food_group);
        debug!(
            recipe = self.display_name(),
            ingredient = %ingredient.name,
            quantity,
            calories,
            "adding ingredient"
        );
        self.ingredients.push(ingredient);
        self.original_quantities.push(quantity);
    }

    pub fn add_step(&mut self, description: impl Into<String>) {
        self.steps.push(description.into());
    }

    /// Sum of the unscaled calories of every ingredient.
    pub fn total_calories(&self) -> i64 {
        self.ingredients
            .iter()
            .map(|ingredient| i64::from(ingredient.calories))
            .sum()
    }

    /// Calories per food group, groups in order of first appearance.
    pub fn calories_by_food_group(&self) -> Vec<FoodGroupCalories> {
        let mut summary: Vec<FoodGroupCalories> = Vec::new();
        for ingredient in &self.ingredients {
            match summary
                .iter_mut()
                .find(|entry| entry.food_group == ingredient.food_group)
            {
                Some(entry) => entry.calories += i64::from(ingredient.calories),
                None => summary.push(FoodGroupCalories {
                    food_group: ingredient.food_group.clone(),
                    calories: i64::from(ingredient.calories),
                }),
            }
        }
        summary
    }

    /// Ingredient lines multiplied by `scale`, computed from the current
    /// quantities. Nothing is written back.
    pub fn scaled_ingredients(&self, scale: f64) -> Vec<ScaledIngredient> {
        self.ingredients
            .iter()
            .map(|ingredient| ScaledIngredient {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity * scale,
                unit: ingredient.unit.clone(),
                calories: f64::from(ingredient.calories) * scale,
            })
            .collect()
    }

    /// Text report of the recipe: header, ingredient lines scaled by `scale`,
    /// then the numbered steps.
    pub fn render(&self, scale: f64) -> String {
        let mut out = format!("Recipe: {}\n\nIngredients:\n", self.display_name());
        for line in self.scaled_ingredients(scale) {
            out.push_str(&format!("{line}\n"));
        }
        out.push_str("\nSteps:\n");
        for (number, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", number + 1, step));
        }
        out
    }

    /// Restores every ingredient's quantity to the value it was added with.
    pub fn reset_quantities(&mut self) {
        for (ingredient, original) in self.ingredients.iter_mut().zip(&self.original_quantities) {
            ingredient.quantity = *original;
        }
        debug!(recipe = self.display_name(), "quantities reset");
    }

    /// Drops the name, ingredients and steps. Registered listeners are kept.
    pub fn clear(&mut self) {
        info!(recipe = self.display_name(), "clearing recipe");
        self.name = None;
        self.ingredients.clear();
        self.steps.clear();
        self.original_quantities.clear();
    }

    pub fn on_calories_exceeded(&mut self, listener: impl Fn(&str) + 'static) {
        self.listeners.subscribe(RecipeEvent::CaloriesExceeded, listener);
    }

    /// Notifies the calories-exceeded listeners if the total is above `limit`.
    ///
    /// # Returns
    /// `true` when the limit was exceeded, whether or not anyone was listening.
    pub fn check_calories_limit(&self, limit: i64) -> bool {
        let total = self.total_calories();
        if total <= limit {
            return false;
        }
        debug!(recipe = self.display_name(), total, limit, "calorie limit exceeded");
        self.listeners.emit(RecipeEvent::CaloriesExceeded, self.display_name());
        true
    }
}
