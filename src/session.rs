use tracing::info;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::recipe::Recipe;

/// Recipes created during this run, in creation order.
#[derive(Debug, Default)]
pub struct Session {
    recipes: Vec<Recipe>,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            recipes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Appends a recipe and returns its 1-based number.
    pub fn add_recipe(&mut self, recipe: Recipe) -> usize {
        self.recipes.push(recipe);
        info!(number = self.recipes.len(), "recipe added to session");
        self.recipes.len()
    }

    pub fn ensure_not_empty(&self) -> Result<(), SessionError> {
        if self.recipes.is_empty() {
            return Err(SessionError::NoRecipes);
        }
        Ok(())
    }

    fn index_of(&self, number: i32) -> Result<usize, SessionError> {
        self.ensure_not_empty()?;
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=self.recipes.len()).contains(n))
            .map(|n| n - 1)
            .ok_or(SessionError::InvalidRecipeNumber(number))
    }

    /// Looks up a recipe by the number shown in the listing.
    pub fn recipe(&self, number: i32) -> Result<&Recipe, SessionError> {
        let index = self.index_of(number)?;
        Ok(&self.recipes[index])
    }

    pub fn recipe_mut(&mut self, number: i32) -> Result<&mut Recipe, SessionError> {
        let index = self.index_of(number)?;
        Ok(&mut self.recipes[index])
    }

    /// Numbered listing of recipe names.
    pub fn listing(&self) -> Result<String, SessionError> {
        self.ensure_not_empty()?;
        let mut out = String::from("Recipes:\n\n");
        for (i, recipe) in self.recipes.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, recipe.display_name()));
        }
        Ok(out)
    }
}
