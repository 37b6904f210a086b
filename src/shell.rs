//! Main menu loop and the handlers behind each menu entry.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::console::Console;
use crate::error::SessionError;
use crate::recipe::Recipe;
use crate::session::Session;

pub const MENU: &str = "Recipe Creator\n\n\
1. Create New Recipe\n\
2. List Recipes\n\
3. Select Recipe\n\
4. Scale Recipe\n\
5. Reset Quantities\n\
6. Clear Recipe\n\
7. Exit\n";

pub const INVALID_CHOICE: &str = "Invalid choice! Please enter a number from 1 to 7.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateRecipe,
    ListRecipes,
    SelectRecipe,
    ScaleRecipe,
    ResetQuantities,
    ClearRecipe,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateRecipe),
            "2" => Some(MenuChoice::ListRecipes),
            "3" => Some(MenuChoice::SelectRecipe),
            "4" => Some(MenuChoice::ScaleRecipe),
            "5" => Some(MenuChoice::ResetQuantities),
            "6" => Some(MenuChoice::ClearRecipe),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    console: Console<R, W>,
    session: Session,
    /// Filled by the calorie listeners, drained after each limit check.
    warnings: Rc<RefCell<Vec<String>>>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            console: Console::new(input, output),
            session: Session::new(config),
            warnings: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.write(MENU).context("Failed to display menu")?;
            self.console.writeln("").context("Failed to display menu")?;

            let line = match self.console.read_line() {
                Ok(line) => line,
                Err(SessionError::InputClosed) => {
                    info!("input closed, leaving recipe creator");
                    return Ok(());
                }
                Err(e) => return Err(e).context("Failed to read menu choice"),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line, "unrecognised menu choice");
                self.console
                    .writeln(&format!("{INVALID_CHOICE}\n"))
                    .context("Failed to write to console")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                info!("exit selected");
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e) if e.is_user_facing() => {
                    debug!(error = ?e, ?choice, "command aborted");
                    self.console
                        .writeln(&format!("{e}\n"))
                        .context("Failed to write to console")?;
                }
                Err(SessionError::InputClosed) => {
                    info!(?choice, "input closed mid-command, leaving recipe creator");
                    return Ok(());
                }
                Err(e) => return Err(e).with_context(|| format!("Command {choice:?} failed")),
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<(), SessionError> {
        debug!(?choice, "dispatching menu choice");
        match choice {
            MenuChoice::CreateRecipe => self.create_recipe(),
            MenuChoice::ListRecipes => self.list_recipes(),
            MenuChoice::SelectRecipe => self.select_recipe(),
            MenuChoice::ScaleRecipe => self.scale_recipe(),
            MenuChoice::ResetQuantities => self.reset_quantities(),
            MenuChoice::ClearRecipe => self.clear_recipe(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_recipe(&mut self) -> Result<(), SessionError> {
        let mut recipe = Recipe::with_name(self.console.prompt_string("Enter recipe name: ")?);

        let ingredient_count = self.console.prompt_int("Enter the number of ingredients: ")?;
        for i in 0..ingredient_count.max(0) {
            self.console.writeln(&format!("\nIngredient {}:", i + 1))?;
            let name = self.console.prompt_string("Name: ")?;
            let quantity = self.console.prompt_f64("Quantity: ")?;
            let unit = self.console.prompt_string("Unit: ")?;
            let calories = self.console.prompt_int("Calories: ")?;
            let food_group = self.console.prompt_string("Food Group: ")?;
            recipe.add_ingredient(name, quantity, unit, calories, food_group);
        }

        let step_count = self.console.prompt_int("Enter the number of steps: ")?;
        for i in 0..step_count.max(0) {
            self.console.writeln(&format!("\nStep {}:", i + 1))?;
            let description = self.console.prompt_string("Description: ")?;
            recipe.add_step(description);
        }

        let limit = self.session.config().calorie_limit;
        let warnings = Rc::clone(&self.warnings);
        recipe.on_calories_exceeded(move |name| {
            warnings
                .borrow_mut()
                .push(format!("WARNING: Calories in '{name}' exceed {limit}!"));
        });

        match serde_json::to_string(&recipe) {
            Ok(snapshot) => debug!(recipe = %snapshot, "recipe created"),
            Err(e) => warn!(error = %e, "could not serialize recipe snapshot"),
        }

        self.session.add_recipe(recipe);
        self.console.writeln("Recipe created successfully!\n")
    }

    fn list_recipes(&mut self) -> Result<(), SessionError> {
        let listing = self.session.listing()?;
        self.console.writeln(&listing)
    }

    /// Lists the recipes and asks for one by number.
    fn prompt_recipe_number(&mut self, instruction: &str) -> Result<i32, SessionError> {
        self.list_recipes()?;
        self.console.writeln(instruction)?;
        self.console.prompt_int("Recipe Number: ")
    }

    fn select_recipe(&mut self) -> Result<(), SessionError> {
        let number = self.prompt_recipe_number("Select a recipe by entering its number:")?;
        let recipe = self.session.recipe(number)?;
        let limit = self.session.config().calorie_limit;

        self.console.writeln("")?;
        self.console.write(&recipe.render(1.0))?;
        self.console
            .writeln(&format!("\nTotal Calories: {}", recipe.total_calories()))?;

        let by_group = recipe.calories_by_food_group();
        if !by_group.is_empty() {
            self.console.writeln("Calories by food group:")?;
            for entry in by_group {
                self.console
                    .writeln(&format!("- {}: {}", entry.food_group, entry.calories))?;
            }
        }

        recipe.check_calories_limit(limit);
        let pending: Vec<String> = self.warnings.borrow_mut().drain(..).collect();
        for warning in pending {
            self.console.writeln(&warning)?;
        }
        Ok(())
    }

    fn scale_recipe(&mut self) -> Result<(), SessionError> {
        let number =
            self.prompt_recipe_number("Select a recipe to scale by entering its number:")?;
        let recipe = self.session.recipe(number)?;

        self.console.writeln("Enter scaling factor (0.5, 2, or 3):")?;
        let factor = self.console.prompt_f64("Scaling Factor: ")?;
        debug!(number, factor, "rendering scaled recipe");
        self.console.write(&recipe.render(factor))
    }

    fn reset_quantities(&mut self) -> Result<(), SessionError> {
        let number = self
            .prompt_recipe_number("Select a recipe to reset quantities by entering its number:")?;
        self.session.recipe_mut(number)?.reset_quantities();
        self.console.writeln("Quantities reset successfully!\n")
    }

    fn clear_recipe(&mut self) -> Result<(), SessionError> {
        let number =
            self.prompt_recipe_number("Select a recipe to clear by entering its number:")?;
        self.session.recipe_mut(number)?.clear();
        self.console.writeln("Recipe cleared!\n")
    }
}
