use recipe_creator::config::SessionConfig;
use recipe_creator::shell::Shell;
use std::io::Cursor;

type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

/// Menu input that creates one recipe.
/// Ingredient fields: name, quantity, unit, calories, food group.
fn create_recipe_input(name: &str, ingredients: &[[&str; 5]], steps: &[&str]) -> String {
    let mut input = format!("1\n{name}\n{}\n", ingredients.len());
    for fields in ingredients {
        for field in fields {
            input.push_str(field);
            input.push('\n');
        }
    }
    input.push_str(&format!("{}\n", steps.len()));
    for step in steps {
        input.push_str(step);
        input.push('\n');
    }
    input
}

fn omelette() -> String {
    create_recipe_input(
        "Omelette",
        &[
            ["Eggs", "3", "large", "210", "Protein"],
            ["Cheese", "30", "g", "140", "Dairy"],
        ],
        &["Whisk", "Cook"],
    )
}

fn toast() -> String {
    create_recipe_input("Toast", &[["Bread", "2", "slices", "160", "Grain"]], &["Toast it"])
}

fn run_session(input: &str, config: SessionConfig) -> (TestShell, String) {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
    shell.run().expect("session should finish cleanly");
    let transcript = String::from_utf8(shell.output().clone()).unwrap();
    (shell, transcript)
}

#[test]
fn test_list_recipes_numbers_from_one() {
    let input = format!("{}{}2\n7\n", omelette(), toast());
    let (_, out) = run_session(&input, SessionConfig::default());
    assert!(out.contains("Recipes:\n\n1. Omelette\n2. Toast\n"), "{out}");
}

#[test]
fn test_select_recipe_shows_report_totals_and_warning() {
    let input = format!("{}3\n1\n7\n", omelette());
    let (_, out) = run_session(&input, SessionConfig::default());

    let expected = "Recipe: Omelette\n\n\
                    Ingredients:\n\
                    - 3 large Eggs (210 calories)\n\
                    - 30 g Cheese (140 calories)\n\
                    \nSteps:\n\
                    1. Whisk\n\
                    2. Cook\n\
                    \nTotal Calories: 350\n\
                    Calories by food group:\n\
                    - Protein: 210\n\
                    - Dairy: 140\n\
                    WARNING: Calories in 'Omelette' exceed 300!\n";
    assert!(out.contains(expected), "{out}");
}

#[test]
fn test_select_recipe_under_limit_has_no_warning() {
    let input = format!("{}3\n1\n7\n", toast());
    let (_, out) = run_session(&input, SessionConfig::default());
    assert!(out.contains("Total Calories: 160"));
    assert!(!out.contains("WARNING"));
}

#[test]
fn test_configured_limit_changes_warning() {
    let input = format!("{}3\n1\n7\n", toast());
    let (_, out) = run_session(&input, SessionConfig { calorie_limit: 100 });
    assert!(out.contains("WARNING: Calories in 'Toast' exceed 100!"));

    let input = format!("{}3\n1\n7\n", omelette());
    let (_, out) = run_session(&input, SessionConfig { calorie_limit: 400 });
    assert!(!out.contains("WARNING"));
}

#[test]
fn test_select_index_zero_is_rejected() {
    let input = format!("{}{}3\n0\n7\n", omelette(), toast());
    let (shell, out) = run_session(&input, SessionConfig::default());
    assert!(out.contains("Invalid recipe number."));
    assert!(!out.contains("Total Calories"));
    assert_eq!(shell.session().len(), 2);
    assert_eq!(shell.session().recipe(1).unwrap().name(), Some("Omelette"));
}

#[test]
fn test_scale_is_display_only() {
    let input = format!("{}4\n1\n2\n4\n1\n0.5\n7\n", omelette());
    let (shell, out) = run_session(&input, SessionConfig::default());

    assert!(out.contains("- 6 large Eggs (420 calories)"), "{out}");
    assert!(out.contains("- 60 g Cheese (280 calories)"));
    // Second scaling starts from the stored quantities again.
    assert!(out.contains("- 1.5 large Eggs (105 calories)"));

    let recipe = shell.session().recipe(1).unwrap();
    assert_eq!(recipe.ingredients()[0].quantity, 3.0);
    assert_eq!(recipe.total_calories(), 350);
}

#[test]
fn test_scale_with_bad_recipe_number_skips_factor_prompt() {
    let input = format!("{}4\n5\n7\n", toast());
    let (_, out) = run_session(&input, SessionConfig::default());
    assert!(out.contains("Invalid recipe number."));
    assert!(!out.contains("Scaling Factor: "));
}

#[test]
fn test_reset_quantities_reports_success() {
    let input = format!("{}5\n1\n7\n", toast());
    let (shell, out) = run_session(&input, SessionConfig::default());
    assert!(out.contains("Quantities reset successfully!"));
    assert_eq!(shell.session().recipe(1).unwrap().ingredients()[0].quantity, 2.0);
}

#[test]
fn test_clear_recipe_keeps_slot() {
    let input = format!("{}{}6\n1\n2\n3\n1\n7\n", omelette(), toast());
    let (shell, out) = run_session(&input, SessionConfig::default());

    assert!(out.contains("Recipe cleared!"));
    assert!(out.contains("Recipes:\n\n1. \n2. Toast\n"), "{out}");
    assert!(out.contains("Total Calories: 0"));

    let cleared = shell.session().recipe(1).unwrap();
    assert!(cleared.is_empty());
    assert!(cleared.original_quantities().is_empty());
}

#[test]
fn test_reset_with_bad_recipe_number_changes_nothing() {
    let input = format!("{}5\n0\n7\n", toast());
    let (shell, out) = run_session(&input, SessionConfig::default());

    assert!(out.contains("Invalid recipe number."));
    assert!(!out.contains("Quantities reset successfully!"));

    let recipe = shell.session().recipe(1).unwrap();
    assert_eq!(recipe.name(), Some("Toast"));
    assert_eq!(recipe.ingredients().len(), 1);
    assert_eq!(recipe.ingredients()[0].quantity, 2.0);
}

#[test]
fn test_clear_with_bad_recipe_number_changes_nothing() {
    let input = format!("{}{}6\n3\n7\n", omelette(), toast());
    let (shell, out) = run_session(&input, SessionConfig::default());

    assert!(out.contains("Invalid recipe number."));
    assert!(!out.contains("Recipe cleared!"));

    let first = shell.session().recipe(1).unwrap();
    assert_eq!(first.name(), Some("Omelette"));
    assert_eq!(first.ingredients().len(), 2);
    assert_eq!(first.steps().len(), 2);
    let second = shell.session().recipe(2).unwrap();
    assert_eq!(second.name(), Some("Toast"));
    assert_eq!(second.ingredients().len(), 1);
}

#[test]
fn test_non_utf8_name_keeps_session_alive() {
    let input = b"1\nCr\xE8pe\n0\n0\n2\n7\n".to_vec();
    let mut shell = Shell::new(Cursor::new(input), Vec::new(), SessionConfig::default());
    shell.run().expect("session should finish cleanly");

    assert_eq!(shell.session().len(), 1);
    assert_eq!(shell.session().recipe(1).unwrap().name(), Some("Cr\u{FFFD}pe"));
    let out = String::from_utf8(shell.output().clone()).unwrap();
    assert!(out.contains("1. Cr\u{FFFD}pe"));
}

#[test]
fn test_exit_stops_reading_input() {
    let input = format!("7\n{}", toast());
    let (shell, _) = run_session(&input, SessionConfig::default());
    assert!(shell.session().is_empty());
}
