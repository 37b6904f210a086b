use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No recipes available.")]
    NoRecipes,

    #[error("Invalid recipe number.")]
    InvalidRecipeNumber(i32),

    /// Standard input hit end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Errors the shell reports to the user before returning to the menu.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SessionError::NoRecipes | SessionError::InvalidRecipeNumber(_))
    }
}
