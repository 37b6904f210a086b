use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Kinds of notifications a recipe can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeEvent {
    /// Total calories went over the limit passed to a limit check.
    CaloriesExceeded,
}

/// Callback invoked with the name of the recipe that raised the event.
pub type Listener = Box<dyn Fn(&str)>;

/// Listeners grouped by event kind, each group kept in registration order.
///
/// Registration is append-only. Dispatch is synchronous; a panicking
/// listener is not caught and the remaining listeners of that dispatch do not run.
#[derive(Default)]
pub struct RecipeListeners {
    listeners: HashMap<RecipeEvent, Vec<Listener>>,
}

impl RecipeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, event: RecipeEvent, listener: impl Fn(&str) + 'static) {
        self.listeners
            .entry(event)
            .or_default()
            .push(Box::new(listener));
    }

    /// Number of listeners registered for `event`.
    pub fn count(&self, event: RecipeEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Invokes every listener registered for `event` and returns how many ran.
    pub fn emit(&self, event: RecipeEvent, recipe_name: &str) -> usize {
        let Some(listeners) = self.listeners.get(&event) else {
            return 0;
        };
        debug!(
            ?event,
            recipe = recipe_name,
            listeners = listeners.len(),
            "dispatching recipe event"
        );
        for listener in listeners {
            listener(recipe_name);
        }
        listeners.len()
    }
}

impl fmt::Debug for RecipeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeListeners")
            .field("calories_exceeded", &self.count(RecipeEvent::CaloriesExceeded))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let listeners = RecipeListeners::new();
        assert_eq!(listeners.emit(RecipeEvent::CaloriesExceeded, "Soup"), 0);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = RecipeListeners::new();

        let first = Rc::clone(&calls);
        listeners.subscribe(RecipeEvent::CaloriesExceeded, move |name| {
            first.borrow_mut().push(format!("first:{name}"))
        });
        let second = Rc::clone(&calls);
        listeners.subscribe(RecipeEvent::CaloriesExceeded, move |name| {
            second.borrow_mut().push(format!("second:{name}"))
        });

        assert_eq!(listeners.count(RecipeEvent::CaloriesExceeded), 2);
        assert_eq!(listeners.emit(RecipeEvent::CaloriesExceeded, "Cake"), 2);
        assert_eq!(*calls.borrow(), vec!["first:Cake", "second:Cake"]);
    }

    #[test]
    fn test_same_listener_can_be_registered_twice() {
        let hits = Rc::new(RefCell::new(0));
        let mut listeners = RecipeListeners::new();
        for _ in 0..2 {
            let hits = Rc::clone(&hits);
            listeners.subscribe(RecipeEvent::CaloriesExceeded, move |_| *hits.borrow_mut() += 1);
        }
        listeners.emit(RecipeEvent::CaloriesExceeded, "Pie");
        assert_eq!(*hits.borrow(), 2);
    }
}
