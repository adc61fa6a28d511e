use crate::calculator::{Calculator, Evaluator, MevalEvaluator};
use crate::editor;
use crate::rewrite;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Append(String),
    DeleteLast,
    Clear,
    Calculate,
    Percent,
    ToggleSign,
    Reciprocal,
    Square,
}

/// Owns the one expression buffer of a calculator session.
///
/// Every action reads the buffer, computes its replacement and swaps it
/// in before the next action runs.
pub struct Session<E = MevalEvaluator> {
    buffer: String,
    calculator: Calculator<E>,
}

impl Session<MevalEvaluator> {
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }
}

impl Default for Session<MevalEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Session<E> {
    pub fn with_calculator(calculator: Calculator<E>) -> Self {
        Self {
            buffer: String::new(),
            calculator,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn apply(&mut self, action: &Action) {
        let current = self.buffer.as_str();
        let next = match action {
            Action::Append(token) => editor::append(current, token),
            Action::DeleteLast => editor::delete_last(current),
            Action::Clear => editor::clear(current),
            Action::Calculate => self.calculator.calculate(current),
            Action::Percent => rewrite::apply_percent(current),
            Action::ToggleSign => rewrite::toggle_plus_minus(current),
            Action::Reciprocal => rewrite::reciprocal(current),
            Action::Square => rewrite::square(current),
        };
        debug!(?action, before = %self.buffer, after = %next, "applied");
        self.buffer = next;
    }

    pub fn apply_all<'a, I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = &'a Action>,
    {
        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> Vec<Action> {
        text.chars().map(|c| Action::Append(c.to_string())).collect()
    }

    #[test]
    fn test_new_session_is_empty() {
        assert_eq!(Session::new().buffer(), "");
    }

    #[test]
    fn test_typing_and_calculating() {
        let mut session = Session::new();
        session.apply_all(&typed("12+30"));
        assert_eq!(session.buffer(), "12+30");
        session.apply(&Action::Calculate);
        assert_eq!(session.buffer(), "42");
    }

    #[test]
    fn test_operator_guard_while_typing() {
        let mut session = Session::new();
        session.apply_all(&typed("5+*3"));
        assert_eq!(session.buffer(), "5+3");
    }

    #[test]
    fn test_percent_then_calculate() {
        let mut session = Session::new();
        session.apply_all(&typed("200+10"));
        session.apply(&Action::Percent);
        assert_eq!(session.buffer(), "200+20");
        session.apply(&Action::Calculate);
        assert_eq!(session.buffer(), "220");
    }

    #[test]
    fn test_sign_reciprocal_square_chain() {
        let mut session = Session::new();
        session.apply_all(&typed("6*4"));
        session.apply(&Action::ToggleSign);
        assert_eq!(session.buffer(), "6*-4");
        session.apply(&Action::ToggleSign);
        assert_eq!(session.buffer(), "6*4");
        session.apply(&Action::Reciprocal);
        assert_eq!(session.buffer(), "6*0.25");
        session.apply(&Action::Square);
        assert_eq!(session.buffer(), "6*0.0625");
        session.apply(&Action::Calculate);
        assert_eq!(session.buffer(), "0.375");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut session = Session::new();
        session.apply_all(&typed("123"));
        session.apply(&Action::DeleteLast);
        assert_eq!(session.buffer(), "12");
        session.apply(&Action::Clear);
        assert_eq!(session.buffer(), "");
        session.apply(&Action::DeleteLast);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_error_sentinel_can_be_cleared() {
        let mut session = Session::new();
        session.apply_all(&typed("8/0"));
        session.apply(&Action::Reciprocal);
        assert_eq!(session.buffer(), "Error");
        session.apply(&Action::Calculate);
        assert_eq!(session.buffer(), "Error");
        session.apply(&Action::Clear);
        assert_eq!(session.buffer(), "");
    }
}
