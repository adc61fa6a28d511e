use crate::number::format_number;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

/// Written over the whole buffer when an expression cannot be computed.
pub const ERROR_SENTINEL: &str = "Error";

// digits, the four operators, decimal point, parentheses and whitespace
static ALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-*/().\s]+$").expect("whitelist pattern is valid")
});

// a decimal point with no digit before it, as in ".5" or "3*.5"
static BARE_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^0-9])\.([0-9])").expect("decimal pattern is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("Invalid expression: {0}")]
    Syntax(String),
    #[error("Result is not finite: {0}")]
    NotFinite(f64),
}

/// Computes an infix arithmetic string made of numbers, `+ - * /`,
/// parentheses and unary minus.
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MevalEvaluator;

impl Evaluator for MevalEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        // meval needs a leading digit on decimal literals
        let expression = BARE_DECIMAL.replace_all(expression, "${1}0.$2");
        match meval::eval_str(expression) {
            Ok(result) if result.is_finite() => Ok(result),
            Ok(result) => Err(EvalError::NotFinite(result)),
            Err(e) => Err(EvalError::Syntax(e.to_string())),
        }
    }
}

pub struct Calculator<E = MevalEvaluator> {
    evaluator: E,
}

impl Calculator<MevalEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(MevalEvaluator)
    }
}

impl Default for Calculator<MevalEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Calculator<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn is_valid_expression(expression: &str) -> bool {
        ALLOWED.is_match(expression)
    }

    /// Evaluates the buffer and returns its replacement: the result, the
    /// error sentinel, or the buffer untouched when it is blank.
    pub fn calculate(&self, current: &str) -> String {
        let expression = current.trim();
        if expression.is_empty() {
            return current.to_string();
        }

        if !Self::is_valid_expression(expression) {
            warn!(expression, "rejected characters outside the whitelist");
            return ERROR_SENTINEL.to_string();
        }

        match self.evaluator.evaluate(expression) {
            Ok(result) => format_number(result),
            Err(e) => {
                warn!(expression, "{}", e);
                ERROR_SENTINEL.to_string()
            }
        }
    }
}
