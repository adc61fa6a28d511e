//! Calculator keys that rewrite only the rightmost operand of the buffer.
//!
//! Each function takes the current buffer and returns its replacement.
//! Inputs that cannot be transformed come back unchanged.

use crate::calculator::ERROR_SENTINEL;
use crate::editor::is_operator;
use crate::number::{format_number, parse_leading};
use crate::split::{split, Operator};

/// `%`: with `+`/`-` the right term becomes that percentage of the left
/// operand, with `*`/`/` it becomes a fraction, and on its own the whole
/// buffer is divided by 100.
pub fn apply_percent(current: &str) -> String {
    if current.is_empty() {
        return String::new();
    }

    let parts = split(current);
    let Some(op) = parts.operator else {
        return match parse_leading(parts.right) {
            Some(value) => format_number(value / 100.0),
            None => current.to_string(),
        };
    };

    if parts.right.trim().is_empty() {
        return current.to_string();
    }
    let Some(b) = parse_leading(parts.right) else {
        return current.to_string();
    };

    let replacement = if op.is_additive() {
        match parse_leading(parts.left) {
            Some(a) => (a * b) / 100.0,
            None => return current.to_string(),
        }
    } else {
        b / 100.0
    };

    parts.with_right(&format_number(replacement))
}

fn toggle_sign(term: &str) -> String {
    match term.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", term),
    }
}

/// `+/-`: flips the sign of the rightmost operand.
pub fn toggle_plus_minus(current: &str) -> String {
    if current.is_empty() {
        return String::new();
    }

    let parts = split(current);
    match parts.operator {
        None => toggle_sign(parts.right),
        Some(_) if parts.right.is_empty() => current.to_string(),
        // "20/-5": the minus belongs to the operand, not the expression
        Some(Operator::Subtract) if parts.left.chars().last().is_some_and(is_operator) => {
            format!("{}{}", parts.left, parts.right)
        }
        Some(_) => parts.with_right(&toggle_sign(parts.right)),
    }
}

/// `1/x`: zero or a non-number replaces the whole buffer with the error
/// sentinel.
pub fn reciprocal(current: &str) -> String {
    if current.is_empty() {
        return String::new();
    }

    let parts = split(current);
    match parse_leading(parts.right) {
        Some(value) if value != 0.0 => parts.with_right(&format_number(1.0 / value)),
        _ => ERROR_SENTINEL.to_string(),
    }
}

/// `x²`
pub fn square(current: &str) -> String {
    if current.is_empty() {
        return String::new();
    }

    let parts = split(current);
    match parse_leading(parts.right) {
        Some(value) => parts.with_right(&format_number(value * value)),
        None => current.to_string(),
    }
}
