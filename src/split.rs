use std::fmt;

/// One of the four binary operators the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `+` and `-`: percent takes a share of the left operand.
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An expression cut at its last top-level operator.
///
/// `left + operator + right` always reproduces the input. When no
/// operator qualifies, `left` is empty and `right` is the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitResult<'a> {
    pub left: &'a str,
    pub operator: Option<Operator>,
    pub right: &'a str,
    pub operator_index: Option<usize>,
}

impl SplitResult<'_> {
    /// Rebuilds the expression with `term` in place of the right operand.
    pub fn with_right(&self, term: &str) -> String {
        match self.operator {
            Some(op) => format!("{}{}{}", self.left, op, term),
            None => term.to_string(),
        }
    }
}

/// Finds the operator nearest the end of `expression`, skipping index 0 so
/// a leading minus stays part of the first number.
pub fn split(expression: &str) -> SplitResult<'_> {
    let found = expression
        .char_indices()
        .rev()
        .filter(|&(i, _)| i != 0)
        .find_map(|(i, ch)| Operator::from_char(ch).map(|op| (i, op)));

    match found {
        Some((i, op)) => SplitResult {
            left: &expression[..i],
            operator: Some(op),
            // operators are ASCII, so i + 1 is a char boundary
            right: &expression[i + 1..],
            operator_index: Some(i),
        },
        None => SplitResult {
            left: "",
            operator: None,
            right: expression,
            operator_index: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(parts: &SplitResult) -> String {
        let op = parts.operator.map(|op| op.to_string()).unwrap_or_default();
        format!("{}{}{}", parts.left, op, parts.right)
    }

    #[test]
    fn test_splits_at_last_operator() {
        let parts = split("12+3*45");
        assert_eq!(parts.left, "12+3");
        assert_eq!(parts.operator, Some(Operator::Multiply));
        assert_eq!(parts.right, "45");
        assert_eq!(parts.operator_index, Some(4));
    }

    #[test]
    fn test_leading_minus_is_not_a_separator() {
        let parts = split("-5+3");
        assert_eq!(parts.left, "-5");
        assert_eq!(parts.operator, Some(Operator::Add));
        assert_eq!(parts.right, "3");

        let parts = split("-5");
        assert_eq!(parts.operator, None);
        assert_eq!(parts.left, "");
        assert_eq!(parts.right, "-5");
    }

    #[test]
    fn test_nearest_minus_wins_after_operator() {
        let parts = split("5*-3");
        assert_eq!(parts.left, "5*");
        assert_eq!(parts.operator, Some(Operator::Subtract));
        assert_eq!(parts.right, "3");
    }

    #[test]
    fn test_empty_and_trailing_operator() {
        let parts = split("");
        assert_eq!(parts.operator, None);
        assert_eq!(parts.right, "");
        assert_eq!(parts.operator_index, None);

        let parts = split("7*");
        assert_eq!(parts.left, "7");
        assert_eq!(parts.operator, Some(Operator::Multiply));
        assert_eq!(parts.right, "");
    }

    #[test]
    fn test_rejoin_reproduces_input() {
        let inputs = [
            "", "-", "+", "--", "1", "-1", "1+2", "(1+2)*3", "5*--3", "1.5/-0.5",
            "abc", " 2 + 2 ", "7*", "π+1", "-(-2)",
        ];
        for input in inputs {
            assert_eq!(rejoin(&split(input)), input, "input {:?}", input);
        }
    }

    #[test]
    fn test_with_right() {
        assert_eq!(split("100*50").with_right("0.5"), "100*0.5");
        assert_eq!(split("250").with_right("2.5"), "2.5");
    }
}
