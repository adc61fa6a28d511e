use crate::split::Operator;

pub fn is_operator(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

fn is_operator_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if is_operator(ch))
}

/// Appends `token`, refusing a second operator right after another one.
pub fn append(current: &str, token: &str) -> String {
    let last_is_operator = current.chars().last().is_some_and(is_operator);
    if last_is_operator && is_operator_token(token) {
        return current.to_string();
    }
    format!("{}{}", current, token)
}

pub fn delete_last(current: &str) -> String {
    let mut chars = current.chars();
    chars.next_back();
    chars.as_str().to_string()
}

pub fn clear(_current: &str) -> String {
    String::new()
}
