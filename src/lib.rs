//! Calculator expression editor.
//!
//! The buffer is a plain string threaded through pure functions:
//! [`editor`] handles typing, [`rewrite`] applies the percent, sign,
//! reciprocal and square keys to the rightmost operand found by
//! [`split`], and [`calculator`] evaluates the whole expression.
//! [`session::Session`] owns the single live buffer.

pub mod calculator;
pub mod config;
pub mod editor;
pub mod number;
pub mod rewrite;
pub mod session;
pub mod shell;
pub mod split;
