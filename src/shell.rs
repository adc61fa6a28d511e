use crate::calculator::Evaluator;
use crate::config::{Config, KeyConfig};
use crate::session::{Action, Session};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Act(Action),
    Quit,
}

/// Turns typed lines into session actions using the configured keys.
pub struct Keymap {
    // longest key first so "sq" wins over "s"
    bindings: Vec<(String, Command)>,
}

impl Keymap {
    pub fn new(keys: &KeyConfig) -> Self {
        let mut bindings = vec![
            (keys.calculate.clone(), Command::Act(Action::Calculate)),
            (keys.clear.clone(), Command::Act(Action::Clear)),
            (keys.delete.clone(), Command::Act(Action::DeleteLast)),
            (keys.percent.clone(), Command::Act(Action::Percent)),
            (keys.toggle_sign.clone(), Command::Act(Action::ToggleSign)),
            (keys.reciprocal.clone(), Command::Act(Action::Reciprocal)),
            (keys.square.clone(), Command::Act(Action::Square)),
            (keys.quit.clone(), Command::Quit),
        ];
        bindings.retain(|(key, _)| !key.is_empty());
        bindings.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { bindings }
    }

    pub fn tokenize(&self, line: &str) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut rest = line;

        while let Some(ch) = rest.chars().next() {
            if ch.is_whitespace() {
                rest = &rest[ch.len_utf8()..];
                continue;
            }

            let bound = self
                .bindings
                .iter()
                .find(|(key, _)| rest.starts_with(key.as_str()));

            match bound {
                Some((key, command)) => {
                    commands.push(command.clone());
                    rest = &rest[key.len()..];
                }
                None => {
                    commands.push(Command::Act(Action::Append(ch.to_string())));
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        commands
    }
}

/// Applies one line of keys. Returns `false` once the quit key is seen;
/// keys after it on the same line are dropped.
pub fn run_line<E: Evaluator>(session: &mut Session<E>, keymap: &Keymap, line: &str) -> bool {
    for command in keymap.tokenize(line) {
        match command {
            Command::Act(action) => session.apply(&action),
            Command::Quit => return false,
        }
    }
    true
}

/// Interactive loop: prompt, read a line of keys, apply them, print the
/// buffer. Ends on end of input or the quit key.
pub fn run<E, R, W>(
    session: &mut Session<E>,
    config: &Config,
    input: R,
    mut output: W,
) -> Result<()>
where
    E: Evaluator,
    R: BufRead,
    W: Write,
{
    let keymap = Keymap::new(&config.keys);
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.display.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let keep_going = run_line(session, &keymap, &line);
        writeln!(output, "{}", session.buffer())?;
        if !keep_going {
            debug!("quit key pressed");
            break;
        }
    }

    Ok(())
}
