//! Line-oriented command language for driving the wizard without a
//! browser: one command per line, `#` starts a comment.
//!
//! ```text
//! measure slider 0 300 50     # origin, track width, handle width
//! measure weight 0 300        # left edge, width
//! handle down 0
//! handle move 260
//! handle up
//! gender female
//! next
//! weight down 200
//! weight move 155
//! weight up
//! height tap 20
//! next
//! goal down 300
//! goal move 220
//! goal pick 2
//! next
//! status
//! ```
//!
//! Pointer commands (`down`, `move`, `up`) produce touch events; prefix the
//! verb with `m` (`mdown`, `mmove`, `mup`) for mouse events.

use crate::error::ReplayError;
use crate::gesture::{InputEvent, TrackMetrics};
use crate::onboarding::{Gender, Target, WizardAction};

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(WizardAction),
    Status,
    Quit,
}

/// Parse a single command line.
pub fn parse_command(line: &str) -> Result<Command, ReplayError> {
    let line = strip_comment(line);
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ReplayError::Empty);
    };
    let args: Vec<&str> = words.collect();

    let action = match head {
        "status" => return Ok(Command::Status),
        "quit" | "exit" => return Ok(Command::Quit),
        "next" => WizardAction::Next,
        "measure" => parse_measure(&args)?,
        "gender" => {
            let value = arg(head, &args, 0, "male|female")?;
            let gender = value
                .parse::<Gender>()
                .map_err(|_| ReplayError::UnknownCommand(format!("gender {value}")))?;
            WizardAction::SelectGender(gender)
        }
        "goal" if args.first() == Some(&"pick") => {
            let value = arg(head, &args, 1, "card index")?;
            let index = value
                .parse::<usize>()
                .map_err(|_| ReplayError::InvalidNumber {
                    command: head.to_string(),
                    value: value.to_string(),
                })?;
            WizardAction::SelectGoal(index)
        }
        other => {
            let target = target_of(other).ok_or_else(|| ReplayError::UnknownCommand(other.into()))?;
            parse_pointer(head, target, &args)?
        }
    };
    Ok(Command::Action(action))
}

/// Parse a whole script, skipping blank and comment lines.
///
/// Errors carry the 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>, (usize, ReplayError)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !strip_comment(line).trim().is_empty())
        .map(|(n, line)| parse_command(line).map_err(|e| (n + 1, e)))
        .collect()
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

fn target_of(word: &str) -> Option<Target> {
    match word {
        "handle" => Some(Target::SliderHandle),
        "track" => Some(Target::SliderTrack),
        "weight" => Some(Target::Weight),
        "height" => Some(Target::Height),
        "goal" => Some(Target::Goals),
        _ => None,
    }
}

fn arg<'a>(
    command: &str,
    args: &[&'a str],
    index: usize,
    expected: &str,
) -> Result<&'a str, ReplayError> {
    args.get(index).copied().ok_or_else(|| ReplayError::MissingArgument {
        command: command.to_string(),
        expected: expected.to_string(),
    })
}

fn number(command: &str, args: &[&str], index: usize, expected: &str) -> Result<f32, ReplayError> {
    let value = arg(command, args, index, expected)?;
    match value.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ReplayError::InvalidNumber {
            command: command.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_measure(args: &[&str]) -> Result<WizardAction, ReplayError> {
    let what = arg("measure", args, 0, "slider|weight|height")?;
    let command = format!("measure {what}");
    match what {
        "slider" => {
            let origin = number(&command, args, 1, "origin")?;
            let track = number(&command, args, 2, "track width")?;
            let handle = number(&command, args, 3, "handle width")?;
            Ok(WizardAction::Layout {
                target: Target::SliderTrack,
                metrics: TrackMetrics::new(origin, track, handle),
            })
        }
        "weight" | "height" => {
            let left = number(&command, args, 1, "left edge")?;
            let width = number(&command, args, 2, "width")?;
            let target = target_of(what).ok_or_else(|| ReplayError::UnknownCommand(command))?;
            Ok(WizardAction::Bounds {
                target,
                left,
                width,
            })
        }
        _ => Err(ReplayError::UnknownCommand(command)),
    }
}

fn parse_pointer(head: &str, target: Target, args: &[&str]) -> Result<WizardAction, ReplayError> {
    let verb = arg(head, args, 0, "down|move|up|tap")?;
    let command = format!("{head} {verb}");
    let event = match verb {
        "down" => InputEvent::touch_start(number(&command, args, 1, "x")?),
        "move" => InputEvent::touch_move(number(&command, args, 1, "x")?),
        "up" => InputEvent::touch_end(),
        "mdown" => InputEvent::mouse_down(number(&command, args, 1, "x")?),
        "mmove" => InputEvent::mouse_move(number(&command, args, 1, "x")?),
        "mup" => InputEvent::mouse_up(),
        "tap" => {
            let x = number(&command, args, 1, "x")?;
            return Ok(WizardAction::Tap { target, x });
        }
        _ => return Err(ReplayError::UnknownCommand(command)),
    };
    Ok(WizardAction::Pointer { target, event })
}
