//! Drive commands, per-car command sequences, and the ordered command plan.

use crate::error::ParseError;
use crate::id::CarName;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// A single per-step instruction for one car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° counter-clockwise in place (`L`).
    Left,
    /// Rotate 90° clockwise in place (`R`).
    Right,
    /// Advance one cell along the current heading (`F`).
    Forward,
}

impl Command {
    /// Single-letter form: `L`, `R` or `F`.
    pub fn as_char(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Forward => 'F',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            other => Err(other),
        }
    }
}

/// The commands one car executes, one per step, in order.
///
/// # Examples
///
/// ```
/// use autodrive_core::{Command, CommandSequence};
///
/// let seq: CommandSequence = "FFR".parse().unwrap();
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.get(2), Some(Command::Right));
/// assert_eq!(seq.get(3), None);
/// assert_eq!(seq.to_string(), "FFR");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandSequence(Vec<Command>);

impl CommandSequence {
    /// Wrap an explicit list of commands.
    pub fn new(commands: Vec<Command>) -> Self {
        Self(commands)
    }

    /// Number of steps this sequence covers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no commands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The command for `step`, or `None` once the sequence is exhausted.
    pub fn get(&self, step: usize) -> Option<Command> {
        self.0.get(step).copied()
    }

    /// Iterate over the commands in order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for CommandSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Command::try_from(c).map_err(|token| ParseError::InvalidCommand { token, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.0 {
            write!(f, "{}", cmd.as_char())?;
        }
        Ok(())
    }
}

impl FromIterator<Command> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Command sequences for every participating car, keyed by name.
///
/// Iteration order is insertion order, and it is observable: the step
/// simulator scans proposals in this order, so the first car inserted
/// wins first claim on a contested cell. Re-inserting a name replaces
/// its sequence but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandPlan {
    sequences: IndexMap<CarName, CommandSequence>,
}

impl CommandPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequence for `name`, returning the previous one if any.
    pub fn insert(
        &mut self,
        name: impl Into<CarName>,
        sequence: CommandSequence,
    ) -> Option<CommandSequence> {
        self.sequences.insert(name.into(), sequence)
    }

    /// The sequence for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&CommandSequence> {
        self.sequences.get(name)
    }

    /// Number of cars in the plan.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the plan has no cars.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Length of the longest sequence; `0` for an empty plan.
    ///
    /// This is the number of steps a simulation of the plan runs for.
    pub fn max_len(&self) -> usize {
        self.sequences
            .values()
            .map(CommandSequence::len)
            .max()
            .unwrap_or(0)
    }

    /// Iterate `(name, sequence)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&CarName, &CommandSequence)> {
        self.sequences.iter()
    }
}

impl<N: Into<CarName>> FromIterator<(N, CommandSequence)> for CommandPlan {
    fn from_iter<I: IntoIterator<Item = (N, CommandSequence)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (name, seq) in iter {
            plan.insert(name, seq);
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> CommandSequence {
        s.parse().unwrap()
    }

    #[test]
    fn parse_maps_letters() {
        assert_eq!(
            seq("LRF"),
            CommandSequence::new(vec![Command::Left, Command::Right, Command::Forward])
        );
    }

    #[test]
    fn parse_trims_outer_whitespace_and_allows_empty() {
        assert_eq!(seq("  FF \n"), seq("FF"));
        assert!(seq("").is_empty());
        assert!(seq("   ").is_empty());
    }

    #[test]
    fn parse_reports_first_bad_token() {
        match "FFxR".parse::<CommandSequence>() {
            Err(ParseError::InvalidCommand { token, index }) => {
                assert_eq!(token, 'x');
                assert_eq!(index, 2);
            }
            other => panic!("expected InvalidCommand, got {other:?}"),
        }
        assert!("F F".parse::<CommandSequence>().is_err());
        assert!("f".parse::<CommandSequence>().is_err());
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(seq("FFRFFFFRRL").to_string(), "FFRFFFFRRL");
    }

    #[test]
    fn get_past_end_is_none() {
        let s = seq("F");
        assert_eq!(s.get(0), Some(Command::Forward));
        assert_eq!(s.get(1), None);
    }

    #[test]
    fn plan_preserves_insertion_order() {
        let plan: CommandPlan = [("B", seq("F")), ("A", seq("FF")), ("C", seq(""))]
            .into_iter()
            .collect();
        let names: Vec<&str> = plan.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn plan_reinsert_keeps_position() {
        let mut plan = CommandPlan::new();
        plan.insert("A", seq("F"));
        plan.insert("B", seq("F"));
        let prev = plan.insert("A", seq("LL"));
        assert_eq!(prev, Some(seq("F")));
        let names: Vec<&str> = plan.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(plan.get("A"), Some(&seq("LL")));
    }

    #[test]
    fn plan_max_len() {
        assert_eq!(CommandPlan::new().max_len(), 0);
        let plan: CommandPlan = [("A", seq("F")), ("B", seq("FRFL"))].into_iter().collect();
        assert_eq!(plan.max_len(), 4);
        assert_eq!(plan.len(), 2);
    }
}
