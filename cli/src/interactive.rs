use interval_tree::{Aggregate, IntervalTree, TreeError};
use prompt::{prompt_user_for_line, prompt_user_for_values};
use std::num::ParseIntError;
use thiserror::Error;

const HELP: &str = "\
commands:
  assign LEFT RIGHT VALUE   overwrite every position in [LEFT, RIGHT]
  add LEFT RIGHT DELTA      shift every position in [LEFT, RIGHT]
  query LEFT RIGHT          aggregate over [LEFT, RIGHT]
  show                      print every position
  help                      print this message
  quit                      leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Assign { left: usize, right: usize, value: i64 },
    Add { left: usize, right: usize, delta: i64 },
    Query { left: usize, right: usize },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid command {0:?}, try \"help\"")]
    Unknown(String),
    #[error("invalid number: {0}")]
    Number(#[from] ParseIntError),
}

impl SessionCommand {
    /// Parses one line of input. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        let command = match words[..] {
            [] => return Ok(None),
            ["assign", left, right, value] => Self::Assign {
                left: left.parse()?,
                right: right.parse()?,
                value: value.parse()?,
            },
            ["add", left, right, delta] => Self::Add {
                left: left.parse()?,
                right: right.parse()?,
                delta: delta.parse()?,
            },
            ["query", left, right] => Self::Query {
                left: left.parse()?,
                right: right.parse()?,
            },
            ["show"] => Self::Show,
            ["help"] => Self::Help,
            ["quit"] | ["exit"] => Self::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

pub struct Session<A: Aggregate> {
    tree: IntervalTree<A>,
}

impl<A: Aggregate> Session<A> {
    pub fn new(values: &[i64]) -> Result<Self, TreeError> {
        Ok(Self {
            tree: IntervalTree::build(values)?,
        })
    }

    /// Runs `command` and returns the text to show, if any. Quit is handled by the caller.
    pub fn execute(&mut self, command: SessionCommand) -> Result<Option<String>, TreeError> {
        match command {
            SessionCommand::Assign { left, right, value } => {
                self.tree.assign(left, right, value)?;
                Ok(None)
            }
            SessionCommand::Add { left, right, delta } => {
                self.tree.add(left, right, delta)?;
                Ok(None)
            }
            SessionCommand::Query { left, right } => {
                let result = self.tree.query(left, right)?;
                Ok(Some(format!("{} over [{}, {}] = {}", A::name(), left, right, result)))
            }
            SessionCommand::Show => Ok(Some(format!("{:?}", self.tree.to_vec()))),
            SessionCommand::Help => Ok(Some(HELP.to_string())),
            SessionCommand::Quit => Ok(None),
        }
    }
}

pub fn run<A: Aggregate>() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let Some(values) = prompt_user_for_values(&mut input)? else {
        return Ok(());
    };
    let mut session = Session::<A>::new(&values)?;
    log::info!("{} tree over {} values", A::name(), values.len());
    println!("{}", HELP);

    while let Some(line) = prompt_user_for_line(&mut input, "> ")? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match session.execute(command) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
