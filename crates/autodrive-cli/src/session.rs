//! The interactive prompt/menu loop.
//!
//! A [`Session`] reads answers line by line from any [`BufRead`] and writes
//! the protocol to any [`Write`], so tests drive it with in-memory buffers.
//! Bad answers are reported and re-prompted; only I/O errors end a session
//! early. End of input ends it cleanly.

use std::fmt;
use std::io::{self, BufRead, Write};

use autodrive_core::{CarName, CommandPlan, CommandSequence};
use autodrive_engine::{Field, RegistryError};
use tracing::debug;

use crate::{input, render};

const BANNER: &str = "Welcome to Auto Driving Car Simulation!";
const DIMENSIONS_PROMPT: &str =
    "Please enter the width and height of the simulation field in x y format:";
const GOODBYE: &str = "Thank you for running the simulation. Goodbye!";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// How a round of the main menu ended.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    StartOver,
    Exit,
    EndOfInput,
}

/// Reads a line or ends the current round when input runs out.
macro_rules! answer {
    ($session:expr, $prompt:expr) => {
        match $session.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::EndOfInput),
        }
    };
}

/// One interactive run of the driver.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Bind a session to its input and output streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{BANNER}")?;
            writeln!(self.output)?;
            match self.round()? {
                Flow::Continue | Flow::StartOver => debug!("starting over"),
                Flow::Exit => {
                    writeln!(self.output, "{GOODBYE}")?;
                    break;
                }
                Flow::EndOfInput => {
                    debug!("input closed");
                    break;
                }
            }
        }
        self.output.flush()
    }

    // ── Rounds ──────────────────────────────────────────────────────

    fn round(&mut self) -> io::Result<Flow> {
        let mut field = loop {
            let line = answer!(self, DIMENSIONS_PROMPT);
            let (width, height) = match input::dimensions(&line) {
                Ok(dims) => dims,
                Err(e) => {
                    self.reject(e)?;
                    continue;
                }
            };
            match Field::new(width, height) {
                Ok(field) => break field,
                Err(e) => self.reject(e)?,
            }
        };
        let grid = field.grid();
        writeln!(
            self.output,
            "You have created a field of {} x {}.",
            grid.width(),
            grid.height()
        )?;
        writeln!(self.output)?;

        let mut plan = CommandPlan::new();
        loop {
            writeln!(self.output, "Please choose from the following options:")?;
            writeln!(self.output, "[1] Add a car to field")?;
            writeln!(self.output, "[2] Run simulation")?;
            writeln!(self.output, "[3] Exit")?;
            let choice = answer!(self, "");
            match choice.as_str() {
                "1" => match self.add_car(&mut field, &mut plan)? {
                    Flow::Continue => self.list_cars(&field, &plan)?,
                    flow => return Ok(flow),
                },
                "2" => {
                    self.list_cars(&field, &plan)?;
                    let metrics = field.simulate(&plan);
                    debug!(steps = metrics.steps, "simulation run from driver");
                    writeln!(self.output, "After simulation, the result is:")?;
                    for car in field.cars() {
                        writeln!(self.output, "{}", render::result_line(car))?;
                    }
                    writeln!(self.output)?;
                    return self.after_run();
                }
                "3" => return Ok(Flow::Exit),
                _ => self.invalid_choice()?,
            }
        }
    }

    /// Collect name, placement and commands for one car.
    fn add_car(&mut self, field: &mut Field, plan: &mut CommandPlan) -> io::Result<Flow> {
        let name = loop {
            let name = answer!(self, "Please enter the name of the car:");
            if name.is_empty() {
                self.reject("car name must not be empty")?;
            } else if field.car(&name).is_some() {
                self.reject(RegistryError::DuplicateName {
                    name: CarName::new(name),
                })?;
            } else {
                break name;
            }
        };

        let position_prompt =
            format!("Please enter initial position of car {name} in x y Direction format:");
        loop {
            let line = answer!(self, &position_prompt);
            let result = input::placement(&line)
                .map_err(|e| e.to_string())
                .and_then(|(x, y, heading)| {
                    field
                        .add_car(name.as_str(), x, y, heading)
                        .map_err(|e| e.to_string())
                });
            match result {
                Ok(()) => break,
                Err(e) => self.reject(e)?,
            }
        }

        let commands_prompt = format!("Please enter the commands for car {name}:");
        let commands = loop {
            let line = answer!(self, &commands_prompt);
            match line.parse::<CommandSequence>() {
                Ok(commands) => break commands,
                Err(e) => self.reject(e)?,
            }
        };
        plan.insert(name, commands);
        Ok(Flow::Continue)
    }

    fn after_run(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "Please choose from the following options:")?;
            writeln!(self.output, "[1] Start Over")?;
            writeln!(self.output, "[2] Exit")?;
            match answer!(self, "").as_str() {
                "1" => return Ok(Flow::StartOver),
                "2" => return Ok(Flow::Exit),
                _ => self.invalid_choice()?,
            }
        }
    }

    // ── I/O helpers ─────────────────────────────────────────────────

    fn list_cars(&mut self, field: &Field, plan: &CommandPlan) -> io::Result<()> {
        writeln!(self.output, "Your current list of cars are:")?;
        for car in field.cars() {
            writeln!(self.output, "{}", render::car_line(car, plan))?;
        }
        writeln!(self.output)
    }

    /// Print `text` (if any) and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        if !text.is_empty() {
            writeln!(self.output, "{text}")?;
        }
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn reject(&mut self, err: impl fmt::Display) -> io::Result<()> {
        debug!(%err, "input rejected");
        writeln!(self.output, "Invalid input: {err}")
    }

    fn invalid_choice(&mut self) -> io::Result<()> {
        writeln!(self.output, "{INVALID_CHOICE}")?;
        writeln!(self.output)
    }
}
