//! Observers receiving every applied step of an exploration.

use std::io::Write;

use csv::Writer;

use crate::agent::Agent;
use crate::error::Result;
use crate::exploration::Step;

pub trait StepObserver {
    fn observe(&mut self, step: &Step, agent: &Agent<'_>) -> Result<()>;
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    fn observe(&mut self, step: &Step, agent: &Agent<'_>) -> Result<()> {
        (**self).observe(step, agent)
    }
}

impl StepObserver for () {
    fn observe(&mut self, _step: &Step, _agent: &Agent<'_>) -> Result<()> {
        Ok(())
    }
}

/// Keeps every step in memory.
impl StepObserver for Vec<Step> {
    fn observe(&mut self, step: &Step, _agent: &Agent<'_>) -> Result<()> {
        self.push(*step);
        Ok(())
    }
}

impl<A: StepObserver, B: StepObserver> StepObserver for (A, B) {
    fn observe(&mut self, step: &Step, agent: &Agent<'_>) -> Result<()> {
        self.0.observe(step, agent)?;
        self.1.observe(step, agent)
    }
}

impl<O: StepObserver> StepObserver for Option<O> {
    fn observe(&mut self, step: &Step, agent: &Agent<'_>) -> Result<()> {
        match self {
            Some(observer) => observer.observe(step, agent),
            None => Ok(()),
        }
    }
}

/// Prints `Label (row, col)` per step, followed by the map unless disabled.
pub struct ConsoleObserver<W: Write> {
    out: W,
    show_map: bool,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, show_map: bool) -> Self {
        Self { out, show_map }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for ConsoleObserver<W> {
    fn observe(&mut self, step: &Step, agent: &Agent<'_>) -> Result<()> {
        writeln!(self.out, "{} {}", step.movement, step.position)?;
        if self.show_map {
            write!(self.out, "{}", agent.render_text())?;
        }
        Ok(())
    }
}

/// Writes `step,move,row,col` records.
pub struct CsvObserver<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvObserver<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(&["step", "move", "row", "col"])?;
        Ok(Self { writer })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> StepObserver for CsvObserver<W> {
    fn observe(&mut self, step: &Step, _agent: &Agent<'_>) -> Result<()> {
        self.writer.write_record(&[
            step.index.to_string(),
            step.movement.label().to_string(),
            step.position.row.to_string(),
            step.position.col.to_string(),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{GridMap, Movement, Pos};

    fn step_east(agent: &mut Agent<'_>) -> Step {
        let position = agent.apply(Movement::East).unwrap();
        Step {
            index: 1,
            movement: Movement::East,
            position,
        }
    }

    #[test]
    fn console_prints_label_position_and_map() {
        let map = GridMap::open(1, 3);
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        let step = step_east(&mut agent);

        let mut console = ConsoleObserver::new(Vec::new(), true);
        console.observe(&step, &agent).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "East (0, 1)\n.*.\n");

        let mut quiet = ConsoleObserver::new(Vec::new(), false);
        quiet.observe(&step, &agent).unwrap();
        assert_eq!(String::from_utf8(quiet.into_inner()).unwrap(), "East (0, 1)\n");
    }

    #[test]
    fn csv_writes_header_and_records() {
        let map = GridMap::open(1, 3);
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        let step = step_east(&mut agent);

        let mut buf = Vec::new();
        {
            let mut trace = CsvObserver::new(&mut buf).unwrap();
            trace.observe(&step, &agent).unwrap();
            trace.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "step,move,row,col\n1,East,0,1\n");
    }

    #[test]
    fn pair_and_option_forward() {
        let map = GridMap::open(1, 3);
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        let step = step_east(&mut agent);

        let mut both = (Vec::new(), Some(Vec::new()));
        both.observe(&step, &agent).unwrap();
        assert_eq!(both.0, vec![step]);
        assert_eq!(both.1, Some(vec![step]));

        let mut none: Option<Vec<Step>> = None;
        none.observe(&step, &agent).unwrap();
    }
}
