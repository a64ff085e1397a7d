use std::io::{self, BufRead, Write};

use crate::{LifeError, Sim, World};

const STEP_COMMAND: &[u8] = b"y";

#[derive(Debug, PartialEq, Eq)]
pub enum InputCmd {
    Step,
    Exit,
}

impl InputCmd {
    fn parse(line: &[u8]) -> Self {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line == STEP_COMMAND {
            InputCmd::Step
        } else {
            InputCmd::Exit
        }
    }
}

fn read_command(input: &mut impl BufRead) -> io::Result<InputCmd> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(InputCmd::Exit);
    }
    Ok(InputCmd::parse(&line))
}

/// prints the universe, then evolves and reprints it for as long as the user answers `y`.
pub fn console_loop<W>(
    sim: &mut Sim<W>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()>
where
    W: World,
{
    display_world(sim, &mut output)?;
    loop {
        match read_command(&mut input)? {
            InputCmd::Step => sim.step(),
            InputCmd::Exit => break,
        }
        display_world(sim, &mut output)?;
    }
    Ok(())
}

fn display_world<W>(sim: &Sim<W>, output: &mut impl Write) -> io::Result<()>
where
    W: World,
{
    let result = match sim.render() {
        Ok(result) => result,
        Err(LifeError::EmptyUniverse) => String::new(),
        Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
    };
    writeln!(output, "{result}")?;
    output.flush()
}
