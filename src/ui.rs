//! Terminal front end: the same controller, driven from stdin.

use std::io::{BufRead, Write};

use crate::button;
use crate::core::{Clock, GameController, LayoutGenerator, Move, View};
use crate::render::render_text;

const HELP: &str = "Enter `row col` (0-9) to fire, `r` to press restart, `q` to quit.";

/// One parsed line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Move),
    Restart,
    Refresh,
    Quit,
}

/// Parse a line such as `3 7`, `3,7`, `r` or `q`. `None` for anything else.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "" => return Some(Command::Refresh),
        "q" | "quit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Restart),
        _ => {}
    }
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Fire(Move::new(row, col)))
}

/// Play until `q` or end of input.
pub fn run_terminal<G, C, R, W>(
    controller: &mut GameController<'_, G>,
    clock: &C,
    input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    G: LayoutGenerator,
    C: Clock + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    show(controller, None, &mut out)?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                button::click(controller.trigger(), clock);
                show(controller, None, &mut out)?;
            }
            Some(Command::Refresh) => show(controller, None, &mut out)?,
            Some(Command::Fire(mv)) => show(controller, Some(mv), &mut out)?,
            None => writeln!(out, "{}", HELP)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Run one request and print the result. A banner is followed by the
/// freshly dealt board, as the web page does after its refresh.
fn show<G: LayoutGenerator, W: Write>(
    controller: &mut GameController<'_, G>,
    mv: Option<Move>,
    out: &mut W,
) -> anyhow::Result<()> {
    let view = controller.handle(mv).map_err(|e| anyhow::anyhow!(e))?;
    writeln!(out, "{}", render_text(&view))?;
    if !matches!(view, View::Board(_)) {
        let next = controller.handle(None).map_err(|e| anyhow::anyhow!(e))?;
        writeln!(out, "{}", render_text(&next))?;
    }
    Ok(())
}
