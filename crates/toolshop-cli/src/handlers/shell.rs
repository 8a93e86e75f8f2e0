use crate::presentation::Renderer;
use crate::shell::{Flow, Shell};
use anyhow::Result;
use is_terminal::IsTerminal;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};
use toolshop_engine::Confirm;
use toolshop_runtime::Backoffice;
use tracing::info;

/// Run the back office until `quit` or end of input.
///
/// A terminal gets a line editor with history; piped input is read line by
/// line with no prompt so scripts produce clean output.
pub fn handle<C: Confirm>(backoffice: Backoffice<C>, renderer: Renderer) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new(backoffice, renderer);
    info!(interactive, "shell started");

    if interactive {
        run_interactive(&mut shell)
    } else {
        // The stdin lock is taken per line so delete confirmations can read too
        run_script(
            &mut shell,
            |buf| io::stdin().lock().read_until(b'\n', buf),
            &mut io::stdout(),
        )
    }
}

fn run_interactive<C: Confirm>(shell: &mut Shell<C>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();
    println!("toolshop back office. Type 'help' for commands.");

    loop {
        match editor.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if shell.execute(&line, &mut stdout)? == Flow::Quit {
                    break;
                }
                stdout.flush()?;
            }
            // Ctrl-C drops the current line, Ctrl-D leaves
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn run_script<C, F>(shell: &mut Shell<C>, mut read_line: F, out: &mut dyn Write) -> Result<()>
where
    C: Confirm,
    F: FnMut(&mut Vec<u8>) -> io::Result<usize>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if read_line(&mut buf)? == 0 {
            break;
        }

        let flow = match std::str::from_utf8(&buf) {
            Ok(line) => shell.execute(line, out)?,
            Err(_) => {
                writeln!(out, "error: input line is not valid UTF-8")?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            break;
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OutputFormat;
    use std::io::Cursor;
    use toolshop_engine::AlwaysConfirm;
    use toolshop_runtime::Config;

    fn script(input: &[u8]) -> (String, usize) {
        let mut shell = Shell::new(
            Backoffice::from_config(&Config::default(), AlwaysConfirm),
            Renderer::new(OutputFormat::Plain, false),
        );
        let mut input = Cursor::new(input.to_vec());
        let mut out = Vec::new();

        run_script(&mut shell, |buf| input.read_until(b'\n', buf), &mut out).unwrap();

        let products = shell.backoffice().products().len();
        (String::from_utf8(out).unwrap(), products)
    }

    #[test]
    fn test_script_skips_invalid_utf8_lines() {
        let (out, products) = script(b"delete \xff\xfe\ndelete 4\n");

        assert_eq!(out, "error: input line is not valid UTF-8\nDeleted product #4\n");
        assert_eq!(products, 3);
    }

    #[test]
    fn test_script_stops_at_quit() {
        let (out, products) = script(b"quit\ndelete 4\n");

        assert_eq!(out, "");
        assert_eq!(products, 4);
    }

    #[test]
    fn test_script_runs_last_line_without_newline() {
        let (out, _) = script(b"delete 1");

        assert_eq!(out, "Deleted product #1\n");
    }
}
