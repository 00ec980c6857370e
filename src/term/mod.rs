extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use argh::FromArgs;
use bytecode::error;
use bytecode::lang::{assemble, ast::Instruction, Column, Error};
use bytecode::mach::{parse_integer, Console, Event, Integer, LineConsole, Runtime};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fmt::Write as _;
use std::io::{ErrorKind, IsTerminal, Write};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const CYCLES: usize = 5000;

/// Run a program for the sixteen register machine.
#[derive(FromArgs)]
struct Arguments {
    /// the source file to run
    #[argh(positional)]
    path: String,

    /// print each instruction to stderr before it executes
    #[argh(switch, short = 't')]
    trace: bool,

    /// print the parsed program and exit without running it
    #[argh(switch, short = 'l')]
    list: bool,
}

pub fn main() {
    let args: Arguments = argh::from_env();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", Style::new().bold().paint(e.to_string()));
        process::exit(1);
    }
    let source = match load(&args.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            process::exit(1);
        }
    };
    if let Err(error) = main_loop(&args, &source, interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        if error.code().is_source_error() {
            eprint!("{}", diagnostic(&args.path, &source, &error.column()));
        }
        process::exit(1);
    }
}

fn main_loop(args: &Arguments, source: &str, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let program = assemble(source)?;
    if args.list {
        let mut stdout = std::io::stdout();
        return match write!(stdout, "{}", program) {
            Ok(()) => Ok(()),
            Err(e) => Err(error!(OutputError; &e.to_string())),
        };
    }
    let mut runtime = Runtime::new(program);
    let mut console = console();
    let cycles = if args.trace { 1 } else { CYCLES };
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Err(runtime.interrupt());
        }
        if args.trace {
            if let Some(instruction) = runtime.next_instruction() {
                trace(runtime.pc(), instruction);
            }
        }
        match runtime.execute(console.as_mut(), cycles)? {
            Event::Stopped => return Ok(()),
            Event::Running => {}
        }
    }
}

fn trace(pc: Integer, instruction: &Instruction) {
    eprintln!(
        "{}",
        Style::new()
            .dimmed()
            .paint(format!("[{}] {}", pc, instruction))
    );
}

fn load(filename: &str) -> Result<String, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => {
            let msg = format!("{}: {}", filename, error);
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; &msg)),
                _ => Err(error!(FileError; &msg)),
            }
        }
    }
}

/// Line and column, both starting at 1, of a character offset.
fn locate(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in source.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn diagnostic(filename: &str, source: &str, column: &Column) -> String {
    let (line, offset) = locate(source, column.start);
    let mut diag = String::new();
    let _ = writeln!(diag, " --> {}:{}:{}", filename, line, offset);
    if let Some(raw_line) = source.lines().nth(line - 1) {
        let line_text = raw_line.trim_end_matches('\r');
        let width = std::cmp::max(1, column.end - column.start);
        let _ = writeln!(diag, "  |");
        let _ = writeln!(diag, "{:>3} | {}", line, line_text);
        let _ = writeln!(
            diag,
            "  | {}{}",
            " ".repeat(offset - 1),
            Style::new().bold().paint("^".repeat(width))
        );
    }
    diag
}

/// Interactive input goes through a line editor, anything else is read
/// line by line from stdin.
fn console() -> Box<dyn Console> {
    if std::io::stdin().is_terminal() {
        if let Ok(term) = TermConsole::new() {
            return Box::new(term);
        }
    }
    Box::new(LineConsole::new(std::io::stdin().lock(), std::io::stdout()))
}

struct TermConsole {
    input: Interface<DefaultTerminal>,
}

impl TermConsole {
    fn new() -> std::io::Result<TermConsole> {
        let input = Interface::new("bytecode")?;
        input.set_report_signal(Signal::Interrupt, true);
        Ok(TermConsole { input })
    }
}

impl Console for TermConsole {
    fn read_integer(&mut self) -> Result<Integer, Error> {
        match self.input.read_line() {
            Ok(ReadResult::Input(string)) => {
                let value = parse_integer(&string)?;
                self.input.add_history_unique(string);
                Ok(value)
            }
            Ok(ReadResult::Signal(Signal::Interrupt)) => Err(error!(Break)),
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => Err(error!(InputPastEnd)),
            Err(e) => Err(error!(IllegalInput; &e.to_string())),
        }
    }

    fn write_integer(&mut self, value: Integer) -> Result<(), Error> {
        let mut stdout = std::io::stdout();
        match writeln!(stdout, "{}", value).and_then(|_| stdout.flush()) {
            Ok(()) => Ok(()),
            Err(e) => Err(error!(OutputError; &e.to_string())),
        }
    }
}
