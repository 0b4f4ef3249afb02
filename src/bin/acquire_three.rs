//! Three-step acquisition demo: device → window → GL context.
//!
//! Each step is gated by a command-line flag (`--device-pass=true|false` and
//! so on). On the first failing step, the steps completed so far are undone
//! in reverse order and the process exits nonzero; on full success the undo
//! chain is committed and nothing is closed.

use std::{env, error::Error, fmt, process::ExitCode};

use backout::Chain;

/// An acquisition step reported failure; names the step.
#[derive(Debug)]
struct StepFailed(&'static str);

impl fmt::Display for StepFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}() failed", self.0)
    }
}

impl Error for StepFailed {}

struct Flags {
    device_pass: bool,
    window_pass: bool,
    context_pass: bool,
}

impl Flags {
    fn parse(args: env::Args) -> Result<Flags, String> {
        let mut device_pass = None;
        let mut window_pass = None;
        let mut context_pass = None;
        for arg in args.skip(1) {
            let Some((name, value)) = arg.split_once('=') else {
                return Err(format!("malformed argument `{arg}`"));
            };
            let value = value == "true";
            match name {
                "--device-pass" => device_pass = Some(value),
                "--window-pass" => window_pass = Some(value),
                "--context-pass" => context_pass = Some(value),
                _ => return Err(format!("unknown flag `{name}`")),
            }
        }
        match (device_pass, window_pass, context_pass) {
            (Some(device_pass), Some(window_pass), Some(context_pass)) => Ok(Flags {
                device_pass,
                window_pass,
                context_pass,
            }),
            _ => Err("missing flag".into()),
        }
    }
}

fn init_device(pass: bool) -> Result<(), StepFailed> {
    print!("trying init device... ");
    if !pass {
        println!("device busy");
        return Err(StepFailed("init_device"));
    }
    println!("device initialized");
    Ok(())
}

fn close_device() {
    println!("close_device()");
}

fn open_window(pass: bool) -> Result<(), StepFailed> {
    print!("try opening window... ");
    if !pass {
        println!("can't open window");
        return Err(StepFailed("open_window"));
    }
    println!("window opened");
    Ok(())
}

fn close_window() {
    println!("close_window()");
}

fn create_opengl_context(pass: bool) -> Result<(), StepFailed> {
    print!("trying to create an opengl context... ");
    if !pass {
        println!("can't create context");
        return Err(StepFailed("create_opengl_context"));
    }
    println!("context created");
    Ok(())
}

/// Runs the acquisition sequence; any `?` exit unwinds the chain.
fn start(flags: &Flags) -> Result<(), StepFailed> {
    let mut undo = Chain::new();

    init_device(flags.device_pass)?;
    undo.add(close_device);

    open_window(flags.window_pass)?;
    undo.add(close_window);

    create_opengl_context(flags.context_pass)?;

    undo.disarm_all();
    Ok(())
}

fn main() -> ExitCode {
    let flags = match Flags::parse(env::args()) {
        Ok(flags) => flags,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: acquire_three --device-pass=<bool> --window-pass=<bool> --context-pass=<bool>");
            return ExitCode::FAILURE;
        }
    };

    match start(&flags) {
        Ok(()) => {
            println!("app successfully created");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
