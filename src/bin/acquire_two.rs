//! Two-step acquisition demo using a single standalone guard.
//!
//! The device is guarded by one [`backout::Guard`] rather than a chain: if
//! opening the window fails, the guard closes the device on the way out; if
//! it succeeds, the guard is disarmed and the device stays open.

use std::{env, error::Error, fmt, process::ExitCode};

use backout::guard;

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
}

impl Flags {
    fn parse(args: env::Args) -> Result<Flags, String> {
        let mut device_pass = None;
        let mut window_pass = None;
        for arg in args.skip(1) {
            let Some((name, value)) = arg.split_once('=') else {
                return Err(format!("malformed argument `{arg}`"));
            };
            let value = value == "true";
            match name {
                "--device-pass" => device_pass = Some(value),
                "--window-pass" => window_pass = Some(value),
                _ => return Err(format!("unknown flag `{name}`")),
            }
        }
        match (device_pass, window_pass) {
            (Some(device_pass), Some(window_pass)) => Ok(Flags {
                device_pass,
                window_pass,
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

fn open_window_with_opengl_context(pass: bool) -> Result<(), StepFailed> {
    print!("try opening window... ");
    if !pass {
        println!("can't open window");
        return Err(StepFailed("open_window_with_opengl_context"));
    }
    println!("window opened");
    Ok(())
}

fn start(flags: &Flags) -> Result<(), StepFailed> {
    init_device(flags.device_pass)?;
    let mut device_guard = guard(close_device);

    open_window_with_opengl_context(flags.window_pass)?;

    device_guard.disarm();
    Ok(())
}

fn main() -> ExitCode {
    let flags = match Flags::parse(env::args()) {
        Ok(flags) => flags,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: acquire_two --device-pass=<bool> --window-pass=<bool>");
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
