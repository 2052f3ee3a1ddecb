use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

use script_interpreter::{Error, Interpreter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    // Quiet unless asked for; stderr is reserved for fatal diagnostics.
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &[OsString]) -> Result<(), Error> {
    if args.len() != 2 {
        let program = args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "script_interpreter".to_string());
        return Err(Error::Usage { program });
    }

    let file = File::open(&args[1]).map_err(Error::Open)?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    Interpreter::new().run(BufReader::new(file), &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_tracing();

    let args: Vec<OsString> = env::args_os().collect();
    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
