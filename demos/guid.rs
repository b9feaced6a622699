//! Simple command that prints one or '-n count' identifiers of a given version

use std::{env, io, io::Write, process::ExitCode};

use guidgen::Version;

#[derive(Debug, Default, PartialEq)]
struct Options {
    count: Option<usize>,
    version: Option<Version>,
    uppercase: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-v v1|v4|v7] [-u] [-n count]",
                    program.as_deref().unwrap_or("guid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let version = opts.version.unwrap_or_default();
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        writeln!(buf, "{}", guidgen::generate(version, opts.uppercase))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-u" => opts.uppercase = true,
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "-v" => {
                if opts.version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                let Some(v_arg) = args.next() else {
                    return Err("argument to option 'v' missing".to_owned());
                };
                opts.version.replace(v_arg.parse().map_err(|e| format!("{}", e))?);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(opts)
}
