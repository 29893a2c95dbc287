use std::env;
use std::io::{BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use sublev::prelude::*;

//------------------------------------------------------------------------------
fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err.is_broken_pipe() {
                std::process::exit(0)
            }
            eprintln!("sublev: {err}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> SublevOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("sublev")));
    args.extend(
        env::var("SUBLEV_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    SublevOptions::parse_from(args)
}

fn real_main() -> Result<i32, sublev::Error> {
    let opts = parse_args();
    log::debug!("options: {opts:?}");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    //------------------------------------------------------------------------------
    // generators
    if let Some(shell) = &opts.shell {
        sublev::completions::generate(shell, &mut out);
        out.flush()?;
        return Ok(0);
    }
    if opts.man {
        sublev::manpage::generate(&mut out).map_err(|e| std::io::Error::other(e.to_string()))?;
        out.flush()?;
        return Ok(0);
    }

    //------------------------------------------------------------------------------
    // whole input mode
    let reader = ItemReader::new(opts.input_ending());
    if opts.whole {
        let text = reader.read_whole(&opts.files)?;
        let matched = sublev::output::whole(&mut out, &text, &opts)?;
        return Ok(if matched { 0 } else { 1 });
    }

    //------------------------------------------------------------------------------
    // line mode
    let items = reader.read_files(&opts.files)?;
    let num_matched = sublev::output::filter(&mut out, &items, &opts)?;

    Ok(if num_matched == 0 { 1 } else { 0 })
}
