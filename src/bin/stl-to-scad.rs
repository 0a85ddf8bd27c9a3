use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{error, info};
use stl_to_scad::{convert, Options};

/// Convert an STL mesh (ASCII or binary) into an OpenSCAD polyhedron module.
#[derive(Parser)]
#[command(name = "stl-to-scad", version, about, long_about = None)]
struct Args {
    /// The input file to read from. If not set, reads from stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The output file to write to. If not set, writes to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the generated OpenSCAD module
    #[arg(short, long)]
    module: Option<String>,

    /// Center the shape in the (x,y) plane and move it onto z=0
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    center: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn open_input(args: &Args) -> Result<Box<dyn Read>> {
    match args.input {
        Some(ref path) => {
            info!("reading from file {:?}", path);
            let f = File::open(path)
                .with_context(|| format!("can't open file {:?}", path))?;
            Ok(Box::new(f))
        },
        None => {
            info!("reading from stdin");
            Ok(Box::new(io::stdin()))
        },
    }
}

fn io_main(args: Args) -> Result<()> {
    let input = BufReader::new(open_input(&args)?);
    let opts = Options {
        module_name: args.module.clone().filter(|s| !s.is_empty()),
        center: args.center,
    };

    // Convert fully before touching the output, so a bad input never leaves a half-written file.
    let mut scad = Vec::new();
    convert(input, &mut scad, &opts).context("can't convert input")?;

    match args.output {
        Some(ref path) => {
            info!("writing to file {:?}", path);
            let f = File::create(path)
                .with_context(|| format!("can't create file {:?}", path))?;
            let mut w = BufWriter::new(f);
            w.write_all(&scad)?;
            w.flush()?;
        },
        None => {
            info!("writing to stdout");
            let stdout = io::stdout();
            let mut w = stdout.lock();
            w.write_all(&scad)?;
            w.flush()?;
        },
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = io_main(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}
