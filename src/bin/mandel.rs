use clap::{App, Arg, ArgMatches};
use escapegrid::{sample_grid_threaded, ColorGrid, GridParams, Interval, RenderError};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use log::info;
use std::fs::File;
use std::str::FromStr;

/// Reads a "min,max" argument into an Interval.
fn parse_interval(s: &str) -> Option<Interval> {
    let mut bounds = s.splitn(2, ',').map(|bound| f64::from_str(bound.trim()));
    match (bounds.next(), bounds.next()) {
        (Some(Ok(min)), Some(Ok(max))) => Some(Interval::new(min, max)),
        _ => None,
    }
}

fn validate_interval(s: String) -> Result<(), String> {
    match parse_interval(&s) {
        Some(_) => Ok(()),
        None => Err(format!("Could not parse '{}' as min,max", s)),
    }
}

fn validate_step(s: String) -> Result<(), String> {
    match f64::from_str(&s) {
        Ok(step) if step > 0.0 && step.is_finite() => Ok(()),
        Ok(_) => Err("Step must be greater than zero".to_string()),
        Err(_) => Err("Could not parse step".to_string()),
    }
}

/// Counts (threads, iterations) must lie in 1..=high.
fn validate_count(s: &str, what: &str, high: usize) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(n) if n >= 1 && n <= high => Ok(()),
        Ok(_) => Err(format!("{} must be between 1 and {}", what, high)),
        Err(_) => Err(format!("Could not parse {}", what)),
    }
}

const OUTPUT: &str = "output";
const XRANGE: &str = "xrange";
const YRANGE: &str = "yrange";
const STEP: &str = "step";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const MAX_ITERATIONS: usize = 200_000;

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot escape-time renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (binary PPM)"),
        )
        .arg(
            Arg::with_name(XRANGE)
                .required(false)
                .long(XRANGE)
                .short("x")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,1.0")
                .validator(validate_interval)
                .help("Minimum and maximum of the real axis"),
        )
        .arg(
            Arg::with_name(YRANGE)
                .required(false)
                .long(YRANGE)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.5,1.5")
                .validator(validate_interval)
                .help("Minimum and maximum of the imaginary axis"),
        )
        .arg(
            Arg::with_name(STEP)
                .required(false)
                .long(STEP)
                .short("s")
                .takes_value(true)
                .default_value("0.005")
                .validator(validate_step)
                .help("Distance between sample points"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| validate_count(&s, "Thread count", max_threads))
                .help("Number of threads to use in sampler"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("250")
                .validator(|s| validate_count(&s, "Iteration count", MAX_ITERATIONS))
                .help("Maximum number of iterations per point"),
        )
        .get_matches()
}

/// Encodes the colored grid as a binary PPM, top row first.
fn write_pixmap(outfile: &str, colors: &ColorGrid) -> Result<(), failure::Error> {
    let pixels = colors.to_rgb_bytes();
    let mut encoder = PNMEncoder::new(File::create(outfile)?)
        .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(
        &pixels[..],
        colors.width() as u32,
        colors.height() as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

/// Pulls a value clap has already validated (or defaulted) back out.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| failure::format_err!("Could not parse {}", name))
}

fn interval(matches: &ArgMatches, name: &str) -> Result<Interval, failure::Error> {
    matches
        .value_of(name)
        .and_then(parse_interval)
        .ok_or_else(|| failure::format_err!("Could not parse {}", name))
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let params = GridParams::new(
        interval(matches, XRANGE)?,
        interval(matches, YRANGE)?,
        value(matches, STEP)?,
    );
    params.validate()?;
    if params.is_empty() {
        return Err(RenderError::EmptyGrid.into());
    }

    let threads: usize = value(matches, THREADS)?;
    let iterations: usize = value(matches, ITERATIONS)?;
    let (columns, rows) = params.dimensions();
    info!(
        "Sampling {}x{} points, {} iterations, {} threads",
        columns, rows, iterations, threads
    );

    let raw = sample_grid_threaded(&params, iterations, threads)?;
    info!("Maximum escape index {}", raw.max);
    let colors = raw.colorize();

    let outfile: String = value(matches, OUTPUT)?;
    write_pixmap(&outfile, &colors)?;
    info!("Wrote {}", outfile);
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
