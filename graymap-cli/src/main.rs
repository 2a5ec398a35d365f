use clap::Parser;
use graymap::instrument::{Counters, Probe};
use graymap::io::{load_gray_image, save_gray_image};
use graymap::{
    blend, blur, brighten, crop, load_pgm, locate_subimage, mirror, negative, paste, rotate,
    save_pgm, threshold, GrayMap,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Graymap CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Negative,
    Threshold {
        thr: u8,
    },
    Brighten {
        factor: f64,
    },
    Rotate,
    Mirror,
    Crop {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    Paste {
        path: String,
        x: usize,
        y: usize,
    },
    Blend {
        path: String,
        x: usize,
        y: usize,
        alpha: f64,
    },
    Locate {
        path: String,
    },
    Blur {
        dx: usize,
        dy: usize,
    },
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Negative => "negative",
            Step::Threshold { .. } => "threshold",
            Step::Brighten { .. } => "brighten",
            Step::Rotate => "rotate",
            Step::Mirror => "mirror",
            Step::Crop { .. } => "crop",
            Step::Paste { .. } => "paste",
            Step::Blend { .. } => "blend",
            Step::Locate { .. } => "locate",
            Step::Blur { .. } => "blur",
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    report_path: Option<String>,
    steps: Vec<Step>,
}

#[derive(Debug, Serialize)]
struct LocateRecord {
    found: bool,
    x: Option<usize>,
    y: Option<usize>,
}

#[derive(Debug, Serialize)]
struct StepRecord {
    op: &'static str,
    width: usize,
    height: usize,
    pixmem: u64,
    pixops: u64,
    elapsed_us: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    locate: Option<LocateRecord>,
}

impl StepRecord {
    fn new(op: &'static str, img: &GrayMap, counters: Counters) -> Self {
        Self {
            op,
            width: img.width(),
            height: img.height(),
            pixmem: counters.pixmem,
            pixops: counters.pixops,
            elapsed_us: counters.elapsed.as_micros(),
            locate: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    maxval: u8,
    min: u8,
    max: u8,
    steps: Vec<StepRecord>,
}

fn is_pgm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"))
}

fn load(path: &str) -> graymap::GrayMapResult<GrayMap> {
    let path = Path::new(path);
    if is_pgm(path) {
        load_pgm(path)
    } else {
        load_gray_image(path)
    }
}

fn save(img: &GrayMap, path: &str) -> graymap::GrayMapResult<()> {
    let path = Path::new(path);
    if is_pgm(path) {
        save_pgm(img, path)
    } else {
        save_gray_image(img, path)
    }
}

fn ensure_fits(
    img: &GrayMap,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if img.valid_rect(x, y, width, height) {
        Ok(())
    } else {
        Err(format!(
            "rectangle ({x}, {y}, {width}, {height}) does not fit in {}x{} image",
            img.width(),
            img.height()
        )
        .into())
    }
}

fn run_step(
    img: GrayMap,
    step: &Step,
) -> Result<(GrayMap, StepRecord), Box<dyn std::error::Error>> {
    // operands are loaded before the probe starts so only the step is counted
    let operand = match step {
        Step::Paste { path, .. } | Step::Blend { path, .. } | Step::Locate { path } => {
            Some(load(path)?)
        }
        _ => None,
    };

    let mut img = img;
    let mut located = None;
    let probe = Probe::start();
    match (step, operand.as_ref()) {
        (Step::Negative, _) => negative(&mut img),
        (Step::Threshold { thr }, _) => threshold(&mut img, *thr),
        (Step::Brighten { factor }, _) => brighten(&mut img, *factor),
        (Step::Rotate, _) => img = rotate(&img)?,
        (Step::Mirror, _) => img = mirror(&img)?,
        (
            Step::Crop {
                x,
                y,
                width,
                height,
            },
            _,
        ) => {
            ensure_fits(&img, *x, *y, *width, *height)?;
            img = crop(&img, *x, *y, *width, *height)?;
        }
        (Step::Paste { x, y, .. }, Some(src)) => {
            ensure_fits(&img, *x, *y, src.width(), src.height())?;
            paste(&mut img, *x, *y, src);
        }
        (Step::Blend { x, y, alpha, .. }, Some(src)) => {
            ensure_fits(&img, *x, *y, src.width(), src.height())?;
            blend(&mut img, *x, *y, src, *alpha);
        }
        (Step::Locate { .. }, Some(needle)) => {
            let found = locate_subimage(&img, needle);
            located = Some(LocateRecord {
                found: found.is_some(),
                x: found.map(|(x, _)| x),
                y: found.map(|(_, y)| y),
            });
        }
        (Step::Blur { dx, dy }, _) => blur(&mut img, *dx, *dy)?,
        (Step::Paste { .. } | Step::Blend { .. } | Step::Locate { .. }, None) => {
            return Err("missing operand image".into());
        }
    }
    let counters = probe.finish();

    tracing::info!(
        op = step.name(),
        pixmem = counters.pixmem,
        pixops = counters.pixops,
        "step finished"
    );
    let mut record = StepRecord::new(step.name(), &img, counters);
    record.locate = located;
    Ok((img, record))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("graymap=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }

    let mut img = load(&config.input_path)?;
    let mut steps = Vec::with_capacity(config.steps.len());
    for step in &config.steps {
        let (next, record) = run_step(img, step)?;
        img = next;
        steps.push(record);
    }

    if let Some(path) = &config.output_path {
        save(&img, path)?;
    }

    let (min, max) = img.stats();
    let output = Output {
        width: img.width(),
        height: img.height(),
        maxval: img.maxval(),
        min,
        max,
        steps,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
