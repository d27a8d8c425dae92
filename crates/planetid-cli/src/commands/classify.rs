use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use planetid_core::{classify_with, Classification, ClassifierConfig, Label};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Input image files (PNG, JPEG, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Load classifier thresholds from a TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Never prompt for a manual label on low confidence
    #[arg(long)]
    pub no_input: bool,
}

pub fn run(args: &ClassifyArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => ClassifierConfig::default(),
    };

    if args.files.len() == 1 {
        classify_single(&args.files[0], &config, args.no_input)
    } else {
        classify_batch(&args.files, &config)
    }
}

/// Decode and classify one file. Decode failures become the Error verdict
/// instead of aborting, so a batch keeps going.
fn classify_file(path: &Path, config: &ClassifierConfig) -> Classification {
    match planetid_core::io::load_rgb(path) {
        Ok(img) => classify_with(&img, config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "decode failed");
            Classification::decode_failure()
        }
    }
}

fn classify_single(path: &Path, config: &ClassifierConfig, no_input: bool) -> Result<()> {
    let result = classify_file(path, config);

    if result.label == Label::Error {
        // Neutral error state; the empty histogram carries no signal worth
        // interpreting or prompting over.
        println!("File:  {}", path.display());
        println!("{}", Style::new().dim().apply_to("Could not analyze image"));
        return Ok(());
    }

    println!("File:            {}", path.display());
    println!(
        "Aspect (rings):  {:.2} (>{:.2} = Saturn)",
        result.aspect_ratio, config.decision.saturn_aspect
    );
    println!(
        "Banding (belts): {:.2} (>{:.2} = Jupiter)",
        result.banding, config.decision.jupiter_banding_strong
    );
    println!("{}", "-".repeat(30));

    for (group, fraction) in [
        ("Earth", result.histogram.earth),
        ("Venus", result.histogram.venus),
        ("Red", result.histogram.red),
        ("Beige", result.histogram.beige),
    ] {
        if fraction > 0.01 {
            println!("{:<8} {:>6.1}%", group, fraction * 100.0);
        }
    }
    println!();

    let uncertain = result.score < config.decision.confidence_threshold;
    if uncertain && !no_input {
        let prompt = Style::new().dim();
        println!(
            "{}",
            prompt.apply_to(format!(
                "Uncertain ({:.0}%). Best guess: {}.",
                result.score * 100.0,
                result.label
            ))
        );
        if let Some(manual) = ask_manual_label()? {
            let override_style = Style::new().magenta().bold();
            println!("{}", override_style.apply_to(format!("{} (user)", manual)));
            return Ok(());
        }
    }

    let verdict = if uncertain {
        Style::new().dim().apply_to("Unknown".to_string())
    } else {
        verdict_style(result.label).apply_to(format!("It's {}", result.label))
    };
    println!("{}", verdict);

    Ok(())
}

fn classify_batch(files: &[PathBuf], config: &ClassifierConfig) -> Result<()> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Classifying");

    // The pipeline is a pure function of its input image, so files can be
    // classified in parallel without any shared state.
    let results: Vec<(&PathBuf, Classification)> = files
        .par_iter()
        .map(|path| {
            let result = classify_file(path, config);
            pb.inc(1);
            (path, result)
        })
        .collect();

    pb.finish_with_message("Done");

    println!();
    println!("{:<40} {:>9} {:>7} {:>7} {:>8}", "File", "Label", "Score", "Aspect", "Banding");
    println!("{}", "-".repeat(75));
    for (path, result) in &results {
        let label = verdict_style(result.label).apply_to(result.label.to_string());
        println!(
            "{:<40} {:>9} {:>6.1}% {:>7.2} {:>8.2}",
            path.display(),
            label,
            result.score * 100.0,
            result.aspect_ratio,
            result.banding
        );
    }

    Ok(())
}

/// Read a manual label from stdin. Empty input means the user declined.
fn ask_manual_label() -> Result<Option<String>> {
    print!("Manual label (empty to skip): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn verdict_style(label: Label) -> Style {
    match label {
        Label::Mars => Style::new().red().bold(),
        Label::Earth => Style::new().blue().bold(),
        Label::Jupiter => Style::new().color256(208).bold(),
        Label::Saturn => Style::new().yellow().bold(),
        Label::Venus => Style::new().cyan().bold(),
        Label::Unknown | Label::Error => Style::new().dim(),
    }
}
