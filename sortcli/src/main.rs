use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sortlab::core::sorts::{insertion_sort, quick_sort};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated integers to sort, e.g. 5,3,8,1
    #[arg(index = 1, required_unless_present = "file", conflicts_with = "file")]
    values: Option<String>,

    /// Read whitespace-separated integers from this file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Sorting algorithm to apply
    #[arg(long, value_enum, default_value_t = Algorithm::Quick)]
    algorithm: Algorithm,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Insertion,
    Quick,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut values = match (&args.values, &args.file) {
        (Some(list), None) => parse_values(list)?,
        (None, Some(path)) => read_values_file(path)?,
        _ => anyhow::bail!("give either a comma-separated list or --file"),
    };

    if values.is_empty() {
        anyhow::bail!("no integers to sort");
    }

    match args.algorithm {
        Algorithm::Insertion => {
            insertion_sort(&mut values);
        }
        Algorithm::Quick => {
            quick_sort(&mut values);
        }
    }

    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", items.join(","));

    Ok(())
}

/// Parse a comma-separated integer list. Whitespace around items is fine;
/// empty items and anything non-numeric are errors.
fn parse_values(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<i64>()
                .with_context(|| format!("invalid integer {item:?}"))
        })
        .collect()
}

/// Read whitespace/newline-separated integers from a file.
fn read_values_file(path: &Path) -> Result<Vec<i64>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("cannot read {}", path.display()))?;
        for item in line.split_whitespace() {
            let value = item
                .parse::<i64>()
                .with_context(|| format!("invalid integer {item:?} in {}", path.display()))?;
            values.push(value);
        }
    }
    Ok(values)
}
