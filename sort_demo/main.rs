use clap::Parser;
use seqgen::{RandomProvider, SequenceProvider};
use sorts::{insertion_sort, quick_sort};

/// Run repeated sorting trials on freshly generated random integer arrays,
/// printing each array before and after sorting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of elements per trial array
    #[arg(long, default_value_t = 10)]
    n: usize,

    /// Lower bound of generated values (inclusive)
    #[arg(long, default_value_t = 1)]
    low: i32,

    /// Upper bound of generated values (inclusive)
    #[arg(long, default_value_t = 100)]
    high: i32,

    /// Number of repeated trials
    #[arg(long, default_value_t = 10)]
    trials: usize,

    /// RNG seed; omit for a different run each time
    #[arg(long)]
    seed: Option<u32>,
}

fn main() {
    let args = Args::parse();

    if args.n == 0 || args.trials == 0 {
        eprintln!("Error: n and trials must be positive");
        std::process::exit(1);
    }
    if args.low > args.high {
        eprintln!("Error: low must not exceed high");
        std::process::exit(1);
    }

    let mut provider = match args.seed {
        Some(seed) => RandomProvider::with_seed(seed, args.n, args.low, args.high),
        None => RandomProvider::new(args.n, args.low, args.high),
    };

    for trial in run_trials(&mut provider, args.trials) {
        println!("Trial {} ({})", trial.index + 1, trial.algorithm);
        println!("Original array: {}", format_array(&trial.original));
        println!("Sorted array:   {}", format_array(&trial.sorted));
        println!();
    }
}

struct Trial {
    index: usize,
    algorithm: &'static str,
    original: Vec<i32>,
    sorted: Vec<i32>,
}

/// Run the trial loop, alternating between the two algorithms so both are
/// exercised on every demo run.
fn run_trials(provider: &mut dyn SequenceProvider, trials: usize) -> Vec<Trial> {
    (0..trials)
        .map(|index| {
            let original = provider.next_sequence();
            let mut sorted = original.clone();
            let algorithm = if index % 2 == 0 {
                insertion_sort(&mut sorted);
                "insertion sort"
            } else {
                quick_sort(&mut sorted);
                "quick sort"
            };
            Trial {
                index,
                algorithm,
                original,
                sorted,
            }
        })
        .collect()
}

fn format_array(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
