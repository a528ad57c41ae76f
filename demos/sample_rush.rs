use std::time::Duration;

use clap::Parser;

use rand::rngs::StdRng;
use rand::SeedableRng;

use fd_rs::random::{Distribution, FdGenerator};
use fd_rs::sample::SampleRush;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of attributes in each sampled relation.
    #[arg(value_name = "INT", default_value = "6")]
    width: u32,

    /// Wall-clock budget in seconds.
    #[clap(long, value_name = "SECONDS", default_value = "5")]
    budget: u64,

    /// Seed for reproducible runs; omit for entropy.
    #[clap(long, value_name = "INT")]
    seed: Option<u64>,

    /// Draw attribute sets with binomial popcount weights instead of
    /// uniformly.
    #[clap(long)]
    realistic: bool,

    /// Maximum number of dependencies per sample (minimum is 0).
    #[clap(long, value_name = "INT")]
    max_fds: Option<usize>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("seed = {}", seed);

    let distribution = if args.realistic {
        Distribution::Realistic
    } else {
        Distribution::Uniform
    };
    let generator =
        FdGenerator::with_distribution(args.width, distribution, StdRng::seed_from_u64(seed));
    let mut rush =
        SampleRush::with_generator(args.width, generator, StdRng::seed_from_u64(seed ^ 0x5eed));
    if let Some(max_fds) = args.max_fds {
        rush.set_fd_range(0..=max_fds);
    }

    println!("Sampling relations of width {} for {}s...", args.width, args.budget);
    rush.run(Duration::from_secs(args.budget));

    let summary = rush.summary();
    println!("Samples: {}", summary.samples);
    println!("BCNF: {}", summary.bcnf);
    println!("3NF:  {}", summary.third);
    println!("2NF:  {}", summary.second);
    println!("Classification time: {:?}", summary.total_time);
    if summary.samples > 0 {
        println!(
            "Average per sample: {:?}",
            summary.total_time / summary.samples as u32
        );
    }

    Ok(())
}
