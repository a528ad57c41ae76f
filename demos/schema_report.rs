use clap::Parser;

use color_eyre::eyre::{eyre, Result};

use fd_rs::cover::{all_minimal_covers, minimal_cover};
use fd_rs::fd::Fd;
use fd_rs::keys::{candidate_keys, prime_attributes};
use fd_rs::names::AttrNames;
use fd_rs::nf::classify;
use fd_rs::sigma::sigma_plus_limited;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Comma-separated attribute names.
    #[clap(long, value_name = "NAMES", default_value = "A,B,C,D,E")]
    attrs: String,

    /// Semicolon-separated dependencies, e.g. "A,B->C,D;B->E".
    #[clap(
        long,
        value_name = "FDS",
        default_value = "A,B->C,D,E;A,C->B,D,E;B->C;C->B;C->D;B->E;C->E"
    )]
    fds: String,

    /// Enumerate all minimal covers of the input.
    #[clap(long)]
    all_covers: bool,

    /// Enumerate all minimal covers of the implied dependency set
    /// (widens the input through the sigma-plus generator first).
    #[clap(long)]
    implied: bool,
}

fn parse_side(names: &AttrNames, side: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = side
        .split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(eyre!("Empty attribute list in {:?}", side));
    }
    for token in &tokens {
        if names.index_of(token).is_none() {
            return Err(eyre!("Unknown attribute {:?}", token));
        }
    }
    Ok(tokens)
}

fn parse_fds(names: &AttrNames, input: &str) -> Result<Vec<Fd>> {
    let mut fds = Vec::new();
    for part in input.split(';').filter(|part| !part.trim().is_empty()) {
        let (lhs, rhs) = part
            .split_once("->")
            .ok_or_else(|| eyre!("Dependency {:?} is missing '->'", part))?;
        let lhs = parse_side(names, lhs)?;
        let rhs = parse_side(names, rhs)?;
        let lhs: Vec<&str> = lhs.iter().map(String::as_str).collect();
        let rhs: Vec<&str> = rhs.iter().map(String::as_str).collect();
        fds.push(names.fd_of(&lhs, &rhs));
    }
    Ok(fds)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();

    let names = AttrNames::new(args.attrs.split(',').map(str::trim));
    let n = names.width();
    let fds = parse_fds(&names, &args.fds)?;

    println!("Universe ({} attributes):", n);
    for index in 0..n {
        println!("  bit {} = {}", index, names.name(index));
    }
    println!("Dependencies:");
    for fd in &fds {
        println!("  {}", names.format_fd(*fd));
    }

    let keys = candidate_keys(n, &fds);
    println!("Candidate keys:");
    for key in &keys {
        println!("  {}", names.format_set(*key));
    }
    println!("Prime attributes: {}", names.format_set(prime_attributes(n, &fds)));

    let c = classify(n, &fds);
    println!("BCNF: {}", c.bcnf);
    println!("3NF:  {}", c.third);
    println!("2NF:  {}", c.second);

    let cover = minimal_cover(&fds);
    println!("Minimal cover ({} dependencies):", cover.len());
    for fd in &cover {
        println!("  {}", names.format_fd(*fd));
    }

    if args.all_covers || args.implied {
        let base = if args.implied {
            sigma_plus_limited(n, &fds)
        } else {
            fds.clone()
        };
        let covers = all_minimal_covers(&base);
        let target = if args.implied { "implied dependency set" } else { "input" };
        println!("All minimal covers of the {} ({} covers):", target, covers.len());
        for (index, cover) in covers.iter().enumerate() {
            println!("  cover {}:", index);
            for fd in cover {
                println!("    {}", names.format_fd(*fd));
            }
        }
    }

    println!("Total time: {:?}", time_total.elapsed());
    Ok(())
}
