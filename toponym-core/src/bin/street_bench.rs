//! Street Name Benchmarking Tool
//!
//! Measures the analysis pipeline on a file with one street or place name per
//! line, such as an export of OpenStreetMap `name` tags.
//!
//! ## What It Benchmarks
//!
//! 1. **Canonicalize**: Folding every name into its canonical form
//! 2. **Key**: Building the delimiter-insensitive street key of every name
//! 3. **Index**: Adding every name to a [`StreetIndex`], committing, then
//!    running one prefix query per name
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/street_bench /path/to/names.txt canonicalize
//! ./target/release/street_bench /path/to/names.txt key
//! ./target/release/street_bench /path/to/names.txt index
//! ./target/release/street_bench /path/to/names.txt all
//! ```
//!
//! Set `RUST_LOG=debug` to see dictionary and commit logging.
//!
//! ## Example Output
//!
//! ```text
//! === Canonicalize ===
//! --------------------------------
//! Mode        : Canonicalize
//! Elapsed     : 0.081 s
//! Throughput  : 0.412 GiB/s
//! Names       : 2_417_503
//! Names/sec   : 29_845_716
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use toponym_core::analyzer::canonicalize_into;
use toponym_core::analyzer::tokenizer::trim_last_token;
use toponym_core::street::build_key;
use toponym_core::{CanonicalForm, StreetIndex, SynonymDictionary};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Canonicalize,
    Key,
    Index,
    All,
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: street_bench <path> [canonicalize|key|index|all]");
        std::process::exit(1);
    }

    let path = &args[1];

    let mode = match args.get(2).map(String::as_str) {
        Some("canonicalize") => Mode::Canonicalize,
        Some("key") => Mode::Key,
        Some("index") => Mode::Index,
        _ => Mode::All,
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let names: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Names:     {}", fmt_count(names.len() as u64));
    println!("Mode:      {:?}\n", mode);

    if matches!(mode, Mode::Canonicalize | Mode::All) {
        bench_canonicalize(&names, input.len());
    }
    if matches!(mode, Mode::Key | Mode::All) {
        bench_key(&names, input.len());
    }
    if matches!(mode, Mode::Index | Mode::All) {
        bench_index(&names, input.len());
    }

    Ok(())
}

fn bench_canonicalize(names: &[&str], input_bytes: usize) {
    let mut buf = CanonicalForm::with_capacity(64);

    println!("=== Canonicalize ===");

    let mut run = || {
        let mut chars = 0u64;
        for name in names {
            canonicalize_into(name, &mut buf);
            chars += buf.len() as u64;
        }
        std::hint::black_box(chars);
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Canonicalize", input_bytes, elapsed, names.len() as u64);
}

fn bench_key(names: &[&str], input_bytes: usize) {
    println!("=== Key ===");

    let mut run = || {
        let mut chars = 0u64;
        for name in names {
            chars += build_key(name).len() as u64;
        }
        std::hint::black_box(chars);
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Key", input_bytes, elapsed, names.len() as u64);
}

fn bench_index(names: &[&str], input_bytes: usize) {
    let dictionary = Arc::new(SynonymDictionary::builtin());

    println!("=== Index (build + commit) ===");

    let mut index = StreetIndex::new(Arc::clone(&dictionary));
    let mut failed = 0usize;
    let elapsed = measure(&mut || {
        index.clear();
        let (_, f, _) = index.add_batch(names);
        failed = f;
        index.commit();
    });

    if failed > 0 {
        info!("{failed} names rejected");
    }
    print_perf("Index", input_bytes, elapsed, names.len() as u64);
    println!("{}\n", index.stats());

    println!("=== Search (prefix queries) ===");

    // Drop the last character so the trailing token is matched as a prefix.
    let queries: Vec<&str> = names
        .iter()
        .map(|name| {
            let head = trim_last_token(name);
            let tail = &name[head.len()..];
            match tail.char_indices().last() {
                Some((i, _)) if i > 0 => &name[..head.len() + i],
                _ => *name,
            }
        })
        .collect();

    let mut hits = 0u64;
    let mut run = || {
        let mut local = 0u64;
        for query in &queries {
            local += index.search(query).len() as u64;
        }
        hits = local;
        std::hint::black_box(hits);
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Search", input_bytes, elapsed, queries.len() as u64);
    println!("Hits        : {}\n", fmt_count(hits));
}

fn warmup<F: FnMut()>(f: &mut F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(f: &mut F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, items: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if items > 0 {
        println!("Names       : {}", fmt_count(items));
        println!("Names/sec   : {}", fmt_count((items as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
