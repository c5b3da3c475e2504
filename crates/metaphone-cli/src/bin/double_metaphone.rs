// double-metaphone: Print Double Metaphone codes for words.
//
// Usage:
//   double-metaphone [OPTIONS] [WORD...]
//   double-metaphone --compare A B
//
// Options:
//   -f, --format FORMAT    text (default), json or tsv
//   -m, --max-length N     Maximum symbols per code (default: 4)
//   --compare A B          Print "match" if A and B share a code
//   -v, --verbose          Increase log verbosity (repeatable)
//   -q, --quiet            Suppress log output
//   -h, --help             Print help

use std::io;

use clap::Parser;
use metaphone_cli::{Args, fatal, run};

fn main() {
    let args = Args::parse();
    args.init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = run(&args, stdin.lock(), &mut out) {
        fatal(&format!("{e:#}"));
    }
}
