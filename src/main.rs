use std::env;
use std::fs;
use std::io::Write;
use std::process;

use mpd::Mpd;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <manifest.mpd>", args[0]);
        process::exit(1);
    }

    let data = match fs::read(&args[1]) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    let manifest = match Mpd::decode(&data) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to parse '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    eprintln!(
        "Parsed '{}': {} period(s), profiles={}",
        args[1],
        manifest.periods.len(),
        manifest.profiles
    );

    let encoded = match manifest.encode() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to encode manifest: {}", e);
            process::exit(1);
        }
    };

    if std::io::stdout().write_all(&encoded).is_err() {
        process::exit(1);
    }
}
