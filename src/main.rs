use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use scanner::{display_error, scanner::scanner::scan};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];

    let start = Instant::now();

    let source = read_to_string(file_path).expect("Failed to read file!");

    let tokens = scan(&source);

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(file_path));
        panic!()
    }

    println!("Scanned in {:?}", start.elapsed());

    println!("Tokens:");
    for token in tokens.unwrap() {
        token.debug();
    }
}
