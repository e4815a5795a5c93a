use std::process::ExitCode;

use clap::Parser;
use huffman::Huffman;
use log::info;

#[derive(Parser)]
#[command(name = "huffman_demo", version)]
#[command(about = "Build a Huffman code for a text and round-trip it.", long_about = None)]
struct Cli {
    /// Text to encode
    #[arg(default_value = "Eighty six")]
    text: String,
    /// Also print the tree structure
    #[arg(long)]
    tree: bool,
}

fn run(cli: &Cli) -> huffman::Result<()> {
    println!("Initial Text: {}", cli.text);

    let huffman = Huffman::from_symbols(cli.text.chars())?;
    println!("Character Frequencies: {}", huffman.frequencies());
    if cli.tree {
        print!("{}", huffman.tree());
    }
    println!("Huffman Codes: {}", huffman.codes());

    let encoded = huffman.encode(cli.text.chars())?;
    println!("Encoded Text: {}", encoded);

    let decoded: String = huffman.decode(&encoded)?.into_iter().collect();
    println!("Decoded Text: {}", decoded);

    println!(
        "Encoded Bits: {} ({:.3} bits/symbol)",
        encoded.len(),
        huffman.average_code_length()
    );
    info!("round trip ok: {}", decoded == cli.text);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
