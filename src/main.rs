use clap::Parser;
use image_ascii_cli::cli::Cli;
use image_ascii_cli::pipeline::{RenderConfig, run};

fn main() {
    let cli = Cli::parse();
    let config = RenderConfig {
        input: cli.input.clone(),
        width: cli.size.width,
        height: cli.size.height,
        no_transparency: cli.no_transparency,
    };

    match run(&config) {
        Ok(ascii) => println!("{ascii}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
