use std::error::Error as StdError;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lib_level::LevelDocument;
use lib_level::json_load::load_document;
use log::info;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { level } => check_level(level),
        Commands::Dump { level } => dump_level(level),
        Commands::CheckDir { dir } => check_dir(dir),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            let mut source = e.source();
            while let Some(reason) = source {
                eprintln!("  caused by: {reason}");
                source = reason.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn check_level(level: PathBuf) -> Result<(), Box<dyn StdError>> {
    println!("Checking {level:?}");

    let document = load_document(&level)?;
    let (platforms, images) = decode_all(&document)?;
    println!(
        "{level:?}: {} platforms, {} images",
        platforms.len(),
        images.len()
    );
    Ok(())
}

fn dump_level(level: PathBuf) -> Result<(), Box<dyn StdError>> {
    let document = load_document(&level)?;
    let (platforms, images) = decode_all(&document)?;
    for platform in platforms {
        println!("{platform:?}");
    }
    for image in images {
        println!("{image:?}");
    }
    Ok(())
}

fn check_dir(dir: PathBuf) -> Result<(), Box<dyn StdError>> {
    let dir = fs::read_dir(dir)?;
    for file in dir {
        let file = file?.path();
        let Some(extension) = file.extension() else {
            continue;
        };
        if extension != "json" {
            continue;
        }

        check_level(file)?;
    }
    Ok(())
}

fn decode_all(
    document: &LevelDocument,
) -> Result<(Vec<lib_level::PlatformDef>, Vec<lib_level::ImageDef>), Box<dyn StdError>> {
    let platforms = document.platforms()?;
    info!("Decoded {} platforms", platforms.len());
    let images = document.images()?;
    info!("Decoded {} images", images.len());
    Ok((platforms, images))
}

/// A tool for working with the game's level files.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check if a level decodes cleanly
    Check {
        /// The level to check
        #[arg(short, long, value_name = "FILE")]
        level: PathBuf,
    },
    /// Debug-dump the decoded records of a level
    Dump {
        /// The level to dump
        #[arg(short, long, value_name = "FILE")]
        level: PathBuf,
    },
    /// Check every "*.json" level in a directory
    CheckDir {
        /// The directory to read the levels from
        #[arg(short, long, value_name = "DIR")]
        dir: PathBuf,
    },
}
