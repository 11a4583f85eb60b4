use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use kanalsort_core::config::Config;
use kanalsort_core::playlist::{scan_playlist, ClassifiedPlaylist};
use kanalsort_core::report::write_report;
use kanalsort_core::{Categorizer, KanalsortError, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Run { input, output }) => handle_run(&base_dir, input, output),
        Some(Commands::Classify { title }) => handle_classify(&title),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("KANALSORT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".kanalsort"))
        .unwrap_or_else(|| PathBuf::from(".kanalsort"))
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "kanalsort", &mut io::stdout());
}

fn handle_run(base_dir: &Path, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load(base_dir)?;
    let input = input.unwrap_or_else(|| config.paths.input.clone());
    let output = output.unwrap_or_else(|| config.paths.output.clone());

    println!();
    println!("Playlist: {}", input.display().to_string().cyan());
    println!("Report: {}", output.display().to_string().cyan());
    println!();
    println!("Categorizing channels...");

    let categorizer = Categorizer::new()?;

    let on_progress = |lines: usize| {
        println!("  {}", format!("{} lines read...", lines).dimmed());
    };
    let playlist = scan_playlist(&input, &categorizer, Some(&on_progress))?;

    println!();
    println!("{}", "Categorization complete".green());

    print_summary(&playlist);

    // The summary above stays visible even if the report write fails.
    write_report(&output, &playlist)?;
    println!();
    println!("{} {}", "Report saved:".green(), output.display());

    Ok(())
}

fn print_summary(playlist: &ClassifiedPlaylist) {
    let rule = "═".repeat(64);

    println!();
    println!("{}", rule);
    println!("{}", "CHANNEL CATEGORIES".bold());
    println!("{}", rule);
    println!();

    for group in playlist.sorted_by_size() {
        let count = group.titles.len();
        println!(
            "{}: {} channels",
            group.category.label().cyan().bold(),
            count
        );

        for (i, title) in group.titles.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, title);
        }
        if count > 3 {
            println!("  {}", format!("... and {} more", count - 3).dimmed());
        }
        println!();
    }

    println!("{}", rule);
    println!(
        "{} {} channels, {} categories",
        "TOTAL:".bold(),
        playlist.total(),
        playlist.len()
    );
    println!("{}", rule);
}

fn handle_classify(title: &str) -> Result<()> {
    let categorizer = Categorizer::new()?;
    println!("{}", categorizer.classify(title));
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(KanalsortError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
