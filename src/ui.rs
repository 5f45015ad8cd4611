// UI layer: prints the numbered file list, asks which files to send and
// drives the upload loop. Everything runs synchronously on the main thread.

use crate::api::DeviceClient;
use crate::discover::{find_html_files, FileEntry};
use crate::options::Options;
use crate::selection::parse_selection;
use anyhow::{Context, Result};
use console::Term;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

/// Run one interactive upload session. Returns the exit code the process
/// should end with; fatal I/O problems bubble up as errors.
pub fn run(options: &Options) -> Result<ExitCode> {
    print_rule();
    println!("Uploading .html files to the signage tablet");
    print_rule();

    let dir = options.scan_dir();
    let files = find_html_files(&dir)?;
    if files.is_empty() {
        println!("No .html files found in {}.", dir.display());
        return Ok(ExitCode::from(1));
    }

    println!("\nFound .html files:");
    print_numbered(&files);
    println!("\nSelect (e.g. 1,3,5 or 2-4) or type 'all':");
    let answer = read_selection()?;

    let indices = match parse_selection(&answer, files.len()) {
        Ok(indices) => indices,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::from(1));
        }
    };
    let selected: Vec<&FileEntry> = indices.iter().map(|&i| &files[i - 1]).collect();
    log::debug!("selected {:?}", indices);

    let api = DeviceClient::new(&options.base_url, options.timeout())?;
    let mut successes = 0;
    for entry in &selected {
        if api.upload(&entry.path).success {
            successes += 1;
        }
    }

    println!();
    print_rule();
    println!("UPLOAD FINISHED! Successful: {}/{}", successes, selected.len());
    print_rule();
    if successes > 0 {
        println!("\nNEXT STEPS:");
        println!();
        println!("1. Restart the application on the tablet if needed");
        println!("2. Open /assets/{{file_name}} to verify the upload");
    }
    Ok(ExitCode::SUCCESS)
}

fn print_rule() {
    println!("{}", "=".repeat(70));
}

fn print_numbered(files: &[FileEntry]) {
    for (idx, entry) in files.iter().enumerate() {
        println!("{}. {}", idx + 1, entry.name);
    }
}

/// Read the selection line. An attended terminal gets a `dialoguer`
/// prompt; piped input is read as a plain line so runs can be scripted.
/// Closed stdin is an error rather than an empty answer.
fn read_selection() -> Result<String> {
    if Term::stdout().is_term() && io::stdin().is_terminal() {
        let answer: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read selection")?;
        return Ok(answer);
    }

    print!("> ");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read selection")?;
    if read == 0 {
        anyhow::bail!("No selection given");
    }
    Ok(line)
}
