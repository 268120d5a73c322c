// src/cli/commands.rs
use crate::application::services::conversion_service::Conversion;
use crate::cli::args::OutputArgs;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::share_url::ShareUrl;
use crate::infrastructure::di::ServiceContainer;
use crate::util::helper::{expand_path, read_input, write_file};
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

fn read_page(input: Option<&Path>) -> CliResult<String> {
    read_input(input).map_err(|e| {
        let source = input
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        CliError::Io(e).context(format!("Failed to read {}", source))
    })
}

/// Writes the bookmark file to stdout or to disk; returns the file path
/// when one was written.
#[instrument(skip(conversion, settings), level = "debug")]
pub fn deliver(
    conversion: &Conversion,
    output: &OutputArgs,
    settings: &Settings,
) -> CliResult<Option<PathBuf>> {
    if output.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(conversion.bookmarks_html.as_bytes())?;
        stdout.flush()?;
        return Ok(None);
    }

    let target = expand_path(output.output.as_deref().unwrap_or(&settings.output_file));
    write_file(&target, &conversion.bookmarks_html)
        .map_err(|e| CliError::Io(e).context(format!("Failed to write {}", target.display())))?;
    debug!("Wrote {} bytes to {}", conversion.bookmarks_html.len(), target.display());
    Ok(Some(target))
}

fn report(conversion: &Conversion, written: Option<&Path>) {
    let count = conversion.count.to_string().green().bold();
    match written {
        Some(path) => eprintln!(
            "Bookmarks extracted successfully: {} bookmarks -> {}",
            count,
            path.display()
        ),
        None => eprintln!("Bookmarks extracted successfully: {} bookmarks", count),
    }
}

#[instrument(skip(services, settings), level = "debug")]
pub fn convert(
    input: Option<&Path>,
    output: &OutputArgs,
    services: &ServiceContainer,
    settings: &Settings,
) -> CliResult<()> {
    let html = read_page(input)?;
    let conversion = services.conversion_service.convert(&html)?;
    let written = deliver(&conversion, output, settings)?;
    report(&conversion, written.as_deref());
    Ok(())
}

/// Share URL from the argument, or from the clipboard when none was given
#[instrument(skip(clipboard), level = "debug")]
pub fn resolve_share_url(
    url: Option<&str>,
    clipboard: &dyn ClipboardService,
) -> CliResult<ShareUrl> {
    if let Some(url) = url {
        return Ok(ShareUrl::parse(url)?);
    }

    let text = clipboard.read_text().unwrap_or_else(|e| {
        debug!("Clipboard not readable: {}", e);
        None
    });

    match text {
        Some(text) if ShareUrl::looks_like_share_link(&text) => {
            eprintln!("{}", "Arc URL detected in clipboard.".yellow());
            Ok(ShareUrl::parse(&text)?)
        }
        _ => Err(CliError::InvalidInput(
            "Please enter a valid Arc sharing URL (none given and none found in clipboard)"
                .to_string(),
        )),
    }
}

#[instrument(skip(services, settings), level = "debug")]
pub fn fetch(
    url: Option<&str>,
    save_html: Option<&str>,
    output: &OutputArgs,
    services: &ServiceContainer,
    settings: &Settings,
) -> CliResult<()> {
    let share_url = resolve_share_url(url, services.clipboard_service.as_ref())?;
    eprintln!("Fetching content from {}...", share_url);

    let html = services.fetch_service.fetch_share_page(&share_url)?;
    eprintln!("{}", "Content fetched successfully".green());

    if let Some(path) = save_html {
        let target = expand_path(path);
        write_file(&target, &html)
            .map_err(|e| CliError::Io(e).context(format!("Failed to write {}", target.display())))?;
        debug!("Saved fetched page to {}", target.display());
    }

    let conversion = services.conversion_service.convert(&html)?;
    let written = deliver(&conversion, output, settings)?;
    report(&conversion, written.as_deref());
    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn count(input: Option<&Path>, services: &ServiceContainer) -> CliResult<()> {
    let html = read_page(input)?;
    let count = services.conversion_service.count(&html)?;
    println!("{}", count);
    Ok(())
}
