use crate::cli::OrderArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use foldrank::core::io::names::read_names_from_path;
use foldrank::engine::progress::ProgressReporter;
use foldrank::engine::ranking::Ranking;
use foldrank::workflows;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(args: OrderArgs, show_progress: bool) -> Result<()> {
    let app_config = build_config(&args)?;

    info!("Loading names from {:?}", &app_config.input_path);
    let names = read_names_from_path(&app_config.input_path).map_err(|e| {
        CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        }
    })?;
    info!("Loaded {} names.", names.len());

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    let ranking =
        workflows::order::run_with_config(&names, &app_config.core_config, &reporter).await?;

    let (names_path, table_path) = write_outputs(&ranking, &app_config.output_base)?;
    println!(
        "✓ Ordered {} names written to: {} and {}",
        ranking.len(),
        names_path.display(),
        table_path.display()
    );
    Ok(())
}

/// `<base>.<extension>`, appended rather than replacing any existing extension.
fn with_suffix(base: &Path, extension: &str) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Writes `<base>.txt` and `<base>.tsv`.
///
/// Both renderings are produced first, then staged next to their targets and
/// renamed into place. On any failure the staged files are removed, along with any
/// target this call already renamed, so a failed call never leaves half a pair.
pub fn write_outputs(ranking: &Ranking, base: &Path) -> Result<(PathBuf, PathBuf)> {
    let names_text = ranking.render_names();
    let table_text = ranking.render_table()?;

    let names_path = with_suffix(base, "txt");
    let table_path = with_suffix(base, "tsv");
    let outputs = [(&names_path, &names_text), (&table_path, &table_text)];
    let staged: Vec<PathBuf> = outputs
        .iter()
        .map(|(path, _)| with_suffix(path, "part"))
        .collect();

    let mut committed = Vec::new();
    let result = stage_and_commit(&outputs, &staged, &mut committed);
    if result.is_err() {
        for path in staged.iter().chain(&committed) {
            let _ = fs::remove_file(path);
        }
    }
    result?;

    Ok((names_path, table_path))
}

fn stage_and_commit(
    outputs: &[(&PathBuf, &String)],
    staged: &[PathBuf],
    committed: &mut Vec<PathBuf>,
) -> Result<()> {
    for ((_, contents), part) in outputs.iter().zip(staged) {
        fs::write(part, contents).map_err(|source| CliError::Output {
            path: part.clone(),
            source,
        })?;
    }
    for ((path, _), part) in outputs.iter().zip(staged) {
        info!("Writing {:?}", path);
        fs::rename(part, path).map_err(|source| CliError::Output {
            path: (*path).clone(),
            source,
        })?;
        committed.push((*path).clone());
    }
    Ok(())
}
