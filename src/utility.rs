use std::{fs::File, io, path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error::LoadError, loading::QueryInput};

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {elapsed_precise}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Reads a query document from `path`, or from stdin if there is none.
pub fn read_query_with_spinner(path: Option<&Path>) -> Result<QueryInput, LoadError> {
    match path {
        Some(path) => {
            let spinner = get_progressspinner(&format!("Reading {}", path.display()));
            let file = File::open(path).map_err(|error| {
                LoadError::Io(format!("{}: {}", path.display(), error))
            })?;
            let input = QueryInput::from_reader(io::BufReader::new(file));
            spinner.finish_and_clear();
            input
        }
        None => QueryInput::from_reader(io::stdin().lock()),
    }
}
