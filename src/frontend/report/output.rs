use std::path::{Path, PathBuf};

use crate::backend::selection::RankedResult;
use crate::frontend::RESULTS_FILE_SUFFIX;

use super::ReportError;


pub fn write_results(
    output_directory: Option<&Path>,
    results: &[RankedResult],
) -> Result<Option<PathBuf>, ReportError> {
    let Some(output_directory) = output_directory else {
        return Ok(None);
    };

    std::fs::create_dir_all(output_directory)?;

    let local_time = chrono::Local::now()
        .format("%YY-%mm-%dd_%HH-%MM-%SS-%3ff");

    let file_name = format!("{local_time}_{RESULTS_FILE_SUFFIX}");
    let file_path = output_directory.join(file_name);

    let json_data = serde_json::to_string_pretty(results)?;

    std::fs::write(&file_path, json_data)?;

    Ok(Some(file_path))
}
