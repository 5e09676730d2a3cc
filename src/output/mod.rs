//! Output formatting and file writing
//!
//! A walk result is written as three files inside the output directory (the
//! text report plus isomorphic JSON and YAML renderings) and optionally
//! bundled into a single gzipped tarball.

use std::fs;
use std::io;
use std::path::Path;

mod archive;
mod json;
mod report;
mod yaml;

pub use archive::bundle;
pub use json::to_json;
pub use report::ReportFormatter;
pub use yaml::to_yaml;

/// File name of the text report inside the output directory.
pub const TREE_TEXT_FILE: &str = "visual_directory_structure.txt";
/// File name of the JSON rendering inside the output directory.
pub const JSON_FILE: &str = "directory_structure.json";
/// File name of the YAML rendering inside the output directory.
pub const YAML_FILE: &str = "directory_structure.yaml";

/// Write the report and both structural renderings into `dir`, creating the
/// directory first if needed.
pub fn write_outputs(dir: &Path, report: &str, json: &str, yaml: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(TREE_TEXT_FILE), report)?;
    fs::write(dir.join(JSON_FILE), json)?;
    fs::write(dir.join(YAML_FILE), yaml)?;
    Ok(())
}
