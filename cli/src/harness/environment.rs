use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HarnessError;
use crate::logging::Log;

/// Directory created under the base directory to hold the test tree.
pub const ENVIRONMENT_DIR: &str = "acl_test_environment";

/// Subdirectories of the test tree, relative to its root.
pub const TEST_SUBDIRS: [&str; 3] = ["subdir1", "subdir2/nested_subdir", "subdir3"];

const FILES_PER_SUBDIR: usize = 3;

/// Pick the base directory: `explicit` if given, else `$TMPDIR`.
///
/// # Errors
///
/// Returns [`HarnessError::TmpDirUnset`] when neither is set.
pub fn resolve_base_dir(
    explicit: Option<PathBuf>,
    tmpdir: Option<OsString>,
) -> Result<PathBuf, HarnessError> {
    explicit
        .or_else(|| tmpdir.filter(|t| !t.is_empty()).map(PathBuf::from))
        .ok_or(HarnessError::TmpDirUnset)
}

/// Create the test tree under `root`: every [`TEST_SUBDIRS`] entry holding
/// `file_0.txt`..`file_2.txt`.
///
/// Existing directories and files are reused and overwritten.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn create_test_environment(root: &Path, log: &dyn Log) -> Result<(), HarnessError> {
    if !root.exists() {
        create_dir(root)?;
        log.info(&format!("Created base directory: {}", root.display()));
    }

    for subdir in TEST_SUBDIRS {
        let full = root.join(subdir);
        create_dir(&full)?;
        log.info(&format!("Created subdirectory: {}", full.display()));

        for i in 0..FILES_PER_SUBDIR {
            let file = full.join(format!("file_{i}.txt"));
            fs::write(&file, format!("This is a test file in {subdir}\n")).map_err(|source| {
                HarnessError::Create {
                    path: file.clone(),
                    source,
                }
            })?;
            log.debug(&format!("Created file: {}", file.display()));
        }
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), HarnessError> {
    fs::create_dir_all(path).map_err(|source| HarnessError::Create {
        path: path.to_path_buf(),
        source,
    })
}
