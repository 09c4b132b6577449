use super::SimpleResult;
use std::fs;
use std::path::{Path, PathBuf};

pub fn get_canonicalized_path<P: AsRef<Path>>(path: &P) -> SimpleResult<PathBuf> {
    let canonicalized_path = try_with!(
        path.as_ref().canonicalize(),
        "Failed to get canonicalized path for {:?}",
        path.as_ref()
    );
    Ok(canonicalized_path)
}

pub fn open_file<P: AsRef<Path>>(path: &P) -> SimpleResult<fs::File> {
    let file = try_with!(
        fs::File::open(path.as_ref()),
        "Failed to open {:?}",
        path.as_ref()
    );
    Ok(file)
}

pub fn require_file<P: AsRef<Path>>(path: &P) -> SimpleResult<()> {
    if !path.as_ref().is_file() {
        bail!("{:?} does not exist", path.as_ref());
    }
    Ok(())
}
