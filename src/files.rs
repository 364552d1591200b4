//! Management of source files
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::lex_warn;

pub const DEFAULT_SOURCE: &str = "hello.asm";

const SOURCE_EXTENSIONS: [&str; 4] = ["asm", "s", "a65", "inc"];

pub fn is_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Process the target argument. Nothing means hello.asm in the working directory,
/// a folder means hello.asm inside of that folder
pub fn get_target(argument: Option<String>) -> PathBuf {
    let mut target_path = match argument {
        Some(target) => Path::new(&target).to_path_buf(),
        None => return Path::new(DEFAULT_SOURCE).to_path_buf(),
    };

    if target_path.is_dir() {
        target_path.push(DEFAULT_SOURCE);
    }
    target_path
}

/// Opens the source for line by line reading. Unknown extensions are only warned about.
pub fn open_source(target: &Path) -> io::Result<BufReader<File>> {
    if !is_source_extension(target) {
        lex_warn!(
            target,
            None,
            "This does not look like an assembly file, classifying it anyway"
        );
    }
    let file = File::open(target)?;
    Ok(BufReader::new(file))
}
