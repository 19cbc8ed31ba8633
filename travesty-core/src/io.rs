use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads a whole text file and returns it as a single `String`.
///
/// - Line breaks are kept as they are: they take part in the analysis
///   like any other character
/// - Fails with `InvalidData` if the file is not valid UTF-8
pub fn read_source_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Writes `text` to `filename`, replacing any previous content.
///
/// Missing parent directories are created.
pub fn write_text<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<()> {
	let path = filename.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	let mut file = File::create(path)?;
	file.write_all(text.as_bytes())?;
	file.flush()
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./corpus/hamlet.txt"` → `"hamlet"`
/// - `"hamlet.txt"` → `"hamlet"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_keeps_line_breaks() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("source.txt");
		fs::write(&path, "first line\nsecond line\n").unwrap();

		let text = read_source_text(&path).unwrap();
		assert_eq!(text, "first line\nsecond line\n");
	}

	#[test]
	fn read_missing_file_fails() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_source_text(dir.path().join("missing.txt")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn write_creates_parent_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out").join("nested").join("result.txt");

		write_text(&path, "travesty").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "travesty");

		write_text(&path, "again").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "again");
	}

	#[test]
	fn filename_strips_directories_and_extension() {
		assert_eq!(get_filename("./corpus/hamlet.txt").unwrap(), "hamlet");
		assert_eq!(get_filename("hamlet.txt").unwrap(), "hamlet");
		assert!(get_filename("/").is_err());
	}
}
