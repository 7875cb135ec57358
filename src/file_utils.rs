use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and output-path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Output path for a translated document
    // @params: input path, filename template, target language code
    //
    // The template sees three tokens: `*` for the base name (everything
    // before the final dot), `{ext}` for the original extension, and
    // `{lang}` for the lowercased language code. The derived name stays
    // in the input file's directory; an existing file at that path is
    // simply overwritten on write.
    pub fn derive_output_path<P: AsRef<Path>>(path: P, template: &str, lang_code: &str) -> PathBuf {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Extension is the text after the final dot; no dot means the
        // whole name is the base and the extension is empty.
        let (base, extension) = match file_name.rfind('.') {
            Some(idx) => (file_name[..idx].to_string(), file_name[idx + 1..].to_string()),
            None => (file_name.clone(), String::new()),
        };

        let derived = template
            .replace("{lang}", &lang_code.to_lowercase())
            .replace("{ext}", &extension)
            .replace('*', &base);

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(derived),
            _ => PathBuf::from(derived),
        }
    }
}
