use crate::cmd_utils::plural_suffix;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Concatenate `inputs` into `output`, each input preceded by a newline.
pub struct Combiner {
    output: PathBuf,
    inputs: Vec<PathBuf>,
}

impl Combiner {
    /// Split a command line (program name excluded) into output and inputs.
    ///
    /// Return `None` if there are less than two paths.
    pub fn new<I, P>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut paths = paths.into_iter().map(Into::into);
        let output = paths.next()?;
        Self::with_inputs(output, paths.collect())
    }

    /// Return `None` if `inputs` is empty.
    pub fn with_inputs(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Option<Self> {
        if inputs.is_empty() {
            return None;
        }
        Some(Self {
            output: output.into(),
            inputs,
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn summary(&self) -> String {
        let count = self.inputs.len();
        format!(
            "Combining {count} file{} into \"{}\"",
            plural_suffix(count),
            self.output.display()
        )
    }

    /// Read every input in order into a single buffer.
    ///
    /// Stops at the first unreadable input. Nothing is written.
    pub fn read_inputs(&self) -> Result<String> {
        info!("----- Read {} inputs -----", self.inputs.len());
        let mut buffer = String::new();
        for path in &self.inputs {
            if same_file(path, &self.output) {
                warn!(
                    "{} is both an input and the output, its current content is used",
                    path.display()
                );
            }
            let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
            debug!("{}: {} characters", path.display(), content.chars().count());
            buffer.push('\n');
            buffer.push_str(&content);
        }
        Ok(buffer)
    }

    /// Create (or truncate) the output and write `buffer` to it.
    pub fn write_output(&self, buffer: &str) -> Result<()> {
        info!("----- Write {} -----", self.output.display());
        std::fs::write(&self.output, buffer).map_err(|e| Error::write(&self.output, e))
    }

    pub fn run(&self) -> Result<Report> {
        let buffer = self.read_inputs()?;
        self.write_output(&buffer)?;
        Ok(Report {
            output: self.output.clone(),
            input_count: self.inputs.len(),
            char_count: buffer.chars().count(),
        })
    }
}

/// Outcome of a successful combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    output: PathBuf,
    input_count: usize,
    char_count: usize,
}

impl Report {
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of characters (not bytes) written to the output.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn completion(&self) -> String {
        format!("Finished! ({} characters total)", self.char_count)
    }
}

/// Whether `a` and `b` name the same file.
///
/// Both are canonicalized when they exist, so `./out.txt` matches `out.txt`.
/// Otherwise the paths are compared as written.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Combine `infiles` into `outfile` in one call.
///
/// Unlike [`Combiner::new`], an empty `infiles` is accepted and produces an empty output.
pub fn combine<O: AsRef<Path>, P: AsRef<Path>>(outfile: O, infiles: &[P]) -> Result<Report> {
    let combiner = Combiner {
        output: outfile.as_ref().to_path_buf(),
        inputs: infiles.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    };
    combiner.run()
}
