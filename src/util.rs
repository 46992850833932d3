use std::io::Read;

use anyhow::{Context as _, Result};
use camino::{Utf8Path, Utf8PathBuf};

pub fn write_to_output<F>(output: Option<&Utf8Path>, f: F) -> Result<()>
where
    F: FnOnce(Box<dyn std::io::Write>) -> Result<()>,
{
    let stream: Box<dyn std::io::Write> = if let Some(path) = output {
        let file = std::fs::File::create(path).context("Failed to create output file")?;
        let stream = anstream::StripStream::new(file);
        Box::new(stream)
    } else {
        Box::new(anstream::stdout().lock())
    };
    f(stream)?;
    Ok(())
}

pub enum Input {
    File { path: Utf8PathBuf, text: String },
    Stdin { text: String },
}

impl Input {
    /// Reads a file, or stdin when there is no path or it is `-`
    #[tracing::instrument(level = "debug")]
    pub fn read(path: Option<&Utf8Path>) -> Result<Self> {
        match path.filter(|p| p.as_str() != "-") {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read recipe: '{path}'"))?;
                Ok(Input::File {
                    path: path.to_owned(),
                    text,
                })
            }
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                Ok(Input::Stdin { text })
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Input::File { text, .. } | Input::Stdin { text } => text,
        }
    }

    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Input::File { path, .. } => Some(path),
            Input::Stdin { .. } => None,
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Input::File { path, .. } => path.file_name().unwrap_or(path.as_str()),
            Input::Stdin { .. } => "STDIN",
        }
    }
}
