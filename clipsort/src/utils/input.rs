// clipsort/src/utils/input.rs
//! Gathers the text to classify.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::utils::clipboard::read_from_clipboard;

/// Where the input text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    File(&'a Path),
    Clipboard,
    Stdin,
}

impl<'a> InputSource<'a> {
    /// A file wins over the clipboard; stdin is the fallback.
    pub fn select(input_file: Option<&'a Path>, clipboard: bool) -> Self {
        match (input_file, clipboard) {
            (Some(path), _) => InputSource::File(path),
            (None, true) => InputSource::Clipboard,
            (None, false) => InputSource::Stdin,
        }
    }
}

/// Reads the whole input from `source`.
pub fn read_input(source: InputSource<'_>) -> Result<String> {
    let text = match source {
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        InputSource::Clipboard => read_from_clipboard()?,
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    debug!("Read {} bytes of input from {:?}.", text.len(), source);
    Ok(text)
}

/// Removes ANSI escape sequences, such as colours copied from a terminal.
pub fn strip_ansi(text: &str) -> String {
    let stripped = strip_ansi_escapes::strip(text.as_bytes());
    String::from_utf8_lossy(&stripped).into_owned()
}
