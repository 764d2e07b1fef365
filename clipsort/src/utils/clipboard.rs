// clipsort/src/utils/clipboard.rs
//! System clipboard access, available with the `clipboard` feature.

use anyhow::Result;

/// Reads the current text content of the system clipboard.
#[cfg(feature = "clipboard")]
pub fn read_from_clipboard() -> Result<String> {
    use anyhow::Context;

    let mut clipboard = arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    let text = clipboard
        .get_text()
        .context("The clipboard does not contain text")?;
    log::debug!("Read {} bytes from the clipboard.", text.len());
    Ok(text)
}

#[cfg(not(feature = "clipboard"))]
pub fn read_from_clipboard() -> Result<String> {
    anyhow::bail!("clipsort was built without clipboard support; pass the text on stdin or with --input-file")
}
