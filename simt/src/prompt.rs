//! Interactive prompts on the terminal.
//!
//! Everything here is generic over the reader and writer so the prompts work the same against
//! stdin/stdout as against in-memory buffers.
use anyhow::Context;
use std::io::{BufRead, Write};

/// Print `prompt` and read one line of input, without its line ending.
///
/// Fails if the input is already at its end, since there's no answer to give.
pub fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> anyhow::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    anyhow::ensure!(read > 0, "Input ended before an answer to '{prompt}' was given");

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a true/false question, repeating it until the answer is "true" or "false" in any
/// capitalization.  Anything else is reported and asked again; it's never taken as a default.
pub fn prompt_bool(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> anyhow::Result<bool> {
    loop {
        match prompt_line(input, output, prompt)?.to_lowercase().as_str() {
            "true" => return Ok(true),
            "false" => return Ok(false),
            _ => writeln!(output, "Invalid input; please enter True or False.")?,
        }
    }
}
