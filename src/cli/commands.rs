//! CLI command implementations.
//!
//! Each command is fetch -> algebra -> export; any failure along the
//! pipeline propagates to the caller as a structured error.

use std::path::{Path, PathBuf};

use log::info;

use crate::engine::Mixdown;
use crate::error::Result;

/// Mix the inputs additively and export the result.
pub async fn merge(
    session: &Mixdown,
    inputs: &[PathBuf],
    output: &Path,
    duration: Option<f64>,
) -> Result<()> {
    info!("Merging {} inputs", inputs.len());

    let buffers = session.fetch_audio(inputs).await?;
    let mixed = session.merge_by_buffer(&buffers, duration);
    session.export(&mixed, output).await?;

    println!(
        "Merged {} files -> {} ({:.3}s)",
        inputs.len(),
        output.display(),
        mixed.duration_secs()
    );

    Ok(())
}

/// Join the inputs end-to-end and export the result.
pub async fn concat(
    session: &Mixdown,
    inputs: &[PathBuf],
    output: &Path,
    duration: Option<f64>,
) -> Result<()> {
    info!("Concatenating {} inputs", inputs.len());

    let buffers = session.fetch_audio(inputs).await?;
    let joined = session.concat(&buffers, duration);
    session.export(&joined, output).await?;

    println!(
        "Concatenated {} files -> {} ({:.3}s)",
        inputs.len(),
        output.display(),
        joined.duration_secs()
    );

    Ok(())
}

/// Extract a sample range from a single input and export it.
pub async fn slice(
    session: &Mixdown,
    input: &Path,
    output: &Path,
    start: Option<i64>,
    end: Option<i64>,
    duration: f64,
) -> Result<()> {
    info!("Slicing {}", input.display());

    let buffers = session.fetch_audio(&[input]).await?;
    let sliced = session.slice(&buffers[0], start, end, duration);
    session.export(&sliced, output).await?;

    println!(
        "Sliced {} -> {} ({:.3}s)",
        input.display(),
        output.display(),
        sliced.duration_secs()
    );

    Ok(())
}
