use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Result};

fn column_names(dimension: usize) -> Vec<String> {
    match dimension {
        2 => vec!["x".to_string(), "y".to_string()],
        3 => vec!["x".to_string(), "y".to_string(), "z".to_string()],
        _ => (0..dimension).map(|i| format!("x{}", i)).collect(),
    }
}

/// Write a comma separated table: a header row, then one row per point with its coordinates
/// followed by its cluster label.
pub fn write_labeled_points<W: Write, P: AsRef<[f32]>>(
    writer: &mut W,
    data: &[P],
    labels: &[usize],
) -> Result<()> {
    if data.len() != labels.len() {
        return Err(anyhow!(
            "Number of points {} is not equal to number of labels {}",
            data.len(),
            labels.len()
        ));
    }

    let dimension = data.first().map(|p| p.as_ref().len()).unwrap_or(0);
    let mut header = column_names(dimension);
    header.push("label".to_string());
    writeln!(writer, "{}", header.join(","))?;

    for (point, label) in data.iter().zip(labels.iter()) {
        for x in point.as_ref() {
            write!(writer, "{},", x)?;
        }
        writeln!(writer, "{}", label)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_labeled_points_to_file<P: AsRef<[f32]>>(
    path: &Path,
    data: &[P],
    labels: &[usize],
) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| anyhow!("Failed to open {} for writing: {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);
    write_labeled_points(&mut writer, data, labels)
}
