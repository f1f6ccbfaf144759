use crate::{census::MotifCensus, Graph, MotifError, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a motif catalog:
///
/// ```text
/// n=<n>
/// count=<number of motifs>
/// #1
/// <src> <dst>
/// ...
/// ```
pub fn write_catalog<W: Write>(writer: &mut W, n: usize, graphs: &[Graph]) -> io::Result<()> {
    writeln!(writer, "n={}", n)?;
    writeln!(writer, "count={}", graphs.len())?;
    for (i, g) in graphs.iter().enumerate() {
        writeln!(writer, "#{}", i + 1)?;
        write!(writer, "{}", g)?;
    }
    Ok(())
}

/// Like [`write_catalog`], with a `count=<occurrences>` line after each `#<i>` marker.
pub fn write_census<W: Write>(writer: &mut W, census: &MotifCensus) -> io::Result<()> {
    writeln!(writer, "n={}", census.motif_size())?;
    writeln!(writer, "count={}", census.catalog.len())?;
    for (i, (g, count)) in census.iter().enumerate() {
        writeln!(writer, "#{}", i + 1)?;
        writeln!(writer, "count={}", count)?;
        write!(writer, "{}", g)?;
    }
    Ok(())
}

/// Write `graph` as a plain edge list, readable by [`crate::parser::parse_edge_list`].
pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    save_with(path, |w| write!(w, "{}", graph))
}

pub fn save_catalog(path: &Path, n: usize, graphs: &[Graph]) -> Result<()> {
    debug!("Writing connected sub_graphs to {}", path.display());
    save_with(path, |w| write_catalog(w, n, graphs))
}

pub fn save_census(path: &Path, census: &MotifCensus) -> Result<()> {
    debug!("Writing motifs to {}", path.display());
    save_with(path, |w| write_census(w, census))
}

/// Create `path` (and its parent directory) and fill it through `fill`
fn save_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MotifError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| MotifError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    fill(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| MotifError::io(path, e))
}
