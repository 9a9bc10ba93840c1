//! Adapter for an external BLAST-like search program.
//!
//! The program is invoked once per job with the query sequence on stdin and
//! is expected to print tabular output (BLAST `-outfmt 6`): qseqid, sseqid,
//! pident, length, mismatch, gapopen, qstart, qend, sstart, send, evalue,
//! bitscore.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::search::config::DatabaseParams;
use crate::search::job::{Aligner, Hit, SearchError};

/// Runs an external search binary and parses its tabular output.
pub struct TabularAligner {
    program: PathBuf,
}

impl TabularAligner {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Aligner for TabularAligner {
    fn align(
        &mut self,
        query: &[u8],
        database: &str,
        params: &DatabaseParams,
    ) -> Result<Vec<Hit>, SearchError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-db")
            .arg(database)
            .args(["-outfmt", "6", "-query", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if params.ungapped {
            command.arg("-ungapped");
        }
        if params.unmasked {
            command.args(["-dust", "no"]);
        }

        debug!("running {:?} against '{database}'", self.program);

        let mut child = command.spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(query)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(SearchError::Aligner(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_tabular_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse BLAST outfmt-6 text into hits.
///
/// # Errors
///
/// Returns `SearchError::Aligner` if any line is malformed.
pub fn parse_tabular_output(text: &str) -> Result<Vec<Hit>, SearchError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_hit_line)
        .collect()
}

fn parse_hit_line(line: &str) -> Result<Hit, SearchError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 12 {
        return Err(SearchError::Aligner(format!(
            "malformed tabular hit line: '{line}'"
        )));
    }

    let num = |i: usize| -> Result<u64, SearchError> {
        fields[i]
            .parse()
            .map_err(|_| SearchError::Aligner(format!("invalid coordinate '{}'", fields[i])))
    };
    let float = |i: usize| -> Result<f64, SearchError> {
        fields[i]
            .parse()
            .map_err(|_| SearchError::Aligner(format!("invalid score '{}'", fields[i])))
    };

    let (sstart, send) = (num(8)?, num(9)?);
    // Reverse-strand hits report target coordinates high-to-low
    let (target_start, target_end, strand) = if sstart <= send {
        (sstart, send, 1)
    } else {
        (send, sstart, -1)
    };

    Ok(Hit {
        query_name: fields[0].to_string(),
        target_name: fields[1].to_string(),
        query_start: num(6)?,
        query_end: num(7)?,
        target_start,
        target_end,
        strand,
        score: float(11)?,
        identity: float(2)? / 100.0,
    })
}
