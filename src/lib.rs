pub mod error;
pub mod parser;

use std::fmt;
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use error::Error;
use parser::{parse_line, Line};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const INPUT_PATH: &str = "input/day1.txt";

pub fn load_input<P>(path: P) -> Result<String>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");

    Ok(text)
}

/// Sums each blank-line separated group, in file order.
///
/// A blank line closes the current group. The last group is closed by end-of-input whether or
/// not the text ends with a newline, but a group is only ever closed once, so `"1\n\n"` yields a
/// single group.
pub fn group_sums(text: &str) -> Result<Vec<u64>> {
    let mut sums = Vec::new();
    // None until the current group has seen a value.
    let mut acc: Option<u64> = None;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        match parse_line(line).map_err(|source| Error::Parse {
            line: line_no,
            text: line.to_owned(),
            source,
        })? {
            Line::Blank => {
                sums.push(acc.take().unwrap_or(0));
            }
            Line::Value(n) => {
                let total = acc
                    .unwrap_or(0)
                    .checked_add(n)
                    .ok_or(Error::Overflow { line: line_no })?;
                acc = Some(total);
            }
        }
    }
    sums.extend(acc);

    debug!(groups = sums.len(), "grouped input");
    Ok(sums)
}

pub fn rank_descending(sums: &[u64]) -> Vec<u64> {
    sums.iter().copied().sorted_unstable_by(|a, b| b.cmp(a)).collect()
}

/// Sum of the `n` largest group sums. Fails rather than summing fewer than `n`.
pub fn top_sum(sums: &[u64], n: usize) -> Result<u64> {
    ensure_groups(sums, n)?;
    Ok(rank_descending(sums).into_iter().take(n).sum())
}

fn ensure_groups(sums: &[u64], needed: usize) -> Result<()> {
    if sums.len() < needed {
        return Err(Error::InsufficientData {
            needed,
            found: sums.len(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub part1: u64,
    pub part2: u64,
}

impl Report {
    pub fn from_group_sums(sums: &[u64]) -> Result<Report> {
        ensure_groups(sums, 3)?;
        let ranked = rank_descending(sums);
        let part1 = ranked[0];
        let part2 = ranked[..3].iter().sum();
        debug!(part1, part2, "ranked groups");

        Ok(Report { part1, part2 })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "Part 1: {}", self.part1)?;
        write!(fmt, "Part 2: {}", self.part2)
    }
}

pub fn run<P>(path: P) -> Result<Report>
where
    P: AsRef<Path>,
{
    let text = load_input(path)?;
    let sums = group_sums(&text)?;
    Report::from_group_sums(&sums)
}
