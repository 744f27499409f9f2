use std::str::FromStr;

use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map_res};
use nom::{Finish, IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Value(u64),
    Blank,
}

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

/// Classifies one input line. The whole line must be digits; anything left over is an error, so
/// `"12 "` and `"-3"` are rejected rather than partially read.
pub fn parse_line(line: &str) -> Result<Line, nom::error::Error<String>> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    match all_consuming(base10_numeric::<u64>).parse(line).finish() {
        Ok((_rest, n)) => Ok(Line::Value(n)),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}
