//! Line-oriented NPC records: `<Variant> <Name> <X> <Y>`
//!
//! Tokens are separated by any whitespace. Names carry no whitespace and no
//! escaping is done.

use nom::bytes::complete::{take_till1, take_while, take_while1};
use nom::character::complete::i32 as coordinate;
use nom::combinator::all_consuming;
use nom::{IResult, Parser};

use crate::core::error::{ArenaError, Result};
use crate::entity::{Npc, Variant};

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace).parse(input)
}

fn blank(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}

fn gap(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace).parse(input)
}

fn fields(input: &str) -> IResult<&str, (&str, &str, i32, i32)> {
    let (rest, (_, variant, _, name, _, x, _, y, _)) = (
        blank, token, gap, token, gap, coordinate, gap, coordinate, blank,
    )
        .parse(input)?;
    Ok((rest, (variant, name, x, y)))
}

fn malformed(line: &str, reason: impl Into<String>) -> ArenaError {
    ArenaError::MalformedRecord {
        line: line.to_string(),
        reason: reason.into(),
    }
}

/// Parse one record into a live NPC
pub fn parse_record(line: &str) -> Result<Npc> {
    if line.trim().is_empty() {
        return Err(malformed(line, "empty line"));
    }

    let (_, (variant, name, x, y)) = all_consuming(fields).parse(line).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => malformed(
            line,
            format!("expected `<Variant> <Name> <X> <Y>`, stuck at {:?}", e.input),
        ),
        nom::Err::Incomplete(_) => malformed(line, "incomplete record"),
    })?;

    let variant: Variant = variant.parse()?;
    Npc::new(variant, name, x, y)
}

/// Serialize one NPC without a trailing newline
pub fn format_record(npc: &Npc) -> String {
    format!("{} {} {} {}", npc.variant(), npc.name(), npc.x(), npc.y())
}

impl Npc {
    /// Fail-soft parse: any bad record yields no NPC
    pub fn from_record(line: &str) -> Option<Npc> {
        parse_record(line).ok()
    }
}
