use regex::Regex;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;
use std::sync::OnceLock;

use crate::formatting::parse_grouped_number;

/// Header that opens the benchmark section whose data lines get a rate.
pub const TARGET_SECTION_HEADER: &str = "Iteration with Insertion and Containment Check";

/// Prefix shared by every benchmark section header.
pub const SECTION_PREFIX: &str = "Iteration";

/// Index of the median column once a benchmark line has been tokenised.
pub const MEDIAN_TOKEN_INDEX: usize = 4;

// ── Retweet records ───────────────────────────────────────────────────────────

/// Scalar identifier of a Twitter user as it appears in a cascade file.
///
/// Any JSON scalar is accepted, `null` included. Arrays and objects fail
/// deserialisation with a message naming `user.id`.
#[derive(Debug, Clone, PartialEq)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
    Null,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
            UserId::Flag(b) => write!(f, "{}", b),
            UserId::Null => f.write_str("null"),
        }
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `deserialize_any` keeps an absent `id` a "missing field" error.
        deserializer.deserialize_any(UserIdVisitor)
    }
}

struct UserIdVisitor;

impl<'de> Visitor<'de> for UserIdVisitor {
    type Value = UserId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, string, boolean or null for `user.id`")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<UserId, E> {
        Ok(UserId::Flag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<UserId, E> {
        Ok(UserId::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<UserId, E> {
        Ok(UserId::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<UserId, E> {
        serde_json::Number::from_f64(v)
            .map(UserId::Number)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<UserId, E> {
        Ok(UserId::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<UserId, E> {
        Ok(UserId::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<UserId, E> {
        Ok(UserId::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<UserId, E> {
        Ok(UserId::Null)
    }
}

/// The retweeting user. Only the id is read.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: UserId,
}

/// The part of a retweet record needed to list the retweeting users.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub user: User,
}

/// The part of a retweet record needed to count timestamps.
///
/// `created_at` is kept as the raw string: it is a grouping key, never a
/// parsed date.
#[derive(Debug, Clone, Deserialize)]
pub struct TimestampRecord {
    pub created_at: String,
}

// ── Benchmark log lines ───────────────────────────────────────────────────────

/// How a single benchmark log line affects section tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens the section whose data lines are annotated.
    TargetHeader,
    /// Opens any other section.
    OtherHeader,
    /// Anything that is not a section header.
    Data,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with(TARGET_SECTION_HEADER) {
            LineKind::TargetHeader
        } else if line.starts_with(SECTION_PREFIX) {
            LineKind::OtherHeader
        } else {
            LineKind::Data
        }
    }

    pub fn is_header(self) -> bool {
        !matches!(self, LineKind::Data)
    }
}

/// A data line from benchmark output, tokenised on single spaces after
/// runs of spaces have been collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord<'a> {
    tokens: Vec<&'a str>,
}

fn space_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(" +").expect("static regex is valid"))
}

impl<'a> BenchmarkRecord<'a> {
    /// Tokenise `line`. Returns `None` when fewer than five tokens remain.
    ///
    /// A leading run of spaces yields an empty first token, so the median
    /// column shifts the same way it does in the raw text.
    pub fn parse(line: &'a str) -> Option<Self> {
        let tokens: Vec<&str> = space_runs().split(line).collect();
        if tokens.len() <= MEDIAN_TOKEN_INDEX {
            return None;
        }
        Some(Self { tokens })
    }

    /// The raw median token, commas included.
    pub fn median_token(&self) -> &'a str {
        self.tokens[MEDIAN_TOKEN_INDEX]
    }

    /// Median duration in nanoseconds, or `None` when the token is not a
    /// number once thousands separators are removed.
    pub fn median_nanos(&self) -> Option<f64> {
        parse_grouped_number(self.median_token())
    }
}
