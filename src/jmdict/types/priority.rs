//! Priority tokens (`<ke_pri>`, `<re_pri>`).
//!
//! A priority token packs two things into one string: the reference list the
//! word was found in, and a rank within that list.
//!
//! - `news1`/`news2`: first or second 12,000 words of the Mainichi Shimbun
//!   word frequency file.
//! - `ichi1`/`ichi2`: listed in "Ichimango goi bunruishuu"; `ichi2` entries
//!   were demoted for low observed frequency.
//! - `spec1`/`spec2`: detected as common but absent from the other lists.
//! - `gai1`/`gai2`: common loanwords, from the same frequency file.
//! - `nfXX`: the 500-word frequency bucket the word falls in, `01` being
//!   the most frequent.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::error::PriorityError;

/// Words per `nf` frequency bucket.
pub const NF_BUCKET_SIZE: u32 = 500;

static PRIORITY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached priority token pattern.
fn priority_regex() -> &'static Regex {
    PRIORITY_PATTERN.get_or_init(|| {
        Regex::new(r"^(news|ichi|gai|spec|nf)([0-9]{1,2})?$").expect("Invalid priority regex pattern")
    })
}

/// The reference list a priority token points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriorityCode {
    News,
    Ichi,
    Gai,
    Spec,
    Nf,
}

impl PriorityCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            PriorityCode::News => "news",
            PriorityCode::Ichi => "ichi",
            PriorityCode::Gai => "gai",
            PriorityCode::Spec => "spec",
            PriorityCode::Nf => "nf",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "news" => Some(PriorityCode::News),
            "ichi" => Some(PriorityCode::Ichi),
            "gai" => Some(PriorityCode::Gai),
            "spec" => Some(PriorityCode::Spec),
            "nf" => Some(PriorityCode::Nf),
            _ => None,
        }
    }
}

impl fmt::Display for PriorityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decomposed priority token.
///
/// `rank` is `None` only when the token carried no digits, which the grammar
/// allows for every code except `nf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority {
    pub code: PriorityCode,
    pub rank: Option<u8>,
}

impl Priority {
    /// Parses a raw token such as `news1` or `nf23`.
    pub fn parse(raw: &str) -> Result<Self, PriorityError> {
        let malformed = || PriorityError { raw: raw.to_string() };

        let caps = priority_regex().captures(raw).ok_or_else(malformed)?;
        let code = PriorityCode::from_prefix(&caps[1]).ok_or_else(malformed)?;

        let rank = match caps.get(2) {
            Some(digits) => {
                let rank: u8 = digits.as_str().parse().map_err(|_| malformed())?;
                if rank == 0 {
                    return Err(malformed());
                }
                Some(rank)
            }
            None if code == PriorityCode::Nf => return Err(malformed()),
            None => None,
        };

        Ok(Priority { code, rank })
    }

    /// Whether this token marks the word as common, the "(P)" marker of EDICT.
    pub fn is_common(&self) -> bool {
        match self.code {
            PriorityCode::News | PriorityCode::Ichi | PriorityCode::Gai => self.rank == Some(1),
            PriorityCode::Spec => matches!(self.rank, Some(1) | Some(2)),
            PriorityCode::Nf => false,
        }
    }

    /// For `nf` tokens, the 1-based range of word ranks covered by the bucket.
    pub fn frequency_bucket(&self) -> Option<RangeInclusive<u32>> {
        match (self.code, self.rank) {
            (PriorityCode::Nf, Some(rank)) => {
                let rank = u32::from(rank);
                Some((rank - 1) * NF_BUCKET_SIZE + 1..=rank * NF_BUCKET_SIZE)
            }
            _ => None,
        }
    }
}

impl FromStr for Priority {
    type Err = PriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::parse(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.rank) {
            (PriorityCode::Nf, Some(rank)) => write!(f, "nf{:02}", rank),
            (code, Some(rank)) => write!(f, "{}{}", code, rank),
            (code, None) => write!(f, "{}", code),
        }
    }
}
