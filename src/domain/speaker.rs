use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    Incoming,
    Outgoing,
    Unknown,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Incoming => "incoming",
            Speaker::Outgoing => "outgoing",
            Speaker::Unknown => "unknown",
        }
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(Speaker::Incoming),
            "outgoing" => Ok(Speaker::Outgoing),
            "unknown" => Ok(Speaker::Unknown),
            _ => Err(format!("Invalid speaker: {}", s)),
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
