use crate::Error;
use std::fmt::Display;
use std::str::FromStr;

/// Platform shards served by the api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Eune,
    Br,
    Tr,
    Na,
    Euw,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Eune, Region::Br, Region::Tr, Region::Na, Region::Euw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eune => "eune",
            Region::Br => "br",
            Region::Tr => "tr",
            Region::Na => "na",
            Region::Euw => "euw",
        }
    }

    /// `'eune','br','tr','na','euw'`
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|region| format!("'{}'", region))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == code)
            .ok_or_else(|| Error::InvalidRegion(s.to_string()))
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}
