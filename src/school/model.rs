//! School record types.
//!
//! `School` mirrors a row of the `schools` table as the backend returns it.
//! `NewSchool` is the payload inserted after a submission passes validation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error returned when a select value is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Examination board the school is affiliated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    #[serde(rename = "ICSE")]
    Icse,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "CBSE")]
    Cbse,
    State,
    #[serde(rename = "IB")]
    Ib,
}

impl Board {
    pub const ALL: [Self; 5] = [Self::Icse, Self::Isc, Self::Cbse, Self::State, Self::Ib];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Icse => "ICSE",
            Self::Isc => "ISC",
            Self::Cbse => "CBSE",
            Self::State => "State",
            Self::Ib => "IB",
        }
    }
}

/// Student body composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    #[serde(rename = "All Girl")]
    AllGirl,
    #[serde(rename = "All Boys")]
    AllBoys,
    #[serde(rename = "Co-ed")]
    CoEd,
}

impl SchoolType {
    pub const ALL: [Self; 3] = [Self::AllGirl, Self::AllBoys, Self::CoEd];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllGirl => "All Girl",
            Self::AllBoys => "All Boys",
            Self::CoEd => "Co-ed",
        }
    }
}

/// Whether boarding is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostelFacility {
    Yes,
    No,
}

impl HostelFacility {
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

macro_rules! wire_enum {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(Board, "board");
wire_enum!(SchoolType, "school type");
wire_enum!(HostelFacility, "hostel facility");

/// A school row as stored by the backend.
///
/// Enum columns and the image are nullable in the table, so rows created
/// outside this application may lack them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    #[serde(default)]
    pub board: Option<Board>,
    #[serde(default, rename = "type")]
    pub school_type: Option<SchoolType>,
    #[serde(default)]
    pub hostel_facility: Option<HostelFacility>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for the `schools` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub board: Board,
    #[serde(rename = "type")]
    pub school_type: SchoolType,
    pub hostel_facility: HostelFacility,
    pub image: Option<String>,
}
