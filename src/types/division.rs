//! Division selectors and the team-hierarchy records behind them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NCAA football divisions recognized by the provider.
///
/// Each division has its own team-hierarchy feed. [`Division::ALL`]
/// lists every division in the provider's documented order, which is
/// also the order batch fetches walk them in.
///
/// # Examples
///
/// ```rust
/// use ncaafb::Division;
///
/// assert_eq!(Division::FBS.as_str(), "FBS");
/// assert_eq!("naia".parse::<Division>().unwrap(), Division::NAIA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    FBS,
    FCS,
    D2,
    D3,
    NAIA,
    USCAA,
}

impl Division {
    /// Every division, in the provider's documented order.
    pub const ALL: [Division; 6] = [
        Division::FBS,
        Division::FCS,
        Division::D2,
        Division::D3,
        Division::NAIA,
        Division::USCAA,
    ];

    /// The path segment used in hierarchy endpoint URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::FBS => "FBS",
            Division::FCS => "FCS",
            Division::D2 => "D2",
            Division::D3 => "D3",
            Division::NAIA => "NAIA",
            Division::USCAA => "USCAA",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Division {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FBS" => Ok(Division::FBS),
            "FCS" => Ok(Division::FCS),
            "D2" | "DII" => Ok(Division::D2),
            "D3" | "DIII" => Ok(Division::D3),
            "NAIA" => Ok(Division::NAIA),
            "USCAA" => Ok(Division::USCAA),
            _ => Err(Error::InvalidDivision {
                value: s.to_string(),
            }),
        }
    }
}

/// Team hierarchy for one division, as returned by the hierarchy feed.
///
/// The document shape is owned by the provider: conferences either hold
/// teams directly (independents) or group them under subdivisions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DivisionHierarchy {
    pub id: String,
    pub name: String,
    #[serde(rename = "conference", default)]
    pub conferences: Vec<Conference>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Conference {
    pub id: String,
    pub name: String,
    #[serde(rename = "subdivision", default)]
    pub subdivisions: Vec<Subdivision>,
    /// Teams attached directly to the conference, without a subdivision
    /// layer in between.
    #[serde(rename = "team", default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subdivision {
    pub id: String,
    pub name: String,
    #[serde(rename = "team", default)]
    pub teams: Vec<Team>,
}

/// One team entry in a hierarchy.
///
/// `id` is the identifier boxscore endpoint paths are built from;
/// `market` and `name` are the human-readable halves ("Boston College"
/// / "Eagles").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: String,
    pub market: Option<String>,
    pub name: Option<String>,
    pub coverage: Option<String>,
    pub venue: Option<Venue>,
}

/// Home venue attached to a team or game entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Venue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub capacity: Option<u32>,
    pub surface: Option<String>,
    #[serde(rename = "type")]
    pub venue_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIERARCHY_XML: &str = r#"
        <division id="FBS" name="I-A">
            <conference id="ACC" name="ACC">
                <subdivision id="ACC-ATLANTIC" name="ATLANTIC">
                    <team id="BC" market="Boston College" name="Eagles" coverage="full">
                        <venue id="5ad2d6b9" name="Alumni Stadium" city="Chestnut Hill"
                               state="MA" country="USA" capacity="44500" surface="turf"
                               type="outdoor"/>
                    </team>
                    <team id="CLE" market="Clemson" name="Tigers"/>
                </subdivision>
            </conference>
            <conference id="IND-I-A" name="Independents">
                <team id="ND" market="Notre Dame" name="Fighting Irish"/>
            </conference>
        </division>
    "#;

    #[test]
    fn test_all_divisions_order() {
        let names: Vec<&str> = Division::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["FBS", "FCS", "D2", "D3", "NAIA", "USCAA"]);
    }

    #[test]
    fn test_division_display() {
        assert_eq!(Division::USCAA.to_string(), "USCAA");
        assert_eq!(format!("{}", Division::D2), "D2");
    }

    #[test]
    fn test_division_from_str_case_insensitive() {
        assert_eq!("fbs".parse::<Division>().unwrap(), Division::FBS);
        assert_eq!("Fcs".parse::<Division>().unwrap(), Division::FCS);
        assert_eq!("dii".parse::<Division>().unwrap(), Division::D2);
        assert_eq!("DIII".parse::<Division>().unwrap(), Division::D3);
        assert_eq!("uscaa".parse::<Division>().unwrap(), Division::USCAA);
    }

    #[test]
    fn test_division_from_str_invalid() {
        let err = "D4".parse::<Division>().unwrap_err();
        assert!(matches!(err, Error::InvalidDivision { .. }));
    }

    #[test]
    fn test_hierarchy_deserialization() {
        let hierarchy: DivisionHierarchy = serde_xml_rs::from_str(HIERARCHY_XML).unwrap();

        assert_eq!(hierarchy.id, "FBS");
        assert_eq!(hierarchy.name, "I-A");
        assert_eq!(hierarchy.conferences.len(), 2);

        let acc = &hierarchy.conferences[0];
        assert_eq!(acc.id, "ACC");
        assert_eq!(acc.subdivisions.len(), 1);
        assert!(acc.teams.is_empty());

        let atlantic = &acc.subdivisions[0];
        assert_eq!(atlantic.teams.len(), 2);
        assert_eq!(atlantic.teams[0].id, "BC");
        assert_eq!(atlantic.teams[0].market.as_deref(), Some("Boston College"));

        let venue = atlantic.teams[0].venue.as_ref().unwrap();
        assert_eq!(venue.name.as_deref(), Some("Alumni Stadium"));
        assert_eq!(venue.capacity, Some(44500));
        assert_eq!(venue.venue_type.as_deref(), Some("outdoor"));
        assert!(atlantic.teams[1].venue.is_none());

        // Independents attach teams straight to the conference.
        let independents = &hierarchy.conferences[1];
        assert!(independents.subdivisions.is_empty());
        assert_eq!(independents.teams.len(), 1);
        assert_eq!(independents.teams[0].id, "ND");
    }
}
