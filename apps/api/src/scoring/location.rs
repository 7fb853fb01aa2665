//! Location scorer.

use serde::{Deserialize, Serialize};

use crate::analysis::lenient::is_specified;
use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::scoring::regions::{same_city, RegionTier, RegionTiers};
use crate::scoring::LOCATION_MAX;

const UNKNOWN_CITY: u32 = 5;
const INNER_REGION: u32 = 8;
const EXTENDED_REGION: u32 = 6;
const DISTANT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationFit {
    UnknownCandidateCity,
    UnknownPositionLocation,
    SameCity,
    InnerRegion,
    ExtendedRegion,
    Distant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatch {
    pub score: u32,
    pub fit: LocationFit,
}

pub fn score_location(
    candidate: &CandidateProfile,
    position: &PositionProfile,
    regions: &RegionTiers,
) -> LocationMatch {
    let city = candidate.personal_info.city.as_str();
    let location = position.basic_info.location.as_str();

    let (score, fit) = if !is_specified(city) {
        (UNKNOWN_CITY, LocationFit::UnknownCandidateCity)
    } else if !is_specified(location) {
        (LOCATION_MAX, LocationFit::UnknownPositionLocation)
    } else if same_city(city, location) {
        (LOCATION_MAX, LocationFit::SameCity)
    } else {
        match regions.shared_tier(city, location) {
            Some(RegionTier::Inner) => (INNER_REGION, LocationFit::InnerRegion),
            Some(RegionTier::Extended) => (EXTENDED_REGION, LocationFit::ExtendedRegion),
            None => (DISTANT, LocationFit::Distant),
        }
    };

    LocationMatch { score, fit }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(city: &str, location: &str) -> LocationMatch {
        let mut c = CandidateProfile::default();
        c.personal_info.city = city.to_string();
        let mut p = PositionProfile::default();
        p.basic_info.location = location.to_string();
        score_location(&c, &p, &RegionTiers::builtin())
    }

    #[test]
    fn test_unknown_candidate_city_is_5() {
        assert_eq!(score("not specified", "Tel Aviv").score, 5);
        assert_eq!(score("", "not specified").score, 5);
    }

    #[test]
    fn test_unknown_position_location_is_10() {
        let result = score("Haifa", "not specified");
        assert_eq!(result.score, 10);
        assert_eq!(result.fit, LocationFit::UnknownPositionLocation);
    }

    #[test]
    fn test_same_city_and_substring() {
        assert_eq!(score("Tel Aviv", "tel aviv").score, 10);
        assert_eq!(score("Tel Aviv", "Tel Aviv-Yafo, Israel").score, 10);
    }

    #[test]
    fn test_region_tiers() {
        assert_eq!(score("Ramat Gan", "Herzliya").score, 8);
        assert_eq!(score("Netanya", "Holon").score, 6);
        assert_eq!(score("Haifa", "Beer Sheva").score, 3);
    }

    #[test]
    fn test_empty_region_table_falls_back_to_distant() {
        let mut c = CandidateProfile::default();
        c.personal_info.city = "Ramat Gan".to_string();
        let mut p = PositionProfile::default();
        p.basic_info.location = "Holon".to_string();
        let result = score_location(&c, &p, &RegionTiers::default());
        assert_eq!(result.fit, LocationFit::Distant);
    }
}
