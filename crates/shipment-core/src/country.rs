//! # Country Reference Data
//!
//! ISO 3166-1 alpha-2 country codes and the region each one belongs to.
//!
//! The pricing engine and the country-code validator never look at this table
//! directly; they go through [`CountryReference`], so tests and deployments
//! can swap in a different data source.

use serde::{Deserialize, Serialize};

// =============================================================================
// Region
// =============================================================================

/// Geographic grouping of a country.
///
/// Europe is split by European Union membership because that is the line the
/// price tiers are drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    EuropeanUnion,
    /// Europe outside the European Union (e.g. NO, GB, UA).
    Europe,
    Asia,
    Africa,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

// =============================================================================
// Country Reference
// =============================================================================

/// Read-only country lookup used by validation and pricing.
pub trait CountryReference: Send + Sync {
    /// Region of an ISO alpha-2 code, `None` when the code is unknown.
    fn region_of(&self, code: &str) -> Option<Region>;

    /// Whether `code` names a real ISO 3166-1 country.
    fn exists(&self, code: &str) -> bool {
        self.region_of(code).is_some()
    }
}

/// The built-in ISO 3166-1 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCountries;

impl CountryReference for IsoCountries {
    fn region_of(&self, code: &str) -> Option<Region> {
        ISO_COUNTRIES
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|index| ISO_COUNTRIES[index].1)
    }
}

const EU: Region = Region::EuropeanUnion;
const EUR: Region = Region::Europe;
const ASI: Region = Region::Asia;
const AFR: Region = Region::Africa;
const NAM: Region = Region::NorthAmerica;
const SAM: Region = Region::SouthAmerica;
const OCE: Region = Region::Oceania;
const ANT: Region = Region::Antarctica;

/// Sorted by code; lookups binary-search it.
static ISO_COUNTRIES: &[(&str, Region)] = &[
    ("AD", EUR), ("AE", ASI), ("AF", ASI), ("AG", NAM), ("AI", NAM), ("AL", EUR),
    ("AM", ASI), ("AO", AFR), ("AQ", ANT), ("AR", SAM), ("AS", OCE), ("AT", EU),
    ("AU", OCE), ("AW", NAM), ("AX", EUR), ("AZ", ASI), ("BA", EUR), ("BB", NAM),
    ("BD", ASI), ("BE", EU), ("BF", AFR), ("BG", EU), ("BH", ASI), ("BI", AFR),
    ("BJ", AFR), ("BL", NAM), ("BM", NAM), ("BN", ASI), ("BO", SAM), ("BQ", NAM),
    ("BR", SAM), ("BS", NAM), ("BT", ASI), ("BV", ANT), ("BW", AFR), ("BY", EUR),
    ("BZ", NAM), ("CA", NAM), ("CC", OCE), ("CD", AFR), ("CF", AFR), ("CG", AFR),
    ("CH", EUR), ("CI", AFR), ("CK", OCE), ("CL", SAM), ("CM", AFR), ("CN", ASI),
    ("CO", SAM), ("CR", NAM), ("CU", NAM), ("CV", AFR), ("CW", NAM), ("CX", OCE),
    ("CY", EU), ("CZ", EU), ("DE", EU), ("DJ", AFR), ("DK", EU), ("DM", NAM),
    ("DO", NAM), ("DZ", AFR), ("EC", SAM), ("EE", EU), ("EG", AFR), ("EH", AFR),
    ("ER", AFR), ("ES", EU), ("ET", AFR), ("FI", EU), ("FJ", OCE), ("FK", SAM),
    ("FM", OCE), ("FO", EUR), ("FR", EU), ("GA", AFR), ("GB", EUR), ("GD", NAM),
    ("GE", ASI), ("GF", SAM), ("GG", EUR), ("GH", AFR), ("GI", EUR), ("GL", NAM),
    ("GM", AFR), ("GN", AFR), ("GP", NAM), ("GQ", AFR), ("GR", EU), ("GS", SAM),
    ("GT", NAM), ("GU", OCE), ("GW", AFR), ("GY", SAM), ("HK", ASI), ("HM", OCE),
    ("HN", NAM), ("HR", EU), ("HT", NAM), ("HU", EU), ("ID", ASI), ("IE", EU),
    ("IL", ASI), ("IM", EUR), ("IN", ASI), ("IO", AFR), ("IQ", ASI), ("IR", ASI),
    ("IS", EUR), ("IT", EU), ("JE", EUR), ("JM", NAM), ("JO", ASI), ("JP", ASI),
    ("KE", AFR), ("KG", ASI), ("KH", ASI), ("KI", OCE), ("KM", AFR), ("KN", NAM),
    ("KP", ASI), ("KR", ASI), ("KW", ASI), ("KY", NAM), ("KZ", ASI), ("LA", ASI),
    ("LB", ASI), ("LC", NAM), ("LI", EUR), ("LK", ASI), ("LR", AFR), ("LS", AFR),
    ("LT", EU), ("LU", EU), ("LV", EU), ("LY", AFR), ("MA", AFR), ("MC", EUR),
    ("MD", EUR), ("ME", EUR), ("MF", NAM), ("MG", AFR), ("MH", OCE), ("MK", EUR),
    ("ML", AFR), ("MM", ASI), ("MN", ASI), ("MO", ASI), ("MP", OCE), ("MQ", NAM),
    ("MR", AFR), ("MS", NAM), ("MT", EU), ("MU", AFR), ("MV", ASI), ("MW", AFR),
    ("MX", NAM), ("MY", ASI), ("MZ", AFR), ("NA", AFR), ("NC", OCE), ("NE", AFR),
    ("NF", OCE), ("NG", AFR), ("NI", NAM), ("NL", EU), ("NO", EUR), ("NP", ASI),
    ("NR", OCE), ("NU", OCE), ("NZ", OCE), ("OM", ASI), ("PA", NAM), ("PE", SAM),
    ("PF", OCE), ("PG", OCE), ("PH", ASI), ("PK", ASI), ("PL", EU), ("PM", NAM),
    ("PN", OCE), ("PR", NAM), ("PS", ASI), ("PT", EU), ("PW", OCE), ("PY", SAM),
    ("QA", ASI), ("RE", AFR), ("RO", EU), ("RS", EUR), ("RU", EUR), ("RW", AFR),
    ("SA", ASI), ("SB", OCE), ("SC", AFR), ("SD", AFR), ("SE", EU), ("SG", ASI),
    ("SH", AFR), ("SI", EU), ("SJ", EUR), ("SK", EU), ("SL", AFR), ("SM", EUR),
    ("SN", AFR), ("SO", AFR), ("SR", SAM), ("SS", AFR), ("ST", AFR), ("SV", NAM),
    ("SX", NAM), ("SY", ASI), ("SZ", AFR), ("TC", NAM), ("TD", AFR), ("TF", ANT),
    ("TG", AFR), ("TH", ASI), ("TJ", ASI), ("TK", OCE), ("TL", ASI), ("TM", ASI),
    ("TN", AFR), ("TO", OCE), ("TR", ASI), ("TT", NAM), ("TV", OCE), ("TW", ASI),
    ("TZ", AFR), ("UA", EUR), ("UG", AFR), ("UM", OCE), ("US", NAM), ("UY", SAM),
    ("UZ", ASI), ("VA", EUR), ("VC", NAM), ("VE", SAM), ("VG", NAM), ("VI", NAM),
    ("VN", ASI), ("VU", OCE), ("WF", OCE), ("WS", OCE), ("YE", ASI), ("YT", AFR),
    ("ZA", AFR), ("ZM", AFR), ("ZW", AFR),
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(ISO_COUNTRIES.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(ISO_COUNTRIES.len(), 249);
    }

    #[test]
    fn test_european_union_has_27_members() {
        let members = ISO_COUNTRIES
            .iter()
            .filter(|(_, region)| *region == Region::EuropeanUnion)
            .count();
        assert_eq!(members, 27);
    }

    #[test]
    fn test_region_lookup() {
        let countries = IsoCountries;
        assert_eq!(countries.region_of("PL"), Some(Region::EuropeanUnion));
        assert_eq!(countries.region_of("SE"), Some(Region::EuropeanUnion));
        assert_eq!(countries.region_of("NO"), Some(Region::Europe));
        assert_eq!(countries.region_of("UA"), Some(Region::Europe));
        assert_eq!(countries.region_of("AE"), Some(Region::Asia));
        assert_eq!(countries.region_of("CA"), Some(Region::NorthAmerica));
    }

    #[test]
    fn test_unknown_codes() {
        let countries = IsoCountries;
        assert!(countries.exists("DK"));
        assert!(!countries.exists("XX"));
        assert!(!countries.exists("EL"));
        assert!(!countries.exists("se"));
        assert!(!countries.exists(""));
    }
}
