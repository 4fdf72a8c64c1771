//! Eurostat geography codes found in the life expectancy dataset.
//!
//! The set is closed: anything outside it is rejected at the boundary with
//! [`ModelError::UnsupportedRegion`]. Aggregate groupings (euro area, EU, EEA,
//! EFTA and the pre-reunification Germany total) are valid filter targets but
//! are not countries, so [`Region::list_all_countries`] leaves them out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A geography code of the life expectancy dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    /// Albania.
    Al,
    /// Armenia.
    Am,
    /// Austria.
    At,
    /// Azerbaijan.
    Az,
    /// Belgium.
    Be,
    /// Bulgaria.
    Bg,
    /// Belarus.
    By,
    /// Switzerland.
    Ch,
    /// Cyprus.
    Cy,
    /// Czechia.
    Cz,
    /// Germany.
    De,
    /// Germany including former GDR.
    DeTot,
    /// Denmark.
    Dk,
    /// Euro area (18 countries).
    Ea18,
    /// Euro area (19 countries).
    Ea19,
    /// Estonia.
    Ee,
    /// European Economic Area (EU28 - 2013-2020 and IS, LI, NO).
    Eea30_2007,
    /// European Economic Area (EU28 and IS, LI, NO).
    Eea31,
    /// European Free Trade Association.
    Efta,
    /// Greece.
    El,
    /// Spain.
    Es,
    /// European Union (27 countries, 2007-2013).
    Eu27_2007,
    /// European Union (27 countries, from 2020).
    Eu27_2020,
    /// European Union (28 countries, 2013-2020).
    Eu28,
    /// Finland.
    Fi,
    /// France.
    Fr,
    /// Metropolitan France.
    Fx,
    /// Georgia.
    Ge,
    /// Croatia.
    Hr,
    /// Hungary.
    Hu,
    /// Ireland.
    Ie,
    /// Iceland.
    Is,
    /// Italy.
    It,
    /// Liechtenstein.
    Li,
    /// Lithuania.
    Lt,
    /// Luxembourg.
    Lu,
    /// Latvia.
    Lv,
    /// Moldova.
    Md,
    /// Montenegro.
    Me,
    /// North Macedonia.
    Mk,
    /// Malta.
    Mt,
    /// Netherlands.
    Nl,
    /// Norway.
    No,
    /// Poland.
    Pl,
    /// Portugal.
    #[default]
    Pt,
    /// Romania.
    Ro,
    /// Serbia.
    Rs,
    /// Russia.
    Ru,
    /// Sweden.
    Se,
    /// Slovenia.
    Si,
    /// Slovakia.
    Sk,
    /// San Marino.
    Sm,
    /// Turkey.
    Tr,
    /// Ukraine.
    Ua,
    /// United Kingdom.
    Uk,
    /// Kosovo.
    Xk,
}

impl Region {
    /// Every region in declaration order.
    pub const ALL: [Region; 56] = [
        Region::Al,
        Region::Am,
        Region::At,
        Region::Az,
        Region::Be,
        Region::Bg,
        Region::By,
        Region::Ch,
        Region::Cy,
        Region::Cz,
        Region::De,
        Region::DeTot,
        Region::Dk,
        Region::Ea18,
        Region::Ea19,
        Region::Ee,
        Region::Eea30_2007,
        Region::Eea31,
        Region::Efta,
        Region::El,
        Region::Es,
        Region::Eu27_2007,
        Region::Eu27_2020,
        Region::Eu28,
        Region::Fi,
        Region::Fr,
        Region::Fx,
        Region::Ge,
        Region::Hr,
        Region::Hu,
        Region::Ie,
        Region::Is,
        Region::It,
        Region::Li,
        Region::Lt,
        Region::Lu,
        Region::Lv,
        Region::Md,
        Region::Me,
        Region::Mk,
        Region::Mt,
        Region::Nl,
        Region::No,
        Region::Pl,
        Region::Pt,
        Region::Ro,
        Region::Rs,
        Region::Ru,
        Region::Se,
        Region::Si,
        Region::Sk,
        Region::Sm,
        Region::Tr,
        Region::Ua,
        Region::Uk,
        Region::Xk,
    ];

    /// Returns the canonical uppercase code as it appears in the dataset.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Al => "AL",
            Region::Am => "AM",
            Region::At => "AT",
            Region::Az => "AZ",
            Region::Be => "BE",
            Region::Bg => "BG",
            Region::By => "BY",
            Region::Ch => "CH",
            Region::Cy => "CY",
            Region::Cz => "CZ",
            Region::De => "DE",
            Region::DeTot => "DE_TOT",
            Region::Dk => "DK",
            Region::Ea18 => "EA18",
            Region::Ea19 => "EA19",
            Region::Ee => "EE",
            Region::Eea30_2007 => "EEA30_2007",
            Region::Eea31 => "EEA31",
            Region::Efta => "EFTA",
            Region::El => "EL",
            Region::Es => "ES",
            Region::Eu27_2007 => "EU27_2007",
            Region::Eu27_2020 => "EU27_2020",
            Region::Eu28 => "EU28",
            Region::Fi => "FI",
            Region::Fr => "FR",
            Region::Fx => "FX",
            Region::Ge => "GE",
            Region::Hr => "HR",
            Region::Hu => "HU",
            Region::Ie => "IE",
            Region::Is => "IS",
            Region::It => "IT",
            Region::Li => "LI",
            Region::Lt => "LT",
            Region::Lu => "LU",
            Region::Lv => "LV",
            Region::Md => "MD",
            Region::Me => "ME",
            Region::Mk => "MK",
            Region::Mt => "MT",
            Region::Nl => "NL",
            Region::No => "NO",
            Region::Pl => "PL",
            Region::Pt => "PT",
            Region::Ro => "RO",
            Region::Rs => "RS",
            Region::Ru => "RU",
            Region::Se => "SE",
            Region::Si => "SI",
            Region::Sk => "SK",
            Region::Sm => "SM",
            Region::Tr => "TR",
            Region::Ua => "UA",
            Region::Uk => "UK",
            Region::Xk => "XK",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Al => "Albania",
            Region::Am => "Armenia",
            Region::At => "Austria",
            Region::Az => "Azerbaijan",
            Region::Be => "Belgium",
            Region::Bg => "Bulgaria",
            Region::By => "Belarus",
            Region::Ch => "Switzerland",
            Region::Cy => "Cyprus",
            Region::Cz => "Czechia",
            Region::De => "Germany",
            Region::DeTot => "Germany including former GDR",
            Region::Dk => "Denmark",
            Region::Ea18 => "Euro area (18 countries)",
            Region::Ea19 => "Euro area (19 countries)",
            Region::Ee => "Estonia",
            Region::Eea30_2007 => "European Economic Area (EU28 - 2013-2020 and IS, LI, NO)",
            Region::Eea31 => "European Economic Area (EU28 and IS, LI, NO)",
            Region::Efta => "European Free Trade Association",
            Region::El => "Greece",
            Region::Es => "Spain",
            Region::Eu27_2007 => "European Union (27 countries, 2007-2013)",
            Region::Eu27_2020 => "European Union (27 countries, from 2020)",
            Region::Eu28 => "European Union (28 countries, 2013-2020)",
            Region::Fi => "Finland",
            Region::Fr => "France",
            Region::Fx => "Metropolitan France",
            Region::Ge => "Georgia",
            Region::Hr => "Croatia",
            Region::Hu => "Hungary",
            Region::Ie => "Ireland",
            Region::Is => "Iceland",
            Region::It => "Italy",
            Region::Li => "Liechtenstein",
            Region::Lt => "Lithuania",
            Region::Lu => "Luxembourg",
            Region::Lv => "Latvia",
            Region::Md => "Moldova",
            Region::Me => "Montenegro",
            Region::Mk => "North Macedonia",
            Region::Mt => "Malta",
            Region::Nl => "Netherlands",
            Region::No => "Norway",
            Region::Pl => "Poland",
            Region::Pt => "Portugal",
            Region::Ro => "Romania",
            Region::Rs => "Serbia",
            Region::Ru => "Russia",
            Region::Se => "Sweden",
            Region::Si => "Slovenia",
            Region::Sk => "Slovakia",
            Region::Sm => "San Marino",
            Region::Tr => "Turkey",
            Region::Ua => "Ukraine",
            Region::Uk => "United Kingdom",
            Region::Xk => "Kosovo",
        }
    }

    /// Returns true for supranational or multi-country groupings.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Region::DeTot
                | Region::Ea18
                | Region::Ea19
                | Region::Eea30_2007
                | Region::Eea31
                | Region::Efta
                | Region::Eu27_2007
                | Region::Eu27_2020
                | Region::Eu28
        )
    }

    /// Codes of every single-territory region, in declaration order.
    pub fn list_all_countries() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .filter(|region| !region.is_aggregate())
            .map(Region::code)
            .collect()
    }

    /// Returns true if `code` names a region, ignoring case and surrounding whitespace.
    pub fn has_member_key(code: &str) -> bool {
        Self::from_code(code).is_some()
    }

    /// Looks up a region by code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.code() == normalized)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ModelError::UnsupportedRegion {
            code: s.to_string(),
        })
    }
}

impl TryFrom<String> for Region {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.code().to_string()
    }
}
