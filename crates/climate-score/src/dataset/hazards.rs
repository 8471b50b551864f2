use super::normalizer::normalize_key;
use super::{DatasetError, Location};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Natural-disaster likelihoods reported next to a score. Never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardProfile {
    pub earthquakes: Option<String>,
    pub hurricanes: Option<String>,
    pub wild_fires: Option<String>,
    pub tornadoes: Option<String>,
}

/// Hazard profiles keyed by city, loaded from `natural_disasters.csv`.
#[derive(Debug, Clone, Default)]
pub struct HazardRegistry {
    profiles: HashMap<String, HazardProfile>,
}

impl HazardRegistry {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut profiles = HashMap::new();

        for row in csv_reader.deserialize::<HazardRow>() {
            let row = row.map_err(|source| DatasetError::Csv {
                path: PathBuf::from(origin),
                source,
            })?;
            profiles.insert(normalize_key(&row.capital), row.into_profile());
        }

        Ok(Self { profiles })
    }

    pub fn lookup(&self, location: &Location) -> Option<&HazardProfile> {
        self.profiles.get(&location.city_key())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct HazardRow {
    #[serde(rename = "Capital")]
    capital: String,
    #[serde(rename = "Earthquakes", default, deserialize_with = "empty_string_as_none")]
    earthquakes: Option<String>,
    #[serde(rename = "Hurricanes", default, deserialize_with = "empty_string_as_none")]
    hurricanes: Option<String>,
    #[serde(rename = "Wild Fires", default, deserialize_with = "empty_string_as_none")]
    wild_fires: Option<String>,
    #[serde(rename = "Tornadoes", default, deserialize_with = "empty_string_as_none")]
    tornadoes: Option<String>,
}

impl HazardRow {
    fn into_profile(self) -> HazardProfile {
        HazardProfile {
            earthquakes: self.earthquakes,
            hurricanes: self.hurricanes,
            wild_fires: self.wild_fires,
            tornadoes: self.tornadoes,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
