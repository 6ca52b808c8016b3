use ahash::AHashMap;

use crate::error::{Error, Result};

use super::{EducationRecord, Fips};

/// The education dataset, indexed by FIPS code.
///
/// Records keep their fetched order; the lookup map is built once at load.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    records: Vec<EducationRecord>,
    by_fips: AHashMap<Fips, usize>,
}

impl DatasetIndex {
    /// Store the fetched records. Fails on an empty collection or a repeated FIPS code.
    pub fn load(records: Vec<EducationRecord>) -> Result<Self> {
        if records.is_empty() { return Err(Error::EmptyDataset) }

        let mut by_fips = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if by_fips.insert(record.fips, i).is_some() {
                return Err(Error::DuplicateFips(record.fips));
            }
        }

        Ok(Self { records, by_fips })
    }

    /// Parse the education dataset from its JSON array form.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<EducationRecord> = serde_json::from_str(json)
            .map_err(|source| Error::Parse { what: "education dataset", source })?;
        Self::load(records)
    }

    /// Look up the record for a county.
    pub fn find_by_fips(&self, fips: Fips) -> Result<&EducationRecord> {
        self.by_fips.get(&fips)
            .map(|&i| &self.records[i])
            .ok_or(Error::UnknownFips(fips))
    }

    #[inline]
    pub fn records(&self) -> &[EducationRecord] { &self.records }

    #[inline]
    pub fn len(&self) -> usize { self.records.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Minimum and maximum `bachelorsOrHigher` over all records.
    pub fn extent(&self) -> (f64, f64) {
        self.records.iter()
            .map(|r| r.bachelors_or_higher)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }
}
