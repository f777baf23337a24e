use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{err_decode, err_encode, err_range, SectorInfoErr};
use crate::sector_info::{PrivateSectorInfo, PublicSectorInfo};
use crate::types::SectorNumber;

/// PublicSectorInfo sorted (lexicographically, ascending) by the bytes of
/// the sealed (replica) CID.
///
/// Deserializing does not re-sort: a `SortedPublicSectorInfo` decoded from
/// bytes is only as sorted as the bytes it came from. Callers must only
/// decode encodings produced by `to_json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedPublicSectorInfo {
    f: Vec<PublicSectorInfo>,
}

/// PrivateSectorInfo with unique sector numbers, sorted ascending by sector
/// number.
///
/// The same decoding caveat as `SortedPublicSectorInfo` applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedPrivateSectorInfo {
    f: Vec<PrivateSectorInfo>,
}

impl SortedPublicSectorInfo {
    pub fn new<I>(sector_info: I) -> SortedPublicSectorInfo
    where
        I: IntoIterator<Item = PublicSectorInfo>,
    {
        let mut f: Vec<PublicSectorInfo> = sector_info.into_iter().collect();

        // stable, so equal CIDs keep their input order
        f.sort_by_cached_key(PublicSectorInfo::sealed_cid_bytes);

        trace!("sorted {} public sector infos", f.len());

        SortedPublicSectorInfo { f }
    }

    /// Returns the sorted PublicSectorInfo as a slice.
    pub fn values(&self) -> &[PublicSectorInfo] {
        &self.f
    }

    pub fn into_values(self) -> Vec<PublicSectorInfo> {
        self.f
    }

    pub fn len(&self) -> usize {
        self.f.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// JSON-encodes the sector infos as an array, in order.
    pub fn to_json(&self) -> Result<Vec<u8>, SectorInfoErr> {
        serde_json::to_vec(&self.f).map_err(err_encode)
    }

    /// Decodes a JSON array without checking its order.
    pub fn from_json(bytes: &[u8]) -> Result<SortedPublicSectorInfo, SectorInfoErr> {
        serde_json::from_slice(bytes)
            .map(|f| SortedPublicSectorInfo { f })
            .map_err(err_decode)
    }
}

impl SortedPrivateSectorInfo {
    /// Removes records whose sector number was already seen (the first
    /// occurrence wins), then sorts by sector number.
    pub fn new<I>(sector_info: I) -> SortedPrivateSectorInfo
    where
        I: IntoIterator<Item = PrivateSectorInfo>,
    {
        let mut f: Vec<PrivateSectorInfo> = sector_info
            .into_iter()
            .unique_by(PrivateSectorInfo::sector_number)
            .collect();

        if f.len() > 1 {
            f.sort_by_key(PrivateSectorInfo::sector_number);
        }

        trace!("sorted {} private sector infos", f.len());

        SortedPrivateSectorInfo { f }
    }

    /// Returns the sorted PrivateSectorInfo as a slice.
    pub fn values(&self) -> &[PrivateSectorInfo] {
        &self.f
    }

    pub fn into_values(self) -> Vec<PrivateSectorInfo> {
        self.f
    }

    pub fn len(&self) -> usize {
        self.f.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    pub fn sector_numbers(&self) -> Vec<SectorNumber> {
        self.f.iter().map(PrivateSectorInfo::sector_number).collect()
    }

    /// JSON-encodes the sector infos as an array, in order.
    pub fn to_json(&self) -> Result<Vec<u8>, SectorInfoErr> {
        serde_json::to_vec(&self.f).map_err(err_encode)
    }

    /// Decodes a JSON array without checking order or uniqueness.
    pub fn from_json(bytes: &[u8]) -> Result<SortedPrivateSectorInfo, SectorInfoErr> {
        serde_json::from_slice(bytes)
            .map(|f| SortedPrivateSectorInfo { f })
            .map_err(err_decode)
    }

    /// Copies the half-open range `[start, end)` into a new collection.
    /// Produces an error if the range is reversed or runs past the end.
    pub fn split(&self, start: usize, end: usize) -> Result<SortedPrivateSectorInfo, SectorInfoErr> {
        let range = self
            .f
            .get(start..end)
            .ok_or_else(|| err_range(start, end, self.f.len()))?;

        debug!(
            "split: [{}, {}) of {} private sector infos",
            start,
            end,
            self.f.len()
        );

        Ok(SortedPrivateSectorInfo { f: range.to_vec() })
    }

    /// Splits into consecutive collections of at most `chunk_size` records.
    pub fn split_into_chunks(
        &self,
        chunk_size: usize,
    ) -> Result<Vec<SortedPrivateSectorInfo>, SectorInfoErr> {
        if chunk_size == 0 {
            return Err(SectorInfoErr::ZeroChunkSize);
        }

        (0..self.f.len())
            .step_by(chunk_size)
            .map(|start| self.split(start, std::cmp::min(start + chunk_size, self.f.len())))
            .collect()
    }

    /// Projects every record to its public info, re-sorted by sealed CID.
    pub fn to_public(&self) -> SortedPublicSectorInfo {
        SortedPublicSectorInfo::new(self.f.iter().map(PrivateSectorInfo::to_public))
    }
}

impl std::iter::FromIterator<PublicSectorInfo> for SortedPublicSectorInfo {
    fn from_iter<I: IntoIterator<Item = PublicSectorInfo>>(iter: I) -> Self {
        SortedPublicSectorInfo::new(iter)
    }
}

impl std::iter::FromIterator<PrivateSectorInfo> for SortedPrivateSectorInfo {
    fn from_iter<I: IntoIterator<Item = PrivateSectorInfo>>(iter: I) -> Self {
        SortedPrivateSectorInfo::new(iter)
    }
}

impl<'a> IntoIterator for &'a SortedPublicSectorInfo {
    type Item = &'a PublicSectorInfo;
    type IntoIter = std::slice::Iter<'a, PublicSectorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.f.iter()
    }
}

impl<'a> IntoIterator for &'a SortedPrivateSectorInfo {
    type Item = &'a PrivateSectorInfo;
    type IntoIter = std::slice::Iter<'a, PrivateSectorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.f.iter()
    }
}
