//! The loaded set of stations and the line groupings derived from it.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{DomainError, LineId, Station, StationId};

/// Stations of each line, in the order the station records were encountered.
pub type LineMemberships = BTreeMap<LineId, Vec<StationId>>;

/// Explicit physical station order for some lines.
///
/// Lines missing from this map fall back to their membership order.
pub type LineOrderings = BTreeMap<LineId, Vec<StationId>>;

/// All stations of the network, with lookup by id.
///
/// Stations keep the order in which they were supplied. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct StationSet {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
}

impl StationSet {
    /// Build a station set, rejecting duplicate ids.
    pub fn new(stations: Vec<Station>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id().clone(), i).is_some() {
                return Err(DomainError::DuplicateStation(station.id().clone()));
            }
        }
        Ok(Self { stations, index })
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.index.get(id).map(|&i| &self.stations[i])
    }

    /// Look up a station by id, failing with [`DomainError::UnknownStation`].
    pub fn require(&self, id: &StationId) -> Result<&Station, DomainError> {
        self.get(id)
            .ok_or_else(|| DomainError::UnknownStation(id.clone()))
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate stations in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Group station ids by line, keeping encounter order within each line.
    pub fn line_memberships(&self) -> LineMemberships {
        let mut groups = LineMemberships::new();
        for station in &self.stations {
            for line in station.lines() {
                groups
                    .entry(line.clone())
                    .or_default()
                    .push(station.id().clone());
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coord;

    fn station(id: &str, lines: &[&str]) -> Station {
        Station::new(
            StationId::parse(id).unwrap(),
            id.to_lowercase(),
            Coord::new(0.0, 0.0),
            lines.iter().map(|l| LineId::parse(l).unwrap()).collect(),
        )
        .unwrap()
    }

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn empty_set() {
        let set = StationSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.line_memberships().is_empty());
    }

    #[test]
    fn lookup() {
        let set = StationSet::new(vec![station("A", &["P"]), station("B", &["P"])]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&sid("B")).map(|s| s.name()), Some("b"));
        assert!(set.get(&sid("Z")).is_none());
        assert!(set.contains(&sid("A")));
        assert_eq!(
            set.require(&sid("Z")).unwrap_err(),
            DomainError::UnknownStation(sid("Z"))
        );
    }

    #[test]
    fn rejects_duplicates() {
        let err = StationSet::new(vec![station("A", &["P"]), station("A", &["G"])]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateStation(sid("A")));
    }

    #[test]
    fn memberships_keep_encounter_order() {
        let set = StationSet::new(vec![
            station("C", &["P"]),
            station("A", &["P", "G"]),
            station("B", &["G"]),
        ])
        .unwrap();

        let groups = set.line_memberships();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[&LineId::parse("P").unwrap()],
            vec![sid("C"), sid("A")]
        );
        assert_eq!(
            groups[&LineId::parse("G").unwrap()],
            vec![sid("A"), sid("B")]
        );
    }
}
