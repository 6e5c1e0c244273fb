use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::error;
use serde::Deserialize;

use crate::{CatalogError, Exercise, Group, Name};

/// Immutable mapping from exercise group to its exercises.
///
/// Names are unique across the whole catalog, groups without exercises are not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: BTreeMap<Group, Vec<Exercise>>,
}

impl Catalog {
    pub fn new(groups: BTreeMap<Group, Vec<Exercise>>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();

        for (group, exercises) in &groups {
            for exercise in exercises {
                if exercise.group != *group {
                    return Err(CatalogError::GroupMismatch {
                        name: exercise.name.clone(),
                        expected: *group,
                        found: exercise.group,
                    });
                }
                if !names.insert(&exercise.name) {
                    return Err(CatalogError::DuplicateName(exercise.name.clone()));
                }
            }
        }

        if names.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            groups: groups
                .into_iter()
                .filter(|(_, exercises)| !exercises.is_empty())
                .collect(),
        })
    }

    /// Parse a catalog mapping each group to its exercises, e.g.
    /// `{"cardio": [{"name": "Burpees", "reps": "10 reps"}]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<Group, Vec<CatalogEntry>> = serde_json::from_str(json)?;
        Self::new(
            entries
                .into_iter()
                .map(|(group, entries)| {
                    (
                        group,
                        entries
                            .into_iter()
                            .map(|e| Exercise {
                                name: e.name,
                                description: e.description,
                                reps: e.reps,
                                group,
                            })
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.groups.keys().copied()
    }

    #[must_use]
    pub fn exercises(&self, group: Group) -> &[Exercise] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.groups.values().flatten()
    }

    /// Number of distinct exercise names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups that are both selected by `filter` and contain exercises.
    #[must_use]
    pub fn selected_groups(&self, filter: &GroupFilter) -> Vec<Group> {
        self.groups().filter(|g| filter.selects(*g)).collect()
    }

    /// Number of distinct exercise names available under `filter`.
    #[must_use]
    pub fn capacity(&self, filter: &GroupFilter) -> usize {
        self.selected_groups(filter)
            .into_iter()
            .map(|g| self.exercises(g).len())
            .sum()
    }
}

impl Catalog {
    fn builtin() -> Result<Self, CatalogError> {
        let mut groups: BTreeMap<Group, Vec<Exercise>> = BTreeMap::new();
        for (group, name, description, reps) in EXERCISES {
            groups.entry(group).or_default().push(Exercise {
                name: Name::new(name)?,
                description: description.to_string(),
                reps: reps.to_string(),
                group,
            });
        }
        Self::new(groups)
    }
}

impl Default for Catalog {
    /// The built-in catalog. It is empty if the built-in exercises are invalid.
    fn default() -> Self {
        Self::builtin().unwrap_or_else(|err| {
            error!("invalid built-in catalog: {err}");
            Self {
                groups: BTreeMap::new(),
            }
        })
    }
}

#[derive(Deserialize)]
struct CatalogEntry {
    name: Name,
    #[serde(default)]
    description: String,
    #[serde(default)]
    reps: String,
}

const EXERCISES: [(Group, &str, &str, &str); 12] = [
    (Group::Cardio, "Jumping Jacks", "Full body cardio exercise", "30 seconds"),
    (Group::Cardio, "High Knees", "Run in place raising knees high", "30 seconds"),
    (Group::Cardio, "Burpees", "Full body strength and cardio", "10 reps"),
    (Group::Strength, "Push Ups", "Upper body strength", "15 reps"),
    (Group::Strength, "Squats", "Lower body strength", "20 reps"),
    (Group::Strength, "Lunges", "Lower body strength", "12 reps each leg"),
    (Group::Core, "Plank", "Core stability", "45 seconds"),
    (Group::Core, "Russian Twists", "Oblique strength", "20 reps"),
    (Group::Core, "Bicycle Crunches", "Core and obliques", "15 reps each side"),
    (Group::Stretching, "Hamstring Stretch", "Lower back and hamstrings", "30 seconds each leg"),
    (Group::Stretching, "Quad Stretch", "Front thigh stretch", "30 seconds each leg"),
    (Group::Stretching, "Shoulder Stretch", "Upper body stretch", "30 seconds each arm"),
];

/// Groups the user restricted sampling to. An empty filter selects every group.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupFilter(BTreeSet<Group>);

impl GroupFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selects(&self, group: Group) -> bool {
        self.0.is_empty() || self.0.contains(&group)
    }

    #[must_use]
    pub fn contains(&self, group: Group) -> bool {
        self.0.contains(&group)
    }

    pub fn toggle(&mut self, group: Group) {
        if !self.0.remove(&group) {
            self.0.insert(group);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Group> for GroupFilter {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Property;

    fn exercise(name: &str, group: Group) -> Exercise {
        Exercise {
            name: Name::new(name).unwrap(),
            description: String::new(),
            reps: String::from("10 reps"),
            group,
        }
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();

        assert_eq!(Catalog::builtin(), Ok(catalog.clone()));
        assert_eq!(catalog.len(), 12);
        assert_eq!(
            catalog.groups().collect::<Vec<_>>(),
            Group::iter().copied().collect::<Vec<_>>()
        );
        for group in Group::iter() {
            assert_eq!(catalog.exercises(*group).len(), 3);
            for exercise in catalog.exercises(*group) {
                assert_eq!(exercise.group, *group);
            }
        }
        assert_eq!(Catalog::new(catalog.groups.clone()), Ok(catalog));
    }

    #[test]
    fn test_default_catalog_durations() {
        let catalog = Catalog::default();
        let durations = catalog
            .iter()
            .map(|e| (e.name.as_ref().as_str(), e.duration()))
            .collect::<BTreeMap<_, _>>();

        assert_eq!(durations["Jumping Jacks"], 30);
        assert_eq!(durations["Burpees"], 10);
        assert_eq!(durations["Plank"], 45);
        assert_eq!(durations["Lunges"], 12);
    }

    #[test]
    fn test_catalog_new_duplicate_name() {
        assert_eq!(
            Catalog::new(BTreeMap::from([
                (Group::Cardio, vec![exercise("A", Group::Cardio)]),
                (Group::Core, vec![exercise("A", Group::Core)]),
            ])),
            Err(CatalogError::DuplicateName(Name::new("A").unwrap()))
        );
    }

    #[test]
    fn test_catalog_new_group_mismatch() {
        assert_eq!(
            Catalog::new(BTreeMap::from([(
                Group::Cardio,
                vec![exercise("A", Group::Core)]
            )])),
            Err(CatalogError::GroupMismatch {
                name: Name::new("A").unwrap(),
                expected: Group::Cardio,
                found: Group::Core,
            })
        );
    }

    #[test]
    fn test_catalog_new_empty() {
        assert_eq!(Catalog::new(BTreeMap::new()), Err(CatalogError::Empty));
        assert_eq!(
            Catalog::new(BTreeMap::from([(Group::Cardio, vec![])])),
            Err(CatalogError::Empty)
        );
    }

    #[test]
    fn test_catalog_new_drops_empty_groups() {
        let catalog = Catalog::new(BTreeMap::from([
            (Group::Cardio, vec![]),
            (Group::Core, vec![exercise("A", Group::Core)]),
        ]))
        .unwrap();

        assert_eq!(catalog.groups().collect::<Vec<_>>(), vec![Group::Core]);
        assert!(catalog.exercises(Group::Cardio).is_empty());
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"{
                "core": [{"name": "Plank", "description": "Core stability", "reps": "45 seconds"}],
                "cardio": [{"name": "Burpees"}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.groups().collect::<Vec<_>>(), vec![Group::Cardio, Group::Core]);
        assert_eq!(
            catalog.exercises(Group::Core),
            &[Exercise {
                name: Name::new("Plank").unwrap(),
                description: String::from("Core stability"),
                reps: String::from("45 seconds"),
                group: Group::Core,
            }]
        );
        assert_eq!(catalog.exercises(Group::Cardio)[0].duration(), 0);
    }

    #[test]
    fn test_catalog_from_json_invalid() {
        assert!(matches!(
            Catalog::from_json(r#"{"yoga": []}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"core": [{"name": ""}]}"#),
            Err(CatalogError::Parse(_))
        ));
        assert_eq!(
            Catalog::from_json(r#"{"core": [{"name": "A"}], "cardio": [{"name": "A"}]}"#),
            Err(CatalogError::DuplicateName(Name::new("A").unwrap()))
        );
    }

    #[test]
    fn test_catalog_capacity() {
        let catalog = Catalog::default();

        assert_eq!(catalog.capacity(&GroupFilter::all()), 12);
        assert_eq!(
            catalog.capacity(&GroupFilter::from_iter([Group::Core, Group::Cardio])),
            6
        );
        assert_eq!(
            catalog.selected_groups(&GroupFilter::from_iter([Group::Stretching])),
            vec![Group::Stretching]
        );
    }

    #[test]
    fn test_group_filter_toggle() {
        let mut filter = GroupFilter::all();
        assert!(Group::iter().all(|g| filter.selects(*g)));

        filter.toggle(Group::Core);
        assert!(filter.contains(Group::Core));
        assert!(filter.selects(Group::Core));
        assert!(!filter.selects(Group::Cardio));

        filter.toggle(Group::Core);
        assert!(filter.is_empty());
        assert!(filter.selects(Group::Cardio));
    }
}
