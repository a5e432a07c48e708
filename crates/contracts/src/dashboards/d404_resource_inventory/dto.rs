use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Read endpoint returning the grouped dataset
pub const SERVICES_PATH: &str = "/api/services";

/// Trigger endpoint asking the backend to re-sync its source data
pub const FETCH_PATH: &str = "/api/fetch";

/// One row of a group: column name -> scalar value, in the order received
pub type Record = Map<String, Value>;

/// Named partition of the dataset (e.g. "ec2_instances")
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceGroup {
    pub name: String,
    pub records: Vec<Record>,
}

/// Response of `GET /api/services`
///
/// On the wire this is a plain JSON object `{ group_name: [record, ...] }`.
/// Groups keep the order in which the backend emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicesDataset {
    groups: Vec<ServiceGroup>,
}

impl ServicesDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group at the end, or replace the records of an existing group in place
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Record>) {
        let name = name.into();
        match self.groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.records = records,
            None => self.groups.push(ServiceGroup { name, records }),
        }
    }

    pub fn groups(&self) -> &[ServiceGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&ServiceGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|group| group.records.len()).sum()
    }
}

impl Serialize for ServicesDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &group.records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ServicesDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = ServicesDataset;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of group name to a list of records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dataset = ServicesDataset::new();
        while let Some((name, records)) = access.next_entry::<String, Vec<Record>>()? {
            dataset.insert(name, records);
        }
        Ok(dataset)
    }
}

/// Response of `POST /api/fetch`
///
/// The backend answers `{"status", "message", "detail"}` but any body is
/// accepted on success, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FetchResponse {
    /// Parse a response body leniently: empty or foreign bodies yield an empty response
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human readable one-liner for logs
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = &self.status {
            parts.push(status.as_str());
        }
        if let Some(message) = &self.message {
            parts.push(message.as_str());
        }
        if let Some(detail) = &self.detail {
            parts.push(detail.as_str());
        }
        if parts.is_empty() {
            "no details".to_string()
        } else {
            parts.join(": ")
        }
    }
}
