//! Conversion of stored address records into routing nodes.
//!
//! Records arrive as loosely typed rows (a signed capacity and a
//! `"lat,lon"` string). Rows that cannot become a [`Node`] are reported
//! one by one and never abort the batch.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Id, Node};

/// One stored address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord<I> {
    /// Address identifier.
    pub id: I,
    /// Demand at this address.
    pub capacity: i64,
    /// Coordinates as `"lat,lon"`.
    pub coords: String,
    /// Optional free-form label (street address, customer name).
    #[serde(default)]
    pub label: Option<String>,
}

/// A record that could not be imported.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord<I> {
    /// Identifier of the rejected record.
    pub id: I,
    /// Why it was rejected.
    pub reason: String,
}

/// Outcome of [`parse_records`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport<I> {
    /// Nodes built from valid records, in input order.
    pub nodes: Vec<Node<I>>,
    /// Rejected records, in input order.
    pub invalid: Vec<InvalidRecord<I>>,
}

impl<I> ImportReport<I> {
    /// True when every record was imported.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Converts records into nodes, collecting the ones that fail.
///
/// # Examples
///
/// ```
/// use delivery_routing::import::{parse_records, AddressRecord};
///
/// let report = parse_records(vec![
///     AddressRecord { id: 1, capacity: 4, coords: "50.45,30.52".into(), label: None },
///     AddressRecord { id: 2, capacity: -1, coords: "50.40,30.60".into(), label: None },
/// ]);
/// assert_eq!(report.nodes.len(), 1);
/// assert_eq!(report.invalid[0].id, 2);
/// ```
pub fn parse_records<I: Id>(
    records: impl IntoIterator<Item = AddressRecord<I>>,
) -> ImportReport<I> {
    let mut nodes = Vec::new();
    let mut invalid = Vec::new();

    for record in records {
        match to_node(&record) {
            Ok((demand, coordinate)) => {
                let mut node = Node::new(record.id, demand, coordinate);
                if let Some(label) = record.label {
                    node = node.with_label(label);
                }
                nodes.push(node);
            }
            Err(reason) => {
                tracing::warn!(id = ?record.id, %reason, "address record rejected");
                invalid.push(InvalidRecord {
                    id: record.id,
                    reason,
                });
            }
        }
    }

    ImportReport { nodes, invalid }
}

fn to_node<I>(record: &AddressRecord<I>) -> Result<(u32, Coordinate), String> {
    let demand = u32::try_from(record.capacity)
        .map_err(|_| format!("capacity {} is out of range", record.capacity))?;
    let coordinate = record
        .coords
        .parse::<Coordinate>()
        .map_err(|e| e.to_string())?;
    Ok((demand, coordinate))
}
