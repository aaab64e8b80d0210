//! Sorting and row-expansion state for the review table.
//!
//! The table owns no data and performs no I/O: it only decides in which order to show the
//! requests it is given and which rows are expanded.

use std::{cmp::Ordering, collections::HashSet};

use crate::model::{approval::ApprovalStage, request::TireRequest};

/// Column a table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    SubmittedAt,
    VehicleNumber,
    RequesterName,
    UserSection,
    Status,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    sort_field: SortField,
    sort_direction: SortDirection,
    expanded: HashSet<i64>,
}

impl Default for TableState {
    /// Newest submissions first, nothing expanded.
    fn default() -> Self {
        Self {
            sort_field: SortField::SubmittedAt,
            sort_direction: SortDirection::Descending,
            expanded: HashSet::new(),
        }
    }
}

impl TableState {
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Selects a sort column.
    ///
    /// Re-selecting the active column flips the direction; a new column starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Expands a collapsed row or collapses an expanded one.
    pub fn toggle_row(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    /// Returns `requests` in display order. Ties keep their input order.
    pub fn sorted<'a>(&self, requests: &'a [TireRequest]) -> Vec<&'a TireRequest> {
        let mut rows: Vec<&TireRequest> = requests.iter().collect();
        rows.sort_by(|a, b| {
            let ordering = compare(self.sort_field, a, b);
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

fn compare(field: SortField, a: &TireRequest, b: &TireRequest) -> Ordering {
    match field {
        SortField::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
        SortField::VehicleNumber => a.vehicle_number.cmp(&b.vehicle_number),
        SortField::RequesterName => a
            .requester_name
            .to_lowercase()
            .cmp(&b.requester_name.to_lowercase()),
        SortField::UserSection => a.user_section.cmp(&b.user_section),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
    }
}

/// Requests currently waiting on `stage`.
pub fn filter_for_stage(requests: &[TireRequest], stage: ApprovalStage) -> Vec<TireRequest> {
    requests
        .iter()
        .filter(|request| request.status.awaiting_stage() == Some(stage))
        .cloned()
        .collect()
}
