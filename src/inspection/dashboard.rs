//! Search and pagination over listed inspections

use super::wire::WireRecord;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionQuery {
    pub search: String,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for InspectionQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectionPage<'a> {
    pub items: Vec<&'a WireRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Case-insensitive substring match over the fields staff search by
pub fn matches_search(record: &WireRecord, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let haystacks: [&str; 7] = [
        record.id().unwrap_or_default(),
        &record.customer.name,
        &record.customer.mobile,
        &record.vehicle.plate_number,
        &record.vehicle.vin,
        &record.vehicle.car_type,
        &record.vehicle.model,
    ];

    haystacks.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Filter in API order, then cut out the requested page
pub fn paginate<'a>(records: &'a [WireRecord], query: &InspectionQuery) -> InspectionPage<'a> {
    let page_size = query.page_size.max(1);
    let page = query.page.max(1);

    let matches: Vec<&WireRecord> = records
        .iter()
        .filter(|record| matches_search(record, &query.search))
        .collect();

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(page_size);

    let items = matches
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    InspectionPage {
        items,
        page,
        total_pages,
        total_matches,
    }
}

/// Find a record by full id or unambiguous id prefix
pub fn find_by_id<'a>(records: &'a [WireRecord], id: &str) -> Option<&'a WireRecord> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }

    if let Some(exact) = records.iter().find(|record| record.id() == Some(id)) {
        return Some(exact);
    }

    let mut candidates = records
        .iter()
        .filter(|record| record.id().is_some_and(|candidate| candidate.starts_with(id)));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
