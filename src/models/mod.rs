use serde::{Deserialize, Serialize};

/// Summary scraped from a single placard on a search-results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    pub url: String,
    pub rent: String,
    pub contact: String,
}

/// Fields extracted from a listing detail page.
///
/// Markup that is missing on the page yields an empty string, never a
/// missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,
    pub address: String,
    pub size: String,
    pub month_fees: String,
    pub once_fees: String,
    pub pet_policy: String,
    pub parking: String,
    pub gym: String,
    pub kitchen: String,
    pub amenities: String,
    pub features: String,
    pub space: String,
    pub lease: String,
    pub services: String,
    pub info: String,
    pub indoor: String,
    pub outdoor: String,
    pub img: String,
    pub description: String,
}

/// Column order of the output file. `OutputRow::cells` must match.
pub const HEADER: [&str; 22] = [
    "Option Name",
    "Contact",
    "Address",
    "Size",
    "Rent",
    "Monthly Fees",
    "One Time Fees",
    "Pet Policy",
    "Parking",
    "Gym",
    "Kitchen",
    "Amenities",
    "Features",
    "Living Space",
    "Lease Info",
    "Services",
    "Property Info",
    "Indoor Info",
    "Outdoor Info",
    "Images",
    "Description",
    "ds",
];

/// One fully assembled output row.
#[derive(Debug, Clone)]
pub struct OutputRow {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub size: String,
    pub rent: String,
    pub month_fees: String,
    pub once_fees: String,
    pub pet_policy: String,
    pub parking: String,
    pub gym: String,
    pub kitchen: String,
    pub amenities: String,
    pub features: String,
    pub space: String,
    pub lease: String,
    pub services: String,
    pub info: String,
    pub indoor: String,
    pub outdoor: String,
    pub img: String,
    pub description: String,
    pub ds: String,
}

impl OutputRow {
    /// Merges a placard summary with its detail record into one row.
    ///
    /// The name becomes a wiki link pointing at the listing; the address
    /// becomes a wiki link with an empty target, which is the format the
    /// downstream importer consumes.
    pub fn assemble(summary: &ListingSummary, record: &ListingRecord, ds: &str) -> Self {
        Self {
            name: format!("[{}]({})", record.name, summary.url),
            contact: summary.contact.clone(),
            address: format!("[{}]()", record.address),
            size: record.size.clone(),
            rent: summary.rent.clone(),
            month_fees: record.month_fees.clone(),
            once_fees: record.once_fees.clone(),
            pet_policy: record.pet_policy.clone(),
            parking: record.parking.clone(),
            gym: record.gym.clone(),
            kitchen: record.kitchen.clone(),
            amenities: record.amenities.clone(),
            features: record.features.clone(),
            space: record.space.clone(),
            lease: record.lease.clone(),
            services: record.services.clone(),
            info: record.info.clone(),
            indoor: record.indoor.clone(),
            outdoor: record.outdoor.clone(),
            img: record.img.clone(),
            description: record.description.clone(),
            ds: ds.to_string(),
        }
    }

    /// Cells in header order.
    pub fn cells(&self) -> [&str; 22] {
        [
            &self.name,
            &self.contact,
            &self.address,
            &self.size,
            &self.rent,
            &self.month_fees,
            &self.once_fees,
            &self.pet_policy,
            &self.parking,
            &self.gym,
            &self.kitchen,
            &self.amenities,
            &self.features,
            &self.space,
            &self.lease,
            &self.services,
            &self.info,
            &self.indoor,
            &self.outdoor,
            &self.img,
            &self.description,
            &self.ds,
        ]
    }
}
