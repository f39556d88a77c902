//! Domain records
//!
//! Wire payloads use lower camelCase field names while some deployments of
//! the same API family emit PascalCase. Decoding accepts both spellings via
//! serde aliases; serialization always emits camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capability the sync engine needs from a record type: expose the
/// update timestamp used for bookmarking.
pub trait SyncRecord {
    /// The record's last-updated timestamp (UTC)
    fn updated_at(&self) -> DateTime<Utc>;
}

/// An organization record from the membership API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(alias = "OrgId")]
    pub org_id: i64,

    #[serde(alias = "OrgName")]
    pub org_name: String,

    #[serde(default, alias = "OrgDescription")]
    pub org_description: Option<String>,

    /// Owned by the record, serialized together with it
    #[serde(default, alias = "MailingAddress")]
    pub mailing_address: Option<MailingAddress>,

    #[serde(default, alias = "Phone")]
    pub phone: Option<String>,

    #[serde(default, alias = "OrgType")]
    pub org_type: Option<String>,

    #[serde(default, alias = "Status")]
    pub status: Option<String>,

    #[serde(default, alias = "HasLocations")]
    pub has_locations: bool,

    /// Bookmark field; always present on the wire
    #[serde(alias = "UpdatedDate")]
    pub updated_date: DateTime<Utc>,
}

impl Organization {
    /// Resource path segment on the API
    pub const RESOURCE: &'static str = "Organizations";

    /// Fixed `$select` field list requested on every page
    pub const SELECT: &'static [&'static str] = &[
        "orgId",
        "orgName",
        "orgDescription",
        "mailingAddress",
        "phone",
        "orgType",
        "status",
        "hasLocations",
        "updatedDate",
    ];
}

impl SyncRecord for Organization {
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_date
    }
}

/// Mailing address nested inside an [`Organization`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddress {
    #[serde(alias = "AddressId")]
    pub address_id: i64,

    #[serde(default, alias = "Address1")]
    pub address1: Option<String>,

    #[serde(default, alias = "Address2")]
    pub address2: Option<String>,

    #[serde(default, alias = "City")]
    pub city: Option<String>,

    #[serde(default, alias = "StateCode")]
    pub state_code: Option<String>,

    #[serde(default, alias = "Zip")]
    pub zip: Option<String>,

    #[serde(default, alias = "CountryCode")]
    pub country_code: Option<String>,
}
