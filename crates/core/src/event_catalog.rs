//! Static event-metadata catalog and the generic payload validator.
//!
//! Each timeline event type declares an ordered list of field specs; the
//! single [`validate_event_data`] function consults the catalog instead of
//! per-type bespoke checks. The catalog is configuration, not data -- the
//! API only ever reads it.

use serde::Serialize;

use crate::error::CoreError;

/// One field an event type's payload may carry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// One entry in the event-metadata catalog.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    #[serde(rename = "type")]
    pub key: &'static str,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(name: &'static str, label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required,
    }
}

/// The catalog, in the order the client renders event-type pickers.
///
/// Field order within an entry matters: required-field validation fails fast
/// on the first missing field in declared order.
pub const EVENT_CATALOG: &[EventTypeSpec] = &[
    EventTypeSpec {
        key: "siteInspection",
        label: "Site Inspection",
        fields: &[
            field("inspectionDate", "Inspection Date", true),
            field("inspector", "Inspector", true),
            field("workProgress", "Work Progress", true),
            field("qualityRating", "Quality Rating", true),
            field("remarks", "Remarks", false),
        ],
    },
    EventTypeSpec {
        key: "materialDelivery",
        label: "Material Delivery",
        fields: &[
            field("deliveryDate", "Delivery Date", true),
            field("supplier", "Supplier", true),
            field("materials", "Materials", true),
            field("invoiceNumber", "Invoice Number", false),
        ],
    },
    EventTypeSpec {
        key: "milestonePayment",
        label: "Milestone Payment",
        fields: &[
            field("paymentDate", "Payment Date", true),
            field("amount", "Amount", true),
            field("milestone", "Milestone", true),
            field("paymentMode", "Payment Mode", false),
        ],
    },
    EventTypeSpec {
        key: "clientMeeting",
        label: "Client Meeting",
        fields: &[
            field("meetingDate", "Meeting Date", true),
            field("attendees", "Attendees", true),
            field("agenda", "Agenda", false),
            field("minutes", "Minutes", false),
        ],
    },
    EventTypeSpec {
        key: "workOrder",
        label: "Work Order",
        fields: &[
            field("orderDate", "Order Date", true),
            field("contractor", "Contractor", true),
            field("scopeOfWork", "Scope of Work", true),
        ],
    },
    EventTypeSpec {
        key: "delayReport",
        label: "Delay Report",
        fields: &[
            field("reportDate", "Report Date", true),
            field("reason", "Reason", true),
            field("expectedResolution", "Expected Resolution", false),
        ],
    },
];

/// Look up a catalog entry by event-type key.
pub fn find_event_type(key: &str) -> Option<&'static EventTypeSpec> {
    EVENT_CATALOG.iter().find(|spec| spec.key == key)
}

/// Resolve the human-readable label for an event type, falling back to the
/// raw key when the catalog entry was removed after the event was created.
pub fn type_label(key: &str) -> &str {
    match find_event_type(key) {
        Some(spec) => spec.label,
        None => key,
    }
}

/// Validate an event payload against the catalog.
///
/// Fails with `Validation("Invalid event type")` for unknown keys, then with
/// `Validation("Missing required field: <name>")` for the first required
/// field (in declared order) that is absent, null, or an empty string.
pub fn validate_event_data(
    event_type: &str,
    data: &serde_json::Value,
) -> Result<(), CoreError> {
    let spec = find_event_type(event_type)
        .ok_or_else(|| CoreError::Validation("Invalid event type".to_string()))?;

    for field in spec.fields.iter().filter(|f| f.required) {
        let present = match data.get(field.name) {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(CoreError::Validation(format!(
                "Missing required field: {}",
                field.name
            )));
        }
    }

    Ok(())
}
