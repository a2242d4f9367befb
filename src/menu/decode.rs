use serde_json::{Map, Value};

use super::types::{Icon, MenuItem};
use crate::error::{MenuError, Result};
use crate::types::DocumentFormat;

static EMPTY: Vec<Value> = Vec::new();

/// Envelope keys accepted around the item array: `{ "data": [...] }` etc.
const ENVELOPE_KEYS: [&str; 3] = ["data", "menus", "items"];

/// Outcome of decoding a menu document. Malformed items are skipped and
/// reported in `skipped`; the remaining items keep their relative order.
#[derive(Debug, Default)]
pub struct Decoded {
    pub items: Vec<MenuItem>,
    pub skipped: Vec<MenuError>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub fn decode_document(input: &str, format: DocumentFormat) -> Result<Decoded> {
    decode_items(&parse_document(input, format)?)
}

/// Parse a document as-is, keeping envelopes and keys the decoder ignores
pub fn parse_document(input: &str, format: DocumentFormat) -> Result<Value> {
    Ok(match format {
        DocumentFormat::Json => serde_json::from_str(input)?,
        DocumentFormat::Yaml => serde_yaml::from_str(input)?,
    })
}

/// Decode an item array (or an envelope around one). Only the document shape
/// can fail; individual bad items end up in `Decoded::skipped`.
pub fn decode_items(value: &Value) -> Result<Decoded> {
    let list = unwrap_envelope(value)?;
    let mut skipped = Vec::new();
    let items = decode_siblings(list, "", &mut skipped);
    Ok(Decoded { items, skipped })
}

fn unwrap_envelope(value: &Value) -> Result<&Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(&EMPTY),
        Value::Object(obj) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array))
            .ok_or_else(|| {
                MenuError::InvalidDocument(
                    "expected an array of menu items or a {\"data\": [...]} envelope".to_string(),
                )
            }),
        other => Err(MenuError::InvalidDocument(format!(
            "expected an array of menu items, got {}",
            kind_of(other)
        ))),
    }
}

/// The item array `decode_items` reads, for in-place edits. A null
/// document becomes an empty array.
pub fn item_list_mut(document: &mut Value) -> Result<&mut Vec<Value>> {
    if document.is_null() {
        *document = Value::Array(Vec::new());
    }
    let key = match &*document {
        Value::Object(obj) => ENVELOPE_KEYS
            .iter()
            .copied()
            .find(|key| obj.get(*key).map_or(false, Value::is_array)),
        _ => None,
    };
    let list = match key {
        Some(key) => document.get_mut(key),
        None => Some(document),
    };
    match list {
        Some(Value::Array(arr)) => Ok(arr),
        _ => Err(MenuError::InvalidDocument(
            "expected an array of menu items or a {\"data\": [...]} envelope".to_string(),
        )),
    }
}

fn decode_siblings(list: &[Value], prefix: &str, skipped: &mut Vec<MenuError>) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(list.len());
    for (i, value) in list.iter().enumerate() {
        let path = format!("{}[{}]", prefix, i);
        match decode_item(value, &path, skipped) {
            Ok(item) => items.push(item),
            Err(e) => {
                tracing::warn!("Skipping menu item: {}", e);
                skipped.push(e);
            }
        }
    }
    items
}

fn decode_item(value: &Value, path: &str, skipped: &mut Vec<MenuError>) -> Result<MenuItem> {
    let obj = value
        .as_object()
        .ok_or_else(|| MenuError::malformed(path, format!("expected an object, got {}", kind_of(value))))?;

    let id = match field(obj, &["id"]) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(MenuError::malformed(path, "missing id")),
    };

    let name = match field(obj, &["name"]) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => return Err(MenuError::malformed(path, format!("item '{}' has no name", id))),
    };

    let children = match field(obj, &["children"]) {
        None => Vec::new(),
        Some(Value::Array(arr)) => decode_siblings(arr, &format!("{}.children", path), skipped),
        Some(other) => {
            tracing::warn!("Ignoring non-array children of '{}' at {} ({})", id, path, kind_of(other));
            Vec::new()
        }
    };

    Ok(MenuItem {
        url: string_field(obj, &["url"]),
        icon: decode_icon(obj, &id),
        order: decode_order(obj, &id),
        parent_id: id_field(obj, &["parentId", "parent_id"]),
        required_privilege: string_field(obj, &["requiredPrivilege", "required_privilege"]),
        children,
        id,
        name,
    })
}

fn decode_icon(obj: &Map<String, Value>, id: &str) -> Option<Icon> {
    match field(obj, &["icon"])? {
        Value::String(s) if s.trim().is_empty() => None,
        value => match serde_json::from_value::<Icon>(value.clone()) {
            Ok(icon) => Some(icon),
            Err(e) => {
                tracing::warn!("Ignoring unrecognised icon on '{}': {}", id, e);
                None
            }
        },
    }
}

fn decode_order(obj: &Map<String, Value>, id: &str) -> Option<i64> {
    let value = field(obj, &["order", "sortOrder", "sort_order"])?;
    let order = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if order.is_none() {
        tracing::warn!("Ignoring non-integer order {} on '{}'", value, id);
    }
    order
}

/// First present, non-null value among `keys`
fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| obj.get(*k)).find(|v| !v.is_null())
}

fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    field(obj, keys).and_then(Value::as_str).map(str::to_string)
}

fn id_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match field(obj, keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
