use serde_json::{Map, Value};

use crate::curve::Sample;
use crate::error::DataFormatError;
use crate::hazard::Hazard;

/// Samples per category, categories in provider order.
pub(super) type RawCategories = Vec<(String, Vec<Sample>)>;

/// Walk the provider payload and pair up every category's x/y arrays.
pub(super) fn parse(raw: &Value) -> Result<Vec<(Hazard, RawCategories)>, DataFormatError> {
    let root = as_object(raw, "$")?;
    let mut out = Vec::with_capacity(root.len());
    for (key, value) in root {
        let hazard = Hazard::from_wire_key(key)
            .ok_or_else(|| DataFormatError::UnknownHazard { key: key.clone() })?;
        let path = format!("$.{key}");
        let categories = as_object(value, &path)?;
        let mut parsed = Vec::with_capacity(categories.len());
        for (category, entry) in categories {
            let path = format!("{path}.{category}");
            parsed.push((category.clone(), parse_category(entry, &path)?));
        }
        out.push((hazard, parsed));
    }
    Ok(out)
}

fn parse_category(entry: &Value, path: &str) -> Result<Vec<Sample>, DataFormatError> {
    let obj = as_object(entry, path)?;
    let xs = numbers(obj, "x", path)?;
    let ys = numbers(obj, "y", path)?;
    if xs.len() != ys.len() {
        return Err(DataFormatError::LengthMismatch {
            path: path.to_string(),
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Sample::new(x, y)).collect())
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, DataFormatError> {
    value.as_object().ok_or_else(|| DataFormatError::NotAnObject {
        path: path.to_string(),
    })
}

fn numbers(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<Vec<f64>, DataFormatError> {
    let value = obj.get(field).ok_or_else(|| DataFormatError::MissingField {
        path: path.to_string(),
        field,
    })?;
    let field_path = format!("{path}.{field}");
    let items = value.as_array().ok_or_else(|| DataFormatError::NotAnArray {
        path: field_path.clone(),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64()
                .filter(|n| n.is_finite())
                .ok_or_else(|| DataFormatError::NotANumber {
                    path: field_path.clone(),
                    index,
                })
        })
        .collect()
}
