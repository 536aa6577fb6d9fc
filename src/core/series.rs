use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Extracted columns for one chart invocation.
///
/// All vectors are index-aligned with the input records; grouping never
/// reorders or shortens them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedValues {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub keys: Option<Vec<String>>,
    pub validity: Vec<bool>,
}

/// One renderable series: a category key plus a sparse y-column aligned to
/// the global record index.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    pub key: String,
    pub values: Vec<Option<f64>>,
}

impl SeriesColumn {
    /// Global index and value of the last defined entry, if any.
    #[must_use]
    pub fn last_defined(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, v)| v.map(|value| (i, value)))
    }
}

/// Truthiness test matching the original chart's x predicate: a value
/// participates only when it is finite and non-zero.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Projects records into x/y (and optionally category) columns and computes
/// the validity mask from the extracted values.
///
/// The mask deliberately reads the extracted columns rather than the raw
/// records, so the builder stays generic over record shape. An entry is
/// valid when its x is truthy and its y is finite.
pub fn extract<D>(
    data: &[D],
    get_x: &dyn Fn(&D) -> f64,
    get_y: &dyn Fn(&D) -> f64,
    get_series: Option<&dyn Fn(&D) -> String>,
) -> ChartResult<ExtractedValues> {
    if data.is_empty() {
        return Err(ChartError::InvalidInput(
            "record sequence is empty".to_owned(),
        ));
    }

    let xs: Vec<f64> = data.iter().map(get_x).collect();
    let ys: Vec<f64> = data.iter().map(get_y).collect();
    let keys = get_series.map(|get| data.iter().map(get).collect::<Vec<_>>());

    if !ys.iter().any(|y| y.is_finite()) {
        return Err(ChartError::InvalidInput(
            "all y-values are non-finite".to_owned(),
        ));
    }

    let validity = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| is_truthy(x) && y.is_finite())
        .collect();

    Ok(ExtractedValues {
        xs,
        ys,
        keys,
        validity,
    })
}

/// Groups extracted values into series columns.
///
/// Without a category column the whole input is one unnamed dense series.
/// With one, distinct keys are kept in first-encounter order and each series
/// gets a sparse column the length of the input, defined only at the indices
/// carrying its key.
#[must_use]
pub fn group_series(extracted: &ExtractedValues) -> Vec<SeriesColumn> {
    let n = extracted.ys.len();

    let Some(keys) = &extracted.keys else {
        return vec![SeriesColumn {
            key: String::new(),
            values: extracted.ys.iter().map(|&y| Some(y)).collect(),
        }];
    };

    let mut columns: IndexMap<&str, Vec<Option<f64>>> = IndexMap::new();
    for (i, key) in keys.iter().enumerate() {
        let column = columns
            .entry(key.as_str())
            .or_insert_with(|| vec![None; n]);
        column[i] = Some(extracted.ys[i]);
    }

    columns
        .into_iter()
        .map(|(key, values)| SeriesColumn {
            key: key.to_owned(),
            values,
        })
        .collect()
}
