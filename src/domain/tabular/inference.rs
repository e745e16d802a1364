use super::{ColumnType, TabularDataset};

/// Classify every column of the dataset, one `ColumnType` per header position.
///
/// A column stays `Numeric` while every present, non-blank cell parses as an
/// `f64`. The first cell that fails the parse settles the column as `Text`
/// and ends the scan for that column. Absent cells (short rows) and cells
/// that trim to empty are non-informative, so an entirely blank column stays
/// `Numeric`. One deterministic pass, no sampling.
pub fn infer_column_types(dataset: &TabularDataset) -> Vec<ColumnType> {
    let mut types = Vec::with_capacity(dataset.headers.len());

    for col in 0..dataset.headers.len() {
        let mut looks_numeric = true;
        for row in &dataset.rows {
            let value = match row.get(col) {
                Some(raw) => raw.trim(),
                None => continue,
            };
            if value.is_empty() {
                continue;
            }
            if value.parse::<f64>().is_err() {
                looks_numeric = false;
                break;
            }
        }
        types.push(if looks_numeric {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        });
    }

    types
}
