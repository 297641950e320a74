use indexmap::{IndexMap, IndexSet};

use crate::core::DataValue;
use crate::error::{GridError, GridResult};

/// Column-oriented table feeding a [`FacetGrid`](crate::grid::FacetGrid).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: IndexMap<String, Vec<DataValue>>,
    len: usize,
}

impl DataTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a column; every column must have the same length.
    pub fn with_column<I, V>(mut self, name: impl Into<String>, values: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        let name = name.into();
        let values: Vec<DataValue> = values.into_iter().map(Into::into).collect();
        let others_empty = self.columns.keys().all(|existing| *existing == name);
        if !others_empty && values.len() != self.len {
            return Err(GridError::InvalidData(format!(
                "column `{name}` has {} rows, table has {}",
                values.len(),
                self.len
            )));
        }
        self.len = values.len();
        self.columns.insert(name, values);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> GridResult<&[DataValue]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GridError::UnknownColumn(name.to_owned()))
    }

    /// Distinct non-missing values of a column.
    ///
    /// Numeric columns come back sorted ascending; anything else keeps the
    /// order of first appearance.
    pub fn levels(&self, name: &str) -> GridResult<Vec<DataValue>> {
        let unique: IndexSet<&DataValue> = self
            .column(name)?
            .iter()
            .filter(|value| !value.is_missing())
            .collect();

        if unique.is_empty() || !unique.iter().all(|value| value.is_numeric()) {
            return Ok(unique.into_iter().cloned().collect());
        }

        let mut keyed = Vec::with_capacity(unique.len());
        for value in unique {
            let key = value.as_f64()?.unwrap_or(f64::NAN);
            keyed.push((key, value.clone()));
        }
        keyed.sort_by(|left, right| left.0.total_cmp(&right.0));
        Ok(keyed.into_iter().map(|(_, value)| value).collect())
    }
}
