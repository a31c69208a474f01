//! Observation table storage.
//!
//! ## Purpose
//!
//! This module provides [`ObservationTable`], the owned, column-major numeric
//! table consumed by the analysis. Columns are labeled by variable name; rows
//! are independent observations with no ordering invariant.
//!
//! ## Design notes
//!
//! * **Checked construction**: Ragged, empty, or duplicate-named columns are
//!   rejected at construction, so a table in hand is always rectangular.
//! * **Interoperability**: `from_matrix` bridges `ndarray` data into the
//!   table without exposing `ndarray` types elsewhere in the crate.
//! * **Generics**: Storage is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All columns have the same, non-zero length.
//! * Column names are unique.
//!
//! ## Non-goals
//!
//! * This module does not validate the numeric content of columns
//!   (finiteness and variance checks belong to the engine validator).
//! * This module does not read or write any external data format.

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RwaError;

// ============================================================================
// Observation Table
// ============================================================================

/// Rectangular numeric table with uniquely named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable<T> {
    /// Column names, in insertion order.
    names: Vec<String>,

    /// Column-major storage; `columns[i]` belongs to `names[i]`.
    columns: Vec<Vec<T>>,

    /// Shared column length.
    n_rows: usize,
}

impl<T: Float> ObservationTable<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a table from named columns.
    ///
    /// Column order is preserved as given. Fails on zero columns, empty
    /// columns, ragged lengths, or duplicate names.
    pub fn from_columns<I, N>(columns: I) -> Result<Self, RwaError>
    where
        I: IntoIterator<Item = (N, Vec<T>)>,
        N: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut storage: Vec<Vec<T>> = Vec::new();
        let mut n_rows = 0usize;

        for (name, values) in columns {
            let name = name.into();

            if names.iter().any(|existing| *existing == name) {
                return Err(RwaError::DuplicateColumn(name));
            }
            if values.is_empty() {
                return Err(RwaError::EmptyColumn(name));
            }
            if storage.is_empty() {
                n_rows = values.len();
            } else if values.len() != n_rows {
                return Err(RwaError::RaggedColumns {
                    column: name,
                    got: values.len(),
                    expected: n_rows,
                });
            }

            names.push(name);
            storage.push(values);
        }

        if storage.is_empty() {
            return Err(RwaError::EmptyTable);
        }

        Ok(Self {
            names,
            columns: storage,
            n_rows,
        })
    }

    /// Build a table from an `ndarray` matrix, one table column per matrix
    /// column.
    ///
    /// Fails if the number of names does not match the number of matrix
    /// columns, in addition to the `from_columns` conditions.
    pub fn from_matrix(names: &[&str], data: &Array2<T>) -> Result<Self, RwaError> {
        if names.len() != data.ncols() {
            return Err(RwaError::ColumnCountMismatch {
                names: names.len(),
                columns: data.ncols(),
            });
        }

        Self::from_columns(
            names
                .iter()
                .enumerate()
                .map(|(j, name)| (*name, data.column(j).iter().copied().collect())),
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Column values for `name`, if present.
    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.names
            .iter()
            .position(|existing| existing == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of observations (rows).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of variables (columns).
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Whether `name` is a column of the table.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }
}
