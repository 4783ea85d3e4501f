use ndarray::{Array2, ArrayView1};
use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::{RatingTable, UserId};

/// Dense user x title rating matrix. Absent ratings are `NaN`.
///
/// Rows follow ascending user id and columns ascending title. A user who
/// rated the same title more than once (two movie ids sharing a title)
/// gets the mean of those ratings in the cell.
#[derive(Debug, Clone)]
pub struct UserMovieMatrix {
    users: Vec<UserId>,
    titles: Vec<String>,
    title_index: BTreeMap<String, usize>,
    cells: Array2<f64>,
}

impl UserMovieMatrix {
    pub fn from_table(table: &RatingTable) -> Self {
        let users: Vec<UserId> = table
            .rows()
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let titles = table.titles();

        let user_index: BTreeMap<UserId, usize> =
            users.iter().enumerate().map(|(idx, &id)| (id, idx)).collect();
        let title_index: BTreeMap<String, usize> = titles
            .iter()
            .enumerate()
            .map(|(idx, title)| (title.clone(), idx))
            .collect();

        let shape = (users.len(), titles.len());
        let mut sums = Array2::<f64>::zeros(shape);
        let mut counts = Array2::<f64>::zeros(shape);

        for row in table.rows() {
            let i = user_index[&row.user_id];
            let j = title_index[&row.title];
            sums[[i, j]] += f64::from(row.rating);
            counts[[i, j]] += 1.0;
        }

        let mut cells = sums;
        cells.zip_mut_with(&counts, |cell, &n| {
            *cell = if n > 0.0 { *cell / n } else { f64::NAN };
        });

        Self {
            users,
            titles,
            title_index,
            cells,
        }
    }

    #[cfg(test)]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn column_index(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    pub fn column(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.cells.column(idx)
    }

    #[cfg(test)]
    pub fn get(&self, user_id: UserId, title: &str) -> Option<f64> {
        let i = self.users.binary_search(&user_id).ok()?;
        let j = self.column_index(title)?;
        let value = self.cells[[i, j]];
        (!value.is_nan()).then_some(value)
    }
}
