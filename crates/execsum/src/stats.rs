//! Numeric aggregates over table columns.
//!
//! All functions skip missing and non-numeric cells explicitly and return
//! `None` when the aggregate is undefined (no numeric values, or too few
//! pairs for a correlation). Callers decide how an undefined aggregate
//! surfaces; nothing here produces NaN.

use crate::table::CellValue;

/// Numeric values of a column, missing and string cells skipped.
fn numeric_values(cells: &[CellValue]) -> impl Iterator<Item = f64> + '_ {
    cells.iter().filter_map(CellValue::as_f64)
}

/// Arithmetic mean. `None` when the column has no numeric values.
pub fn mean(cells: &[CellValue]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in numeric_values(cells) {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Maximum. `None` when the column has no numeric values.
pub fn max(cells: &[CellValue]) -> Option<f64> {
    numeric_values(cells).fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

/// Minimum. `None` when the column has no numeric values.
pub fn min(cells: &[CellValue]) -> Option<f64> {
    numeric_values(cells).fold(None, |acc, v| match acc {
        Some(m) if m <= v => Some(m),
        _ => Some(v),
    })
}

/// Count of numeric values.
pub fn count(cells: &[CellValue]) -> usize {
    numeric_values(cells).count()
}

/// Sample standard deviation (n - 1 denominator).
///
/// `None` when the column has no numeric values; `Some(0.0)` for a single
/// value.
pub fn std_dev(cells: &[CellValue]) -> Option<f64> {
    let values: Vec<f64> = numeric_values(cells).collect();
    let n = values.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0.0);
    }
    let m = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n as f64 - 1.0);
    Some(variance.sqrt())
}

/// Pearson correlation coefficient over paired numeric values.
///
/// Rows where either side is missing or non-numeric are skipped as a pair.
/// `None` when fewer than two pairs remain or either side has zero variance.
pub fn pearson(xs: &[CellValue], ys: &[CellValue]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}
