//! Chart data preparation
//!
//! Everything a chart needs is computed here as plain data so the GUI only
//! has to draw it: index-keyed series, equal-width histograms, category
//! counts and distribution plots (density histogram + Gaussian KDE + rug).

use std::collections::BTreeMap;
use std::f64::consts::PI;

/// `(row index, value)` points for index-keyed bar, line and area charts
pub fn indexed_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect()
}

/// A named series over the row index
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn indexed(name: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: name.into(),
            points: indexed_points(values),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// =============================================================================
// Histogram
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Equal-width histogram over `[min, max]`, last bin closed on the right
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn new(values: &[f64], bins: usize) -> Self {
        let Some((mut lo, mut hi)) = min_max(values) else {
            return Self::default();
        };
        let bins = bins.max(1);

        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for v in values.iter().filter(|v| v.is_finite()) {
            let idx = ((v - lo) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: lo + i as f64 * width,
                end: if i + 1 == bins { hi } else { lo + (i + 1) as f64 * width },
                count,
            })
            .collect();

        Self { bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

// =============================================================================
// Category counts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count occurrences per distinct value, in first-seen order
pub fn category_counts<I, S>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<CategoryCount> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match counts.iter_mut().find(|c| c.label == value) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                label: value.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

// =============================================================================
// Distribution plot
// =============================================================================

/// Gaussian kernel density estimate with Scott's bandwidth
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Returns `None` for fewer than two samples or zero variance.
    pub fn new(values: &[f64]) -> Option<Self> {
        let samples: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let n = samples.len();
        if n < 2 {
            return None;
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std = var.sqrt();
        if std == 0.0 {
            return None;
        }

        let bandwidth = std * (n as f64).powf(-0.2);
        Some(Self { samples, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn density(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / (self.samples.len() as f64 * h * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|xi| {
                let z = (x - xi) / h;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }
}

/// One series of a distribution plot
#[derive(Debug, Clone, PartialEq)]
pub struct DistSeries {
    pub label: String,
    /// Probability-density histogram, bins of the configured width from the series minimum.
    /// Empty bins are omitted.
    pub bins: Vec<Bin>,
    pub densities: Vec<f64>,
    /// KDE evaluated across `[min, max]`; empty when no curve can be fitted
    pub curve: Vec<[f64; 2]>,
    pub rug: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distplot {
    pub series: Vec<DistSeries>,
}

impl Distplot {
    /// `series` pairs a label with its values; `bin_sizes[i]` applies to series `i`
    /// (the last size is reused when fewer sizes than series are given).
    pub fn new(series: Vec<(String, Vec<f64>)>, bin_sizes: &[f64], curve_points: usize) -> Self {
        let series = series
            .into_iter()
            .enumerate()
            .map(|(i, (label, values))| {
                let bin_size = bin_sizes
                    .get(i)
                    .or_else(|| bin_sizes.last())
                    .copied()
                    .unwrap_or(1.0);
                dist_series(label, values, bin_size, curve_points)
            })
            .collect();
        Self { series }
    }
}

fn dist_series(label: String, values: Vec<f64>, bin_size: f64, curve_points: usize) -> DistSeries {
    let Some((lo, hi)) = min_max(&values) else {
        return DistSeries {
            label,
            bins: Vec::new(),
            densities: Vec::new(),
            curve: Vec::new(),
            rug: Vec::new(),
        };
    };

    let size = if bin_size > 0.0 { bin_size } else { 1.0 };

    // Only occupied bins are kept, so sparse ids far apart stay cheap
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for v in values.iter().filter(|v| v.is_finite()) {
        let idx = ((v - lo) / size).floor() as u64;
        *counts.entry(idx).or_insert(0) += 1;
    }

    let n = counts.values().sum::<usize>() as f64;
    let bins: Vec<Bin> = counts
        .iter()
        .map(|(i, count)| Bin {
            start: lo + *i as f64 * size,
            end: lo + (*i + 1) as f64 * size,
            count: *count,
        })
        .collect();
    let densities = counts.values().map(|c| *c as f64 / (n * size)).collect();

    let curve = match GaussianKde::new(&values) {
        Some(kde) if curve_points > 0 => {
            let step = (hi - lo) / curve_points as f64;
            (0..curve_points)
                .map(|i| {
                    let x = lo + i as f64 * step;
                    [x, kde.density(x)]
                })
                .collect()
        }
        _ => Vec::new(),
    };

    DistSeries {
        label,
        bins,
        densities,
        curve,
        rug: values,
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
