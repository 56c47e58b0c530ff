use crate::error::LcgError;

/// Upper bound on the number of bins produced by [`Histogram::uniform_edges`].
pub const MAX_UNIFORM_BINS: i64 = 4096;

/// Frequency counts of a sequence over integer bin edges.
///
/// Bins are half-open `[e_i, e_i+1)` except the last one, which also
/// includes its upper edge. Values outside every bin are only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    edges: Vec<i64>,
    counts: Vec<u64>,
    excluded: u64,
}

impl Histogram {
    pub fn from_values(values: &[i64], edges: &[i64]) -> Result<Histogram, LcgError> {
        if edges.len() < 2 {
            return Err(LcgError::InvalidBins {
                message: "at least two edges are required",
            });
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(LcgError::InvalidBins {
                message: "edges must be strictly increasing",
            });
        }

        let mut counts = vec![0u64; edges.len() - 1];
        let mut excluded = 0u64;
        for &value in values {
            match bin_index(edges, value) {
                Some(i) => counts[i] += 1,
                None => excluded += 1,
            }
        }

        if excluded > 0 {
            log::warn!(
                "{excluded} of {} values fall outside [{}, {}] and are not shown",
                values.len(),
                edges[0],
                edges[edges.len() - 1]
            );
        }

        Ok(Histogram {
            edges: edges.to_vec(),
            counts,
            excluded,
        })
    }

    /// Edges `0, 1, ..., modulus`: one bin per generator state.
    pub fn uniform_edges(modulus: i64) -> Result<Vec<i64>, LcgError> {
        if modulus <= 0 {
            return Err(LcgError::InvalidParameter {
                name: "modulus",
                value: modulus,
                reason: "must be positive",
            });
        }
        if modulus > MAX_UNIFORM_BINS {
            return Err(LcgError::InvalidBins {
                message: "modulus too large for one bin per state",
            });
        }
        Ok((0..=modulus).collect())
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn excluded(&self) -> u64 {
        self.excluded
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(low edge, high edge, count)` for every bin, in order.
    pub fn bins(&self) -> impl Iterator<Item = (i64, i64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &count)| (w[0], w[1], count))
    }

    /// Renders one line per bin with a bar scaled so the fullest bin is `width` wide.
    pub fn render_text(&self, width: usize) -> String {
        let last = self.counts.len() - 1;
        let labels: Vec<String> = self
            .bins()
            .enumerate()
            .map(|(i, (lo, hi, _))| {
                let close = if i == last { ']' } else { ')' };
                format!("[{lo}, {hi}{close}")
            })
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let max = self.max_count();

        let mut lines: Vec<String> = labels
            .iter()
            .zip(&self.counts)
            .map(|(label, &count)| {
                let bar_len = if max == 0 {
                    0
                } else {
                    (count * width as u64 / max) as usize
                };
                let bar = "#".repeat(bar_len);
                format!("{label:<label_width$} | {bar:<width$} {count}")
            })
            .collect();

        if self.excluded > 0 {
            lines.push(format!("({} outside the bins)", self.excluded));
        }
        lines.join("\n")
    }
}

fn bin_index(edges: &[i64], value: i64) -> Option<usize> {
    let last = edges.len() - 1;
    if value < edges[0] || value > edges[last] {
        return None;
    }
    if value == edges[last] {
        return Some(last - 1);
    }
    Some(edges.partition_point(|&e| e <= value) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEMO: [i64; 10] = [0, 1, 6, 15, 12, 13, 2, 11, 8, 9];

    #[test]
    fn demo_bins_drop_upper_values() {
        let edges: Vec<i64> = (0..=9).collect();
        let hist = Histogram::from_values(&DEMO, &edges).unwrap();
        assert_eq!(hist.counts(), &[1, 1, 1, 0, 0, 0, 1, 0, 2]);
        assert_eq!(hist.excluded(), 4);
    }

    #[test]
    fn uniform_edges_cover_every_state() {
        let edges = Histogram::uniform_edges(16).unwrap();
        assert_eq!(edges.len(), 17);
        let hist = Histogram::from_values(&DEMO, &edges).unwrap();
        assert_eq!(hist.excluded(), 0);
        assert_eq!(hist.counts().iter().sum::<u64>(), DEMO.len() as u64);
        assert_eq!(hist.counts()[15], 1);
    }

    #[test]
    fn uneven_edges() {
        let hist = Histogram::from_values(&[-5, 0, 3, 4, 10, 11], &[0, 4, 10]).unwrap();
        assert_eq!(hist.counts(), &[2, 2]);
        assert_eq!(hist.excluded(), 2);
    }

    #[test]
    fn rejects_bad_edges() {
        assert!(matches!(
            Histogram::from_values(&DEMO, &[3]),
            Err(LcgError::InvalidBins { .. })
        ));
        assert!(matches!(
            Histogram::from_values(&DEMO, &[0, 5, 5, 9]),
            Err(LcgError::InvalidBins { .. })
        ));
        assert!(Histogram::uniform_edges(0).is_err());
        assert!(Histogram::uniform_edges(MAX_UNIFORM_BINS + 1).is_err());
    }

    #[test]
    fn text_rendering() {
        let hist = Histogram::from_values(&[0, 1, 1, 2, 7], &[0, 1, 2, 3]).unwrap();
        let text = hist.render_text(4);
        let expected = [
            "[0, 1) | ##   1",
            "[1, 2) | #### 2",
            "[2, 3] | ##   1",
            "(1 outside the bins)",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_sequence_renders_without_bars() {
        let hist = Histogram::from_values(&[], &[0, 1]).unwrap();
        assert_eq!(hist.render_text(3), "[0, 1] |     0");
    }
}
