// Per-metric min/max rescaling. Each metric gets its own domain so kilograms,
// kilocalories, steps and minutes can share one plot without a shared y axis.
use shared::models::{Domain, Entry, Metric, ScaledSeries};

/// Raw values for `metric`, aligned index-for-index with `entries`.
pub fn extract(entries: &[Entry], metric: Metric) -> Vec<Option<f64>> {
    entries.iter().map(|e| e.value(metric)).collect()
}

/// Domain over the finite values. No finite values gives `[0, 1]`; a constant
/// series is widened by one unit on each side, or by a few ulps where one unit
/// is below the float resolution of the value.
pub fn domain_of(values: &[Option<f64>]) -> Domain {
    let mut finite = values.iter().flatten().copied().filter(|v| v.is_finite());
    let Some(first) = finite.next() else {
        return Domain::UNIT;
    };
    let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min == max {
        let pad = 1.0_f64.max(min.abs() * f64::EPSILON * 4.0);
        Domain {
            min: (min - pad).max(f64::MIN),
            max: (max + pad).min(f64::MAX),
        }
    } else {
        Domain { min, max }
    }
}

/// Maps each finite value into [0, 1] relative to `domain`. Gaps stay gaps.
pub fn normalize(values: &[Option<f64>], domain: Domain) -> Vec<Option<f64>> {
    let span = domain.span();
    let scale = |x: f64| {
        if span.is_finite() {
            (x - domain.min) / span
        } else {
            // Domains wider than f64::MAX are measured in halves.
            (x * 0.5 - domain.min * 0.5) / (domain.max * 0.5 - domain.min * 0.5)
        }
    };
    values
        .iter()
        .map(|v| v.filter(|x| x.is_finite()).map(scale))
        .collect()
}

pub fn scale_metric(entries: &[Entry], metric: Metric) -> ScaledSeries {
    let raw = extract(entries, metric);
    let domain = domain_of(&raw);
    ScaledSeries {
        metric,
        domain,
        values: normalize(&raw, domain),
    }
}

/// The metrics to draw, in selection order without repeats. An empty selection
/// becomes weight alone.
pub fn resolve_metrics(selected: &[Metric]) -> Vec<Metric> {
    let mut metrics: Vec<Metric> = Vec::with_capacity(selected.len().max(1));
    for metric in selected {
        if !metrics.contains(metric) {
            metrics.push(*metric);
        }
    }
    if metrics.is_empty() {
        tracing::debug!(fallback = %Metric::DEFAULT, "No metrics selected, falling back to the default metric");
        metrics.push(Metric::DEFAULT);
    }
    metrics
}

/// Scales every selected metric over `entries`.
pub fn scale_metrics(entries: &[Entry], selected: &[Metric]) -> Vec<ScaledSeries> {
    resolve_metrics(selected)
        .into_iter()
        .map(|metric| scale_metric(entries, metric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(values: &[Option<f64>]) -> Vec<Entry> {
        values
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let mut e = Entry::empty(format!("2024-01-{:02}", i + 1));
                e.weight = *w;
                e
            })
            .collect()
    }

    fn present(values: &[Option<f64>]) -> Vec<f64> {
        values.iter().flatten().copied().collect()
    }

    #[test]
    fn test_bounds_map_to_zero_and_one() {
        let series = scale_metric(&weights(&[Some(72.0), Some(70.0), Some(71.0), Some(74.0)]), Metric::Weight);
        assert_eq!(series.domain, Domain { min: 70.0, max: 74.0 });
        assert_eq!(series.values, vec![Some(0.5), Some(0.0), Some(0.25), Some(1.0)]);
        let vals = present(&series.values);
        assert_eq!(vals.iter().cloned().fold(f64::INFINITY, f64::min), 0.0);
        assert_eq!(vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 1.0);
    }

    #[test]
    fn test_gaps_are_preserved_not_filled() {
        let series = scale_metric(&weights(&[Some(70.0), None, Some(80.0), None]), Metric::Weight);
        assert_eq!(series.values, vec![Some(0.0), None, Some(1.0), None]);
    }

    #[test]
    fn test_constant_series_is_widened() {
        let series = scale_metric(&weights(&[Some(70.0), None, Some(70.0)]), Metric::Weight);
        assert_eq!(series.domain, Domain { min: 69.0, max: 71.0 });
        assert_eq!(series.values, vec![Some(0.5), None, Some(0.5)]);
    }

    #[test]
    fn test_single_value_maps_to_half() {
        let series = scale_metric(&weights(&[Some(70.4)]), Metric::Weight);
        let value = series.values[0].expect("present");
        assert!((value - 0.5).abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn test_large_constant_series_still_gets_a_width() {
        let mut entries = weights(&[None, None]);
        entries[0].steps = Some(1e17);
        entries[1].steps = Some(1e17);
        let series = scale_metric(&entries, Metric::Steps);
        assert!(series.domain.max > series.domain.min, "{:?}", series.domain);
        for value in present(&series.values) {
            assert!((value - 0.5).abs() < 1e-9, "got {}", value);
        }
    }

    #[test]
    fn test_extreme_magnitudes_stay_finite() {
        let flat = scale_metric(&weights(&[Some(f64::MAX), Some(f64::MAX)]), Metric::Weight);
        assert!(flat.domain.max > flat.domain.min);
        assert!(present(&flat.values).iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)));

        let wide = scale_metric(&weights(&[Some(f64::MIN), Some(0.0), Some(f64::MAX)]), Metric::Weight);
        assert_eq!(wide.values, vec![Some(0.0), Some(0.5), Some(1.0)]);
    }

    #[test]
    fn test_all_absent_series() {
        let series = scale_metric(&weights(&[None, None]), Metric::Weight);
        assert_eq!(series.domain, Domain::UNIT);
        assert_eq!(series.values, vec![None, None]);
    }

    #[test]
    fn test_empty_entries() {
        let series = scale_metric(&[], Metric::Steps);
        assert_eq!(series.domain, Domain::UNIT);
        assert!(series.values.is_empty());
    }

    #[test]
    fn test_normalization_is_monotonic() {
        let raw = [Some(3.0), Some(-2.0), Some(10.0), Some(7.5), Some(0.0)];
        let series = scale_metric(&weights(&raw), Metric::Weight);
        for (a, na) in raw.iter().zip(&series.values) {
            for (b, nb) in raw.iter().zip(&series.values) {
                if a < b {
                    assert!(na < nb, "{:?} < {:?} but {:?} >= {:?}", a, b, na, nb);
                }
            }
        }
    }

    #[test]
    fn test_metrics_are_scaled_independently() {
        let mut entries = weights(&[Some(70.0), Some(72.0)]);
        entries[0].steps = Some(4000.0);
        entries[1].steps = Some(12000.0);
        let series = scale_metrics(&entries, &[Metric::Weight, Metric::Steps]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].metric, Metric::Steps);
        assert_eq!(series[1].domain, Domain { min: 4000.0, max: 12000.0 });
        assert_eq!(series[0].values, series[1].values);
    }

    #[test]
    fn test_empty_selection_falls_back_to_weight() {
        assert_eq!(resolve_metrics(&[]), vec![Metric::Weight]);
        let series = scale_metrics(&weights(&[Some(70.0)]), &[]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].metric, Metric::Weight);
    }

    #[test]
    fn test_duplicate_selection_is_collapsed() {
        assert_eq!(
            resolve_metrics(&[Metric::Steps, Metric::Weight, Metric::Steps]),
            vec![Metric::Steps, Metric::Weight]
        );
    }
}
