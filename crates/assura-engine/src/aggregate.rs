//! Two-stage weighted aggregation
//!
//! [`weighted_scores`] is the only place raw pass/fail counts are summed:
//! one pass over the rows, one [`GroupScore`] per distinct grouping key.
//! [`roll_up`] re-aggregates those scores one level coarser as a
//! weight-normalized average. Both stages keep SLO thresholds as plain
//! arithmetic means of their members: weight blends scores between groups,
//! it never skews the thresholds inside one.
//!
//! Groups are accumulated in key order, so equal inputs produce
//! byte-identical output.

use std::collections::BTreeMap;

use assura_types::MeasurementRow;

/// Score and thresholds for one fine-grained group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupScore<K> {
    /// Grouping key value
    pub key: K,

    /// Roll-up weight, taken from the group's first-seen row. Weight is
    /// constant per metric within a roll-up scope, so first-seen is the
    /// group's weight.
    pub weight: f64,

    /// `sum(totalok) / sum(total)`, or `None` when the group evaluated
    /// nothing
    pub score: Option<f64>,

    /// Mean of member rows' red/amber boundaries
    pub slo_min: f64,

    /// Mean of member rows' green thresholds
    pub slo: f64,
}

/// Score and thresholds for one rolled-up group
#[derive(Debug, Clone, PartialEq)]
pub struct RolledScore<K> {
    /// Coarse grouping key value
    pub key: K,

    /// Weight-normalized average of the member scores, or `None` when no
    /// member carried a score or all member weights were zero
    pub score: Option<f64>,

    /// Mean of member groups' red/amber boundaries
    pub slo_min: f64,

    /// Mean of member groups' green thresholds
    pub slo: f64,
}

#[derive(Default)]
struct CountAccum {
    total: f64,
    totalok: f64,
    slo_sum: f64,
    slo_min_sum: f64,
    members: usize,
    weight: Option<f64>,
}

/// Sum raw pass/fail counts per group and derive each group's score.
///
/// `key_of` maps a row to its grouping key; rows mapping to `None` (e.g.
/// rows that do not carry the breakdown column) are left out. A group whose
/// totals sum to zero gets `score: None` — there is no ratio to report, and
/// a sentinel would misclassify downstream.
pub fn weighted_scores<K, F>(rows: &[&MeasurementRow], key_of: F) -> Vec<GroupScore<K>>
where
    K: Ord,
    F: Fn(&MeasurementRow) -> Option<K>,
{
    let mut groups: BTreeMap<K, CountAccum> = BTreeMap::new();

    for row in rows {
        let Some(key) = key_of(row) else {
            continue;
        };
        let accum = groups.entry(key).or_default();
        accum.total += row.total;
        accum.totalok += row.totalok;
        accum.slo_sum += row.slo;
        accum.slo_min_sum += row.slo_min;
        accum.members += 1;
        accum.weight.get_or_insert(row.weight);
    }

    groups
        .into_iter()
        .map(|(key, accum)| {
            let members = accum.members as f64;
            GroupScore {
                key,
                weight: accum.weight.unwrap_or(0.0),
                score: (accum.total > 0.0).then(|| accum.totalok / accum.total),
                slo_min: accum.slo_min_sum / members,
                slo: accum.slo_sum / members,
            }
        })
        .collect()
}

#[derive(Default)]
struct BlendAccum {
    weighted_sum: f64,
    weight_sum: f64,
    slo_sum: f64,
    slo_min_sum: f64,
    members: usize,
}

/// Blend already-computed group scores one level coarser.
///
/// `score = sum(score * weight) / sum(weight)` over the members that carry
/// a score. Members without a score contribute neither score nor weight to
/// the blend — but their thresholds still count toward the coarse means. A
/// coarse group left with zero blended weight is itself undefined.
pub fn roll_up<K, C, F>(fine: &[GroupScore<K>], key_of: F) -> Vec<RolledScore<C>>
where
    C: Ord,
    F: Fn(&GroupScore<K>) -> C,
{
    let mut groups: BTreeMap<C, BlendAccum> = BTreeMap::new();

    for group in fine {
        let accum = groups.entry(key_of(group)).or_default();
        if let Some(score) = group.score {
            accum.weighted_sum += score * group.weight;
            accum.weight_sum += group.weight;
        }
        accum.slo_sum += group.slo;
        accum.slo_min_sum += group.slo_min;
        accum.members += 1;
    }

    groups
        .into_iter()
        .map(|(key, accum)| {
            let members = accum.members as f64;
            RolledScore {
                key,
                score: (accum.weight_sum > 0.0).then(|| accum.weighted_sum / accum.weight_sum),
                slo_min: accum.slo_min_sum / members,
                slo: accum.slo_sum / members,
            }
        })
        .collect()
}
