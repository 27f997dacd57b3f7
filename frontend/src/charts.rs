//! Count series derived from a prediction result, one per chart.

use crate::models::PredictedTransaction;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A labelled count, the unit every chart plots.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub count: u32,
}

impl Bucket {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FraudSeries {
    pub by_category: Vec<Bucket>,
    pub by_hour: Vec<Bucket>,
    pub by_weekday: Vec<Bucket>,
    pub by_month: Vec<Bucket>,
}

impl FraudSeries {
    pub fn from_records(records: &[PredictedTransaction]) -> Self {
        Self {
            by_category: by_category(records),
            by_hour: by_hour(records),
            by_weekday: by_weekday(records),
            by_month: by_month(records),
        }
    }
}

/// Counts per category, in order of first appearance.
pub fn by_category(records: &[PredictedTransaction]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for record in records {
        match buckets.iter_mut().find(|b| b.label == record.category) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket {
                label: record.category.clone(),
                count: 1,
            }),
        }
    }
    buckets
}

pub fn by_hour(records: &[PredictedTransaction]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = (0..24).map(|h| Bucket::new(h.to_string())).collect();
    tally(&mut buckets, records, |r| r.hour);
    buckets
}

/// Day 0 is Monday.
pub fn by_weekday(records: &[PredictedTransaction]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = WEEKDAYS.iter().map(|d| Bucket::new(*d)).collect();
    tally(&mut buckets, records, |r| r.day_of_week);
    buckets
}

pub fn by_month(records: &[PredictedTransaction]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = (1..=12).map(|m| Bucket::new(m.to_string())).collect();
    tally(&mut buckets, records, |r| r.month.checked_sub(1).unwrap_or(-1));
    buckets
}

// Values outside the bucket range are dropped.
fn tally<F>(buckets: &mut [Bucket], records: &[PredictedTransaction], index: F)
where
    F: Fn(&PredictedTransaction) -> i64,
{
    for record in records {
        if let Ok(i) = usize::try_from(index(record)) {
            if let Some(bucket) = buckets.get_mut(i) {
                bucket.count += 1;
            }
        }
    }
}

pub fn max_count(buckets: &[Bucket]) -> u32 {
    buckets.iter().map(|b| b.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, hour: i64, day: i64, month: i64) -> PredictedTransaction {
        PredictedTransaction {
            category: category.to_string(),
            hour,
            day_of_week: day,
            month,
            predicted_fraud: 1,
            ..Default::default()
        }
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let records = vec![
            record("shopping_net", 1, 0, 1),
            record("grocery_pos", 2, 0, 1),
            record("shopping_net", 3, 0, 1),
            record("misc_net", 4, 0, 1),
            record("grocery_pos", 5, 0, 1),
            record("shopping_net", 6, 0, 1),
        ];
        let categories = by_category(&records);
        let got: Vec<(&str, u32)> = categories
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect();
        assert_eq!(
            got,
            vec![("shopping_net", 3), ("grocery_pos", 2), ("misc_net", 1)]
        );
    }

    #[test]
    fn fixed_series_have_full_length_when_empty() {
        let series = FraudSeries::from_records(&[]);
        assert!(series.by_category.is_empty());
        assert_eq!(series.by_hour.len(), 24);
        assert_eq!(series.by_weekday.len(), 7);
        assert_eq!(series.by_month.len(), 12);
        assert_eq!(max_count(&series.by_hour), 0);
    }

    #[test]
    fn hours_weekdays_and_months_bucket_correctly() {
        let records = vec![
            record("a", 0, 0, 1),
            record("a", 23, 6, 12),
            record("a", 23, 6, 12),
            record("a", 12, 3, 7),
        ];
        let series = FraudSeries::from_records(&records);

        assert_eq!(series.by_hour[0].count, 1);
        assert_eq!(series.by_hour[23].count, 2);
        assert_eq!(series.by_hour[12].count, 1);
        assert_eq!(series.by_hour[23].label, "23");

        assert_eq!(series.by_weekday[0].label, "Mon");
        assert_eq!(series.by_weekday[0].count, 1);
        assert_eq!(series.by_weekday[6].label, "Sun");
        assert_eq!(series.by_weekday[6].count, 2);
        assert_eq!(series.by_weekday[3].count, 1);

        assert_eq!(series.by_month[0].label, "1");
        assert_eq!(series.by_month[0].count, 1);
        assert_eq!(series.by_month[11].label, "12");
        assert_eq!(series.by_month[11].count, 2);
        assert_eq!(series.by_month[6].count, 1);
        assert_eq!(max_count(&series.by_hour), 2);
    }

    #[test]
    fn out_of_range_values_are_not_counted() {
        let records = vec![record("a", 24, 7, 0), record("a", -1, -1, 13)];
        let series = FraudSeries::from_records(&records);
        assert_eq!(series.by_hour.iter().map(|b| b.count).sum::<u32>(), 0);
        assert_eq!(series.by_weekday.iter().map(|b| b.count).sum::<u32>(), 0);
        assert_eq!(series.by_month.iter().map(|b| b.count).sum::<u32>(), 0);
        assert_eq!(series.by_category[0].count, 2);
    }

    #[test]
    fn extreme_wire_values_are_not_counted() {
        let records = vec![
            record("a", i64::MIN, i64::MIN, i64::MIN),
            record("a", i64::MAX, i64::MAX, i64::MAX),
        ];
        let series = FraudSeries::from_records(&records);
        assert_eq!(max_count(&series.by_hour), 0);
        assert_eq!(max_count(&series.by_weekday), 0);
        assert_eq!(max_count(&series.by_month), 0);
    }
}
