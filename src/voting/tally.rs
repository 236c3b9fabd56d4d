use chrono::NaiveDate;
use serde::Serialize;

/// One bar of the results chart: how many votes a choice received overall.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceTotal {
    pub count: i64,
    pub voting_choice: bool,
}

/// One point of the votes-over-time chart: votes for a choice on one day.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub count: i64,
    pub casted_at: NaiveDate,
}

/// Expands grouped per-choice counts into the fixed two-entry shape the
/// dashboard expects: yes first, then no, zero when a choice has no votes.
pub fn fill_totals(rows: Vec<(bool, i64)>) -> Vec<ChoiceTotal> {
    let mut totals = vec![
        ChoiceTotal { count: 0, voting_choice: true },
        ChoiceTotal { count: 0, voting_choice: false },
    ];
    for (choice, count) in rows {
        let slot = if choice { 0 } else { 1 };
        totals[slot].count = count;
    }
    totals
}

pub fn daily_counts(rows: Vec<(NaiveDate, i64)>) -> Vec<DailyCount> {
    rows.into_iter()
        .map(|(day, count)| DailyCount { count, casted_at: day })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn totals_cover_both_choices_with_no_votes() {
        let totals = fill_totals(vec![]);
        assert_eq!(totals, vec![
            ChoiceTotal { count: 0, voting_choice: true },
            ChoiceTotal { count: 0, voting_choice: false },
        ]);
    }

    #[test]
    fn totals_keep_yes_before_no() {
        let totals = fill_totals(vec![(false, 7), (true, 3)]);
        assert_eq!(totals, vec![
            ChoiceTotal { count: 3, voting_choice: true },
            ChoiceTotal { count: 7, voting_choice: false },
        ]);
    }

    #[test]
    fn one_sided_vote_zero_fills_the_other_choice() {
        let totals = fill_totals(vec![(true, 12)]);
        assert_eq!(totals[0].count, 12);
        assert_eq!(totals[1].count, 0);
    }

    #[test]
    fn totals_sum_matches_input() {
        let rows = vec![(true, 5), (false, 9)];
        let submitted: i64 = rows.iter().map(|(_, n)| n).sum();
        let counted: i64 = fill_totals(rows).iter().map(|t| t.count).sum();
        assert_eq!(counted, submitted);
    }

    #[test]
    fn daily_counts_preserve_order_and_sum() {
        let rows = vec![(day("2024-03-04"), 2), (day("2024-03-05"), 3)];
        let counts = daily_counts(rows);
        assert_eq!(counts.len(), 2);
        assert!(counts[0].casted_at < counts[1].casted_at);
        assert_eq!(counts.iter().map(|c| c.count).sum::<i64>(), 5);
    }
}
