mod tally;
mod vote;

pub use tally::{daily_counts, fill_totals, ChoiceTotal, DailyCount};
pub use vote::{CreateVote, UnvalidatedCreateVote};
