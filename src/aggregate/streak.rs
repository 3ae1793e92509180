use crate::github::models::ContributionCalendar;

/// Longest run of consecutive active days.
///
/// Calendars are concatenated in the order given, so a run can continue from
/// the last day of one account into the first day of the next.
pub fn max_streak<'a, I>(calendars: I) -> u64
where
    I: IntoIterator<Item = &'a ContributionCalendar>,
{
    let counts = calendars
        .into_iter()
        .flat_map(|calendar| &calendar.weeks)
        .flat_map(|week| &week.contribution_days)
        .map(|day| day.contribution_count);

    longest_run(counts)
}

fn longest_run(counts: impl Iterator<Item = u64>) -> u64 {
    let mut current = 0;
    let mut longest = 0;

    for count in counts {
        if count > 0 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}
