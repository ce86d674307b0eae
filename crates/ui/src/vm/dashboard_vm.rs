use services::DashboardStats;

use crate::vm::time_fmt::format_practice_time;

const EMPTY_STAT: &str = "-";

/// Dashboard figures as display strings; empty history shows `-`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub total_interviews: String,
    pub average_score: String,
    pub best_score: String,
    pub total_time: String,
}

impl From<DashboardStats> for DashboardVm {
    fn from(stats: DashboardStats) -> Self {
        let percent = |score: Option<u8>| {
            score.map_or_else(|| EMPTY_STAT.to_string(), |value| format!("{value}%"))
        };
        let total_time = if stats.total_time_secs > 0 {
            format_practice_time(stats.total_time_secs)
        } else {
            EMPTY_STAT.to_string()
        };

        Self {
            total_interviews: stats.total_interviews.to_string(),
            average_score: percent(stats.average_score),
            best_score: percent(stats.best_score),
            total_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_show_dashes() {
        let vm = DashboardVm::from(DashboardStats::default());
        assert_eq!(vm.total_interviews, "0");
        assert_eq!(vm.average_score, "-");
        assert_eq!(vm.best_score, "-");
        assert_eq!(vm.total_time, "-");
    }

    #[test]
    fn filled_stats_are_formatted() {
        let vm = DashboardVm::from(DashboardStats {
            total_interviews: 3,
            average_score: Some(70),
            best_score: Some(78),
            total_time_secs: 3_945,
        });
        assert_eq!(vm.average_score, "70%");
        assert_eq!(vm.best_score, "78%");
        assert_eq!(vm.total_time, "1h 5m");
    }
}
