/// Aggregate counts over the task list. Pure read, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Completed share as a percentage. 0.0 for an empty list, so no
    /// division by zero occurs.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate_empty() {
        let stats = TaskStats::default();
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn test_completion_rate_partial() {
        let stats = TaskStats {
            total: 3,
            completed: 1,
            pending: 2,
        };
        let rate = stats.completion_rate();
        assert!((rate - 33.333333).abs() < 0.0001);
        assert_eq!(format!("{:.1}", rate), "33.3");
    }

    #[test]
    fn test_completion_rate_full() {
        let stats = TaskStats {
            total: 4,
            completed: 4,
            pending: 0,
        };
        assert_eq!(stats.completion_rate(), 100.0);
    }
}
