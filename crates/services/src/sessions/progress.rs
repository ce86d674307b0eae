/// Aggregated view of interview progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the question on screen.
    pub question_number: usize,
    pub total: usize,
    pub answered: usize,
    pub awaiting_next: bool,
}

impl SessionProgress {
    /// Share of the interview reached, counting the question on screen.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.question_number.min(self.total) * 100) / self.total;
        u8::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_number >= self.total
    }
}
