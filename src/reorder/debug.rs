use super::ReorderSession;

impl ReorderSession {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        let line = format!("[frame {}] {}", self.frame, message.into());
        log::debug!("{line}");
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(line);
    }

    fn push_debug_log_line(&mut self, line: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log.push_back(line);
    }

    /// Lines recorded while [`super::ReorderOptions::debug_event_log`] is on, oldest first.
    pub fn debug_log_text(&self) -> String {
        self.debug_log
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn debug_log_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
