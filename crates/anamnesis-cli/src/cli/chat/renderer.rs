//! Terminal markdown rendering for patient replies.
//!
//! Patient replies are short prose with bracketed non-verbal cues, so a
//! plain `termimad` skin is enough; there are no code blocks to highlight.

use termimad::MadSkin;

/// Terminal markdown renderer for the interview loop.
pub struct InterviewRenderer {
    skin: MadSkin,
}

impl InterviewRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.italic
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Render a complete patient reply as formatted markdown.
    pub fn render(&self, markdown: &str) -> String {
        let mut output = String::new();
        for line in markdown.lines() {
            let rendered = self.skin.term_text(line);
            output.push_str(&format!("{rendered}"));
        }
        output
    }

    /// Print the stats footer after a patient reply.
    pub fn print_stats_footer(&self, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "  {} {:.1}s {} {}",
            console::style("|").dim(),
            console::style(seconds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(model).dim(),
        );
    }
}

impl Default for InterviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}
