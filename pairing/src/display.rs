//! Plain-text rendering of coordinator results for the command line

use std::fmt;

use crate::coordinator::{CompletionOutcome, CompletionReceipt, PairingReport, RankedBoard};
use crate::core::completions::MemberStats;

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for PairingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(
                f,
                "Could not create any pairs for {}. At least two members are needed.",
                self.cycle
            );
        }

        writeln!(f, "🍩 Pairings for {}", self.cycle)?;
        for (index, pair) in self.pairs.iter().enumerate() {
            writeln!(f, "Pair {}: {}", index + 1, pair)?;
        }
        if !self.unpaired.is_empty() {
            writeln!(f, "Unpaired (odd number): {}", join(&self.unpaired))?;
        }
        write!(
            f,
            "Notifications sent: {} | Failed: {}",
            self.notifications.sent, self.notifications.failed
        )
    }
}

impl fmt::Display for CompletionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();

        if self.recorded_count() > 0 {
            lines.push("Completion recorded! 🎉".to_string());
        }
        let already = self.members_with(CompletionOutcome::AlreadyRecorded);
        if !already.is_empty() {
            lines.push(format!("Already completed with {} this week.", join(&already)));
        }
        let strangers = self.members_with(CompletionOutcome::NotPartnered);
        if !strangers.is_empty() {
            lines.push(format!(
                "⚠️ Not paired with {} this week. Only post with your assigned partner!",
                join(&strangers)
            ));
        }

        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Display for RankedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No completions yet!");
        }

        writeln!(f, "🍩 Leaderboard")?;
        for entry in &self.entries {
            let place = match entry.rank {
                1 => "🥇".to_string(),
                2 => "🥈".to_string(),
                3 => "🥉".to_string(),
                n => format!("{n}."),
            };
            let plural = if entry.count == 1 { "" } else { "s" };
            write!(f, "{place} {} - {} completion{plural}", entry.member, entry.count)?;
            if entry.this_cycle > 0 {
                write!(f, " ({} this week)", entry.this_cycle)?;
            }
            writeln!(f)?;
        }
        if self.total_members > self.entries.len() {
            write!(f, "Showing top {} of {} members", self.entries.len(), self.total_members)?;
        }
        Ok(())
    }
}

impl fmt::Display for MemberStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {} | This week: {}", self.total, self.this_cycle)
    }
}
