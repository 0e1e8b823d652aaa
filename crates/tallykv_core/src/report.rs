//! Diagnostic dump of every live frame.

use crate::transaction::Frame;
use crate::types::Slot;
use std::fmt;

/// Snapshot of one frame for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Position on the stack; 0 is the root.
    pub depth: usize,
    /// Entries written in this frame, sorted by key.
    pub entries: Vec<(String, Slot)>,
    /// Value deltas recorded in this frame, sorted by value.
    pub counts: Vec<(String, i64)>,
}

impl FrameReport {
    pub(crate) fn from_frame(depth: usize, frame: &Frame) -> Self {
        let mut entries: Vec<_> = frame
            .entries()
            .map(|(k, slot)| (k.to_owned(), slot.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut counts: Vec<_> = frame.deltas().map(|(v, d)| (v.to_owned(), d)).collect();
        counts.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            depth,
            entries,
            counts,
        }
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trx {} {{", self.depth)?;
        for (i, (key, slot)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {slot}")?;
        }
        f.write_str("} [")?;
        for (i, (value, delta)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({value:?}, {delta})")?;
        }
        f.write_str("]")
    }
}

/// Entries and value deltas of every frame, root first.
///
/// Output is fully ordered, so two reports of an unchanged stack compare
/// equal and render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One report per frame, root to top.
    pub frames: Vec<FrameReport>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_report_is_sorted() {
        let mut frame = Frame::new();
        frame.set("b".into(), "2".into(), None);
        frame.set("a".into(), "1".into(), None);
        frame.delete("c".into(), None);

        let report = FrameReport::from_frame(0, &frame);
        let keys: Vec<_> = report.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(
            report.counts,
            vec![("1".to_string(), 1), ("2".to_string(), 1)]
        );
    }

    #[test]
    fn frame_report_display() {
        let mut frame = Frame::new();
        frame.set("a".into(), "1".into(), None);
        frame.delete("b".into(), None);

        let report = FrameReport::from_frame(1, &frame);
        assert_eq!(
            report.to_string(),
            "trx 1 {\"a\": \"1\", \"b\": <deleted>} [(\"1\", 1)]"
        );
    }

    #[test]
    fn empty_frame_display() {
        let report = FrameReport::from_frame(0, &Frame::new());
        assert_eq!(report.to_string(), "trx 0 {} []");
    }
}
