use std::fmt::Write;

use folio_core::sink::RenderSink;
use folio_protocol::{CardFrame, FaceSide, FaceUpdate, MarqueeUpdate};

/// Evenly spaced positions from `from` to `to`, inclusive. Positions are
/// computed by index so long sweeps do not accumulate float error.
#[derive(Debug, Clone)]
pub struct Sweep {
    from: f64,
    step: f64,
    index: u64,
    count: u64,
}

impl Sweep {
    pub fn new(from: f64, to: f64, step: f64) -> Self {
        let count = if to >= from {
            ((to - from) / step + 1e-9).floor() as u64 + 1
        } else {
            0
        };
        Self {
            from,
            step,
            index: 0,
            count,
        }
    }
}

impl Iterator for Sweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let value = self.from + self.index as f64 * self.step;
        self.index += 1;
        Some(value)
    }
}

/// Renders frames as a text table, noting content swaps as they happen.
#[derive(Debug, Default)]
pub struct TableSink {
    out: String,
    raw: f64,
    notes: Vec<String>,
}

impl TableSink {
    pub fn begin_row(&mut self, raw: f64) {
        if self.out.is_empty() {
            self.out.push_str(
                "   raw  phase     angle   eff  opac  scale  front back vis  marquee       changes\n",
            );
        }
        self.raw = raw;
        self.notes.clear();
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl RenderSink for TableSink {
    fn apply_face(&mut self, update: &FaceUpdate) {
        let side = match update.side {
            FaceSide::Front => "front",
            FaceSide::Back => "back",
        };
        self.notes.push(format!("{side}={}", update.id));
    }

    fn apply_marquee(&mut self, update: &MarqueeUpdate) {
        self.notes.push(format!("marquee={}", update.key));
    }

    fn apply_frame(&mut self, frame: &CardFrame) {
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.out,
            "{:>6.2}  {:<8} {:>6.1} {:>5.1}  {:>4.2}  {:>5.3}  {:>5} {:>4} {:>3}  {:<12}  {}",
            self.raw,
            format!("{:?}", frame.phase),
            frame.angle,
            frame.effective_angle,
            frame.opacity,
            frame.scale,
            frame.front_index,
            frame.back_index,
            frame.visible_index,
            frame.marquee_key,
            self.notes.join(" "),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_inclusive() {
        let values: Vec<f64> = Sweep::new(0.0, 1.0, 0.25).collect();
        assert_eq!(values, [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(Sweep::new(0.0, 0.3, 0.1).count(), 4);
        assert_eq!(Sweep::new(1.0, 0.0, 0.1).count(), 0);
    }

    #[test]
    fn table_rows_note_changes() {
        let frame = CardFrame::idle();
        let mut sink = TableSink::default();
        sink.begin_row(0.5);
        sink.apply_marquee(&MarqueeUpdate {
            index: 0,
            key: "SONIX".into(),
        });
        sink.apply_frame(&frame);
        let table = sink.finish();
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("marquee=SONIX"));
    }
}
