use smallvec::SmallVec;
use std::fmt::Debug;
use std::time::Duration;

/// One transition crossed during a `start` or `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChange<P> {
    pub from: P,
    pub to: P,
}

pub type PhaseChanges<P> = SmallVec<[PhaseChange<P>; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Idle,
    Step { index: usize, elapsed: Duration },
    Done,
}

/// Fixed sequence of timed phases driven by a single tick.
///
/// The schedule sits in `idle` until [`start`](Self::start), walks through
/// each `(phase, duration)` step, then parks in `terminal`. A tick larger than
/// the current step carries the surplus into the following steps, so a slow
/// frame can cross several phases at once and report each change in order.
#[derive(Clone, Debug)]
pub struct PhaseSchedule<P> {
    idle: P,
    steps: SmallVec<[(P, Duration); 4]>,
    terminal: P,
    cursor: Cursor,
}

impl<P: Copy + PartialEq + Debug> PhaseSchedule<P> {
    pub fn new(idle: P, steps: &[(P, Duration)], terminal: P) -> Self {
        Self {
            idle,
            steps: SmallVec::from_slice(steps),
            terminal,
            cursor: Cursor::Idle,
        }
    }

    pub fn phase(&self) -> P {
        match self.cursor {
            Cursor::Idle => self.idle,
            Cursor::Step { index, .. } => self.steps[index].0,
            Cursor::Done => self.terminal,
        }
    }

    /// Time left in the current step; zero when idle or finished.
    pub fn remaining(&self) -> Duration {
        match self.cursor {
            Cursor::Step { index, elapsed } => self.steps[index].1.saturating_sub(elapsed),
            _ => Duration::ZERO,
        }
    }

    /// (Re)start from the first step. Zero-length steps are passed through
    /// immediately.
    pub fn start(&mut self) -> PhaseChanges<P> {
        let mut out = PhaseChanges::new();
        let from = self.phase();
        if self.steps.is_empty() {
            self.cursor = Cursor::Done;
        } else {
            self.cursor = Cursor::Step {
                index: 0,
                elapsed: Duration::ZERO,
            };
        }
        let to = self.phase();
        log::debug!("[phase] start {:?} -> {:?}", from, to);
        out.push(PhaseChange { from, to });
        self.advance(Duration::ZERO, &mut out);
        out
    }

    pub fn tick(&mut self, dt: Duration) -> PhaseChanges<P> {
        let mut out = PhaseChanges::new();
        self.advance(dt, &mut out);
        out
    }

    fn advance(&mut self, dt: Duration, out: &mut PhaseChanges<P>) {
        let Cursor::Step {
            mut index,
            mut elapsed,
        } = self.cursor
        else {
            return;
        };
        elapsed += dt;
        while elapsed >= self.steps[index].1 {
            elapsed -= self.steps[index].1;
            let from = self.steps[index].0;
            index += 1;
            let to = self.steps.get(index).map_or(self.terminal, |s| s.0);
            log::debug!("[phase] {:?} -> {:?}", from, to);
            out.push(PhaseChange { from, to });
            if index >= self.steps.len() {
                self.cursor = Cursor::Done;
                return;
            }
        }
        self.cursor = Cursor::Step { index, elapsed };
    }
}
