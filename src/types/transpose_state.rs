/// Transpose offset of one sheet view, kept in 0..12.
///
/// Owned by whoever displays the sheet; the engine only reads `steps()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransposeState {
    steps: u8,
}

impl TransposeState {
    pub const fn new() -> Self {
        Self { steps: 0 }
    }

    pub fn from_steps(steps: i32) -> Self {
        Self {
            steps: steps.rem_euclid(12) as u8,
        }
    }

    pub fn step_up(&mut self) {
        self.steps = (self.steps + 1) % 12;
    }

    pub fn step_down(&mut self) {
        self.steps = (self.steps + 11) % 12;
    }

    pub fn steps(&self) -> i32 {
        self.steps as i32
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }
}
