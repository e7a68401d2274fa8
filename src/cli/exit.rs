#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success, // exit 0
    Failure, // exit 1
    Usage,   // exit 2
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Usage => 2,
        }
    }
}

pub fn exit_code(outcome: Outcome) -> u8 {
    outcome.exit_code()
}
