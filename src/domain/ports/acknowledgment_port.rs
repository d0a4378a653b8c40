use crate::domain::Acknowledgment;

/// Port mirroring acknowledgments outside the terminal.
pub trait AcknowledgmentPort: Send + Sync {
    /// Delivers an acknowledgment. Delivery failures are not reported.
    fn acknowledge(&self, acknowledgment: &Acknowledgment);
}
