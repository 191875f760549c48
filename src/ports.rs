/// User-facing capabilities the workflow needs but does not own: the
/// confirmation prompt, notifications, and navigation out of the booking
/// screen. Injected at construction so the workflow is testable without
/// a real UI.
pub trait UserInterface: Clone + Send + Sync + 'static {
    /// Blocking yes/no prompt shown before any booking request is sent.
    fn confirm_booking(&self, prompt: &str) -> bool;

    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);

    /// Leave the booking workflow for the appointments overview after a
    /// confirmed booking.
    fn open_appointments(&self);
}
