/// Transient user notifications (toasts). Fire and forget.
pub trait NotificationPort: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}
