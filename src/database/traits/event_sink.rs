pub trait EventSink: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, _message: &str) {}
}
