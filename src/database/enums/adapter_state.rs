/// Where an engine adapter is in its `init -> connect -> inject` lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterState {
    #[default]
    Uninitialized,
    Initialized,
    Connected,
    Injecting,
    Done,
    Failed,
}
