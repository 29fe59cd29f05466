/// Upper bound of the injection loop.
///
/// A configured loop count of `0` means "run until the process is killed" and
/// resolves to [`CycleBound::Unbounded`], which iterates up to `i64::MAX` cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleBound {
    Finite(i64),
    Unbounded,
}
