//! Operation lifecycle phases

/// Completion phase of an asynchronous store operation.
///
/// Every dispatched operation produces exactly one `Pending` transition
/// at dispatch time and one `Ok`/`Err` transition when the response
/// arrives. Pending effects apply in dispatch order; completion effects
/// apply in response-arrival order, which may differ. No supersession:
/// an out-of-order completion still applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending,
    Ok(T),
    Err(String),
}
