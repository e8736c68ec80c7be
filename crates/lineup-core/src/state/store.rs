use super::events::Event;
use super::types::Command;

/// Trait for dispatching lobby commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Atomicity**: A failed command leaves the lobby unchanged.
/// - **Events**: On success, dispatch returns a `Vec<Event>` describing what
///   changed, so callers can report results without re-reading state.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Ok(vec![])
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::ResetParticipants);
        assert!(result.unwrap().is_empty());
    }
}
