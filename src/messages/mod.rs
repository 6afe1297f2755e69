pub mod transport;
pub mod turn;
pub mod workers;

pub use transport::{TransportCommand, TransportCommandError, TransportCommandRejected};
pub use turn::{EndTurn, TurnResolved};
pub use workers::{WorkerActionError, WorkerCommand, WorkerCommandRejected, WorkerOrder};

// Player input and automated drivers both go through these messages, so
// either can issue commands without depending on the systems that apply them.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_messages_are_send_sync_static() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}

        assert_send_sync_static::<EndTurn>();
        assert_send_sync_static::<TurnResolved>();
        assert_send_sync_static::<WorkerCommand>();
        assert_send_sync_static::<WorkerCommandRejected>();
        assert_send_sync_static::<TransportCommand>();
        assert_send_sync_static::<TransportCommandRejected>();
    }
}
