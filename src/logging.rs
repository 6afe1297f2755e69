use bevy::prelude::*;

/// Lines kept by [`TurnLog`] unless configured otherwise.
pub const DEFAULT_TURN_LOG_LINES: usize = 200;

/// Rolling, human-readable record of what happened in recent turns.
#[derive(Resource, Debug, Clone)]
pub struct TurnLog {
    pub messages: Vec<String>,
    pub max_messages: usize,
}

impl Default for TurnLog {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_LOG_LINES)
    }
}

impl TurnLog {
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages,
        }
    }

    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

#[derive(Message, Clone, Debug)]
pub struct TurnLogEvent {
    pub message: String,
}

impl TurnLogEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn consume_log_events(mut reader: MessageReader<TurnLogEvent>, mut log: ResMut<TurnLog>) {
    for ev in reader.read() {
        log.add_message(ev.message.clone());
    }
}

pub struct TurnLogPlugin;

impl Plugin for TurnLogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TurnLog>()
            .add_message::<TurnLogEvent>()
            .add_systems(PostUpdate, consume_log_events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_oldest_lines() {
        let mut log = TurnLog::new(2);
        log.add_message("one".into());
        log.add_message("two".into());
        log.add_message("three".into());
        assert_eq!(log.messages, vec!["two".to_string(), "three".to_string()]);
        assert_eq!(log.last(), Some("three"));
    }

    #[test]
    fn plugin_collects_written_events() {
        let mut app = App::new();
        app.add_plugins(TurnLogPlugin);
        app.world_mut()
            .write_message(TurnLogEvent::new("Turn 1 resolved"));
        app.update();
        assert_eq!(app.world().resource::<TurnLog>().last(), Some("Turn 1 resolved"));
    }
}
