mod chat_message;
mod chat_record;
mod turn_record;

pub use chat_message::ChatMessage;
pub use chat_record::ChatRecord;
pub use turn_record::TurnRecord;
