pub mod bank;
pub mod loaders;

pub use bank::{AnswerKey, OptionRecord, QuestionRecord, RawBank};
pub use loaders::load_bank;
