pub mod answer;
pub mod record_type;

pub use answer::{AnswerData, AnswerRecord};
pub use record_type::RecordType;
