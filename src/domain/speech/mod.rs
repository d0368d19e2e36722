pub mod dto;
pub mod error;
pub mod service;
pub mod storage_key;

pub use dto::{GatewayResponse, SpeechRequest, SpeechResponse, SynthesisParams};
pub use error::SpeechError;
pub use service::{SpeechService, SpeechServiceApi};
pub use storage_key::{Clock, SystemClock};
