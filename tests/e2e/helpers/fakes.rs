use async_trait::async_trait;
use aws_smithy_types::byte_stream::ByteStream;
use speech_link::domain::speech::SynthesisParams;
use speech_link::infrastructure::repositories::{ObjectStore, SpeechSynthesizer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal MP3 frame header plus padding
    vec![0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00]
}

#[derive(Default)]
pub struct FakeSynthesizer {
    calls: AtomicUsize,
    failure: Option<String>,
    received: Mutex<Vec<SynthesisParams>>,
}

impl FakeSynthesizer {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<SynthesisParams> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, params: &SynthesisParams) -> Result<ByteStream, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(params.clone());

        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(ByteStream::from(mock_audio_bytes())),
        }
    }
}

#[derive(Default)]
pub struct FakeObjectStore {
    calls: AtomicUsize,
    failure: Option<String>,
    objects: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeObjectStore {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn objects(&self) -> Vec<(String, Vec<u8>)> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn upload(&self, key: &str, audio: ByteStream) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(message.clone());
        }

        let bytes = audio
            .collect()
            .await
            .map_err(|e| e.to_string())?
            .into_bytes()
            .to_vec();
        self.objects.lock().unwrap().push((key.to_string(), bytes));

        Ok(format!("https://speech-audio.s3.eu-west-1.amazonaws.com/{}", key))
    }
}
