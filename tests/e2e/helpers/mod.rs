use anyhow::Result;
use speech_link::controllers::speech::SpeechController;
use speech_link::domain::speech::{SpeechService, SystemClock};
use speech_link::infrastructure::http::build_router;
use speech_link::infrastructure::repositories::{ObjectStore, PollyTtsRepository, SpeechSynthesizer};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod fakes;

use api_client::TestClient;
use fakes::{FakeObjectStore, FakeSynthesizer};

pub const VALID_REQUEST: &str =
    r#"{"target_polly":"en-US","voice_id":"Joanna","text_to_translate":"Hello from the gateway"}"#;

pub struct TestContext {
    pub client: TestClient,
    pub synthesizer: Arc<FakeSynthesizer>,
    pub store: Arc<FakeObjectStore>,
}

impl TestContext {
    /// Context whose collaborators are the given fakes
    pub async fn with_fakes(synthesizer: FakeSynthesizer, store: FakeObjectStore) -> Result<Self> {
        let synthesizer = Arc::new(synthesizer);
        let store = Arc::new(store);
        let client = spawn_gateway(synthesizer.clone(), store.clone()).await?;

        Ok(Self {
            client,
            synthesizer,
            store,
        })
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::with_fakes(FakeSynthesizer::default(), FakeObjectStore::default())
                .await
                .expect("Failed to start gateway")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}

/// Gateway backed by a real Polly client that cannot reach its endpoint
pub async fn spawn_gateway_with_unreachable_polly(
    store: Arc<FakeObjectStore>,
) -> Result<TestClient> {
    let polly_client = Arc::new(aws_mocks::create_unreachable_polly_client());
    spawn_gateway(Arc::new(PollyTtsRepository::new(polly_client)), store).await
}

async fn spawn_gateway(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn ObjectStore>,
) -> Result<TestClient> {
    let speech_service = Arc::new(SpeechService::new(synthesizer, store, Arc::new(SystemClock)));
    let app = build_router(Arc::new(SpeechController::new(speech_service)));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(TestClient::new(&base_url))
}
