//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run the front-end.
//! No business logic here; routing lives in BotService.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tg_sentiment::adapters::inference::{CliInferenceBackend, OpenAiBackend};
use tg_sentiment::adapters::search::{CurlFetcher, HttpFetcher};
use tg_sentiment::adapters::sentiment::{CsvSentimentSink, HfInferenceModel, LexiconModel};
use tg_sentiment::adapters::telegram::TelegramBotAdapter;
use tg_sentiment::adapters::ui::ConsoleFrontend;
use tg_sentiment::ports::{
    FrontendPort, InferencePort, PageFetcherPort, SentimentModelPort, SentimentSinkPort,
};
use tg_sentiment::shared::config::{
    AppConfig, FrontendKind, InferenceBackendKind, SearchFetcherKind,
};
use tg_sentiment::usecases::{
    BotService, InferenceInvoker, RelayService, SearchService, SentimentService,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("load config: {}", e))?;
    let frontend_kind = cfg.frontend()?;
    let reply_mode = cfg.reply_mode()?;

    if frontend_kind == FrontendKind::Console {
        tg_sentiment::adapters::ui::init_ui(frontend_kind.as_str());
    }

    // --- Inference backend ---
    let backend: Arc<dyn InferencePort> = match cfg.inference_backend()? {
        InferenceBackendKind::Cli => {
            info!(
                bin = %cfg.ollama_bin_or_default(),
                model = %cfg.model_or_default(),
                "inference via local model process"
            );
            Arc::new(CliInferenceBackend::ollama(
                cfg.ollama_bin_or_default(),
                cfg.model_or_default(),
            ))
        }
        InferenceBackendKind::Http => {
            info!(
                url = %cfg.ai_api_url_or_default(),
                model = %cfg.model_or_default(),
                "inference via OpenAI-compatible API"
            );
            Arc::new(OpenAiBackend::new(
                cfg.ai_api_url_or_default(),
                cfg.ai_api_key_or_default(),
                cfg.model_or_default(),
            ))
        }
    };

    // --- Sentiment model + log (reset once per process) ---
    let model: Arc<dyn SentimentModelPort> = if cfg.is_hosted_sentiment_configured() {
        info!(model = %cfg.sentiment_model_or_default(), "hosted sentiment model enabled");
        Arc::new(HfInferenceModel::new(
            &cfg.sentiment_api_url_or_default(),
            &cfg.sentiment_model_or_default(),
            cfg.hf_api_token.clone(),
        ))
    } else {
        warn!("HF_API_TOKEN not set, using lexicon sentiment model");
        Arc::new(LexiconModel::new())
    };

    let log_path = PathBuf::from(cfg.sentiment_log_path_or_default());
    info!(path = %log_path.display(), "sentiment log: {}", log_path.display());
    let sink: Arc<dyn SentimentSinkPort> = Arc::new(CsvSentimentSink::new(&log_path));

    let sentiment = Arc::new(SentimentService::new(model, sink));
    sentiment
        .initialize_log()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Search ---
    let fetcher: Arc<dyn PageFetcherPort> = match cfg.search_fetcher()? {
        SearchFetcherKind::Curl => Arc::new(CurlFetcher::new(
            cfg.curl_bin_or_default(),
            cfg.user_agent_or_default(),
        )),
        SearchFetcherKind::Http => Arc::new(HttpFetcher::new(cfg.user_agent_or_default())),
    };
    let search = Arc::new(SearchService::new(fetcher, cfg.search_url_or_default()));

    // --- Services ---
    let invoker = Arc::new(InferenceInvoker::new(backend));
    let relay = Arc::new(RelayService::new(Arc::clone(&sentiment), invoker));
    let bot = Arc::new(BotService::new(relay, search, sentiment, reply_mode));
    info!(?reply_mode, "reply mode");

    // --- Front-end ---
    let frontend: Arc<dyn FrontendPort> = match frontend_kind {
        FrontendKind::Telegram => {
            let Some(token) = cfg.bot_token() else {
                anyhow::bail!("Set TOKEN (or TG_SENTIMENT_BOT_TOKEN) in .env. Get one from @BotFather");
            };
            Arc::new(TelegramBotAdapter::new(
                &token,
                bot,
                cfg.poll_timeout_secs_or_default(),
            ))
        }
        FrontendKind::Console => Arc::new(ConsoleFrontend::new(bot)),
    };

    info!(frontend = frontend_kind.as_str(), "bot is running");
    frontend
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
