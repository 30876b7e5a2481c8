use std::sync::Arc;

use clap::{builder::PossibleValuesParser, Args, Parser, Subcommand};
use polynate::{
    generator::{AudioForm, ImageForm, TextForm},
    logger::{self, LogLevel, LoggerConfig},
    AudioClient, AudioGenerator, ClientConfig, GenerationBackend, GenerationState, GenerationStatus,
    GeneratorView, ImageGenerator, ModelCategory, PollinationsClient, TextGenerator,
    VisionParams, Workspace,
};

#[derive(Debug, Parser)]
#[command(name = "polynate", version, about = "Generate images, text and speech with Pollinations")]
struct Cli {
    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "POLYNATE_LOG_LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,

    /// Also append logs to this file
    #[arg(long, global = true, env = "POLYNATE_LOG_FILE")]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build an image URL for a prompt
    Image(ImageArgs),
    /// Generate text from a prompt
    Text(TextArgs),
    /// Build a text-to-speech URL
    Audio(AudioArgs),
    /// Describe an image by URL
    Vision(VisionArgs),
    /// List available models
    Models {
        /// Only list one category (image or text)
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Debug, Args)]
struct ImageArgs {
    prompt: String,
    #[arg(long, default_value_t = 1024)]
    width: u32,
    #[arg(long, default_value_t = 1024)]
    height: u32,
    #[arg(long, default_value = "flux")]
    model: String,
    #[arg(long)]
    seed: Option<u64>,
    /// Disable server-side and local prompt enhancement
    #[arg(long)]
    no_enhance: bool,
    /// Keep the Pollinations logo
    #[arg(long)]
    logo: bool,
    /// Allow the image to appear in the public feed
    #[arg(long)]
    public: bool,
    #[arg(long)]
    safe: bool,
    /// Skip rewriting the prompt with the text model before generating
    #[arg(long)]
    no_rewrite: bool,
}

#[derive(Debug, Args)]
struct TextArgs {
    prompt: String,
    #[arg(long)]
    system: Option<String>,
    #[arg(long, default_value = "mistral")]
    model: String,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    public: bool,
    /// Print the raw response as pretty JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct AudioArgs {
    prompt: String,
    #[arg(
        long,
        default_value = "alloy",
        value_parser = PossibleValuesParser::new(AudioClient::supported_voices().iter().copied())
    )]
    voice: String,
    #[arg(long, default_value = "openai-audio")]
    model: String,
}

#[derive(Debug, Args)]
struct VisionArgs {
    #[arg(long)]
    image_url: String,
    prompt: String,
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let cli = Cli::parse();

    let mut logger_config = LoggerConfig::quiet()
        .with_level(cli.log_level)
        .with_json_output(cli.json_logs)
        .with_colors(!cli.no_color);
    if let Some(path) = cli.log_file.as_deref() {
        logger_config = logger_config.with_file_output(path);
    }
    logger::init_with_config(logger_config)?;
    logger::log_startup_info("polynate", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    let config = ClientConfig::from_env();
    logger::log_config_info(&config);
    let client = Arc::new(PollinationsClient::new(config)?);
    let workspace = Workspace::default();

    match cli.command {
        Command::Image(args) => run_image(client, &workspace, args).await?,
        Command::Text(args) => run_text(client, &workspace, args).await?,
        Command::Audio(args) => run_audio(client, &workspace, args).await?,
        Command::Vision(args) => {
            let params = VisionParams {
                image_url: args.image_url,
                prompt: args.prompt,
                model: args.model,
            };
            let output = client.analyze_image(&params).await?;
            println!("{}", output.content);
        }
        Command::Models { category } => {
            let categories = match category.as_deref() {
                None => vec![ModelCategory::Image, ModelCategory::Text],
                Some("image") => vec![ModelCategory::Image],
                Some("text") => vec![ModelCategory::Text],
                Some(other) => return Err(format!("Unknown model category '{}'", other).into()),
            };
            for category in categories {
                println!("{} models:", category.as_str());
                for model in client.list_models(category).await {
                    match model.description.as_deref().filter(|d| !d.is_empty()) {
                        Some(description) => {
                            println!("  {:<20} {} - {}", model.id, model.name, description)
                        }
                        None => println!("  {:<20} {}", model.id, model.name),
                    }
                }
            }
        }
    }

    Ok(())
}

async fn run_image(
    client: Arc<PollinationsClient>,
    workspace: &Workspace,
    args: ImageArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = ImageGenerator::new(client).with_form(ImageForm {
        prompt: args.prompt,
        width: args.width,
        height: args.height,
        model: args.model,
        seed: args.seed,
        enhance: !args.no_enhance,
        nologo: !args.logo,
        safe: args.safe,
        private_mode: !args.public,
    });
    mount(workspace, &view);
    let progress = watch_progress(view.status());

    if !args.no_rewrite {
        if let Some(rewritten) = view.enhance_prompt().await {
            log::info!("✨ Prompt enhanced: {}", rewritten);
        }
    }

    let result = view.generate().await;
    finish_progress(progress, result.is_ok()).await;
    let output = result?;
    if let Some(enhanced) = view.enhanced_prompt() {
        eprintln!("prompt: {}", enhanced);
    }
    println!("{}", output.url);
    Ok(())
}

async fn run_text(
    client: Arc<PollinationsClient>,
    workspace: &Workspace,
    args: TextArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = TextGenerator::new(client).with_form(TextForm {
        prompt: args.prompt,
        system: args.system.unwrap_or_default(),
        model: args.model,
        seed: args.seed,
        private_mode: !args.public,
        json_mode: args.json,
    });
    mount(workspace, &view);
    let progress = watch_progress(view.status());

    let result = view.generate().await;
    finish_progress(progress, result.is_ok()).await;
    println!("{}", result?.output.content);
    Ok(())
}

async fn run_audio(
    client: Arc<PollinationsClient>,
    workspace: &Workspace,
    args: AudioArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = AudioGenerator::new(client).with_form(AudioForm {
        prompt: args.prompt,
        voice: args.voice,
        model: args.model,
    });
    mount(workspace, &view);
    let progress = watch_progress(view.status());

    let result = view.generate().await;
    finish_progress(progress, result.is_ok()).await;
    println!("{}", result?.url);
    Ok(())
}

fn mount(workspace: &Workspace, view: &dyn GeneratorView) {
    workspace.mount(view);
    if let Some(panel) = workspace.panel() {
        log::debug!("🧭 Active generator: {}", panel.kind);
        for (key, value) in &panel.entries {
            log::debug!("   {}: {}", key, value);
        }
    }
}

/// Reports state transitions until the generator settles.
fn watch_progress<T>(status: &GenerationStatus<T>) -> tokio::task::JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let mut rx = status.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            match state {
                GenerationState::Submitting => log::info!("⏳ Generating..."),
                GenerationState::Error(message) => {
                    log::warn!("⚠️  {}", message);
                    break;
                }
                GenerationState::Success(_) => {
                    log::info!("✅ Done");
                    break;
                }
                GenerationState::Idle => {}
            }
        }
    })
}

/// A successful run always ends in `Success`, so the watcher is awaited.
/// Failures may be rejected before any transition and would never wake it.
async fn finish_progress(progress: tokio::task::JoinHandle<()>, succeeded: bool) {
    if succeeded {
        let _ = progress.await;
    } else {
        progress.abort();
    }
}
