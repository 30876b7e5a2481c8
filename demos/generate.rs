use std::sync::Arc;

use polynate::{
    logger::{self, LogLevel, LoggerConfig},
    ClientConfig, GenerationState, ImageGenerator, PollinationsClient, TextGenerator, Workspace,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    logger::init_with_config(LoggerConfig::development().with_level(LogLevel::Info))?;

    let client = Arc::new(PollinationsClient::new(ClientConfig::from_env())?);
    let workspace = Workspace::default();

    let catalog = client.catalog().await;
    log::info!(
        "📚 {} image models, {} text models",
        catalog.image_models.len(),
        catalog.text_models.len()
    );

    let mut image = ImageGenerator::new(client.clone());
    image.form.prompt = "a lighthouse at dusk, watercolor".to_string();
    workspace.mount(&image);
    image.enhance_prompt().await;
    if let Err(e) = image.generate().await {
        log::error!("❌ Image generation failed: {}", e);
    }
    if let GenerationState::Success(output) = image.state() {
        println!("image: {}", output.url);
    }

    let mut text = TextGenerator::new(client);
    text.form.prompt = "Write a haiku about lighthouses".to_string();
    workspace.mount(&text);
    match text.generate().await {
        Ok(result) => println!("text: {}", result.output.content),
        Err(e) => log::error!("❌ Text generation failed: {}", e),
    }

    Ok(())
}
