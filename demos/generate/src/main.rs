use codelet::core::CodeletError;
use codelet::generator::{Generator, GeneratorConfig};

const QUESTION: &str = "How do I write a for loop with range 10 in Python?";

#[tokio::main]
async fn main() -> Result<(), CodeletError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = GeneratorConfig::from_env()?;
    tracing::info!(
        model = %config.model,
        base_url = %config.base_url,
        tracing = config.tracing.enabled,
        "starting generator"
    );

    let generator = Generator::from_config(config);

    println!("=== Question ===");
    println!("{QUESTION}");

    let answer = generator.generate(QUESTION).await?;
    println!("\n=== Answer ===");
    println!("{answer}");
    Ok(())
}
