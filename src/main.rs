//! Demo binary: wires the chat model to the built-in tools and runs a
//! handful of example queries.
//!
//! Requires a `GITHUB_TOKEN` in the environment (or a `.env` file); the
//! model is served by the GitHub Models inference endpoint.

use deskagent::models::providers::OpenAiChat;
use deskagent::models::ChatModel;
use deskagent::tools::builtin::{
    calculator_tool, current_time_tool, get_weather_tool, reverse_text_tool,
};
use deskagent::tools::Tool;
use deskagent::{Agent, AgentError, AppConfig};
use tracing_subscriber::EnvFilter;

const MODEL_NAME: &str = "openai/gpt-4o";

const SYSTEM_INSTRUCTIONS: &str = "You are a professional and succinct assistant. \
     Use your tools to answer questions accurately. \
     Keep responses brief and to the point. \
     Always respond in plain text, never use LaTeX or markdown formatting.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(AgentError::MissingConfiguration { .. }) => {
            println!("❌ Error: GITHUB_TOKEN not found in environment variables.");
            println!("💡 To fix this:");
            println!("   1. Create a .env file in the project root");
            println!("   2. Add your token: GITHUB_TOKEN=your_token_here");
            println!("   3. Generate a token at https://github.com/settings/tokens");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("🚀 Starting {}...", config.app_name);
    println!("✅ GITHUB_TOKEN loaded successfully.");

    let model = OpenAiChat::github_models(MODEL_NAME, &config.github_token).with_temperature(0.0);
    println!("🤖 Chat model initialized: {}", model.model_name());

    let tools = vec![
        calculator_tool(),
        current_time_tool(),
        reverse_text_tool(),
        get_weather_tool(),
    ];
    let tool_names: Vec<String> = tools.iter().map(|t| t.name().to_string()).collect();
    println!("🛠️  Tools registered: {tool_names:?}");

    let agent = Agent::builder(model)
        .with_system_instructions(SYSTEM_INSTRUCTIONS)
        .with_tools(tools)
        .with_max_iterations(10)
        .build();

    println!("🤖 Agent created successfully.");

    // One query per tool
    let queries = [
        "What time is it right now?",
        "What is 25 * 4 + 10?",
        "Reverse the string 'Hello World'",
        "What's the weather like today?",
    ];

    println!("\n🧪 Running example queries:\n");
    for query in queries {
        println!("{}", "─".repeat(50));
        println!("📝 Query: {query}\n");
        match agent.run(query).await {
            Ok(output) => println!("✅ Result: {output}\n"),
            Err(err) => println!("❌ Error: {err}\n"),
        }
    }

    println!("{}", "─".repeat(50));
    println!("🎉 Agent demo complete!");

    Ok(())
}
