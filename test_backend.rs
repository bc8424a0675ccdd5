//! Simple test to verify the venture backend connection with the API client

use venture_api::{AnalysisBackend, ApiClient, ApiConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Testing Backend Connection ===\n");

    let config = ApiConfig::new("http://localhost:8000").with_timeout(180);

    println!("Configuration:");
    println!("  API Base: {}", config.base_url);
    println!("  Timeout: {}s\n", config.timeout_secs);

    let client = ApiClient::with_config(config)?;
    println!("Client created\n");

    // Simple test request
    println!("Sending test request to the backend...");
    match client.research("a mental health tracking app").await {
        Ok(report) => {
            println!("\n✓ Success!");
            println!("Summary: {}", report.summary);
            println!("\nFeasibility score: {}", report.feasibility.feasibility_score);
            println!("Key insights:      {}", report.key_insights.len());
            println!("Actionable steps:  {}", report.actionable_steps.len());
        }
        Err(e) => {
            println!("\n✗ Error!");
            println!("Failed to reach the backend: {}", e);
            println!("\nPlease verify:");
            println!("  1. The analysis server is running");
            println!("  2. Server is accessible at http://localhost:8000");
            println!("  3. GOOGLE_API_KEY is set on the server side");
            return Err(e.into());
        }
    }

    println!("\n=== Test Complete ===");
    Ok(())
}
