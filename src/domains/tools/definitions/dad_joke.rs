//! Dad joke tool definition.
//!
//! Picks a joke uniformly at random from a fixed pool. The random source is
//! owned by the tool instance, so a fixed seed gives a reproducible sequence.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::domains::tools::{ToolError, ToolHandler};

/// The joke pool. Read-only for the lifetime of the process.
pub const JOKES: [&str; 20] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "What do you call a fake noodle? An impasta!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "I used to hate facial hair, but then it grew on me.",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What do you call a bear with no teeth? A gummy bear!",
    "Why couldn't the bicycle stand up by itself? It was two tired!",
    "What did the ocean say to the beach? Nothing, it just waved!",
    "Why do fathers take an extra pair of socks to golf? In case they get a hole in one!",
    "How does a penguin build its house? Igloos it together!",
    "What did the janitor say when he jumped out of the closet? Supplies!",
    "Why did the math book look so sad? Because it had too many problems.",
    "What do you call cheese that isn't yours? Nacho cheese!",
    "Why can't you hear a psychiatrist using the bathroom? Because the 'p' is silent.",
    "What's the best thing about Switzerland? I don't know, but the flag is a big plus!",
    "Did you hear about the restaurant on the moon? Great food, no atmosphere.",
    "Why do chicken coops only have two doors? Because if they had four, they'd be chicken sedans!",
    "What do you call a fish wearing a bowtie? Sofishticated!",
    "How do you organize a space party? You planet!",
    "Why don't skeletons fight each other? They don't have the guts!",
];

/// Dad joke tool - returns a random joke from [`JOKES`].
pub struct DadJokeTool {
    rng: Mutex<StdRng>,
}

impl DadJokeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dad_joke";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a random dad joke to brighten your day";

    /// Create the tool around an explicit random source.
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Create the tool with a generator seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create the tool with a generator seeded from the current time.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    /// Choose a joke with the given generator.
    pub fn pick<R: Rng>(rng: &mut R) -> &'static str {
        JOKES[rng.gen_range(0..JOKES.len())]
    }

    /// Draw the next joke from this tool's generator.
    pub fn joke(&self) -> &'static str {
        // The generator state stays valid even if a holder panicked.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let joke = Self::pick(&mut *rng);
        debug!("Picked joke: {}", joke);
        joke
    }

    /// Input schema: an object with no properties.
    pub fn input_schema() -> Arc<JsonObject> {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), json!({}));
        Arc::new(schema)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Self::input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl ToolHandler for DadJokeTool {
    fn call(&self, _arguments: Option<&JsonObject>) -> Result<CallToolResult, ToolError> {
        Ok(CallToolResult::success(vec![Content::text(self.joke())]))
    }
}
