//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use coursechunk_core::{DEFAULT_OVERLAP, DEFAULT_TARGET_LENGTH, DEFAULT_TERMINATORS};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the paths and chunking parameters");
        println!("2. Use it for ingesting:");
        println!("   coursechunk ingest --config {}", self.output.display());

        Ok(())
    }
}

/// Template configuration content, listing every key with its default
pub fn generate_template() -> String {
    format!(
        r#"# coursechunk configuration
#
# Every section and key is optional. Command-line flags and the
# COURSECHUNK_* environment variables take precedence over this file.

[chunking]
# Approximate chunk size in characters
target_length = {target}

# Trailing characters considered for the next chunk's overlap seed
overlap = {overlap}

# "sentence" (overlapping chunks) or "paragraph" (blank-line blocks, no overlap)
granularity = "sentence"

# Characters that end a sentence; newlines always do
terminators = "{terminators}"

[paths]
raw_dir = "~/.openclaw/workspace/knowledge/ai-tutor/raw"
out_dir = "~/.openclaw/workspace/knowledge/ai-tutor/materials"
state_file = "~/.openclaw/workspace/knowledge/ai-tutor/state.json"

[output]
# Pretty print JSON chunk sets
pretty_json = true
"#,
        target = DEFAULT_TARGET_LENGTH,
        overlap = DEFAULT_OVERLAP,
        terminators = DEFAULT_TERMINATORS,
    )
}
