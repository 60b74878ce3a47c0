//! Content validation command handler.

use maru::StoryContent;
use std::path::Path;
use tracing::info;

/// Load a content file and print what it contains.
pub fn validate_content(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = StoryContent::from_file(path)?;
    let registry = content.registry();
    info!(path = %path.display(), chapters = registry.len(), "Content is valid");

    if json {
        println!("{}", serde_json::to_string_pretty(registry.chapters())?);
        return Ok(());
    }

    println!(
        "✓ {}: {} chapters, {} tour steps",
        path.display(),
        registry.len(),
        content.tour_steps().len()
    );
    for chapter in registry.iter() {
        println!(
            "  {:>2}  {:<12} {:<9} {} landmarks  {}",
            chapter.index(),
            chapter.title(),
            chapter.accent_color().as_str(),
            chapter.landmarks().len(),
            chapter
                .ambient_sound()
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or("(silent)")
        );
    }
    Ok(())
}
