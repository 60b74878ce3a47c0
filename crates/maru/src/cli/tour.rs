//! Tour walk-through command handler.

use super::{headless, load_config};
use maru::{ElementId, InputEvent, Key, StoryContent, Viewport};
use maru_core::PropertyKind;
use std::path::Path;

/// Start the tour and print each step's spotlight and card placement.
pub async fn walk_tour(
    content: &Path,
    config: Option<&Path>,
    viewport: Viewport,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let content = StoryContent::from_file(content)?;
    let mut sim = headless(content, config, viewport)?;

    sim.experience.enter().await;
    sim.experience.start_tour();

    let spotlight = ElementId::tour_spotlight();
    let card = ElementId::tour_card();
    let value = |id: &ElementId, kind| sim.stage.value(id, kind).unwrap_or_default();

    println!("Viewport {}x{}", viewport.width, viewport.height);
    while let Some(index) = sim.experience.tour().current_step() {
        let step = &sim.experience.tour().steps()[index];
        let target = step
            .target()
            .as_ref()
            .map(|t| format!("{t:?}"))
            .unwrap_or_else(|| "(none)".to_string());

        println!("{:>2}. {} [{} / {}]", index + 1, step.title(), target, step.placement());
        if value(&spotlight, PropertyKind::Opacity) > 0.0 {
            println!(
                "    spotlight {:.0},{:.0} {:.0}x{:.0}",
                value(&spotlight, PropertyKind::Left),
                value(&spotlight, PropertyKind::Top),
                value(&spotlight, PropertyKind::Width),
                value(&spotlight, PropertyKind::Height),
            );
        } else {
            println!("    spotlight hidden, card centered");
        }
        println!(
            "    card      {:.0},{:.0}",
            value(&card, PropertyKind::Left),
            value(&card, PropertyKind::Top),
        );

        sim.experience.handle(&InputEvent::Key(Key::ArrowRight)).await;
    }

    println!("Tour finished");
    Ok(())
}
