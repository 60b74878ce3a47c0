//! Simulation command handler.

use super::script::{ScriptStep, parse_script};
use super::{headless, load_config};
use maru::{ElementId, Handled, InputEvent, NavigationPhase, Presentation, RouteOutcome, StoryContent, Viewport};
use maru_core::PropertyKind;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Options for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    /// Story content file
    pub content: PathBuf,
    /// Optional configuration file
    pub config: Option<PathBuf>,
    /// Comma-separated input script
    pub events: String,
    /// Viewport to lay the stage out for
    pub viewport: Viewport,
    /// Use the wall clock
    pub realtime: bool,
}

fn describe(handled: &Handled) -> String {
    match handled {
        Handled::Tour => "tour".to_string(),
        Handled::DetailOpened => "detail opened".to_string(),
        Handled::DetailClosed => "detail closed".to_string(),
        Handled::Sound { enabled } => format!("sound {}", if *enabled { "on" } else { "off" }),
        Handled::Route(RouteOutcome::Dispatched(handle)) => {
            format!("transition {} -> {}", handle.from(), handle.to())
        }
        Handled::Route(RouteOutcome::Ignored(reason)) => format!("ignored ({reason})"),
    }
}

/// Replay an input script against headless backends.
pub async fn simulate(options: SimulationOptions) -> Result<(), Box<dyn std::error::Error>> {
    let steps = parse_script(&options.events)?;
    let config = load_config(options.config.as_deref())?;
    let content = StoryContent::from_file(&options.content)?;

    if !options.realtime {
        tokio::time::pause();
    }

    let mut sim = headless(content, config, options.viewport)?;
    let mut commits = sim.experience.navigator().subscribe();
    let registry = sim.experience.navigator().registry().clone();
    tokio::spawn(async move {
        while commits.changed().await.is_ok() {
            let phase = commits.borrow_and_update().phase();
            match phase {
                NavigationPhase::Idle(index) => {
                    let title = registry.get(index).map(|c| c.title().as_str()).unwrap_or("?");
                    info!(chapter = index, title, "Committed");
                }
                NavigationPhase::Transitioning { from, to } => {
                    debug!(from, to, "Transitioning");
                }
            }
        }
    });

    sim.experience.enter().await;

    for step in steps {
        let label = format!("{step:?}");
        match step {
            ScriptStep::Event(event) => {
                let handled = sim.experience.handle(&event).await;
                println!("{:<60} {}", label, describe(&handled));
            }
            ScriptStep::TimelineClick(pct) => {
                let Some(rect) = sim.stage.measure(&ElementId::timeline()) else {
                    println!("{label:<60} no timeline");
                    continue;
                };
                let event = InputEvent::TimelineClick {
                    client_x: rect.left + pct * rect.width,
                };
                let handled = sim.experience.handle(&event).await;
                println!("{:<60} {}", label, describe(&handled));
            }
            ScriptStep::Wait(duration) => {
                tokio::time::sleep(duration).await;
                println!("{label:<60} chapter {}", sim.experience.state().current_chapter());
            }
            ScriptStep::StartTour => {
                sim.experience.start_tour();
                println!("{label:<60} tour started");
            }
        }
    }

    // Let in-flight channels finish before reporting.
    let mut state = sim.experience.navigator().subscribe();
    while state.borrow_and_update().is_transitioning() {
        if state.changed().await.is_err() {
            break;
        }
    }
    tokio::time::sleep(Duration::from_secs(3)).await;

    let current = sim.experience.state().current_chapter();
    let chapter = sim.experience.registry().clamped(current);
    println!();
    println!("Settled on chapter {current}: {}", chapter.title());
    println!(
        "  progress {:.1}%",
        sim.stage
            .value(&ElementId::progress(), PropertyKind::WidthPercent)
            .unwrap_or_default()
    );
    println!("  accent   {}", chapter.accent_color().as_str());
    let playing: Vec<_> = sim.audio.playing().iter().map(|s| s.as_str().to_string()).collect();
    println!(
        "  sound    {}",
        if playing.is_empty() { "(silent)".to_string() } else { playing.join(", ") }
    );
    Ok(())
}
