use anyhow::{Context, Result};
use primer_application::content_swap::ContentSwapController;
use primer_application::gate::{PersonalizationGate, SURVEY_REQUIRED_HINT};
use primer_core::chapter::Chapter;
use primer_core::session::SessionStore;
use primer_infrastructure::FileSessionStore;
use primer_interaction::BackendClient;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run(
    backend: &Arc<BackendClient>,
    sessions: &Arc<FileSessionStore>,
    chapter_path: PathBuf,
    html: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let source = fs::read_to_string(&chapter_path)
        .with_context(|| format!("Failed to read chapter file: {}", chapter_path.display()))?;
    let chapter = Chapter::parse(&source);
    let stem = chapter_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chapter");
    let key = chapter.key_or(stem).to_string();

    let gate = PersonalizationGate::new(backend.clone(), backend.clone(), sessions.clone());
    gate.set_chapter(key.as_str());

    if !gate.refresh_eligibility().await? {
        if sessions.load()?.is_authenticated() {
            eprintln!("{SURVEY_REQUIRED_HINT}");
        } else {
            eprintln!("Not signed in. Run `primer signin` first.");
        }
        std::process::exit(1);
    }

    let result = gate.personalize(&key, &chapter.body).await;

    // Status goes to stderr so stdout stays clean content.
    let message = gate.snapshot().message;
    if !message.is_empty() {
        eprintln!("{message}");
    }

    match result {
        Ok(content) => {
            let mut controller = ContentSwapController::new(chapter.body);
            controller.show_personalized(content);

            let rendered = if html {
                controller.render()
            } else {
                controller.displayed().to_string()
            };

            match output {
                Some(path) => {
                    fs::write(&path, rendered).with_context(|| {
                        format!("Failed to write personalized chapter: {}", path.display())
                    })?;
                    eprintln!("Wrote personalized chapter to {}", path.display());
                }
                None => println!("{rendered}"),
            }
            Ok(())
        }
        Err(_) => std::process::exit(1),
    }
}
