use anyhow::Result;
use clap::{Parser, Subcommand};
use primer_core::profile::{InterestField, PreferredLanguage, ProgrammingLevel, Role, SurveyResponses};
use primer_infrastructure::{ConfigService, FileSessionStore};
use primer_interaction::BackendClient;
use std::path::PathBuf;
use std::sync::Arc;

mod commands;

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Primer - personalized handbook companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a reader account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in and store the session token
    Signin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Submit the background survey
    Survey {
        /// Current role (Student, Developer, Engineer, Beginner, Researcher)
        #[arg(long)]
        role: Role,
        /// Programming experience (None, Beginner, Intermediate, Advanced)
        #[arg(long)]
        programming_level: ProgrammingLevel,
        /// Field of interest (Robotics, "AI Agents", Vision, Humanoids, Embedded)
        #[arg(long)]
        interest_field: InterestField,
        /// Preferred language (English, Urdu)
        #[arg(long)]
        preferred_language: PreferredLanguage,
        #[arg(long)]
        hardware_specs: Option<String>,
        #[arg(long)]
        software_experience: Option<String>,
        #[arg(long)]
        goals: Option<String>,
    },
    /// Show personalization eligibility for the signed-in reader
    Status,
    /// Personalize a chapter file and print the swapped content
    Personalize {
        /// Path to the chapter markdown file
        chapter: PathBuf,
        /// Render the result through the sanitizing HTML pipeline
        #[arg(long)]
        html: bool,
        /// Write the result to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Clear the stored session
    Signout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigService::new().get_config();
    let backend = Arc::new(BackendClient::from_config(&config));
    let sessions = Arc::new(FileSessionStore::new()?);

    match cli.command {
        Commands::Signup { email, password } => {
            commands::signup::run(&backend, &sessions, email, password).await
        }
        Commands::Signin { username, password } => {
            commands::signin::run(&backend, &sessions, username, password).await
        }
        Commands::Survey {
            role,
            programming_level,
            interest_field,
            preferred_language,
            hardware_specs,
            software_experience,
            goals,
        } => {
            let survey = SurveyResponses {
                role,
                programming_level,
                interest_field,
                preferred_language,
                hardware_specs,
                software_experience,
                goals,
            };
            commands::survey::run(&backend, &sessions, survey).await
        }
        Commands::Status => commands::status::run(&backend, &sessions).await,
        Commands::Personalize {
            chapter,
            html,
            output,
        } => commands::personalize::run(&backend, &sessions, chapter, html, output).await,
        Commands::Signout => commands::signout::run(&sessions),
    }
}
