//! tutor CLI: submit questions, manage chats, run one-off sentiment or
//! illustration checks. Config from env (.env honored) and optional CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tutor_service::{build_service, AppConfig, SubmitRequest, TutorService};

#[derive(Parser)]
#[command(name = "tutor-service")]
#[command(about = "Sentiment-adaptive tutoring service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a question and print the full turn outcome as JSON.
    Ask {
        question: String,
        /// Session to continue; omitted means a standalone turn.
        #[arg(short, long)]
        session: Option<String>,
        /// Chat whose activity timestamp is touched on save.
        #[arg(short, long)]
        chat: Option<String>,
        #[arg(short, long, default_value = "en")]
        language: String,
    },
    /// Classify a text's sentiment without generating an answer.
    Sentiment { text: String },
    /// Produce an illustration for a query without generating an answer.
    Illustrate { query: String },
    /// Create a new chat with its first session.
    NewChat,
    /// List chats, most recently active first.
    Chats,
    /// Rename a chat.
    Rename { chat_id: String, title: String },
    /// Delete a chat together with its sessions and turns.
    DeleteChat { chat_id: String },
    /// Print a chat's message history.
    History { chat_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    tutor_core::logger::init_tracing(config.log_file.as_deref())?;
    let service = build_service(&config).await?;

    match cli.command {
        Commands::Ask {
            question,
            session,
            chat,
            language,
        } => {
            let request = SubmitRequest {
                query_text: question,
                modality: tutor_core::Modality::Text,
                session_id: session,
                chat_id: chat,
                transcript: None,
                language: Some(language),
            };
            let outcome = service.submit_turn(request).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Sentiment { text } => {
            let sentiment = service.classify_sentiment(&text).await?;
            println!("{}", serde_json::to_string_pretty(&sentiment)?);
        }
        Commands::Illustrate { query } => {
            let illustration = service.illustrate(&query).await;
            println!("{}", serde_json::to_string_pretty(&illustration)?);
        }
        Commands::NewChat => {
            let (chat, session_id) = service.new_chat().await?;
            println!("Created chat {} (session {})", chat.id, session_id);
        }
        Commands::Chats => {
            print_chats(&service).await?;
        }
        Commands::Rename { chat_id, title } => {
            let chat = service.rename_chat(&chat_id, &title).await?;
            println!("Renamed chat {} to {:?}", chat.id, chat.title);
        }
        Commands::DeleteChat { chat_id } => {
            service.delete_chat(&chat_id).await?;
            println!("Deleted chat {}", chat_id);
        }
        Commands::History { chat_id } => {
            let messages = service.chat_history(&chat_id).await?;
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
    }

    Ok(())
}

async fn print_chats(service: &TutorService) -> Result<()> {
    let chats = service.list_chats().await?;
    if chats.is_empty() {
        println!("No chats.");
        return Ok(());
    }
    for chat in chats {
        println!("{}  {}  (last active {})", chat.id, chat.title, chat.last_active);
    }
    Ok(())
}
